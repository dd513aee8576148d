mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::config::ConfigCommand;
use crate::commands::events::EventsCommand;
use crate::commands::notes::NotesCommand;
use crate::commands::tasks::TasksCommand;

#[derive(Parser)]
#[command(name = "agendo")]
#[command(about = "Manage your events, notes and tasks against an agendo backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure which backend to talk to
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Create an account on the backend
    Register,
    /// Sign in and store the session locally
    Login {
        /// Account email (prompted for when omitted)
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show who is currently logged in
    Whoami,
    /// Calendar events
    Events {
        #[command(subcommand)]
        command: EventsCommand,
    },
    /// Free-form notes
    Notes {
        #[command(subcommand)]
        command: NotesCommand,
    },
    /// Tasks with optional due dates
    Tasks {
        #[command(subcommand)]
        command: TasksCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Config { command } => commands::config::run(command),
        Commands::Register => commands::auth::register().await,
        Commands::Login { email } => commands::auth::login(email.as_deref()).await,
        Commands::Logout => commands::auth::logout(),
        Commands::Whoami => commands::auth::whoami(),
        Commands::Events { command } => commands::events::run(command).await,
        Commands::Notes { command } => commands::notes::run(command).await,
        Commands::Tasks { command } => commands::tasks::run(command).await,
    }
}
