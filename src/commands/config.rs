use agendo_client::SessionStore;
use agendo_core::config::{BASE_URL_ENV, Config};
use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Point the CLI at a backend (e.g. http://localhost:4000)
    SetUrl { url: String },
    /// Show the resolved configuration and file locations
    Show,
}

pub fn run(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::SetUrl { url } => set_url(url),
        ConfigCommand::Show => show(),
    }
}

fn set_url(url: String) -> Result<()> {
    let config = Config::new(url)?;
    config.save()?;

    println!("Base URL set to {}", config.base_url.bold());
    Ok(())
}

fn show() -> Result<()> {
    println!("{}", "Paths".bold());
    println!("  Config:   {}", Config::path_in(&Config::default_dir()?).display());
    println!("  Session:  {}", SessionStore::open_default()?.path().display());
    println!();

    // A broken AGENDO_BASE_URL should fail here the same way it fails
    // every other command, not read as "unset".
    if let Some(config) = Config::from_env()? {
        println!("Base URL: {} (from {})", config.base_url.bold(), BASE_URL_ENV);
        return Ok(());
    }

    match Config::resolve() {
        Ok(config) => println!("Base URL: {}", config.base_url.bold()),
        Err(_) => println!(
            "Base URL: {}\n\nSet one with:\n  agendo config set-url <URL>",
            "unset".dimmed()
        ),
    }

    Ok(())
}
