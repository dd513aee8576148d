use agendo_core::task::{NewTask, TaskPatch};
use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;

use crate::render::Render;

#[derive(Subcommand)]
pub enum TasksCommand {
    /// List your tasks
    List,
    /// Create a task
    Add {
        title: String,

        #[arg(short, long)]
        description: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_due_date)]
        due: Option<String>,
    },
    /// Change fields of a task
    Edit {
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_due_date)]
        due: Option<String>,
    },
    /// Mark a task as completed
    Done { id: i64 },
    /// Delete a task
    Rm { id: i64 },
}

/// The backend stores due dates verbatim, so malformed input is caught
/// here instead of silently producing an unsortable task.
fn parse_due_date(s: &str) -> Result<String, String> {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|_| s.to_string())
        .map_err(|_| format!("'{s}' is not a date in YYYY-MM-DD form"))
}

pub async fn run(command: TasksCommand) -> Result<()> {
    let backend = super::backend()?;
    let client = backend.tasks();

    match command {
        TasksCommand::List => {
            let tasks = client.list().await?;

            if tasks.is_empty() {
                println!("{}", "No tasks".dimmed());
                return Ok(());
            }
            for task in &tasks {
                println!("{}", task.render());
            }
            Ok(())
        }
        TasksCommand::Add {
            title,
            description,
            due,
        } => {
            let draft = NewTask {
                title,
                description,
                due_date: due,
                completed: None,
            };
            let task = client.create(&draft).await?;

            println!("Created {}", task.render());
            Ok(())
        }
        TasksCommand::Edit {
            id,
            title,
            description,
            due,
        } => {
            if title.is_none() && description.is_none() && due.is_none() {
                anyhow::bail!(
                    "Nothing to change.\n\n\
                    Pass at least one of:\n  \
                    --title, --description, --due"
                );
            }

            let patch = TaskPatch {
                title,
                description,
                due_date: due,
                completed: None,
            };
            let task = client.update(id, &patch).await?;

            println!("Updated {}", task.render());
            Ok(())
        }
        TasksCommand::Done { id } => {
            let patch = TaskPatch {
                completed: Some(true),
                ..TaskPatch::default()
            };
            let task = client.update(id, &patch).await?;

            println!("Done {}", task.render());
            Ok(())
        }
        TasksCommand::Rm { id } => {
            let task = client.delete(id).await?;

            println!("Deleted {}", task.render());
            Ok(())
        }
    }
}
