use agendo_core::event::{EventPatch, NewEvent};
use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;

use crate::render::Render;

#[derive(Subcommand)]
pub enum EventsCommand {
    /// List your events
    List,
    /// Create an event
    Add {
        title: String,

        /// Start time (e.g. "2025-03-20T15:00")
        #[arg(short, long)]
        start: String,

        /// End time
        #[arg(short, long)]
        end: String,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long)]
        location: Option<String>,
    },
    /// Change fields of an event
    Edit {
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,

        #[arg(long)]
        location: Option<String>,
    },
    /// Delete an event
    Rm { id: i64 },
}

pub async fn run(command: EventsCommand) -> Result<()> {
    let backend = super::backend()?;
    let client = backend.events();

    match command {
        EventsCommand::List => {
            let events = client.list().await?;

            if events.is_empty() {
                println!("{}", "No events".dimmed());
                return Ok(());
            }
            for event in &events {
                println!("{}", event.render());
            }
            Ok(())
        }
        EventsCommand::Add {
            title,
            start,
            end,
            description,
            location,
        } => {
            let draft = NewEvent {
                title,
                description,
                start_time: start,
                end_time: end,
                location,
            };
            let event = client.create(&draft).await?;

            println!("Created {}", event.render());
            Ok(())
        }
        EventsCommand::Edit {
            id,
            title,
            description,
            start,
            end,
            location,
        } => {
            if title.is_none()
                && description.is_none()
                && start.is_none()
                && end.is_none()
                && location.is_none()
            {
                anyhow::bail!(
                    "Nothing to change.\n\n\
                    Pass at least one of:\n  \
                    --title, --description, --start, --end, --location"
                );
            }

            let patch = EventPatch {
                title,
                description,
                start_time: start,
                end_time: end,
                location,
            };
            let event = client.update(id, &patch).await?;

            println!("Updated {}", event.render());
            Ok(())
        }
        EventsCommand::Rm { id } => {
            let event = client.delete(id).await?;

            println!("Deleted {}", event.render());
            Ok(())
        }
    }
}
