use agendo_core::note::{NewNote, NotePatch};
use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;

use crate::render::Render;

#[derive(Subcommand)]
pub enum NotesCommand {
    /// List your notes
    List,
    /// Create a note
    Add {
        title: String,

        #[arg(short, long)]
        content: String,
    },
    /// Change fields of a note
    Edit {
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a note
    Rm { id: i64 },
}

pub async fn run(command: NotesCommand) -> Result<()> {
    let backend = super::backend()?;
    let client = backend.notes();

    match command {
        NotesCommand::List => {
            let notes = client.list().await?;

            if notes.is_empty() {
                println!("{}", "No notes".dimmed());
                return Ok(());
            }
            for note in &notes {
                println!("{}", note.render());
            }
            Ok(())
        }
        NotesCommand::Add { title, content } => {
            let note = client.create(&NewNote { title, content }).await?;

            println!("Created {}", note.render());
            Ok(())
        }
        NotesCommand::Edit { id, title, content } => {
            if title.is_none() && content.is_none() {
                anyhow::bail!("Nothing to change.\n\nPass --title and/or --content.");
            }

            let note = client.update(id, &NotePatch { title, content }).await?;

            println!("Updated {}", note.render());
            Ok(())
        }
        NotesCommand::Rm { id } => {
            let note = client.delete(id).await?;

            println!("Deleted {}", note.render());
            Ok(())
        }
    }
}
