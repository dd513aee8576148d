//! TUI rendering traits for agendo types.
//!
//! Extension traits that add colored terminal rendering to agendo-core
//! types using owo_colors.

use agendo_core::{Event, Note, Session, Task};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let id = format!("#{}", self.id);
        let time = format!("{} - {}", self.start_time, self.end_time);
        let mut line = format!("{} {}  {}", id.dimmed(), self.title.bold(), time.dimmed());

        if let Some(location) = &self.location {
            line.push_str(&format!(" @ {location}"));
        }
        line
    }
}

impl Render for Note {
    fn render(&self) -> String {
        let id = format!("#{}", self.id);
        format!(
            "{} {}\n   {}",
            id.dimmed(),
            self.title.bold(),
            first_line(&self.content).dimmed()
        )
    }
}

impl Render for Task {
    fn render(&self) -> String {
        let id = format!("#{}", self.id);
        let checkbox = if self.completed {
            "[x]".green().to_string()
        } else {
            "[ ]".to_string()
        };
        let title = if self.completed {
            self.title.strikethrough().to_string()
        } else {
            self.title.bold().to_string()
        };
        let mut line = format!("{} {} {}", id.dimmed(), checkbox, title);

        if let Some(due) = &self.due_date {
            let label = format!("(due {due})");
            line.push_str(&format!(" {}", label.yellow()));
        }
        line
    }
}

impl Render for Session {
    fn render(&self) -> String {
        let role = format!("[{}]", self.role);
        format!("{} <{}> {}", self.name.bold(), self.email, role.dimmed())
    }
}

/// First line of a multi-line body, for one-line list output.
fn first_line(content: &str) -> &str {
    content.lines().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(completed: bool, due_date: Option<&str>) -> Task {
        Task {
            id: 7,
            title: "Water plants".into(),
            description: None,
            due_date: due_date.map(str::to_string),
            completed,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_task_render_shows_due_date_when_present() {
        let rendered = make_task(false, Some("2025-06-01")).render();

        assert!(rendered.contains("Water plants"));
        assert!(rendered.contains("due 2025-06-01"));
        assert!(rendered.contains("#7"));
    }

    #[test]
    fn test_task_render_omits_due_when_absent() {
        let rendered = make_task(true, None).render();
        assert!(!rendered.contains("due"));
    }

    #[test]
    fn test_note_render_keeps_only_the_first_content_line() {
        let note = Note {
            id: 1,
            title: "Groceries".into(),
            content: "milk\neggs\nbread".into(),
            created_at: String::new(),
            updated_at: String::new(),
        };

        let rendered = note.render();
        assert!(rendered.contains("milk"));
        assert!(!rendered.contains("eggs"));
    }
}
