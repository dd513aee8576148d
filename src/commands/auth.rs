use std::io::{self, Write};

use agendo_client::{AuthOutcome, SessionStore};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::render::Render;

pub async fn register() -> Result<()> {
    let backend = super::backend()?;

    let name = prompt_text("Name")?;
    let email = prompt_text("Email")?;
    let password = prompt_password("Password")?;

    match backend.auth().register(&name, &email, &password).await {
        AuthOutcome::Accepted => {
            println!("{}", "Account created.".green());
            println!("\nSign in with:\n  agendo login --email {email}");
            Ok(())
        }
        AuthOutcome::Rejected { msg } => anyhow::bail!("Registration failed: {msg}"),
    }
}

pub async fn login(email: Option<&str>) -> Result<()> {
    let backend = super::backend()?;

    let email = match email {
        Some(email) => email.to_string(),
        None => prompt_text("Email")?,
    };
    let password = prompt_password("Password")?;

    match backend.auth().login(&email, &password).await {
        AuthOutcome::Accepted => {
            let session = backend
                .store
                .load()?
                .context("Login was accepted but no session was stored")?;
            println!("Logged in as {}", session.render());
            Ok(())
        }
        AuthOutcome::Rejected { msg } => anyhow::bail!("{msg}"),
    }
}

/// Logging out only touches the local session file, so it works even
/// before a base URL is configured.
pub fn logout() -> Result<()> {
    SessionStore::open_default()?.clear()?;
    println!("Logged out.");
    Ok(())
}

pub fn whoami() -> Result<()> {
    match SessionStore::open_default()?.load()? {
        Some(session) => println!("{}", session.render()),
        None => println!("{}", "Not logged in".dimmed()),
    }
    Ok(())
}

/// Prompt the user for text input.
fn prompt_text(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

/// Prompt the user for password input (hidden).
fn prompt_password(label: &str) -> Result<String> {
    let prompt = format!("{}: ", label);
    rpassword::prompt_password(&prompt).context("Failed to read password")
}
