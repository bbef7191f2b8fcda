use anyhow::{Context, Result};
use clap::Args;
use log::debug;
use optionkit::demo::{UserDirectory, handle_get_user};
use std::io::Write;

#[derive(Args)]
pub struct LookupCommand {
    /// User ids to look up
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Args)]
pub struct ListCommand {}

pub fn lookup_command(
    directory: &UserDirectory,
    command: &LookupCommand,
    out: &mut impl Write,
) -> Result<()> {
    for id in &command.ids {
        let response = handle_get_user(directory, id);
        debug!("Response for {}: {}", id, response.status_code);
        writeln!(out, "{}", response).context("Failed to write response")?;
    }
    Ok(())
}

/// One JSON object per user; each line reads back as a `User`
pub fn list_command(directory: &UserDirectory, out: &mut impl Write) -> Result<()> {
    for user in directory.users() {
        let line = serde_json::to_string(user)
            .with_context(|| format!("Failed to serialize user: {}", user.id))?;
        writeln!(out, "{}", line).context("Failed to write user")?;
    }
    Ok(())
}
