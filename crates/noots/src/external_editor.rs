// Chunk: docs/chunks/external_editor - Hand a note to the user's editor
//!
//! Running the configured editor on a note file.
//!
//! The controller only needs "edit this path and come back", so it depends on
//! the [`EditorLauncher`] trait. [`ShellEditor`] is the real implementation:
//! it runs `<editor> '<path>'` through `sh -c` and blocks until it exits.

use std::io;
use std::path::Path;
use std::process::Command;

use thiserror::Error;

use crate::shell_escape::shell_escape_path;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("could not run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Opens a note file in some external program and waits for it.
pub trait EditorLauncher {
    fn launch(&mut self, path: &Path) -> Result<(), LaunchError>;
}

/// Launches the configured editor command through the shell.
#[derive(Debug, Clone)]
pub struct ShellEditor {
    command: String,
}

impl ShellEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// The full shell command line for editing `path`.
    pub fn command_line(&self, path: &Path) -> String {
        format!(
            "{} {}",
            self.command,
            shell_escape_path(&path.to_string_lossy())
        )
    }
}

impl EditorLauncher for ShellEditor {
    fn launch(&mut self, path: &Path) -> Result<(), LaunchError> {
        let command = self.command_line(path);
        tracing::info!(%command, "launching external editor");
        let status = Command::new("sh")
            .arg("-c")
            .arg(&command)
            .status()
            .map_err(|source| LaunchError::Spawn {
                command: command.clone(),
                source,
            })?;
        // Exit status is informational only.
        tracing::info!(%status, "external editor exited");
        Ok(())
    }
}
