//! Shell command execution
//!
//! Every command is echoed before it runs. In dry-run mode the echo is all
//! that happens. A non-zero exit is fatal for the caller.

use crate::cli::output::Output;
use crate::errors::{Result, StackedError};
use crate::utils::platform;
use tracing::debug;

/// Executes command strings on behalf of the stack walker
pub trait CommandRunner {
    fn run(&mut self, command: &str) -> Result<()>;
}

/// Runs commands through the system shell
#[derive(Debug, Clone)]
pub struct ShellRunner {
    dry_run: bool,
    shell: Option<String>,
    echo_prefix: String,
}

impl ShellRunner {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            shell: None,
            echo_prefix: "> ".to_string(),
        }
    }

    /// Use `program -c` instead of the platform shell
    pub fn with_shell(mut self, program: Option<String>) -> Self {
        self.shell = program;
        self
    }

    pub fn with_echo_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.echo_prefix = prefix.into();
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

impl CommandRunner for ShellRunner {
    fn run(&mut self, command: &str) -> Result<()> {
        Output::command(&self.echo_prefix, command);
        if self.dry_run {
            return Ok(());
        }

        let status = platform::shell_command(self.shell.as_deref(), command)
            .status()
            .map_err(|e| {
                StackedError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to spawn shell for '{command}': {e}"),
                ))
            })?;

        debug!("'{}' exited with {}", command, status);
        if status.success() {
            Ok(())
        } else {
            Err(StackedError::command_failed(command, status.code()))
        }
    }
}
