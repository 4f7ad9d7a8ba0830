use std::process::Command;

/// Build the process that runs `command_line` through a shell.
///
/// A configured `program` is invoked as `<program> -c <command>`; otherwise
/// the platform shell is used (`sh -c` on Unix, `cmd /C` on Windows).
pub fn shell_command(program: Option<&str>, command_line: &str) -> Command {
    let (shell, flag) = match program {
        Some(program) => (program, "-c"),
        None => default_shell_invocation(),
    };

    let mut command = Command::new(shell);
    command.arg(flag).arg(command_line);
    command
}

#[cfg(windows)]
fn default_shell_invocation() -> (&'static str, &'static str) {
    ("cmd", "/C")
}

#[cfg(not(windows))]
fn default_shell_invocation() -> (&'static str, &'static str) {
    ("sh", "-c")
}
