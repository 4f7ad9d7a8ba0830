/// for-each-stacked Error Types
#[derive(Debug, thiserror::Error)]
pub enum StackedError {
    /// Git-related errors
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Branch enumeration errors
    #[error("Branch error: {0}")]
    Branch(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A command exited unsuccessfully
    #[error("{}", describe_failure(.command, .code))]
    CommandFailed { command: String, code: Option<i32> },
}

fn describe_failure(command: &str, code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("Command failed with returncode {code}: {command}"),
        None => format!("Command terminated by signal: {command}"),
    }
}

impl StackedError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        StackedError::Config(msg.into())
    }

    pub fn branch<S: Into<String>>(msg: S) -> Self {
        StackedError::Branch(msg.into())
    }

    pub fn command_failed<S: Into<String>>(command: S, code: Option<i32>) -> Self {
        StackedError::CommandFailed {
            command: command.into(),
            code,
        }
    }
}

pub type Result<T> = std::result::Result<T, StackedError>;
