use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Incorrect syntax, enter command in the following format: \"{0}\"")]
    Syntax(String),

    #[error("'{0}' is not a bot-helper command. See 'help'.")]
    InvalidCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Input error: {0}")]
    Input(String),
}

impl AssistantError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::Duplicate(message.into())
    }

    /// Domain errors are rendered and the session continues; the rest abort it.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            AssistantError::Io(_) | AssistantError::Serialization(_) | AssistantError::Input(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AssistantError>;
