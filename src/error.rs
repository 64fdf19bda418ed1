use std::fmt;

// Broad class of a failed generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    Upstream,
    Malformed,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Transport => "transport",
            ErrorKind::Upstream => "upstream",
            ErrorKind::Malformed => "malformed",
        };
        f.write_str(name)
    }
}

/// Failure of a single `generate` call.
///
/// `Display` yields the message shown to the user; upstream errors display as
/// the server's own message.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("{0}")]
    Malformed(String),
}

impl GenerateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerateError::EmptyPrompt => ErrorKind::Validation,
            GenerateError::Transport(_) => ErrorKind::Transport,
            GenerateError::Upstream { .. } => ErrorKind::Upstream,
            GenerateError::Malformed(_) => ErrorKind::Malformed,
        }
    }

    pub(crate) fn empty_response() -> Self {
        GenerateError::Malformed("empty response from generation endpoint".to_string())
    }
}

impl From<reqwest::Error> for GenerateError {
    fn from(err: reqwest::Error) -> Self {
        GenerateError::Transport(err.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
}
