use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned {code}: {detail}")]
    Status { code: u16, detail: String },

    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// True for failures of the transport itself, as opposed to a
    /// response the server produced.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
