use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnippetError {
    #[error("Callback slot '{slot}' has no subscribers")]
    NoSubscribers { slot: String },

    #[error("Failed to render record as JSON: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl SnippetError {
    pub fn no_subscribers(slot: impl Into<String>) -> Self {
        Self::NoSubscribers { slot: slot.into() }
    }
}

pub type Result<T> = std::result::Result<T, SnippetError>;
