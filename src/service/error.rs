//! Story API errors.

use crate::story::StoryError;

/// Errors returned by the remote story service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{url} returned HTTP {status}")]
    Http { status: u16, url: String },

    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Unreadable response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error(transparent)]
    Feed(#[from] StoryError),
}

impl ServiceError {
    pub(crate) fn from_ureq(url: &str, err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, _) => Self::Http {
                status,
                url: url.to_string(),
            },
            ureq::Error::Transport(transport) => Self::Transport {
                url: url.to_string(),
                message: transport.to_string(),
            },
        }
    }

    pub(crate) fn decode(url: &str, err: impl std::fmt::Display) -> Self {
        Self::Decode {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}
