//! Errors surfaced by the data layer.

use thiserror::Error;

use crate::data::{ContactField, LessonId};

pub type Result<T> = std::result::Result<T, Error>;

/// Cloneable so a failed load can live inside a resource and be rendered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("lesson {0} not found")]
    NotFound(LessonId),

    #[error("invalid contact field `{}`", .field.key())]
    Validation { field: ContactField },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_culprit() {
        assert_eq!(Error::NotFound(7).to_string(), "lesson 7 not found");
        assert_eq!(
            Error::Validation { field: ContactField::Email }.to_string(),
            "invalid contact field `email`"
        );
        assert_eq!(
            Error::Status { status: 502, url: "/api/files".into() }.to_string(),
            "unexpected status 502 from /api/files"
        );
    }
}
