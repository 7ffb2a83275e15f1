use strata_common::FromMessage;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("base level must not be negative, got {base_level}")]
    NegativeBaseLevel { base_level: i64 },

    #[error("metric index must not be empty")]
    EmptyIndex,

    #[error("doc count for {index} must not be negative, got {doc_count}")]
    NegativeDocCount { index: String, doc_count: i64 },

    #[error("{message}")]
    Message { message: String },
}

impl Error {
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn negative_doc_count(index: impl Into<String>, doc_count: i64) -> Self {
        Self::NegativeDocCount {
            index: index.into(),
            doc_count,
        }
    }

    /// Short label used when counting rejected observations.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::NegativeBaseLevel { .. } => "negative_base_level",
            Self::EmptyIndex => "empty_index",
            Self::NegativeDocCount { .. } => "negative_doc_count",
            Self::Message { .. } => "message",
        }
    }
}

impl FromMessage for Error {
    fn from_message(message: String) -> Self {
        Self::Message { message }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
