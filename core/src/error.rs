/// Errors raised while turning catalog JSON or manifest data into models.
///
/// Every variant aborts the construction call that raised it; no partial
/// model or partial collection is ever produced.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid field {field}: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Unknown channel: {0}")]
    UnknownChannel(String),

    #[error("Channel \"all\" is a query wildcard and cannot hold entries")]
    WildcardChannel,

    #[error("Catalog data must be a JSON array")]
    NotAnArray,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ParseError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        ParseError::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if the error was caused by an unrecognized channel.
    pub fn is_unknown_channel(&self) -> bool {
        matches!(self, ParseError::UnknownChannel(_))
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
