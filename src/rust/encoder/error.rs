/// Errors raised while turning an answer set into a feature vector.
///
/// These indicate answers that slipped past completeness validation or
/// do not fit their field. Unmatched one-hot categories and ordinal
/// fields with a fallback are not errors; they degrade to zeros.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("Missing answer for field '{0}'")]
    MissingField(String),
    #[error("Field '{field}' expects {expected}")]
    KindMismatch { field: String, expected: &'static str },
    #[error("Unknown value '{value}' for field '{field}'")]
    UnknownCategory { field: String, value: String },
    #[error("Field '{field}' expects an integer, got '{value}'")]
    InvalidInteger { field: String, value: String },
}
