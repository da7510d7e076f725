/// Domain-level errors raised while validating a submission.
///
/// The `Display` text of each variant is the human-readable detail returned
/// to the caller, so keep it stable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid JSON body")]
    MalformedBody,

    #[error("JSON must be an object")]
    InvalidShape,

    #[error("Missing '{0}'")]
    MissingField(&'static str),

    #[error("'{0}' must be a string")]
    InvalidField(&'static str),

    #[error("Invalid secret token")]
    Forbidden,
}
