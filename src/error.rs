use crate::compat::String;

/// Errors raised by the strict collection operations and the typed accessors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No entry exists for the key
    KeyNotFound(String),
    /// An entry already exists for the key
    DuplicateKey(String),
    /// A non-empty value could not be read as a date-time
    InvalidDateTime(String),
}

impl Error {
    /// The key or input text the error refers to
    pub fn subject(&self) -> &str {
        match self {
            Self::KeyNotFound(s) | Self::DuplicateKey(s) | Self::InvalidDateTime(s) => s,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::KeyNotFound(key) => write!(f, "Key not found: {key}"),
            Self::DuplicateKey(key) => write!(f, "Duplicate key: {key}"),
            Self::InvalidDateTime(input) => write!(f, "Invalid date-time: {input}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type for collection and query parameter operations
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::ToString;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::KeyNotFound("page".to_string()).to_string(),
            "Key not found: page"
        );
        assert_eq!(
            Error::DuplicateKey("id".to_string()).to_string(),
            "Duplicate key: id"
        );
        assert_eq!(
            Error::InvalidDateTime("yesterday".to_string()).to_string(),
            "Invalid date-time: yesterday"
        );
    }

    #[test]
    fn test_subject() {
        assert_eq!(Error::DuplicateKey("id".to_string()).subject(), "id");
    }
}
