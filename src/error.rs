use thiserror::Error;

/// Errors returned by table lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// No entry matched the key; holds the key's `Debug` rendering
    #[error("key not found: {0}")]
    KeyNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = TableError::KeyNotFound(format!("{:?}", "foo"));
        assert_eq!(err.to_string(), "key not found: \"foo\"");
    }
}
