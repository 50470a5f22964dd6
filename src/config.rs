use serde::{Deserialize, Serialize};

/// Options for a single parse call.
///
/// Derives serde traits so a host application can embed this directly in its
/// own configuration file.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ParseOptions {
    /// Maximum reply nesting depth accepted before the parse fails closed
    /// with [`ParseError::DepthExceeded`]. `None` means unlimited.
    ///
    /// [`ParseError::DepthExceeded`]: crate::error::ParseError::DepthExceeded
    pub max_depth: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unlimited() {
        assert_eq!(ParseOptions::default().max_depth, None);
    }

    #[test]
    fn test_deserializes_with_defaults() {
        let options: ParseOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ParseOptions::default());

        let options: ParseOptions = serde_json::from_str(r#"{"max_depth": 32}"#).unwrap();
        assert_eq!(options.max_depth, Some(32));
    }
}
