use crate::error::ParseError;
use strum_macros::Display;

/// The kind of a generic JSON value, used for type discrimination during
/// traversal and for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

/// Minimal capability interface over a generic JSON value tree.
///
/// The parsers only ever need to resolve an object field, index and measure
/// an array, discriminate a value's kind, and read string content. Keeping
/// that behind a trait means the traversal code has no dependency on any
/// particular JSON library's memory model; `serde_json::Value` is the
/// provider used by the text-level entry points.
pub trait JsonNode {
    /// The JSON kind of this value.
    fn kind(&self) -> JsonKind;

    /// Resolve a field of an object. `None` if this value is not an object
    /// or the key is absent.
    fn member(&self, name: &str) -> Option<&Self>;

    /// Index into an array. `None` if this value is not an array or the
    /// index is out of bounds.
    fn element(&self, index: usize) -> Option<&Self>;

    /// Array length; `None` if this value is not an array.
    fn len(&self) -> Option<usize>;

    /// String content; `None` if this value is not a string.
    fn as_str(&self) -> Option<&str>;
}

impl JsonNode for serde_json::Value {
    fn kind(&self) -> JsonKind {
        match self {
            Self::Null => JsonKind::Null,
            Self::Bool(_) => JsonKind::Bool,
            Self::Number(_) => JsonKind::Number,
            Self::String(_) => JsonKind::String,
            Self::Array(_) => JsonKind::Array,
            Self::Object(_) => JsonKind::Object,
        }
    }

    fn member(&self, name: &str) -> Option<&Self> {
        self.as_object()?.get(name)
    }

    fn element(&self, index: usize) -> Option<&Self> {
        self.as_array()?.get(index)
    }

    fn len(&self) -> Option<usize> {
        self.as_array().map(Vec::len)
    }

    fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Resolve a required object member, mapping absence to a structural
/// `NotFound` that names the full path of the missing container.
pub(crate) fn member_or_not_found<'a, V: JsonNode>(
    value: &'a V,
    parent_path: &str,
    key: &str,
) -> Result<&'a V, ParseError> {
    value.member(key).ok_or_else(|| {
        let path = if parent_path.is_empty() {
            key.to_string()
        } else {
            format!("{parent_path}.{key}")
        };
        ParseError::NotFound { path }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_discrimination() {
        assert_eq!(json!(null).kind(), JsonKind::Null);
        assert_eq!(json!(true).kind(), JsonKind::Bool);
        assert_eq!(json!(42).kind(), JsonKind::Number);
        assert_eq!(json!("hi").kind(), JsonKind::String);
        assert_eq!(json!([1, 2]).kind(), JsonKind::Array);
        assert_eq!(json!({"a": 1}).kind(), JsonKind::Object);
    }

    #[test]
    fn test_kind_display_is_lowercase() {
        assert_eq!(JsonKind::Object.to_string(), "object");
        assert_eq!(JsonKind::String.to_string(), "string");
    }

    #[test]
    fn test_member_only_on_objects() {
        let obj = json!({"data": {"x": 1}});
        assert!(obj.member("data").is_some());
        assert!(obj.member("missing").is_none());
        assert!(json!([1, 2]).member("data").is_none());
        assert!(json!("str").member("data").is_none());
    }

    #[test]
    fn test_element_and_len_only_on_arrays() {
        let arr = json!(["a", "b"]);
        assert_eq!(arr.len(), Some(2));
        assert_eq!(arr.element(1).and_then(JsonNode::as_str), Some("b"));
        assert!(arr.element(2).is_none());
        assert_eq!(json!({"a": 1}).len(), None);
        assert!(json!({"a": 1}).element(0).is_none());
    }

    #[test]
    fn test_member_or_not_found_names_full_path() {
        let obj = json!({"data": {}});
        let err = member_or_not_found(obj.member("data").unwrap(), "data", "children").unwrap_err();
        assert!(matches!(err, ParseError::NotFound { path } if path == "data.children"));
    }
}
