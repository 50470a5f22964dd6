use crate::error::FieldError;
use crate::json::JsonNode;

/// Pull a single named string field out of a JSON object.
///
/// Succeeds only when the key is present, the value is string-kinded and the
/// string is non-empty; the caller gets an owned copy. On any failure nothing
/// is written anywhere, so a swallowing caller can treat every `Err` as
/// "field absent".
pub fn string_field<V: JsonNode>(obj: &V, name: &str) -> Result<String, FieldError> {
    let value = obj.member(name).ok_or(FieldError::Missing)?;
    match value.as_str() {
        Some("") => Err(FieldError::Empty),
        Some(s) => Ok(s.to_owned()),
        None => Err(FieldError::WrongType(value.kind())),
    }
}

/// Tolerant form used for optional entity fields: any extraction failure
/// becomes `None` and parsing continues.
pub fn optional_string_field<V: JsonNode>(obj: &V, name: &str) -> Option<String> {
    match string_field(obj, name) {
        Ok(s) => Some(s),
        Err(err) => {
            tracing::trace!(field = name, %err, "optional field treated as absent");
            None
        }
    }
}
