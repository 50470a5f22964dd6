use crate::error::ParseError;
use crate::field::optional_string_field;
use crate::json::{JsonKind, JsonNode, member_or_not_found};
use crate::models::{Listing, Submission};

/// Parse a listing payload (`{"data": {"children": [...]}}`) into a doubly
/// linked sequence of submissions.
///
/// The `data` and `data.children` containers are required and `children`
/// must be an array; so is each child's `data` sub-object. Everything below
/// that is tolerant: a submission whose title, author, url or permalink is
/// absent, empty or mistyped just gets `None` for that field.
pub fn parse_listing(text: &str) -> Result<Listing, ParseError> {
    let root: serde_json::Value = serde_json::from_str(text)?;
    listing_from_value(&root)
}

/// Value-level entry point for callers that already hold a decoded tree.
pub fn listing_from_value<V: JsonNode>(root: &V) -> Result<Listing, ParseError> {
    let data = member_or_not_found(root, "", "data")?;
    let children = member_or_not_found(data, "data", "children")?;
    if children.kind() != JsonKind::Array {
        return Err(ParseError::wrong_type(
            "data.children",
            JsonKind::Array,
            children.kind(),
        ));
    }

    // An empty children array is a valid, empty listing.
    let count = children.len().unwrap_or(0);
    let mut listing = Listing::default();
    for index in 0..count {
        let wrapper = children
            .element(index)
            .ok_or_else(|| ParseError::not_found(format!("data.children[{index}]")))?;
        let entity = wrapper
            .member("data")
            .ok_or_else(|| ParseError::not_found(format!("data.children[{index}].data")))?;
        listing.push(Submission {
            title: optional_string_field(entity, "title"),
            author: optional_string_field(entity, "author"),
            url: optional_string_field(entity, "url"),
            permalink: optional_string_field(entity, "permalink"),
            ..Submission::default()
        });
    }

    tracing::debug!(submissions = listing.len(), "parsed listing");
    Ok(listing)
}
