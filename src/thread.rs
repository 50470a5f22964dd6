use crate::config::ParseOptions;
use crate::error::ParseError;
use crate::field::optional_string_field;
use crate::json::{JsonKind, JsonNode, member_or_not_found};
use crate::models::{Comment, CommentId, CommentTree};

/// Parse a comment-thread payload with default options (no depth limit).
///
/// The payload is a two-element array: the submission wrapper, whose
/// `data.children[0].data` object becomes the depth-0 pseudo-root, and the
/// reply wrapper, whose `data.children` array becomes the pseudo-root's
/// child chain.
pub fn parse_thread(text: &str) -> Result<CommentTree, ParseError> {
    parse_thread_with(text, &ParseOptions::default())
}

/// Like [`parse_thread`] but honoring the caller's [`ParseOptions`].
pub fn parse_thread_with(text: &str, options: &ParseOptions) -> Result<CommentTree, ParseError> {
    let root: serde_json::Value = serde_json::from_str(text)?;
    thread_from_value(&root, options)
}

/// Value-level entry point for callers that already hold a decoded tree.
pub fn thread_from_value<V: JsonNode>(
    root: &V,
    options: &ParseOptions,
) -> Result<CommentTree, ParseError> {
    if root.kind() != JsonKind::Array {
        return Err(ParseError::wrong_type("$", JsonKind::Array, root.kind()));
    }
    if root.len().unwrap_or(0) < 2 {
        return Err(ParseError::not_found("$[1]"));
    }

    // $[0].data.children[0].data holds the submission's own fields.
    let submission = root
        .element(0)
        .ok_or_else(|| ParseError::not_found("$[0]"))?;
    let data = member_or_not_found(submission, "$[0]", "data")?;
    let children = member_or_not_found(data, "$[0].data", "children")?;
    let first = children
        .element(0)
        .ok_or_else(|| ParseError::not_found("$[0].data.children[0]"))?;
    let fields = member_or_not_found(first, "$[0].data.children[0]", "data")?;

    let mut tree = CommentTree::new(Comment {
        body: optional_string_field(fields, "selftext"),
        parent_id: optional_string_field(fields, "parent_id"),
        id: optional_string_field(fields, "id"),
        author: optional_string_field(fields, "author"),
        depth: 0,
        ..Comment::default()
    });

    // $[1].data.children is the top-level comment array.
    let reply_wrapper = root
        .element(1)
        .ok_or_else(|| ParseError::not_found("$[1]"))?;
    let reply_data = member_or_not_found(reply_wrapper, "$[1]", "data")?;
    let top = member_or_not_found(reply_data, "$[1].data", "children")?;
    if top.kind() != JsonKind::Array {
        return Err(ParseError::wrong_type(
            "$[1].data.children",
            JsonKind::Array,
            top.kind(),
        ));
    }

    let root_id = tree.root();
    build_forest(&mut tree, top, root_id, options)?;
    tracing::debug!(comments = tree.len() - 1, "parsed comment thread");
    Ok(tree)
}

/// One in-flight reply list during the worklist traversal.
struct Frame<'a, V> {
    items: &'a V,
    index: usize,
    depth: usize,
    parent: CommentId,
    prev_sibling: Option<CommentId>,
}

/// Build the reply forest under `parent` from a comment wrapper array.
///
/// Traversal is an explicit frame stack rather than native recursion, so the
/// input's nesting depth only ever grows a heap-allocated worklist. Order is
/// preserved: a frame resumes at its saved index once a nested reply list is
/// exhausted.
fn build_forest<'a, V: JsonNode>(
    tree: &mut CommentTree,
    top: &'a V,
    root: CommentId,
    options: &ParseOptions,
) -> Result<(), ParseError> {
    let mut stack = vec![Frame {
        items: top,
        index: 0,
        depth: 1,
        parent: root,
        prev_sibling: None,
    }];

    while let Some(frame) = stack.last_mut() {
        let items = frame.items;
        let Some(wrapper) = items.element(frame.index) else {
            stack.pop();
            continue;
        };
        frame.index += 1;
        let depth = frame.depth;
        let parent = frame.parent;

        // A wrapper without a `data` object is skipped; one malformed
        // comment must not take its siblings down with it.
        let Some(data) = wrapper.member("data") else {
            tracing::trace!(depth, "comment wrapper without `data` object, skipped");
            continue;
        };

        // Checked per node rather than per frame so the limit also applies
        // to the top-level list; a reply list that yields no nodes never
        // counts as nesting.
        if let Some(limit) = options.max_depth
            && depth > limit
        {
            return Err(ParseError::DepthExceeded { limit });
        }

        let node = tree.push(Comment {
            body: optional_string_field(data, "body")
                .or_else(|| optional_string_field(data, "selftext")),
            parent_id: optional_string_field(data, "parent_id"),
            id: optional_string_field(data, "id"),
            author: optional_string_field(data, "author"),
            depth,
            parent: Some(parent),
            next_sibling: None,
            first_child: None,
        });
        match frame.prev_sibling {
            Some(prev) => tree.node_mut(prev).next_sibling = Some(node),
            None => tree.node_mut(parent).first_child = Some(node),
        }
        frame.prev_sibling = Some(node);

        if let Some(nested) = reply_children(data) {
            stack.push(Frame {
                items: nested,
                index: 0,
                depth: depth + 1,
                parent: node,
                prev_sibling: None,
            });
        }
    }

    Ok(())
}

/// Resolve `replies.data.children` when `replies` carries the object form.
///
/// The API encodes "no replies" as the empty string, so a string-kinded
/// `replies` is the normal leaf case; the same goes for an absent field or
/// any link of the chain failing to resolve to an array. None of these is an
/// error.
fn reply_children<V: JsonNode>(data: &V) -> Option<&V> {
    let replies = data.member("replies")?;
    if replies.kind() != JsonKind::Object {
        return None;
    }
    let children = replies.member("data")?.member("children")?;
    // An empty reply list is the same leaf case as the string form.
    (children.kind() == JsonKind::Array && children.len().unwrap_or(0) > 0).then_some(children)
}
