use serde::Serialize;

/// Handle to a [`Submission`] inside its [`Listing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmissionId(pub(crate) usize);

/// A single forum post summary. All fields are optional: an absent, empty or
/// mistyped field in the payload comes out as `None`, never as an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Submission {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub permalink: Option<String>,
    pub(crate) prev: Option<SubmissionId>,
    pub(crate) next: Option<SubmissionId>,
}

/// A doubly linked sequence of submissions in payload order.
///
/// Nodes live in an arena and link to each other by handle, so the
/// `next`/`prev` chains are finite and acyclic by construction, and dropping
/// the listing releases every node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Listing {
    nodes: Vec<Submission>,
    head: Option<SubmissionId>,
    tail: Option<SubmissionId>,
}

impl Listing {
    /// Append a submission at the tail, wiring the prev/next links.
    pub(crate) fn push(&mut self, mut submission: Submission) -> SubmissionId {
        let id = SubmissionId(self.nodes.len());
        submission.prev = self.tail;
        submission.next = None;
        if let Some(tail) = self.tail {
            self.nodes[tail.0].next = Some(id);
        }
        if self.head.is_none() {
            self.head = Some(id);
        }
        self.tail = Some(id);
        self.nodes.push(submission);
        id
    }

    pub fn get(&self, id: SubmissionId) -> Option<&Submission> {
        self.nodes.get(id.0)
    }

    /// First submission in payload order; `None` for an empty listing.
    pub fn head(&self) -> Option<SubmissionId> {
        self.head
    }

    /// Last submission in payload order; `None` for an empty listing.
    pub fn tail(&self) -> Option<SubmissionId> {
        self.tail
    }

    /// Forward link of a node; `None` for the tail or an unknown handle.
    pub fn next(&self, id: SubmissionId) -> Option<SubmissionId> {
        self.get(id)?.next
    }

    /// Backward link of a node; `None` for the head or an unknown handle.
    pub fn prev(&self, id: SubmissionId) -> Option<SubmissionId> {
        self.get(id)?.prev
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk the `next` links from the head.
    pub fn iter(&self) -> Submissions<'_> {
        Submissions {
            listing: self,
            cursor: self.head,
            reverse: false,
        }
    }

    /// Walk the `prev` links from the tail.
    pub fn iter_rev(&self) -> Submissions<'_> {
        Submissions {
            listing: self,
            cursor: self.tail,
            reverse: true,
        }
    }
}

/// Iterator over a [`Listing`] following its links in either direction.
pub struct Submissions<'a> {
    listing: &'a Listing,
    cursor: Option<SubmissionId>,
    reverse: bool,
}

impl<'a> Iterator for Submissions<'a> {
    type Item = &'a Submission;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.listing.get(id)?;
        self.cursor = if self.reverse { node.prev } else { node.next };
        Some(node)
    }
}

/// Handle to a [`Comment`] inside its [`CommentTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommentId(pub(crate) usize);

/// A single reply node. The root of a tree is a pseudo-root comment holding
/// the submission's own body at depth 0; every other node's depth is its
/// parent's depth plus one.
///
/// Links are split by meaning: `next_sibling` chains a reply list,
/// `first_child` heads a node's own nested replies, and `parent` is a
/// non-owning back reference to the enclosing node (the pseudo-root for
/// top-level comments).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Comment {
    pub body: Option<String>,
    pub parent_id: Option<String>,
    pub id: Option<String>,
    pub author: Option<String>,
    pub depth: usize,
    pub(crate) parent: Option<CommentId>,
    pub(crate) next_sibling: Option<CommentId>,
    pub(crate) first_child: Option<CommentId>,
}

/// A comment thread: arena of comment nodes rooted at a pseudo-root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentTree {
    nodes: Vec<Comment>,
    root: CommentId,
}

impl CommentTree {
    /// Start a tree whose only node is the given pseudo-root.
    pub(crate) fn new(root: Comment) -> Self {
        Self {
            nodes: vec![root],
            root: CommentId(0),
        }
    }

    /// Allocate a node in the arena. Linking is the builder's job.
    pub(crate) fn push(&mut self, comment: Comment) -> CommentId {
        let id = CommentId(self.nodes.len());
        self.nodes.push(comment);
        id
    }

    pub(crate) fn node_mut(&mut self, id: CommentId) -> &mut Comment {
        &mut self.nodes[id.0]
    }

    /// The pseudo-root representing the submission's own body.
    pub fn root(&self) -> CommentId {
        self.root
    }

    pub fn get(&self, id: CommentId) -> Option<&Comment> {
        self.nodes.get(id.0)
    }

    /// Non-owning back reference to the enclosing node; `None` for the root.
    pub fn parent(&self, id: CommentId) -> Option<CommentId> {
        self.get(id)?.parent
    }

    /// Head of this node's nested reply list; `None` for a leaf.
    pub fn first_child(&self, id: CommentId) -> Option<CommentId> {
        self.get(id)?.first_child
    }

    /// Next node in the same reply list; `None` for the last one.
    pub fn next_sibling(&self, id: CommentId) -> Option<CommentId> {
        self.get(id)?.next_sibling
    }

    /// Total node count, pseudo-root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate a node's direct replies in payload order.
    pub fn children(&self, id: CommentId) -> Children<'_> {
        Children {
            tree: self,
            cursor: self.first_child(id),
        }
    }

    /// Depth-first walk of the whole tree in document order, starting at the
    /// pseudo-root. Uses an explicit stack, so input nesting depth never
    /// translates into call-stack depth.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            tree: self,
            stack: vec![self.root],
        }
    }
}

/// Iterator over the direct replies of one comment.
pub struct Children<'a> {
    tree: &'a CommentTree,
    cursor: Option<CommentId>,
}

impl<'a> Iterator for Children<'a> {
    type Item = (CommentId, &'a Comment);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.tree.get(id)?;
        self.cursor = node.next_sibling;
        Some((id, node))
    }
}

/// Preorder depth-first iterator over a [`CommentTree`].
pub struct Walk<'a> {
    tree: &'a CommentTree,
    stack: Vec<CommentId>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (CommentId, &'a Comment);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.get(id)?;
        if let Some(sibling) = node.next_sibling {
            self.stack.push(sibling);
        }
        if let Some(child) = node.first_child {
            self.stack.push(child);
        }
        Some((id, node))
    }
}
