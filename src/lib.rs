//! Parsing core for Reddit-style JSON API payloads.
//!
//! Converts the two fixed payload shapes of a discussion-forum API into
//! in-memory domain structures:
//!
//! - a listing payload (`{"data": {"children": [...]}}`) into a doubly
//!   linked sequence of [`Submission`]s, via [`parse_listing`];
//! - a comment-thread payload (a two-element array of submission wrapper
//!   plus reply forest) into a [`CommentTree`] rooted at a pseudo-root
//!   comment holding the submission's own body, via [`parse_thread`].
//!
//! Required containers that are missing or mistyped abort the parse with a
//! precise [`ParseError`]; individual optional fields that are absent, empty
//! or mistyped are tolerated and simply come out as `None`.

pub mod config;
pub mod error;
pub mod field;
pub mod json;
pub mod listing;
pub mod models;
pub mod thread;

pub use config::ParseOptions;
pub use error::{FieldError, ParseError};
pub use json::{JsonKind, JsonNode};
pub use listing::{listing_from_value, parse_listing};
pub use models::{Comment, CommentId, CommentTree, Listing, Submission, SubmissionId};
pub use thread::{parse_thread, parse_thread_with, thread_from_value};
