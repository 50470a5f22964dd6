use anyhow::Result;
use reddit_threads::{ParseError, parse_listing};

/// A trimmed-down but structurally faithful listing payload, including the
/// extra wrapper fields real responses carry.
const LISTING: &str = r#"{
  "kind": "Listing",
  "data": {
    "modhash": "",
    "dist": 3,
    "children": [
      {
        "kind": "t3",
        "data": {
          "title": "Show: a terminal reddit client",
          "author": "tui_fan",
          "url": "https://example.com/project",
          "permalink": "/r/commandline/comments/abc123/show_a_terminal_reddit_client/",
          "score": 412,
          "num_comments": 37
        }
      },
      {
        "kind": "t3",
        "data": {
          "title": "Weekly discussion thread",
          "author": "[deleted]",
          "url": "https://reddit.com/r/commandline/comments/def456/",
          "permalink": "/r/commandline/comments/def456/weekly_discussion_thread/"
        }
      },
      {
        "kind": "t3",
        "data": {
          "title": "Question about escape sequences",
          "author": "curious_cat",
          "url": "",
          "permalink": "/r/commandline/comments/ghi789/question_about_escape_sequences/"
        }
      }
    ],
    "after": "t3_ghi789",
    "before": null
  }
}"#;

#[test]
fn test_realistic_listing_parses_in_order() -> Result<()> {
    let listing = parse_listing(LISTING)?;
    assert_eq!(listing.len(), 3);

    let titles: Vec<_> = listing.iter().filter_map(|s| s.title.as_deref()).collect();
    assert_eq!(
        titles,
        [
            "Show: a terminal reddit client",
            "Weekly discussion thread",
            "Question about escape sequences",
        ]
    );
    Ok(())
}

#[test]
fn test_unknown_wrapper_fields_are_ignored() -> Result<()> {
    // score/num_comments/after/before are not part of the consumed schema.
    let listing = parse_listing(LISTING)?;
    let head = listing.get(listing.head().unwrap()).unwrap();
    assert_eq!(head.author.as_deref(), Some("tui_fan"));
    assert_eq!(head.url.as_deref(), Some("https://example.com/project"));
    Ok(())
}

#[test]
fn test_empty_string_url_comes_out_absent() -> Result<()> {
    let listing = parse_listing(LISTING)?;
    let tail = listing.get(listing.tail().unwrap()).unwrap();
    assert_eq!(tail.title.as_deref(), Some("Question about escape sequences"));
    assert_eq!(tail.url, None);
    Ok(())
}

#[test]
fn test_backward_walk_reverses_forward_walk() -> Result<()> {
    let listing = parse_listing(LISTING)?;
    let forward: Vec<_> = listing.iter().filter_map(|s| s.title.as_deref()).collect();
    let mut backward: Vec<_> = listing.iter_rev().filter_map(|s| s.title.as_deref()).collect();
    backward.reverse();
    assert_eq!(forward, backward);
    Ok(())
}

#[test]
fn test_structural_errors_are_reported_not_swallowed() {
    let err = parse_listing(r#"{"data": {"children": {"not": "an array"}}}"#).unwrap_err();
    assert!(matches!(err, ParseError::WrongType { .. }));
    assert_eq!(err.to_string(), "`data.children` is object, expected array");

    let err = parse_listing(r#"{}"#).unwrap_err();
    assert_eq!(err.to_string(), "required container `data` is missing");
}
