//! Domain DTOs for the posts API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently
//! so this crate never links against the server's web stack. Integration
//! tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Field};

/// A single blog post returned by the API.
///
/// Ids are server-assigned and unique; the client never invents one. A
/// `Post` is a transient read-through copy held only long enough to render
/// the current view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Request payload for creating a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

impl NewPost {
    /// Reject blank fields before any request is built. Title is checked
    /// first, so a post with both fields blank reports the title.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.title.trim().is_empty() {
            return Err(ClientError::validation(Field::Title));
        }
        if self.content.trim().is_empty() {
            return Err(ClientError::validation(Field::Content));
        }
        Ok(())
    }
}

/// Partial update for an existing post. Only the fields present in the JSON
/// are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl PostPatch {
    /// A patch may omit fields, but a field it does provide must survive
    /// trimming; the server validates the merged result the same way.
    pub fn validate(&self) -> Result<(), ClientError> {
        if matches!(self.title.as_deref(), Some(t) if t.trim().is_empty()) {
            return Err(ClientError::validation(Field::Title));
        }
        if matches!(self.content.as_deref(), Some(c) if c.trim().is_empty()) {
            return Err(ClientError::validation(Field::Content));
        }
        Ok(())
    }
}

/// Sortable columns for the list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
}

impl SortField {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Content => "content",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Sort order for `GET /posts`.
#[derive(Debug, Clone, Copy)]
pub struct ListSort {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Substring filters for `GET /posts/search`. An absent field matches
/// everything.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_roundtrips_through_json() {
        let post = Post {
            id: 7,
            title: "Hello".to_string(),
            content: "World".to_string(),
        };
        let json = serde_json::to_string(&post).unwrap();
        let back: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(back, post);
    }

    #[test]
    fn new_post_accepts_non_blank_fields() {
        let input = NewPost {
            title: "A".to_string(),
            content: "B".to_string(),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn new_post_rejects_whitespace_title() {
        let input = NewPost {
            title: "   ".to_string(),
            content: "B".to_string(),
        };
        let err = input.validate().unwrap_err();
        assert!(matches!(err, ClientError::Validation { field: Field::Title }));
    }

    #[test]
    fn new_post_rejects_empty_content() {
        let input = NewPost {
            title: "A".to_string(),
            content: String::new(),
        };
        let err = input.validate().unwrap_err();
        assert!(matches!(err, ClientError::Validation { field: Field::Content }));
    }

    #[test]
    fn new_post_blank_title_reported_before_content() {
        let input = NewPost {
            title: String::new(),
            content: String::new(),
        };
        let err = input.validate().unwrap_err();
        assert!(matches!(err, ClientError::Validation { field: Field::Title }));
    }

    #[test]
    fn patch_omits_absent_fields_from_json() {
        let patch = PostPatch {
            title: Some("New".to_string()),
            content: None,
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["title"], "New");
        assert!(json.get("content").is_none());
    }

    #[test]
    fn patch_allows_all_fields_absent() {
        assert!(PostPatch::default().validate().is_ok());
    }

    #[test]
    fn patch_rejects_provided_blank_content() {
        let patch = PostPatch {
            title: None,
            content: Some("  ".to_string()),
        };
        let err = patch.validate().unwrap_err();
        assert!(matches!(err, ClientError::Validation { field: Field::Content }));
    }
}
