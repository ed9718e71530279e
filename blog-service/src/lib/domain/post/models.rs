use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::post::errors::PostIdError;
use crate::domain::post::errors::PostValidationError;
use crate::domain::user::models::UserId;

/// Post unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub i64);

impl PostId {
    /// Parse a post ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not an integer
    pub fn from_string(s: &str) -> Result<Self, PostIdError> {
        s.parse::<i64>()
            .map(PostId)
            .map_err(|e| PostIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Blog post, owned by its author.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post fields as submitted by a client.
///
/// `author_id` is the owner the client claims for the post; it is checked
/// against the caller before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author_id: UserId,
}

impl PostDraft {
    /// Trim the text fields and check that every field is present.
    ///
    /// # Errors
    /// * `TitleRequired`, `ContentRequired`, `AuthorRequired`
    pub fn validated(self) -> Result<Self, PostValidationError> {
        let title = self.title.trim().to_string();
        let content = self.content.trim().to_string();

        if title.is_empty() {
            return Err(PostValidationError::TitleRequired);
        }
        if content.is_empty() {
            return Err(PostValidationError::ContentRequired);
        }
        if !self.author_id.is_assigned() {
            return Err(PostValidationError::AuthorRequired);
        }

        Ok(Self {
            title,
            content,
            author_id: self.author_id,
        })
    }
}

/// Post ready to be inserted; the store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: UserId,
}

impl From<PostDraft> for NewPost {
    fn from(draft: PostDraft) -> Self {
        Self {
            title: draft.title,
            content: draft.content,
            author_id: draft.author_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PostDraft {
        PostDraft {
            title: "  My Adventure ".to_string(),
            content: "I travelled the world in 60 days".to_string(),
            author_id: UserId(1),
        }
    }

    #[test]
    fn test_validated_trims() {
        let post = draft().validated().unwrap();
        assert_eq!(post.title, "My Adventure");
    }

    #[test]
    fn test_validated_required_fields() {
        let missing_title = PostDraft {
            title: "   ".to_string(),
            ..draft()
        };
        assert_eq!(
            missing_title.validated(),
            Err(PostValidationError::TitleRequired)
        );

        let missing_content = PostDraft {
            content: String::new(),
            ..draft()
        };
        assert_eq!(
            missing_content.validated(),
            Err(PostValidationError::ContentRequired)
        );

        let missing_author = PostDraft {
            author_id: UserId(0),
            ..draft()
        };
        assert_eq!(
            missing_author.validated(),
            Err(PostValidationError::AuthorRequired)
        );
    }

    #[test]
    fn test_post_id_from_string() {
        assert_eq!(PostId::from_string("12").unwrap(), PostId(12));
        assert!(PostId::from_string("twelve").is_err());
    }
}
