use async_trait::async_trait;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostDraft;
use crate::domain::post::models::PostId;
use crate::domain::user::models::UserId;

/// Port for post domain service operations.
///
/// Every mutating operation takes the authenticated `subject` and enforces
/// ownership itself; callers only have to authenticate.
#[async_trait]
pub trait PostServicePort: Send + Sync + 'static {
    /// Publish a post authored by `subject`.
    ///
    /// # Errors
    /// * `Unauthorized` - Subject has no identity, or the draft names another author
    /// * `Validation` - Title, content or author missing
    /// * `TitleAlreadyExists` - Title is already used
    /// * `DatabaseError` - Database operation failed
    async fn create_post(&self, subject: UserId, draft: PostDraft) -> Result<Post, PostError>;

    /// Retrieve a post.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    async fn get_post(&self, id: PostId) -> Result<Post, PostError>;

    /// List posts, newest first, at most `limit` of them.
    async fn list_posts(&self, limit: i64) -> Result<Vec<Post>, PostError>;

    /// Replace a post's content.
    ///
    /// Ownership is checked twice: against the stored author and against the
    /// author named in the new draft.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `Unauthorized` - Subject is not the stored author, or the draft reassigns the post
    /// * `Validation` - Title, content or author missing
    /// * `DatabaseError` - Database operation failed
    async fn update_post(
        &self,
        subject: UserId,
        id: PostId,
        draft: PostDraft,
    ) -> Result<Post, PostError>;

    /// Delete a post.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `Unauthorized` - Subject is not the stored author
    /// * `DatabaseError` - Database operation failed
    async fn delete_post(&self, subject: UserId, id: PostId) -> Result<(), PostError>;
}

/// Persistence operations for posts.
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    async fn create(&self, post: NewPost) -> Result<Post, PostError>;

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PostError>;

    async fn list(&self, limit: i64) -> Result<Vec<Post>, PostError>;

    /// # Errors
    /// * `NotFound` - Post does not exist
    async fn update(&self, post: Post) -> Result<Post, PostError>;

    /// # Errors
    /// * `NotFound` - Post does not exist
    async fn delete(&self, id: PostId) -> Result<(), PostError>;
}
