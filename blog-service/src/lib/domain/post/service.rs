use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::PostError;
use super::models::Post;
use super::models::PostDraft;
use super::models::PostId;
use super::ports::PostRepository;
use super::ports::PostServicePort;
use crate::domain::access;
use crate::domain::user::models::UserId;

/// Concrete implementation of PostServicePort.
///
/// Generic over repository for testability.
pub struct PostService<PR>
where
    PR: PostRepository,
{
    post_repository: Arc<PR>,
}

impl<PR> PostService<PR>
where
    PR: PostRepository,
{
    pub fn new(post_repository: Arc<PR>) -> Self {
        Self { post_repository }
    }

    async fn find_existing(&self, id: PostId) -> Result<Post, PostError> {
        self.post_repository
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound(id))
    }
}

#[async_trait]
impl<PR> PostServicePort for PostService<PR>
where
    PR: PostRepository,
{
    async fn create_post(&self, subject: UserId, draft: PostDraft) -> Result<Post, PostError> {
        let subject = access::require_identity(subject)?;
        access::ensure_owner(subject, draft.author_id)?;

        let draft = draft.validated()?;

        let post = self.post_repository.create(draft.into()).await?;
        tracing::info!(post_id = %post.id, author_id = %post.author_id, "Post created");

        Ok(post)
    }

    async fn get_post(&self, id: PostId) -> Result<Post, PostError> {
        self.find_existing(id).await
    }

    async fn list_posts(&self, limit: i64) -> Result<Vec<Post>, PostError> {
        self.post_repository.list(limit).await
    }

    async fn update_post(
        &self,
        subject: UserId,
        id: PostId,
        draft: PostDraft,
    ) -> Result<Post, PostError> {
        let mut post = self.find_existing(id).await?;

        access::ensure_owner(subject, post.author_id)?;
        // The new payload must not hand the post over to someone else.
        access::ensure_owner(subject, draft.author_id)?;

        let draft = draft.validated()?;

        post.title = draft.title;
        post.content = draft.content;
        post.updated_at = Utc::now();

        let updated_post = self.post_repository.update(post).await?;
        tracing::info!(post_id = %updated_post.id, "Post updated");

        Ok(updated_post)
    }

    async fn delete_post(&self, subject: UserId, id: PostId) -> Result<(), PostError> {
        let post = self.find_existing(id).await?;

        access::ensure_owner(subject, post.author_id)?;

        self.post_repository.delete(id).await?;
        tracing::info!(post_id = %id, "Post deleted");

        Ok(())
    }
}
