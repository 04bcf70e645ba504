//! Post service - the business logic between the API and storage.

use std::sync::Arc;

use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};

use crate::domain::{Post, PostInput, PostPage, total_pages};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

/// Orchestrates [`PostRepository`] calls for the post API.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Stream every stored post, in whatever order storage yields them.
    pub fn list_all(&self) -> BoxStream<'static, Result<Post, DomainError>> {
        tracing::info!("Fetching all posts");
        self.repo.find_all().map_err(DomainError::from).boxed()
    }

    /// Fetch one page of posts ordered by id, with paging metadata.
    ///
    /// The page and the total count are two independent reads; a concurrent
    /// write between them can make `total_elements` disagree with the page.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero. Callers validate it beforehand.
    pub async fn list_page(&self, page_number: u64, page_size: u64) -> Result<PostPage, DomainError> {
        tracing::info!(page_number, page_size, "Fetching page of posts");

        let (posts, total_elements) = tokio::try_join!(
            self.repo.find_page(page_number, page_size),
            self.repo.count(),
        )?;

        Ok(PostPage {
            posts,
            size: page_size,
            total_elements,
            total_pages: total_pages(total_elements, page_size),
            number: page_number,
        })
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Post, DomainError> {
        tracing::info!(post_id = id, "Fetching post");
        self.find_existing(id).await
    }

    pub async fn create(&self, input: PostInput) -> Result<Post, DomainError> {
        tracing::info!(title = %input.title, author = %input.author, "Adding post");

        self.repo
            .save(Post::new(input))
            .await
            .map_err(|e| match e {
                RepoError::DuplicateKey(detail) => {
                    tracing::debug!(%detail, "Post insert hit a key conflict");
                    DomainError::DuplicatePost
                }
                other => DomainError::Storage(other),
            })
    }

    pub async fn update(&self, id: i64, input: PostInput) -> Result<Post, DomainError> {
        tracing::info!(post_id = id, title = %input.title, author = %input.author, "Updating post");

        let mut post = self.find_existing(id).await?;
        post.apply(input);

        Ok(self.repo.save(post).await?)
    }

    /// Delete a post and return it as it was before removal.
    ///
    /// The deletion runs in the background; its outcome is only logged.
    pub async fn delete(&self, id: i64) -> Result<Post, DomainError> {
        tracing::info!(post_id = id, "Deleting post");

        let post = self.find_existing(id).await?;

        let repo = Arc::clone(&self.repo);
        tokio::spawn(async move {
            if let Err(e) = repo.delete(id).await {
                tracing::warn!(post_id = id, error = %e, "Background post deletion failed");
            }
        });

        Ok(post)
    }

    async fn find_existing(&self, id: i64) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PostNotFound { id })
    }
}
