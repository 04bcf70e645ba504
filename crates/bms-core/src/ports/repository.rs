use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::domain::Post;
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Stream every stored entity. Each call starts a fresh scan.
    fn find_all(&self) -> BoxStream<'static, Result<T, RepoError>>;

    /// Save an entity: insert when it has no ID yet, update otherwise.
    ///
    /// Conflicting inserts fail with [`RepoError::DuplicateKey`].
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;

    /// Total number of stored entities.
    async fn count(&self) -> Result<u64, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i64> {
    /// One page of posts ordered by ascending id.
    async fn find_page(&self, page_number: u64, page_size: u64) -> Result<Vec<Post>, RepoError>;
}
