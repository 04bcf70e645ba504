//! In-memory post repository - used when no database is configured.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use futures::StreamExt;
use futures::stream::{self, BoxStream};
use tokio::sync::RwLock;

use bms_core::domain::Post;
use bms_core::error::RepoError;
use bms_core::ports::{BaseRepository, PostRepository};

/// In-memory post store keyed by id, with an async RwLock.
///
/// Ids are assigned from a counter starting at 1, so iteration order is
/// insertion order. Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: Arc<RwLock<BTreeMap<i64, Post>>>,
    next_id: AtomicI64,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicI64::new(1),
        }
    }

    /// Build a store that already holds `posts`.
    ///
    /// Posts without an id get the next free one.
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let mut map = BTreeMap::new();
        let mut next_id = 1;
        for mut post in posts {
            let id = *post.id.get_or_insert(next_id);
            next_id = next_id.max(id + 1);
            map.insert(id, post);
        }

        Self {
            store: Arc::new(RwLock::new(map)),
            next_id: AtomicI64::new(next_id),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, i64> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    fn find_all(&self) -> BoxStream<'static, Result<Post, RepoError>> {
        let store = Arc::clone(&self.store);

        // Snapshot on first poll, not on call.
        stream::once(async move { store.read().await.values().cloned().collect::<Vec<_>>() })
            .flat_map(stream::iter)
            .map(Ok)
            .boxed()
    }

    async fn save(&self, mut entity: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        match entity.id {
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                if store.contains_key(&id) {
                    return Err(RepoError::DuplicateKey(format!("post id {id}")));
                }
                entity.id = Some(id);
                store.insert(id, entity.clone());
            }
            Some(id) => {
                let slot = store.get_mut(&id).ok_or(RepoError::NotFound)?;
                *slot = entity.clone();
            }
        }

        Ok(entity)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        match self.store.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.store.read().await.len() as u64)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_page(&self, page_number: u64, page_size: u64) -> Result<Vec<Post>, RepoError> {
        let skip = usize::try_from(page_number.saturating_mul(page_size)).unwrap_or(usize::MAX);
        let take = usize::try_from(page_size).unwrap_or(usize::MAX);

        Ok(self
            .store
            .read()
            .await
            .values()
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }
}
