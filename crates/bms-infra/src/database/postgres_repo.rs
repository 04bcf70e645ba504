//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{EntityTrait, QueryOrder, QuerySelect};

use bms_core::domain::Post;
use bms_core::error::RepoError;
use bms_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_page(&self, page_number: u64, page_size: u64) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(page_number, page_size, "Fetching post page");

        let result = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .offset(page_number * page_size)
            .limit(page_size)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
