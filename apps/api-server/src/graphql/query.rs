//! Post queries.

use async_graphql::{Context, ID, Object, Result};
use bms_core::PostService;
use futures::TryStreamExt;

use super::error::{domain_error, internal_error};
use super::types::{PostData, PostObject};
use super::validation::{PageArgs, check, require_id};

pub(super) fn post_service<'a>(ctx: &Context<'a>) -> Result<&'a PostService> {
    ctx.data::<PostService>()
        .map_err(|e| internal_error(e.message))
}

#[derive(Default)]
pub struct PostQuery;

#[Object]
impl PostQuery {
    /// One page of posts ordered by id. Pages are numbered from zero.
    async fn get_posts(
        &self,
        ctx: &Context<'_>,
        page_number: i32,
        page_size: i32,
    ) -> Result<PostData> {
        check(
            "getPosts",
            &PageArgs {
                page_number,
                page_size,
            },
        )?;

        let page_number = u64::try_from(page_number).map_err(internal_error)?;
        let page_size = u64::try_from(page_size).map_err(internal_error)?;

        let page = post_service(ctx)?
            .list_page(page_number, page_size)
            .await
            .map_err(domain_error)?;

        PostData::try_from(page).map_err(internal_error)
    }

    async fn get_all_posts(&self, ctx: &Context<'_>) -> Result<Vec<PostObject>> {
        post_service(ctx)?
            .list_all()
            .map_ok(PostObject::from)
            .try_collect::<Vec<_>>()
            .await
            .map_err(domain_error)
    }

    async fn get_post_by_id(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<PostObject> {
        let id = require_id("getPostById", id)?;

        post_service(ctx)?
            .get_by_id(id)
            .await
            .map(PostObject::from)
            .map_err(domain_error)
    }
}
