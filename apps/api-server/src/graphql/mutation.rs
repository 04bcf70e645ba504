//! Post mutations. Each one requires the capability scope.

use async_graphql::{Context, ID, Object, Result};

use super::capability::require_capability;
use super::error::domain_error;
use super::query::post_service;
use super::types::{PostInputArgs, PostObject};
use super::validation::{check, require_id};

#[derive(Default)]
pub struct PostMutation;

#[Object]
impl PostMutation {
    async fn add_post(&self, ctx: &Context<'_>, post_input: PostInputArgs) -> Result<PostObject> {
        require_capability(ctx)?;
        check("addPost.postInput", &post_input)?;

        post_service(ctx)?
            .create(post_input.into())
            .await
            .map(PostObject::from)
            .map_err(domain_error)
    }

    async fn update_post(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
        post_input: PostInputArgs,
    ) -> Result<PostObject> {
        require_capability(ctx)?;
        let id = require_id("updatePost", id)?;
        check("updatePost.postInput", &post_input)?;

        post_service(ctx)?
            .update(id, post_input.into())
            .await
            .map(PostObject::from)
            .map_err(domain_error)
    }

    /// Returns the post as it was before deletion.
    async fn delete_post(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<PostObject> {
        require_capability(ctx)?;
        let id = require_id("deletePost", id)?;

        post_service(ctx)?
            .delete(id)
            .await
            .map(PostObject::from)
            .map_err(domain_error)
    }
}
