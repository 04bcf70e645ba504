//! GraphQL object and input types.

use std::num::TryFromIntError;

use async_graphql::{ID, InputObject, SimpleObject};
use bms_core::domain::{Post, PostInput, PostPage};
use chrono::{DateTime, Utc};
use validator::Validate;

use super::validation::not_blank;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Post")]
pub struct PostObject {
    pub id: Option<ID>,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Post> for PostObject {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.map(|id| ID(id.to_string())),
            title: post.title,
            content: post.content,
            author: post.author,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// One page of posts with paging metadata.
#[derive(SimpleObject, Clone, Debug)]
pub struct PostData {
    pub posts: Vec<PostObject>,
    pub size: i32,
    pub total_elements: i64,
    pub total_pages: i64,
    pub number: i32,
}

impl TryFrom<PostPage> for PostData {
    type Error = TryFromIntError;

    fn try_from(page: PostPage) -> Result<Self, Self::Error> {
        Ok(Self {
            size: page.size.try_into()?,
            total_elements: page.total_elements.try_into()?,
            total_pages: page.total_pages.try_into()?,
            number: page.number.try_into()?,
            posts: page.posts.into_iter().map(PostObject::from).collect(),
        })
    }
}

/// Title, content and author of a post to add or update.
#[derive(InputObject, Validate, Clone, Debug)]
#[graphql(name = "PostInput")]
pub struct PostInputArgs {
    #[validate(custom(function = "not_blank"), length(min = 1, max = 20))]
    pub title: String,
    #[graphql(default)]
    #[validate(length(max = 1000000000))]
    pub content: String,
    #[validate(custom(function = "not_blank"), length(min = 1, max = 10))]
    pub author: String,
}

impl From<PostInputArgs> for PostInput {
    fn from(args: PostInputArgs) -> Self {
        PostInput::new(args.title, args.content, args.author)
    }
}
