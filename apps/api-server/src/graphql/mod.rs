//! GraphQL schema over the post service.

pub mod capability;
pub mod error;
mod mutation;
mod query;
pub mod types;
pub mod validation;

use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::state::AppState;

pub use capability::CapabilityPolicy;
pub use mutation::PostMutation;
pub use query::PostQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(PostQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(PostMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the post service and capability policy as context data.
pub fn build_schema(state: &AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state.posts.clone())
    .data(CapabilityPolicy::new(state.required_scope.clone()))
    .finish()
}
