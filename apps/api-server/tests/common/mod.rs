#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_graphql::{Request, Response, ServerError, Variables};
use bms_core::ports::PostRepository;
use bms_infra::{InMemoryPostRepository, JwtConfig, JwtTokenService};
use serde_json::Value;

use api_server::middleware::Identity;
use api_server::{AppSchema, AppState, build_schema};

pub const SCOPE: &str = "profile";

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret".to_string(),
        expiration_hours: 1,
        issuer: "bms-api".to_string(),
    }
}

pub fn state_with(repo: Arc<dyn PostRepository>) -> AppState {
    AppState::with_repository(repo, Arc::new(JwtTokenService::new(jwt_config())), SCOPE)
}

pub fn state() -> AppState {
    state_with(Arc::new(InMemoryPostRepository::new()))
}

pub fn schema() -> AppSchema {
    build_schema(&state())
}

pub fn writer() -> Identity {
    Identity {
        subject: "writer".to_string(),
        scopes: vec!["openid".to_string(), SCOPE.to_string()],
    }
}

pub fn reader() -> Identity {
    Identity {
        subject: "reader".to_string(),
        scopes: vec!["openid".to_string()],
    }
}

pub async fn execute(
    schema: &AppSchema,
    query: &str,
    variables: Value,
    identity: Option<Identity>,
) -> Response {
    let mut request = Request::new(query).variables(Variables::from_json(variables));
    if let Some(identity) = identity {
        request = request.data(identity);
    }
    schema.execute(request).await
}

pub fn data(response: Response) -> Value {
    assert!(response.errors.is_empty(), "unexpected errors: {:?}", response.errors);
    response.data.into_json().unwrap()
}

/// Message and `classification` extension of the single error in `response`.
pub fn single_error(response: &Response) -> (String, String) {
    assert_eq!(response.errors.len(), 1, "errors: {:?}", response.errors);
    let error: &ServerError = &response.errors[0];
    let classification = error
        .extensions
        .as_ref()
        .and_then(|ext| ext.get("classification"))
        .map(|v| match v {
            async_graphql::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_default();
    (error.message.clone(), classification)
}

pub const ADD_POST: &str = r#"
    mutation AddPost($input: PostInput!) {
        addPost(postInput: $input) { id title content author createdAt updatedAt }
    }
"#;

pub async fn add_post(schema: &AppSchema, title: &str, content: &str, author: &str) -> Value {
    let response = execute(
        schema,
        ADD_POST,
        serde_json::json!({ "input": { "title": title, "content": content, "author": author } }),
        Some(writer()),
    )
    .await;
    data(response)["addPost"].clone()
}

pub async fn count_posts(schema: &AppSchema) -> usize {
    let response = execute(schema, "{ getAllPosts { id } }", Value::Null, None).await;
    data(response)["getAllPosts"]
        .as_array()
        .map(Vec::len)
        .unwrap_or_default()
}

/// Wait for a background deletion to land.
pub async fn wait_for_count(schema: &AppSchema, expected: usize) {
    for _ in 0..50 {
        if count_posts(schema).await == expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("post count never reached {expected}");
}
