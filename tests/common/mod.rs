// Common test utilities for integration tests
//
// Drives the real route table in-process against an in-memory database.

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use poem::http::{HeaderMap, Method, StatusCode};
use poem::{Endpoint, EndpointExt, Request};
use sea_orm::Database;
use serde_json::Value;
use todo_backend::api;
use todo_backend::stores::TodoListStore;

/// Builds a test app over the real routes and a fresh in-memory database
pub async fn setup_test_app() -> TestApp<impl Endpoint> {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let store = Arc::new(TodoListStore::new(db));
    TestApp {
        endpoint: api::routes().data(store),
    }
}

pub struct TestApp<E> {
    endpoint: E,
}

impl<E: Endpoint> TestApp<E> {
    async fn request(&self, method: Method, uri: &str, body: Option<String>) -> TestResponse {
        let builder = Request::builder()
            .method(method)
            .uri(uri.parse().expect("test uri should parse"));
        let request = match body {
            Some(body) => builder.body(body),
            None => builder.finish(),
        };

        let response = self.endpoint.get_response(request).await;
        let (parts, body) = response.into_parts();

        TestResponse {
            status: parts.status,
            headers: parts.headers,
            body: body.into_string().await.unwrap_or_default(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body.to_string())).await
    }

    /// POST a body that is not necessarily valid JSON
    pub async fn post_raw(&self, uri: &str, body: &str) -> TestResponse {
        self.request(Method::POST, uri, Some(body.to_string())).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(body.to_string())).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Parse the response body as JSON
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("response body should be JSON")
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get("content-type")
            .and_then(|value| value.to_str().ok())
    }
}
