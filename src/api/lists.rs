use std::sync::Arc;

use poem::http::StatusCode;
use poem::web::{Data, Path};
use poem::{handler, Body, Response, Result};

use crate::api::helpers::{json_response, no_content, read_json_body};
use crate::errors::api::ApiError;
use crate::services::validation::validate_list_request;
use crate::stores::TodoListStore;
use crate::types::dto::ToDoList;

/// Create a new list
///
/// Validates the body, builds a record with a fresh id, an empty item
/// collection and a synthesized owner, persists it and returns it.
#[handler]
pub async fn create_todo_list(
    store: Data<&Arc<TodoListStore>>,
    body: Body,
) -> Result<Response> {
    tracing::info!("POST todo list");
    let request = read_json_body(body).await?;
    let request = validate_list_request(&request).map_err(ApiError::from)?;

    let todo_list = ToDoList::new(request.name, request.deadline_date);
    store.put(&todo_list).await.map_err(ApiError::from_store)?;

    json_response(StatusCode::CREATED, &todo_list)
}

/// Return every stored list
#[handler]
pub async fn get_all_todo_lists(store: Data<&Arc<TodoListStore>>) -> Result<Response> {
    tracing::info!("GET all todo lists");
    let todo_lists = store.get_all().await.map_err(ApiError::from_store)?;

    json_response(StatusCode::OK, &todo_lists)
}

/// Return one list by id
#[handler]
pub async fn get_todo_list(
    store: Data<&Arc<TodoListStore>>,
    Path(list_id): Path<String>,
) -> Result<Response> {
    tracing::info!("GET todo list with id {}", list_id);
    let todo_list = store
        .get_by_id(&list_id)
        .await
        .map_err(ApiError::from_store)?;

    json_response(StatusCode::OK, &todo_list)
}

/// Overwrite a list's name and deadline
///
/// Validation runs before the existence fetch: a request failing both
/// reports the validation failure, not the not-found.
#[handler]
pub async fn update_todo_list(
    store: Data<&Arc<TodoListStore>>,
    Path(list_id): Path<String>,
    body: Body,
) -> Result<Response> {
    tracing::info!("PUT todo list with id {}", list_id);
    let request = read_json_body(body).await?;
    let request = validate_list_request(&request).map_err(ApiError::from)?;

    let mut todo_list = store
        .get_by_id(&list_id)
        .await
        .map_err(ApiError::from_store)?;
    todo_list.name = request.name;
    todo_list.deadline_date = request.deadline_date;

    store.put(&todo_list).await.map_err(ApiError::from_store)?;

    json_response(StatusCode::OK, &todo_list)
}

/// Delete a list by id
///
/// The existence check carries the 404 contract; the store delete itself is
/// idempotent, so a second delete of the same id reports not-found here.
#[handler]
pub async fn delete_todo_list(
    store: Data<&Arc<TodoListStore>>,
    Path(list_id): Path<String>,
) -> Result<Response> {
    tracing::info!("DELETE todo list with id {}", list_id);
    store
        .get_by_id(&list_id)
        .await
        .map_err(ApiError::from_store)?;

    store.delete(&list_id).await.map_err(ApiError::from_store)?;

    Ok(no_content())
}
