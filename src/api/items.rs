use std::sync::Arc;

use poem::http::StatusCode;
use poem::web::{Data, Path};
use poem::{handler, Body, Response, Result};

use crate::api::helpers::{json_response, no_content, read_json_body};
use crate::errors::api::ApiError;
use crate::services::validation::validate_item_request;
use crate::stores::TodoListStore;
use crate::types::dto::ToDoItem;

/// Add an item to a list
///
/// Validates the body before fetching the parent list, appends a fresh item
/// (creating the collection when absent) and persists the full parent.
/// Responds with the complete updated list.
#[handler]
pub async fn create_todo_item(
    store: Data<&Arc<TodoListStore>>,
    Path(list_id): Path<String>,
    body: Body,
) -> Result<Response> {
    tracing::info!("POST todo item for list with id {}", list_id);
    let request = read_json_body(body).await?;
    let request = validate_item_request(&request).map_err(ApiError::from)?;

    let mut todo_list = store
        .get_by_id(&list_id)
        .await
        .map_err(ApiError::from_store)?;
    todo_list.add_item(ToDoItem::new(request.name, request.is_done));

    store.put(&todo_list).await.map_err(ApiError::from_store)?;

    json_response(StatusCode::CREATED, &todo_list)
}

/// Overwrite an item's name and completion flag
///
/// The item is located inside the addressed list only; an id that exists
/// under a different list is a not-found. The located entry is mutated in
/// place and the full parent list is rewritten.
#[handler]
pub async fn update_todo_item(
    store: Data<&Arc<TodoListStore>>,
    Path((list_id, item_id)): Path<(String, String)>,
    body: Body,
) -> Result<Response> {
    tracing::info!(
        "PUT todo item with id {} for list with id {}",
        item_id,
        list_id
    );
    let request = read_json_body(body).await?;
    let request = validate_item_request(&request).map_err(ApiError::from)?;

    let mut todo_list = store
        .get_by_id(&list_id)
        .await
        .map_err(ApiError::from_store)?;
    let item = todo_list.item_mut(&item_id).map_err(ApiError::from)?;
    item.name = request.name;
    item.is_done = request.is_done;

    store.put(&todo_list).await.map_err(ApiError::from_store)?;

    json_response(StatusCode::OK, &todo_list)
}

/// Remove an item from a list
#[handler]
pub async fn delete_todo_item(
    store: Data<&Arc<TodoListStore>>,
    Path((list_id, item_id)): Path<(String, String)>,
) -> Result<Response> {
    tracing::info!(
        "DELETE todo item with id {} for list with id {}",
        item_id,
        list_id
    );
    let mut todo_list = store
        .get_by_id(&list_id)
        .await
        .map_err(ApiError::from_store)?;
    todo_list.remove_item(&item_id).map_err(ApiError::from)?;

    store.put(&todo_list).await.map_err(ApiError::from_store)?;

    Ok(no_content())
}
