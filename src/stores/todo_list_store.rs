use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};

use crate::errors::internal::InternalError;
use crate::errors::not_found::NotFoundError;
use crate::types::db::todo_list::{ActiveModel, Column, Entity as TodoListRecord};
use crate::types::dto::ToDoList;

/// TodoListStore is the sole access point to the durable list table
///
/// One row per list, keyed by list id, holding the complete document. Every
/// write replaces the whole document; there is no partial-field update and
/// no optimistic-concurrency check - concurrent writers last-write-win.
pub struct TodoListStore {
    db: DatabaseConnection,
}

impl TodoListStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch a list by its primary key
    ///
    /// # Returns
    /// * `Ok(ToDoList)` - The full record, never partially populated
    /// * `Err(InternalError::NotFound)` - No record exists under that key
    pub async fn get_by_id(&self, list_id: &str) -> Result<ToDoList, InternalError> {
        let row = TodoListRecord::find_by_id(list_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_todo_list", e))?;

        match row {
            Some(row) => decode_document(row.document),
            None => Err(NotFoundError::todo_list(list_id).into()),
        }
    }

    /// Unbounded scan of every stored list, in no particular order
    ///
    /// Returns an empty vec when the table is empty. No pagination - the
    /// whole table is always materialized.
    pub async fn get_all(&self) -> Result<Vec<ToDoList>, InternalError> {
        let rows = TodoListRecord::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("get_all_todo_lists", e))?;

        rows.into_iter()
            .map(|row| decode_document(row.document))
            .collect()
    }

    /// Full-document upsert
    ///
    /// Overwrites any existing record with the same list id, creates it when
    /// absent. The last writer wins.
    pub async fn put(&self, todo_list: &ToDoList) -> Result<(), InternalError> {
        let document = serde_json::to_value(todo_list)
            .map_err(|e| InternalError::record("encode_todo_list", e))?;

        let record = ActiveModel {
            list_id: Set(todo_list.list_id.clone()),
            document: Set(document),
        };

        TodoListRecord::insert(record)
            .on_conflict(
                OnConflict::column(Column::ListId)
                    .update_column(Column::Document)
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("put_todo_list", e))?;

        Ok(())
    }

    /// Remove a list by key
    ///
    /// Idempotent: deleting a missing key is not an error. Callers wanting
    /// not-found semantics on delete check existence with get_by_id first.
    pub async fn delete(&self, list_id: &str) -> Result<(), InternalError> {
        TodoListRecord::delete_by_id(list_id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_todo_list", e))?;

        Ok(())
    }
}

fn decode_document(document: serde_json::Value) -> Result<ToDoList, InternalError> {
    serde_json::from_value(document).map_err(|e| InternalError::record("decode_todo_list", e))
}
