// API layer - HTTP endpoints
pub mod helpers;
pub mod items;
pub mod lists;

use poem::{delete, get, post, put, Route};

/// Build the route table for the to-do API
///
/// The caller attaches the shared `Arc<TodoListStore>` with `.data(...)`.
pub fn routes() -> Route {
    Route::new()
        .at(
            "/lists",
            post(lists::create_todo_list).get(lists::get_all_todo_lists),
        )
        .at(
            "/lists/:list_id",
            get(lists::get_todo_list)
                .put(lists::update_todo_list)
                .delete(lists::delete_todo_list),
        )
        .at("/lists/:list_id/items", post(items::create_todo_item))
        .at(
            "/lists/:list_id/items/:item_id",
            put(items::update_todo_item).delete(items::delete_todo_item),
        )
}
