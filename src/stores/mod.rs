// Stores layer - Data access and repository pattern
pub mod todo_list_store;

pub use todo_list_store::TodoListStore;

#[cfg(test)]
mod todo_list_store_test;
