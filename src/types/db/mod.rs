// Database entities
pub mod todo_list;
