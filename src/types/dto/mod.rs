// Data transfer objects - wire and document shapes
pub mod todo;

pub use todo::{ToDoItem, ToDoList};
