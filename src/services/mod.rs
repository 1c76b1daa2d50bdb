// Services layer - Request validation
pub mod validation;

pub use validation::{
    validate_item_request, validate_list_request, ValidatedItemRequest, ValidatedListRequest,
    ValidationError,
};
