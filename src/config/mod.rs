// Config layer - environment-driven settings
mod database;
mod logging;

pub use database::{migrate, DatabaseConfig};
pub use logging::{init_logging, LoggingConfig, LoggingError};
