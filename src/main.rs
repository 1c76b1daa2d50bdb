use std::sync::Arc;

use poem::listener::TcpListener;
use poem::{EndpointExt, Server};
use todo_backend::api;
use todo_backend::config::{init_logging, migrate, DatabaseConfig};
use todo_backend::stores::TodoListStore;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    // Connect to the database and bring the schema up to date
    let config = DatabaseConfig::from_env();
    let db = config
        .connect()
        .await
        .expect("Failed to connect to database");

    migrate(&db).await.expect("Failed to run migrations");

    // Single store handle shared across all request handlers
    let store = Arc::new(TodoListStore::new(db));
    let app = api::routes().data(store);

    let bind_address =
        std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    tracing::info!("Starting server on http://{}", bind_address);

    Server::new(TcpListener::bind(bind_address)).run(app).await
}
