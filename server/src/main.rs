use clap::Parser;
use todo_core::TodoService;
use todo_server::{Config, MongoStore};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    todo_server::init_tracing();

    let store =
        MongoStore::connect(&config.connection_string, &config.database, &config.collection)
            .await?;
    let listener = TcpListener::bind(config.bind_addr()).await?;

    todo_server::run_until(listener, TodoService::new(store), todo_server::shutdown_signal())
        .await?;
    Ok(())
}
