//! Process configuration, read from flags or the environment.

use std::net::IpAddr;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", version, about = "HTTP todo service backed by MongoDB")]
pub struct Config {
    /// MongoDB connection string. Required.
    #[arg(long, env = "MONGODB_CONNECTION_STRING", hide_env_values = true)]
    pub connection_string: String,

    /// Database holding the todo collection
    #[arg(long, env = "TODO_DATABASE", default_value = "todolist")]
    pub database: String,

    /// Collection holding todo documents
    #[arg(long, env = "TODO_COLLECTION", default_value = "todos")]
    pub collection: String,

    /// Host address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_populate_config() {
        let config = Config::try_parse_from([
            "todo-server",
            "--connection-string",
            "mongodb://localhost:27017",
            "--database",
            "todolist",
            "--collection",
            "todos",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
        ])
        .unwrap();
        assert_eq!(config.connection_string, "mongodb://localhost:27017");
        assert_eq!(config.database, "todolist");
        assert_eq!(config.collection, "todos");
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = Config::try_parse_from([
            "todo-server",
            "--connection-string",
            "mongodb://localhost:27017",
            "--port",
            "not-a-port",
        ]);
        assert!(result.is_err());
    }
}
