pub mod database;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod store;

pub use database::{DatabaseConfig, StorageBackend};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use store::StoreConfig;
