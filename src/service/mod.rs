pub use app_error::{AppError, AppResult};
pub use config::{AppConfig, NetworkConfig, ViewerConfig};
pub use server::Server;
pub use tracing_config::setup_tracing;

mod app_error;
mod config;
mod server;
mod tracing_config;
