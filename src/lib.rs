pub mod app;
pub mod config;
pub mod core;
pub mod utils;

pub use app::RequestTesterApp;
pub use config::AppConfig;
pub use core::client::HttpQueryClient;
pub use core::{QueryExecutor, QueryRequest, QueryResponse};
pub use utils::error::{Result, TesterError};
