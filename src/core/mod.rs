pub mod client;
pub mod format;
pub mod model;
pub mod ports;

pub use crate::utils::error::Result;
pub use model::{QueryRequest, QueryResponse};
pub use ports::QueryExecutor;
