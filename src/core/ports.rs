use crate::core::model::{QueryRequest, QueryResponse};
use crate::utils::error::Result;

/// Seam between the UI controller and the transport so the submit flow can be
/// exercised without a live endpoint.
pub trait QueryExecutor: Send + Sync {
    fn execute(&self, request: &QueryRequest) -> Result<QueryResponse>;
}
