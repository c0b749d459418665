//! Contract of the `POST /api/analyze` endpoint.
//!
//! The backend fetches the transaction, asks a model for a rationale,
//! pins the result to Lighthouse and answers with [`AnalyzeResponse`].
//! Failures carry an optional [`ApiErrorBody`].

pub mod request;
pub mod response;

pub use request::AnalyzeRequest;
pub use response::{gateway_url, AnalyzeResponse, ApiErrorBody, TxAnalysis, LIGHTHOUSE_GATEWAY};

/// Path of the analysis endpoint, relative to the API origin
pub const ANALYZE_PATH: &str = "/api/analyze";
