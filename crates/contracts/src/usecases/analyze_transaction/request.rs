use serde::{Deserialize, Serialize};

/// Body of `POST /api/analyze`
///
/// The hash is forwarded exactly as typed; validation belongs to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub tx_hash: String,
}

impl AnalyzeRequest {
    pub fn new(tx_hash: impl Into<String>) -> Self {
        Self {
            tx_hash: tx_hash.into(),
        }
    }
}
