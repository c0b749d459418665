use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Public IPFS gateway serving Lighthouse uploads
pub const LIGHTHOUSE_GATEWAY: &str = "https://gateway.lighthouse.storage/ipfs/";

/// Retrieval link for a stored rationale
pub fn gateway_url(cid: &str) -> String {
    format!("{}{}", LIGHTHOUSE_GATEWAY, cid)
}

/// Successful answer of the analysis endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub analysis: TxAnalysis,
    /// Content identifier of the rationale pinned on Lighthouse
    pub lighthouse_cid: String,
}

impl AnalyzeResponse {
    pub fn gateway_url(&self) -> String {
        gateway_url(&self.lighthouse_cid)
    }
}

/// Model output describing a single transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxAnalysis {
    pub rationale: String,
    pub key_evidence: Vec<String>,
    /// Score reported by the model; its shape is not guaranteed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Value>,
}

impl TxAnalysis {
    /// Human readable confidence, `None` when absent or not displayable
    pub fn confidence_label(&self) -> Option<String> {
        match self.confidence.as_ref()? {
            Value::Number(n) => Some(format!("{}%", n)),
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

/// Failure body; `error` may be missing, empty or not even a string
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<Value>,
}

impl ApiErrorBody {
    /// Displayable error text; empty, zero, `false` and non-scalar values count as absent
    pub fn message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }
}
