use async_trait::async_trait;
use contracts::usecases::analyze_transaction::{
    AnalyzeRequest, AnalyzeResponse, ApiErrorBody, ANALYZE_PATH,
};
use gloo_net::http::Request;
use thiserror::Error;

use crate::shared::api_utils::api_url;

/// Shown when the backend gives no usable explanation
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

/// Why an analysis request failed.
///
/// The page shows every variant the same way, through [`user_message`](Self::user_message);
/// the variants only matter for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend rejected request with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("Malformed response body: {0}")]
    Malformed(String),
}

impl AnalyzeError {
    pub fn user_message(&self) -> String {
        match self {
            AnalyzeError::Network(message) => message.clone(),
            AnalyzeError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            AnalyzeError::Rejected { message: None, .. } | AnalyzeError::Malformed(_) => {
                FALLBACK_ERROR_MESSAGE.to_string()
            }
        }
    }
}

/// Maps a settled HTTP exchange onto the analysis outcome
pub fn interpret_response(status: u16, body: &str) -> Result<AnalyzeResponse, AnalyzeError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| AnalyzeError::Malformed(e.to_string()));
    }

    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message());

    Err(AnalyzeError::Rejected { status, message })
}

/// Text of a transport failure as the page shows it.
///
/// For a rejected `fetch` this is the JS error's `message` ("Failed to fetch"),
/// not its `toString()` ("TypeError: Failed to fetch").
pub fn network_message(err: &gloo_net::Error) -> String {
    match err {
        gloo_net::Error::JsError(js) if !js.message.is_empty() => js.message.clone(),
        other => other.to_string(),
    }
}

/// Transport used by the page to reach the analysis backend
#[async_trait(?Send)]
pub trait AnalyzeClient {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse, AnalyzeError>;
}

/// `fetch`-based client for `POST /api/analyze`
#[derive(Debug, Clone)]
pub struct HttpAnalyzeClient {
    endpoint: String,
}

impl HttpAnalyzeClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpAnalyzeClient {
    fn default() -> Self {
        Self::new(api_url(ANALYZE_PATH))
    }
}

#[async_trait(?Send)]
impl AnalyzeClient for HttpAnalyzeClient {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse, AnalyzeError> {
        // json() also sets Content-Type: application/json
        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| AnalyzeError::Network(network_message(&e)))?
            .send()
            .await
            .map_err(|e| AnalyzeError::Network(network_message(&e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AnalyzeError::Malformed(e.to_string()))?;

        interpret_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUCCESS_BODY: &str = r#"{"analysis":{"rationale":"Swap of 1 ETH for USDC","key_evidence":["Approval event","Swap event"]},"lighthouse_cid":"bafy123"}"#;

    #[test]
    fn test_success_response() {
        let response = interpret_response(200, SUCCESS_BODY).unwrap();
        assert_eq!(response.analysis.rationale, "Swap of 1 ETH for USDC");
        assert_eq!(response.analysis.key_evidence.len(), 2);
        assert_eq!(
            response.gateway_url(),
            "https://gateway.lighthouse.storage/ipfs/bafy123"
        );
    }

    #[test]
    fn test_rejected_with_backend_message() {
        let err = interpret_response(400, r#"{"error":"Invalid transaction hash"}"#).unwrap_err();
        assert_eq!(
            err,
            AnalyzeError::Rejected {
                status: 400,
                message: Some("Invalid transaction hash".to_string()),
            }
        );
        assert_eq!(err.user_message(), "Invalid transaction hash");
    }

    #[test]
    fn test_rejected_without_parseable_body() {
        let err = interpret_response(500, "<html>Internal Server Error</html>").unwrap_err();
        assert_eq!(
            err,
            AnalyzeError::Rejected {
                status: 500,
                message: None,
            }
        );
        assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);

        let err = interpret_response(502, "").unwrap_err();
        assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_rejected_with_empty_message_uses_fallback() {
        let err = interpret_response(400, r#"{"error":""}"#).unwrap_err();
        assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);

        let err = interpret_response(404, r#"{"detail":"not here"}"#).unwrap_err();
        assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_success_status_with_bad_body_is_malformed() {
        let err = interpret_response(200, "not json").unwrap_err();
        assert!(matches!(err, AnalyzeError::Malformed(_)));
        assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);

        let err = interpret_response(200, r#"{"lighthouse_cid":"bafy123"}"#).unwrap_err();
        assert!(matches!(err, AnalyzeError::Malformed(_)));
    }

    #[test]
    fn test_network_error_keeps_its_message() {
        let err = AnalyzeError::Network("Failed to fetch".to_string());
        assert_eq!(err.user_message(), "Failed to fetch");
        assert_eq!(err.to_string(), "Network error: Failed to fetch");
    }

    #[test]
    fn test_network_message_of_non_js_failures() {
        let err = gloo_net::Error::GlooError("Request aborted".to_string());
        assert_eq!(network_message(&err), err.to_string());
        assert!(network_message(&err).contains("Request aborted"));

        let serde_err = serde_json::from_str::<u8>("x").unwrap_err();
        let expected = serde_err.to_string();
        let err = gloo_net::Error::SerdeError(serde_err);
        assert_eq!(network_message(&err), expected);
    }

    #[test]
    fn test_rejected_with_scalar_error_field() {
        let err = interpret_response(404, r#"{"error":404}"#).unwrap_err();
        assert_eq!(err.user_message(), "404");

        let err = interpret_response(500, r#"{"error":null}"#).unwrap_err();
        assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_default_client_targets_same_origin_endpoint() {
        assert_eq!(HttpAnalyzeClient::default().endpoint(), "/api/analyze");
    }
}
