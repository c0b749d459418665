use contracts::usecases::analyze_transaction::{AnalyzeRequest, AnalyzeResponse};

use super::api::AnalyzeError;

pub const TRIGGER_LABEL: &str = "Analyze Transaction";
pub const TRIGGER_LABEL_BUSY: &str = "Analyzing...";

/// Transient state of the analysis page.
///
/// `result` and `error` are never both set. Nothing here survives navigation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisState {
    pub tx_hash: String,
    pub is_loading: bool,
    pub result: Option<AnalyzeResponse>,
    pub error: Option<String>,
}

impl AnalysisState {
    /// Accepts any input, including empty or malformed hashes
    pub fn set_tx_hash(&mut self, value: impl Into<String>) {
        self.tx_hash = value.into();
    }

    /// Starts a dispatch cycle and captures the request payload.
    ///
    /// Always starts, even while another cycle is in flight; only the
    /// trigger affordance consults [`can_trigger`](Self::can_trigger).
    pub fn begin(&mut self) -> AnalyzeRequest {
        self.is_loading = true;
        self.result = None;
        self.error = None;
        AnalyzeRequest::new(self.tx_hash.clone())
    }

    /// Records the outcome of a cycle. Leaves `is_loading` to [`finish`](Self::finish).
    pub fn settle(&mut self, outcome: Result<AnalyzeResponse, AnalyzeError>) {
        match outcome {
            Ok(response) => {
                self.result = Some(response);
                self.error = None;
            }
            Err(err) => {
                self.result = None;
                self.error = Some(err.user_message());
            }
        }
    }

    pub fn finish(&mut self) {
        self.is_loading = false;
    }

    pub fn can_trigger(&self) -> bool {
        !self.is_loading
    }

    pub fn trigger_label(&self) -> &'static str {
        if self.is_loading {
            TRIGGER_LABEL_BUSY
        } else {
            TRIGGER_LABEL
        }
    }
}
