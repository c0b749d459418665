use contracts::usecases::analyze_transaction::AnalyzeResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::HttpAnalyzeClient;
use super::dispatch::trigger;
use super::state::AnalysisState;

#[component]
pub fn AnalyzeTransactionView() -> impl IntoView {
    let state = RwSignal::new(AnalysisState::default());
    let client = HttpAnalyzeClient::default();

    let on_analyze = move |_| {
        if let Some(cycle) = trigger(client.clone(), state) {
            spawn_local(cycle);
        }
    };

    view! {
        <main id="analyze_transaction--usecase" style="display: flex; min-height: 100vh; flex-direction: column; align-items: center; padding: 96px 24px; background: #111827; color: #fff; font-family: sans-serif;">
            <h1 style="font-size: 36px; font-weight: bold; margin-bottom: 32px;">"WhyTx"</h1>
            <p style="font-size: 18px; color: #9ca3af; margin-bottom: 32px;">
                "The AI Rationale Engine for On-chain Actions"
            </p>

            <div style="width: 100%; max-width: 672px;">
                <input
                    type="text"
                    placeholder="Paste Sepolia transaction hash (e.g., 0x...)"
                    style="width: 100%; box-sizing: border-box; padding: 16px; color: #000; border-radius: 8px; border: 1px solid #4b5563;"
                    prop:value=move || state.with(|s| s.tx_hash.clone())
                    on:input=move |ev| state.update(|s| s.set_tx_hash(event_target_value(&ev)))
                />
                <button
                    style=move || format!(
                        "width: 100%; padding: 16px; margin-top: 16px; border: none; border-radius: 8px; color: #fff; font-weight: bold; cursor: pointer; background: {};",
                        if state.with(|s| s.is_loading) { "#6b7280" } else { "#2563eb" }
                    )
                    on:click=on_analyze
                    prop:disabled=move || state.with(|s| s.is_loading)
                >
                    {move || state.with(|s| s.trigger_label())}
                </button>
            </div>

            {move || state.with(|s| s.result.clone()).map(|response| view! { <ResultPanel response=response /> })}

            {move || state.with(|s| s.error.clone()).map(|message| view! { <ErrorPanel message=message /> })}
        </main>
    }
}

/// Stored rationale opens in a new browsing context without an opener
pub const LINK_TARGET: &str = "_blank";
pub const LINK_REL: &str = "noopener noreferrer";

/// Everything the success panel displays, derived from the backend answer
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanelModel {
    pub rationale: String,
    pub confidence: Option<String>,
    /// In backend order, verbatim
    pub evidence: Vec<String>,
    pub cid: String,
    pub href: String,
}

impl From<AnalyzeResponse> for ResultPanelModel {
    fn from(response: AnalyzeResponse) -> Self {
        let href = response.gateway_url();
        let confidence = response.analysis.confidence_label();
        let AnalyzeResponse {
            analysis,
            lighthouse_cid,
        } = response;

        Self {
            rationale: analysis.rationale,
            confidence,
            evidence: analysis.key_evidence,
            cid: lighthouse_cid,
            href,
        }
    }
}

#[component]
fn ResultPanel(response: AnalyzeResponse) -> impl IntoView {
    let ResultPanelModel {
        rationale,
        confidence,
        evidence,
        cid,
        href,
    } = response.into();

    view! {
        <div style="width: 100%; max-width: 672px; margin-top: 32px; padding: 24px; background: #1f2937; border: 1px solid #374151; border-radius: 8px; box-sizing: border-box;">
            <h2 style="font-size: 24px; font-weight: bold; margin-bottom: 16px; color: #4ade80;">"Analysis Complete"</h2>

            <h3 style="font-weight: bold; margin-top: 16px;">"Rationale:"</h3>
            <p style="color: #d1d5db;">{rationale}</p>

            {confidence.map(|label| view! {
                <p style="color: #9ca3af; font-size: 14px;">"Confidence: " {label}</p>
            })}

            <h3 style="font-weight: bold; margin-top: 16px;">"Key Evidence:"</h3>
            <ul style="list-style: disc; padding-left: 20px; color: #d1d5db;">
                {evidence
                    .into_iter()
                    .map(|item| view! { <li>{item}</li> })
                    .collect_view()}
            </ul>

            <h3 style="font-weight: bold; margin-top: 16px;">"Lighthouse Storage CID:"</h3>
            <p style="font-size: 12px; color: #4ade80; word-break: break-all;">{cid}</p>
            <a
                href=href
                target=LINK_TARGET
                rel=LINK_REL
                style="color: #60a5fa;"
            >
                "View Stored Rationale on Lighthouse"
            </a>
        </div>
    }
}

#[component]
fn ErrorPanel(message: String) -> impl IntoView {
    view! {
        <div style="width: 100%; max-width: 672px; margin-top: 32px; padding: 24px; background: #7f1d1d; border: 1px solid #b91c1c; border-radius: 8px; box-sizing: border-box;">
            <h2 style="font-size: 20px; font-weight: bold;">"Error"</h2>
            <p>{message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::analyze_transaction::TxAnalysis;

    fn response(evidence: &[&str]) -> AnalyzeResponse {
        AnalyzeResponse {
            analysis: TxAnalysis {
                rationale: "Swap of 1 ETH for USDC".to_string(),
                key_evidence: evidence.iter().map(|e| e.to_string()).collect(),
                confidence: Some(serde_json::json!(95)),
            },
            lighthouse_cid: "bafy123".to_string(),
        }
    }

    #[test]
    fn test_result_panel_model() {
        let model = ResultPanelModel::from(response(&["Approval event", "Swap event"]));
        assert_eq!(model.rationale, "Swap of 1 ETH for USDC");
        assert_eq!(model.confidence.as_deref(), Some("95%"));
        assert_eq!(model.evidence, vec!["Approval event", "Swap event"]);
        assert_eq!(model.cid, "bafy123");
        assert_eq!(model.href, "https://gateway.lighthouse.storage/ipfs/bafy123");
    }

    #[test]
    fn test_evidence_is_not_deduplicated_or_reordered() {
        let items = ["Swap event", "Approval event", "Swap event", ""];
        let model = ResultPanelModel::from(response(&items));
        assert_eq!(model.evidence, items);
    }

    #[test]
    fn test_link_opens_without_opener() {
        assert_eq!(LINK_TARGET, "_blank");
        assert_eq!(LINK_REL, "noopener noreferrer");
    }
}
