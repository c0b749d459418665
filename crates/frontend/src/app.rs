use crate::usecases::analyze_transaction::AnalyzeTransactionView;
use leptos::prelude::*;

/// Single-page app: the analysis page is the whole UI
#[component]
pub fn App() -> impl IntoView {
    view! {
        <AnalyzeTransactionView />
    }
}
