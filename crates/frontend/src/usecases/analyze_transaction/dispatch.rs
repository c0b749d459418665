use std::future::Future;

use leptos::prelude::*;

use super::api::AnalyzeClient;
use super::state::AnalysisState;

/// Clears the loading flag however the dispatch ends, including when the
/// future is dropped before the request settles.
struct FinishOnDrop(RwSignal<AnalysisState>);

impl Drop for FinishOnDrop {
    fn drop(&mut self) {
        _ = self.0.try_update(AnalysisState::finish);
    }
}

/// Runs one analysis cycle against `client`.
///
/// Overlapping calls are not de-duplicated: each one settles on its own and
/// the last to settle wins.
pub async fn dispatch<C>(client: &C, state: RwSignal<AnalysisState>)
where
    C: AnalyzeClient + ?Sized,
{
    let Some(request) = state.try_update(AnalysisState::begin) else {
        return;
    };
    let _finish = FinishOnDrop(state);

    log::info!("Analyzing transaction '{}'", request.tx_hash);
    let outcome = client.analyze(&request).await;

    match &outcome {
        Ok(response) => log::info!(
            "Analysis of '{}' stored as {}",
            request.tx_hash,
            response.lighthouse_cid
        ),
        Err(err) => log::warn!("Analysis of '{}' failed: {}", request.tx_hash, err),
    }

    _ = state.try_update(|s| s.settle(outcome));
}

/// Click handler of the trigger button.
///
/// Returns the cycle to spawn, or `None` while a cycle is already loading.
pub fn trigger<C>(client: C, state: RwSignal<AnalysisState>) -> Option<impl Future<Output = ()>>
where
    C: AnalyzeClient + 'static,
{
    if !state.with_untracked(AnalysisState::can_trigger) {
        log::debug!("Trigger ignored: analysis already in progress");
        return None;
    }

    Some(async move { dispatch(&client, state).await })
}
