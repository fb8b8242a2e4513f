use std::time::Duration;

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use rand::Rng;

use super::AppState;
use crate::config::LatencyConfig;

/// Delay API requests by a random duration within the configured range.
///
/// Passes straight through when latency is disabled.
pub async fn simulated_latency(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(delay) = latency_delay(&state.settings.latency) {
        tokio::time::sleep(delay).await;
    }

    next.run(req).await
}

/// Pick a delay for one request, or `None` when latency is disabled
pub fn latency_delay(config: &LatencyConfig) -> Option<Duration> {
    if !config.is_enabled() {
        return None;
    }

    let min = config.min_ms.min(config.max_ms);
    let millis = rand::rng().random_range(min..=config.max_ms);

    Some(Duration::from_millis(millis))
}
