use axum::{Json, body::Bytes, extract::State};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};
use crate::handlers::ApiError;
use crate::metrics::{REQUEST_FAILURES, REQUEST_LATENCY, REQUEST_TOTAL};
use crate::mock::mock_result;
use crate::models::{GenerateRequest, GenerationResult};
use crate::state::AppState;

// Body is parsed by hand so a missing, blank or non-string prompt all get the same 400
fn read_prompt(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<GenerateRequest>(body)
        .ok()
        .map(|req| req.prompt)
        .filter(|prompt| !prompt.trim().is_empty())
}

pub async fn generate_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<GenerationResult>, ApiError> {
    REQUEST_TOTAL.inc();

    let Some(prompt) = read_prompt(&body) else {
        error!("Prompt missing from generate request");
        REQUEST_FAILURES.inc();
        return Err(ApiError::bad_request("Prompt is required"));
    };
    info!("Generating for prompt: {}", prompt);

    let start_time = Instant::now();

    let result = match &state.relay {
        Some(relay) => relay.generate(&prompt).await.map_err(|e| {
            error!("Relay failed: {}", e);
            REQUEST_FAILURES.inc();
            ApiError::from(e)
        })?,
        None => mock_result(&prompt),
    };

    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_extraction() {
        assert_eq!(read_prompt(br#"{"prompt":"bakery"}"#).as_deref(), Some("bakery"));
        assert_eq!(read_prompt(br#"{"prompt":"  "}"#), None);
        assert_eq!(read_prompt(br#"{}"#), None);
        assert_eq!(read_prompt(br#"{"prompt":null}"#), None);
        assert_eq!(read_prompt(br#"{"prompt":123}"#), None);
        assert_eq!(read_prompt(b"prompt=bakery"), None);
        assert_eq!(read_prompt(b""), None);
    }
}
