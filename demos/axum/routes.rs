use axum::{Json, extract::State, http::StatusCode};
use bunner_cors_gate::PolicyConfiguration;

use crate::cors::AppState;

pub async fn greet(State(state): State<AppState>) -> String {
    state.greeting.to_string()
}

pub async fn settings(State(state): State<AppState>) -> Json<PolicyConfiguration> {
    Json(state.store.configuration())
}

pub async fn save_settings(
    State(state): State<AppState>,
    body: String,
) -> Result<StatusCode, (StatusCode, String)> {
    let configuration = PolicyConfiguration::from_json_str(&body)
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;
    state.store.update(configuration);
    Ok(StatusCode::NO_CONTENT)
}
