use std::sync::Arc;

use bunner_cors_gate::{ConfigurationError, CorsFilter, PolicyConfiguration, PolicyStore};

pub type SharedStore = Arc<PolicyStore>;
pub type SharedCors = Arc<CorsFilter<SharedStore>>;

const SETTINGS: &str = r#"{
    "enabled": true,
    "allowedOrigins": "http://localhost:9000,http://localhost:8080",
    "allowedMethods": "GET, POST, OPTIONS"
}"#;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub store: SharedStore,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ConfigurationError> {
    let store = Arc::new(PolicyStore::new(PolicyConfiguration::from_json_str(SETTINGS)?));
    let cors = Arc::new(CorsFilter::new(Arc::clone(&store)));

    Ok(AppState {
        cors,
        store,
        greeting: "Welcome to the Axum CORS example!",
    })
}

pub mod middleware;
