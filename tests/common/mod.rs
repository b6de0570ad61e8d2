#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use recruitment_backoffice::config::Config;
use recruitment_backoffice::storage::token_store::{MemoryTokenStore, TokenStore};
use recruitment_backoffice::AppState;
use serde_json::{json, Value as JsonValue};
use url::Url;
use wiremock::MockServer;

pub fn config_for(server: &MockServer) -> Config {
    Config::with_base_url(Url::parse(&server.uri()).expect("mock server url"))
}

pub fn state_with(server: &MockServer, tokens: Arc<dyn TokenStore>) -> AppState {
    AppState::new(&config_for(server), tokens).expect("app state")
}

pub fn state_for(server: &MockServer) -> AppState {
    state_with(server, Arc::new(MemoryTokenStore::with_token("test-token")))
}

pub fn state_with_timeout(server: &MockServer, timeout: Duration) -> AppState {
    let mut config = config_for(server);
    config.request_timeout = timeout;
    AppState::new(&config, Arc::new(MemoryTokenStore::with_token("test-token")))
        .expect("app state")
}

pub fn offer(n: usize) -> JsonValue {
    json!({
        "_id": format!("offer-{}", n),
        "title": format!("Offer {}", n),
        "location": "Tunis",
        "departement": "Développement Web et Mobile",
        "contract": "CDI",
        "type": "Temps plein",
        "missions": ["Build APIs"],
        "Qualifications": ["3 years experience"]
    })
}

pub fn offers(range: std::ops::Range<usize>) -> JsonValue {
    JsonValue::Array(range.map(offer).collect())
}

pub fn application(n: usize) -> JsonValue {
    json!({
        "_id": format!("app-{}", n),
        "nom": format!("Nom {}", n),
        "prenom": format!("Prenom {}", n),
        "email": format!("candidate{}@example.com", n),
        "phone": "+216 20 000 000",
        "offre": "Backend Engineer",
        "cv": format!("https://cdn.example.com/cv/{}.pdf", n)
    })
}

pub fn applications(range: std::ops::Range<usize>) -> JsonValue {
    JsonValue::Array(range.map(application).collect())
}
