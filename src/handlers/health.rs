// src/handlers/health.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::models::word::Vocabulary;

/// Liveness probe. Reports how many words are loaded.
pub async fn health(State(vocabulary): State<Arc<Vocabulary>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "words": vocabulary.len(),
    }))
}
