use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::AppState;
use kellycalc::models::HealthResponse;

/// Health check endpoint
pub async fn health_check(state: web::Data<Arc<AppState>>) -> impl Responder {
    let active_sessions = state.sessions.lock().map(|s| s.len()).unwrap_or(0);

    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        active_sessions,
    };

    HttpResponse::Ok().json(response)
}
