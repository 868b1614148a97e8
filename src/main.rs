use actix_web::{middleware, web, App, HttpServer};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use uuid::Uuid;

mod handlers;

use handlers::{health, session};
use kellycalc::core::dialogue::Session;

/// Application state shared across handlers
pub struct AppState {
    pub sessions: Mutex<HashMap<Uuid, Session>>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("{}:{}", host, port);

    let app_state = Arc::new(AppState {
        sessions: Mutex::new(HashMap::new()),
    });

    info!("Starting Kellycalc API server at http://{}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .route("/health", web::get().to(health::health_check))
            .route("/sessions", web::post().to(session::begin_session))
            .route(
                "/sessions/{id}/message",
                web::post().to(session::submit_message),
            )
    })
    .bind(&addr)?
    .run()
    .await
}
