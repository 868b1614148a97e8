use actix_web::{web, HttpResponse};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::AppState;
use kellycalc::core::dialogue::Session;
use kellycalc::error::AppError;
use kellycalc::models::{BeginResponse, SubmitRequest, SubmitResponse};

/// Start a new dialogue session
pub async fn begin_session(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, AppError> {
    let (session, reply) = Session::begin();
    let session_id = Uuid::new_v4();

    let mut sessions = state
        .sessions
        .lock()
        .map_err(|_| AppError::InternalError("session store lock poisoned".to_string()))?;
    sessions.insert(session_id, session);
    info!("session {} started ({} active)", session_id, sessions.len());

    Ok(HttpResponse::Ok().json(BeginResponse {
        session_id: session_id.to_string(),
        prompt: reply.text,
        step: reply.step,
    }))
}

/// Submit one answer to an active session
///
/// The session is removed from the store as soon as it delivers its result;
/// further messages under the same id get a 404.
pub async fn submit_message(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
    req: web::Json<SubmitRequest>,
) -> Result<HttpResponse, AppError> {
    let raw_id = path.into_inner();
    let session_id: Uuid = raw_id
        .parse()
        .map_err(|_| AppError::ValidationError(format!("not a session id: {}", raw_id)))?;

    let mut sessions = state
        .sessions
        .lock()
        .map_err(|_| AppError::InternalError("session store lock poisoned".to_string()))?;
    let session = sessions
        .get_mut(&session_id)
        .ok_or_else(|| AppError::SessionNotFound(session_id.to_string()))?;

    let reply = session.submit(&req.message);
    let completed = session.is_complete();

    if completed {
        sessions.remove(&session_id);
        info!("session {} completed", session_id);
    }

    Ok(HttpResponse::Ok().json(SubmitResponse {
        kind: reply.kind,
        text: reply.text,
        step: reply.step,
        completed,
    }))
}
