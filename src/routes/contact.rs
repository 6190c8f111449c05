use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Intake path for the contact form: validate, persist, notify.
/// The row stays persisted even when the notification send fails.
pub async fn submit(
    State(state): State<SharedState>,
    Json(req): Json<ContactRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let (name, email, message) = match (
        req.name.as_deref().filter(|s| !s.is_empty()),
        req.email.as_deref().filter(|s| !s.is_empty()),
        req.message.as_deref().filter(|s| !s.is_empty()),
    ) {
        (Some(name), Some(email), Some(message)) => (name, email, message),
        _ => {
            return Err(AppError::BadRequest("All fields are required".to_string()));
        }
    };

    let contact = db::contacts::create(&state.pool, name, email, message).await?;

    tracing::info!("New contact form entry saved: {}", contact.id);

    state
        .notifier
        .notify_contact(&contact)
        .await
        .map_err(AppError::Notification)?;

    tracing::info!("Notification email sent for contact {}", contact.id);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Message sent successfully and email delivered!",
            "data": contact,
        })),
    ))
}
