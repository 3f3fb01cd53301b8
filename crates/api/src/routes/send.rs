//! Reminder trigger route, hit by an external scheduler.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use uuid::Uuid;

use vocab_common::error::AppError;
use vocab_common::types::DeliveryChannel;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/send", get(send_reminder).post(send_reminder))
}

/// Response for a delivered reminder.
#[derive(Debug, Serialize)]
pub struct SendResponse {
    pub id: Uuid,
    pub channel: DeliveryChannel,
    pub title: String,
    pub words: Vec<String>,
}

/// GET|POST /send: Sample unknown words and deliver them as one reminder.
async fn send_reminder(State(state): State<AppState>) -> Result<Json<SendResponse>, AppError> {
    let reminder = state.reminders.build_reminder().await?;

    state.notifier.send(&reminder).await.map_err(|e| {
        AppError::Delivery(format!("{} channel: {}", state.notifier.name(), e))
    })?;

    tracing::info!(
        reminder_id = %reminder.id,
        channel = %state.channel,
        words = reminder.words.len(),
        "Reminder delivered"
    );

    Ok(Json(SendResponse {
        id: reminder.id,
        channel: state.channel,
        title: reminder.title,
        words: reminder.words,
    }))
}
