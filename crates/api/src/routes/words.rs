//! Flashcard listing route, consumed by a browser front-end.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use vocab_common::error::AppError;
use vocab_common::types::WordCard;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/words", get(list_words))
}

/// GET /words: Random `[word, gloss]` pairs drawn from the unknown words.
///
/// Answers `201 Created`, which existing front-ends check for.
async fn list_words(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<WordCard>>), AppError> {
    let cards = state.reminders.word_list().await?;
    Ok((StatusCode::CREATED, Json(cards)))
}
