//! HTTP surface of the vocabulary reminder service.
//!
//! - `GET|POST /send`: sample unknown words and deliver a reminder
//! - `GET /words`: sample unknown words as `[word, gloss]` flashcards
//! - `GET /health`: liveness probe

pub mod routes;
pub mod state;
