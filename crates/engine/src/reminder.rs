//! Reminder pipeline.
//!
//! 1. Load every unknown word from the store
//! 2. Sample a handful at random (via `sampler`)
//! 3. Format them into a `Reminder` or a flashcard list (via `composer`)

use std::sync::Arc;

use rand::Rng;

use vocab_common::error::AppError;
use vocab_common::types::{Reminder, VocabWord, WordCard};

use crate::composer;
use crate::sampler;
use crate::store::WordStore;

/// Default number of words in a reminder.
pub const DEFAULT_REMINDER_WORD_COUNT: usize = 3;

/// Default number of words in a flashcard listing.
pub const DEFAULT_WORD_LIST_SIZE: usize = 20;

/// Builds reminders and word lists from the word store.
#[derive(Clone)]
pub struct ReminderService {
    store: Arc<dyn WordStore>,
    reminder_word_count: usize,
    word_list_size: usize,
}

impl ReminderService {
    pub fn new(store: Arc<dyn WordStore>) -> Self {
        Self {
            store,
            reminder_word_count: DEFAULT_REMINDER_WORD_COUNT,
            word_list_size: DEFAULT_WORD_LIST_SIZE,
        }
    }

    pub fn with_reminder_word_count(mut self, count: usize) -> Self {
        self.reminder_word_count = count;
        self
    }

    pub fn with_word_list_size(mut self, size: usize) -> Self {
        self.word_list_size = size;
        self
    }

    /// Sample unknown words and format them into a reminder.
    pub async fn build_reminder(&self) -> Result<Reminder, AppError> {
        let words = self.load_candidates().await?;
        let reminder = Self::reminder_from(&words, self.reminder_word_count, &mut rand::rng());

        tracing::info!(
            reminder_id = %reminder.id,
            title = %reminder.title,
            candidates = words.len(),
            "Reminder composed"
        );

        Ok(reminder)
    }

    /// Sample unknown words as `[word, gloss]` cards.
    pub async fn word_list(&self) -> Result<Vec<WordCard>, AppError> {
        let words = self.load_candidates().await?;
        let cards = Self::cards_from(&words, self.word_list_size, &mut rand::rng());

        tracing::debug!(count = cards.len(), "Word list sampled");
        Ok(cards)
    }

    pub fn reminder_from<R: Rng + ?Sized>(
        words: &[VocabWord],
        count: usize,
        rng: &mut R,
    ) -> Reminder {
        let picked = sampler::sample(words, count, rng);
        composer::compose_reminder(&picked)
    }

    pub fn cards_from<R: Rng + ?Sized>(
        words: &[VocabWord],
        count: usize,
        rng: &mut R,
    ) -> Vec<WordCard> {
        let picked = sampler::sample(words, count, rng);
        composer::word_cards(&picked)
    }

    async fn load_candidates(&self) -> Result<Vec<VocabWord>, AppError> {
        let words = self.store.unknown_words().await?;
        if words.is_empty() {
            return Err(AppError::NotFound(
                "No words marked unknown in the vocabulary store".to_string(),
            ));
        }
        Ok(words)
    }
}
