//! Message composition: turns sampled words into reminder text.

use chrono::Utc;
use uuid::Uuid;

use vocab_common::types::{Reminder, VocabWord, WordCard};

/// Separator between headwords in the title.
const TITLE_SEPARATOR: &str = " - ";

/// Build a reminder from sampled words.
///
/// Title: headwords joined by `" - "`, upper-cased.
/// Body: `- {word} | {translation} | {usage or note}` per word.
pub fn compose_reminder(words: &[&VocabWord]) -> Reminder {
    let headwords: Vec<String> = words.iter().map(|w| w.word.clone()).collect();

    Reminder {
        id: Uuid::new_v4(),
        title: compose_title(words),
        body: compose_body(words),
        words: headwords,
        created_at: Utc::now(),
    }
}

pub fn compose_title(words: &[&VocabWord]) -> String {
    words
        .iter()
        .map(|w| w.word.as_str())
        .collect::<Vec<_>>()
        .join(TITLE_SEPARATOR)
        .to_uppercase()
}

pub fn compose_body(words: &[&VocabWord]) -> String {
    words
        .iter()
        .map(|w| {
            format!(
                "- {} | {} | {}\n",
                w.word,
                w.translation(),
                w.context_line()
            )
        })
        .collect()
}

/// `[word, gloss]` pairs for the flashcard listing.
pub fn word_cards(words: &[&VocabWord]) -> Vec<WordCard> {
    words
        .iter()
        .map(|w| WordCard(w.word.clone(), w.gloss().to_string()))
        .collect()
}
