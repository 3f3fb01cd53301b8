//! Word store: read access to the vocabulary collection.
//!
//! The service never writes words; an external editor maintains them. The
//! only query is "every word the learner has marked unknown at least once".

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::{Collection, Database};

use vocab_common::error::AppError;
use vocab_common::types::VocabWord;

/// Source of candidate words for reminders.
#[async_trait]
pub trait WordStore: Send + Sync {
    /// All words with `unknowncount > 0`.
    async fn unknown_words(&self) -> Result<Vec<VocabWord>, AppError>;
}

/// Filter matching words marked unknown at least once.
pub fn unknown_words_filter() -> Document {
    doc! { "unknowncount": { "$gt": 0 } }
}

/// MongoDB-backed word store.
#[derive(Clone)]
pub struct MongoWordStore {
    collection: Collection<VocabWord>,
}

impl MongoWordStore {
    pub fn new(database: &Database, collection_name: &str) -> Self {
        Self {
            collection: database.collection(collection_name),
        }
    }
}

#[async_trait]
impl WordStore for MongoWordStore {
    async fn unknown_words(&self) -> Result<Vec<VocabWord>, AppError> {
        let cursor = self.collection.find(unknown_words_filter()).await?;
        let words: Vec<VocabWord> = cursor.try_collect().await?;

        tracing::debug!(
            collection = %self.collection.name(),
            count = words.len(),
            "Loaded unknown words"
        );

        Ok(words)
    }
}

/// In-memory word store over a fixed list.
#[derive(Debug, Clone, Default)]
pub struct StaticWordStore {
    words: Vec<VocabWord>,
}

impl StaticWordStore {
    pub fn new(words: Vec<VocabWord>) -> Self {
        Self { words }
    }
}

#[async_trait]
impl WordStore for StaticWordStore {
    async fn unknown_words(&self) -> Result<Vec<VocabWord>, AppError> {
        Ok(self
            .words
            .iter()
            .filter(|w| w.is_unknown())
            .cloned()
            .collect())
    }
}
