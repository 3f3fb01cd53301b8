//! Integration tests for the MongoDB word store.
//!
//! Requires a running MongoDB with `DB_URI` env var set.
//! Run with:
//!
//! ```bash
//! DB_URI="mongodb://localhost:27017" \
//!   cargo test -p vocab-engine --test integration -- --ignored --nocapture
//! ```

use std::sync::Arc;

use mongodb::Database;
use mongodb::bson::{Document, doc};

use vocab_common::db::connect;
use vocab_engine::reminder::ReminderService;
use vocab_engine::store::{MongoWordStore, WordStore};

// ============================================================
// Shared helpers
// ============================================================

/// Connect and seed a fresh collection, returning its name.
async fn setup(documents: Vec<Document>) -> (Database, String) {
    let uri = std::env::var("DB_URI").expect("DB_URI must be set for integration tests");
    let database = connect(&uri, "vocab_reminder_test").await.unwrap();

    let collection_name = format!("vocab_{}", uuid::Uuid::new_v4().simple());
    let collection = database.collection::<Document>(&collection_name);
    if !documents.is_empty() {
        collection.insert_many(documents).await.unwrap();
    }

    (database, collection_name)
}

async fn teardown(database: &Database, collection_name: &str) {
    database
        .collection::<Document>(collection_name)
        .drop()
        .await
        .unwrap();
}

// ============================================================
// MongoWordStore
// ============================================================

#[tokio::test]
#[ignore]
async fn test_unknown_words_filters_by_count() {
    let (database, name) = setup(vec![
        doc! { "word": "known", "wordtr": "bilinen", "unknowncount": 0 },
        doc! { "word": "shaky", "wordtr": "titrek", "unknowncount": 1 },
        doc! { "word": "lost", "usage": "I lost it", "unknowncount": 4_i64 },
        doc! { "word": "legacy" },
        doc! { "word": "shell", "unknowncount": 3.0 },
        doc! { "word": null, "unknowncount": 1 },
    ])
    .await;

    let store = MongoWordStore::new(&database, &name);
    let mut words: Vec<String> = store
        .unknown_words()
        .await
        .unwrap()
        .into_iter()
        .map(|w| w.word)
        .collect();
    words.sort();

    assert_eq!(words, vec!["", "lost", "shaky", "shell"]);
    teardown(&database, &name).await;
}

#[tokio::test]
#[ignore]
async fn test_reminder_from_mongo() {
    let (database, name) = setup(vec![
        doc! { "word": "alpha", "wordtr": "a", "note": "first", "unknowncount": 1 },
        doc! { "word": "beta", "wordtr": "b", "note": "second", "unknowncount": 2 },
    ])
    .await;

    let service = ReminderService::new(Arc::new(MongoWordStore::new(&database, &name)));
    let reminder = service.build_reminder().await.unwrap();

    assert_eq!(reminder.words.len(), 2);
    assert!(reminder.title.contains("ALPHA"));
    assert!(reminder.body.contains("- beta | b | second"));
    teardown(&database, &name).await;
}
