use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A vocabulary document as stored by the word editor.
///
/// Text fields are optional: older documents omit them or store `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabWord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub word: String,

    /// Translation into the learner's language
    #[serde(rename = "wordtr", default)]
    pub word_tr: Option<String>,

    /// Example sentence
    #[serde(default)]
    pub usage: Option<String>,

    #[serde(default)]
    pub note: Option<String>,

    #[serde(default)]
    pub definition: Option<String>,

    /// How many times the learner marked the word as unknown
    #[serde(rename = "unknowncount", default, deserialize_with = "numeric_count")]
    pub unknown_count: i64,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts any numeric BSON type, `null` counts as zero.
///
/// Fractions round up so `count > 0` agrees with the store's `$gt: 0` filter.
fn numeric_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct CountVisitor;

    impl<'de> Visitor<'de> for CountVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a number or null")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            Ok(i64::try_from(v).unwrap_or(i64::MAX))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            Ok(v.ceil() as i64)
        }

        fn visit_unit<E: de::Error>(self) -> Result<i64, E> {
            Ok(0)
        }

        fn visit_none<E: de::Error>(self) -> Result<i64, E> {
            Ok(0)
        }
    }

    deserializer.deserialize_any(CountVisitor)
}

impl VocabWord {
    /// Usage example, falling back to the note.
    pub fn context_line(&self) -> &str {
        non_empty(&self.usage)
            .or_else(|| non_empty(&self.note))
            .unwrap_or_default()
    }

    /// Definition, falling back to the translation.
    pub fn gloss(&self) -> &str {
        non_empty(&self.definition)
            .or_else(|| non_empty(&self.word_tr))
            .unwrap_or_default()
    }

    pub fn translation(&self) -> &str {
        self.word_tr.as_deref().unwrap_or_default()
    }

    pub fn is_unknown(&self) -> bool {
        self.unknown_count > 0
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// A formatted reminder ready for delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: Uuid,
    /// Subject line / notification title (e.g., "APPLE - BANANA - CHERRY")
    pub title: String,
    /// One line per sampled word
    pub body: String,
    /// Sampled headwords, in order
    pub words: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A `[word, gloss]` pair, serialized as a two-element JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCard(pub String, pub String);

/// Outbound channel used to deliver reminders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryChannel {
    Email,
    Push,
}

impl std::fmt::Display for DeliveryChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryChannel::Email => write!(f, "email"),
            DeliveryChannel::Push => write!(f, "push"),
        }
    }
}

impl FromStr for DeliveryChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" | "mail" | "smtp" => Ok(DeliveryChannel::Email),
            "push" | "fcm" => Ok(DeliveryChannel::Push),
            other => Err(format!("unknown delivery channel '{}'", other)),
        }
    }
}
