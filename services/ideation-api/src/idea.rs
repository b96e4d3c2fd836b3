//! The `idea` entity configuration
//!
//! Writable fields are `title` (at most 18 characters) and `body` (at most
//! 140 characters). The public view exposes `id`, `createdAt`, `modifiedAt`,
//! `title`, and `body` — nothing else leaves the store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use resterize::resource::{Clock, EntityConfig, FieldError};
use resterize::store::{Document, ID_FIELD};

/// Maximum length of an idea title, in characters
pub const TITLE_MAX: usize = 18;

/// Maximum length of an idea body, in characters
pub const BODY_MAX: usize = 140;

/// Write payload for creating or updating an idea
///
/// Both fields are optional; a field left out of the payload is simply not
/// written.
#[derive(Debug, Clone, Deserialize)]
pub struct IdeaDraft {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Public view of a stored idea
///
/// Fields absent from the stored record stay absent from the serialized
/// view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Entity configuration for ideas, parameterized by a clock
pub struct IdeaConfig {
    clock: Arc<dyn Clock>,
}

impl IdeaConfig {
    /// Create the configuration with the given time source
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

fn string_field(record: &Document, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn datetime_field(record: &Document, key: &str) -> Option<DateTime<Utc>> {
    record
        .get(key)
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

impl EntityConfig for IdeaConfig {
    type Input = IdeaDraft;
    type Public = Idea;

    fn name(&self) -> &'static str {
        "idea"
    }

    fn validate(&self, input: &IdeaDraft, _creating: bool) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if let Some(title) = &input.title {
            if title.chars().count() > TITLE_MAX {
                errors.push(FieldError::too_long("title", TITLE_MAX));
            }
        }

        if let Some(body) = &input.body {
            if body.chars().count() > BODY_MAX {
                errors.push(FieldError::too_long("body", BODY_MAX));
            }
        }

        errors
    }

    fn prepare(&self, input: IdeaDraft, creating: bool) -> Document {
        let now = self.clock.now();
        let mut fields = Document::new();

        if creating {
            fields.insert("createdAt".to_string(), serde_json::json!(now));
        }
        fields.insert("modifiedAt".to_string(), serde_json::json!(now));

        if let Some(title) = input.title {
            fields.insert("title".to_string(), Value::String(title));
        }
        if let Some(body) = input.body {
            fields.insert("body".to_string(), Value::String(body));
        }

        fields
    }

    fn publicize(&self, record: Document) -> Idea {
        Idea {
            id: string_field(&record, ID_FIELD),
            created_at: datetime_field(&record, "createdAt"),
            modified_at: datetime_field(&record, "modifiedAt"),
            title: string_field(&record, "title"),
            body: string_field(&record, "body"),
        }
    }
}
