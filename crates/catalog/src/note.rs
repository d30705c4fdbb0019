//! Timestamped free-text notes attached to catalog records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use maisonops_core::EntityId;

/// One note entry on a record (products and manufacturers carry these).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: EntityId,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub fn new(author: impl Into<String>, body: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: EntityId::new(),
            author: author.into(),
            body: body.into(),
            created_at: now,
        }
    }
}
