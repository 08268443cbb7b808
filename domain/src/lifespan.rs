//! Lifespan result returned to callers

use crate::entity::EntityId;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Birth and death instants of one person (Value Object)
///
/// `died` is `None` when the entity records no death date, which means the
/// person is presumed alive or the date is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifespanResult {
    /// Item the dates were read from
    pub entity_id: EntityId,
    /// Title of the encyclopedia page that linked to the item
    pub title: String,
    pub born: DateTime<Utc>,
    pub died: Option<DateTime<Utc>>,
}

impl LifespanResult {
    pub fn new(
        entity_id: EntityId,
        title: impl Into<String>,
        born: DateTime<Utc>,
        died: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            entity_id,
            title: title.into(),
            born,
            died,
        }
    }
}
