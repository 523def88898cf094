//! User entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity as persisted in the store.
///
/// The id is store-assigned; an id of 0 marks a not-yet-persisted entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i64,

    /// Display name, required to be non-empty.
    pub name: String,

    /// Contact email address.
    pub email: String,

    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new unpersisted user with both timestamps set to now.
    #[must_use]
    pub fn new(name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the entity as updated now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
