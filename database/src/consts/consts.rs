use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DatabaseError;

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
/// Identifier of a stored document. Assigned by the store on create and never reused.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> EntityId {
        EntityId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Checks the identifier format only, a well formed id may still not exist in the store
impl TryFrom<&str> for EntityId {
    type Error = DatabaseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Uuid::try_parse(value)
            .map(EntityId)
            .map_err(|_| DatabaseError::MalformedIdentifier(value.to_string()))
    }
}
