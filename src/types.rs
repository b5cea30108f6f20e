/// Shared types used across the codebase

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::autofill::FillField;

/// Wall-clock instant written into create/update time fields
pub type Timestamp = DateTime<Utc>;

/// Operation marker attached to a mapper operation at definition time.
/// Decides which audit fields the engine fills before the operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    Create,  // create_time, update_time, create_user, update_user
    Modify,  // update_time, update_user
}

impl OperationType {
    /// Audit fields the entity must support for this kind of operation
    pub fn required_fields(self) -> &'static [FillField] {
        match self {
            OperationType::Create => &[
                FillField::CreateTime,
                FillField::UpdateTime,
                FillField::CreateUser,
                FillField::UpdateUser,
            ],
            OperationType::Modify => &[FillField::UpdateTime, FillField::UpdateUser],
        }
    }
}

/// Identity of the actor responsible for a mutation (an employee id in the admin API).
/// An absent actor is represented as `None` wherever an `ActorId` is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub i64);

impl From<i64> for ActorId {
    fn from(id: i64) -> Self {
        ActorId(id)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
