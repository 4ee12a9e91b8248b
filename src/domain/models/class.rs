use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A scheduled fitness class. Immutable after creation: no reschedule flow,
/// capacity changes only through re-creation.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Class {
    pub id: String,
    pub name: String,
    pub description: String,
    pub instructor: String,
    pub capacity: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
