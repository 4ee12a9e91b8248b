use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::models::class::Class;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub class_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(user_id: String, class_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            class_id,
            status: "CONFIRMED".to_string(),
            created_at: Utc::now(),
        }
    }
}

/// A ledger row joined with the class it reserves, as returned to the caller
/// from the booking history endpoint.
#[derive(Debug, Serialize, Clone)]
pub struct BookingWithClass {
    #[serde(flatten)]
    pub booking: Booking,
    pub class: Class,
}
