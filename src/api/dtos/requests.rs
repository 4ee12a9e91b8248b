use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub avatar_url: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateAvatarRequest {
    pub avatar_url: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateClassRequest {
    pub name: String,
    pub description: String,
    pub instructor: String,
    pub capacity: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub class_id: String,
}

#[derive(Deserialize)]
pub struct ClassWindowQuery {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}
