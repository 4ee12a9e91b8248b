use crate::domain::models::{
    auth::RefreshTokenRecord,
    booking::{Booking, BookingWithClass},
    class::Class,
    user::User,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn update_avatar(&self, id: &str, avatar_url: Option<String>) -> Result<User, AppError>;
}

#[async_trait]
pub trait ClassRepository: Send + Sync {
    async fn create(&self, class: &Class) -> Result<Class, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Class>, AppError>;
    /// Classes whose start_time falls within [start, end] inclusive,
    /// ascending by start_time.
    async fn list_in_window(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<Class>, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts a CONFIRMED booking, re-checking the class capacity inside a
    /// per-class serializing guard. Returns `CapacityExceeded` when the class
    /// filled up between the caller's check and the insert. A plain
    /// count-then-insert is not safe under concurrent requests; this is the
    /// authoritative enforcement point.
    async fn create_confirmed(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    async fn find_confirmed(&self, user_id: &str, class_id: &str) -> Result<Option<Booking>, AppError>;
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<BookingWithClass>, AppError>;
    async fn count_confirmed(&self, class_id: &str) -> Result<i64, AppError>;
    /// Transitions a CONFIRMED booking to CANCELLED. Status flip only; the
    /// row is kept for history.
    async fn cancel(&self, id: &str) -> Result<Booking, AppError>;
}

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn create_refresh_token(&self, record: &RefreshTokenRecord) -> Result<(), AppError>;
    async fn find_refresh_token(&self, token_hash: &str) -> Result<Option<RefreshTokenRecord>, AppError>;
    async fn delete_refresh_token(&self, token_hash: &str) -> Result<(), AppError>;
    async fn delete_refresh_family(&self, family_id: Uuid) -> Result<(), AppError>;
}
