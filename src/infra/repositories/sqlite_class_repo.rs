use crate::domain::{models::class::Class, ports::ClassRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

pub struct SqliteClassRepo {
    pool: SqlitePool,
}

impl SqliteClassRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClassRepository for SqliteClassRepo {
    async fn create(&self, class: &Class) -> Result<Class, AppError> {
        sqlx::query_as::<_, Class>(
            "INSERT INTO classes (id, name, description, instructor, capacity, start_time, end_time, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&class.id)
            .bind(&class.name)
            .bind(&class.description)
            .bind(&class.instructor)
            .bind(class.capacity)
            .bind(class.start_time)
            .bind(class.end_time)
            .bind(class.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Class>, AppError> {
        sqlx::query_as::<_, Class>("SELECT * FROM classes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_in_window(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<Class>, AppError> {
        sqlx::query_as::<_, Class>(
            "SELECT * FROM classes WHERE start_time >= ? AND start_time <= ? ORDER BY start_time ASC"
        )
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
