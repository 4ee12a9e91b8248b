use crate::domain::models::{booking::{Booking, BookingWithClass}, class::Class};
use crate::domain::ports::BookingRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create_confirmed(&self, booking: &Booking) -> Result<Booking, AppError> {
        // Single conditional statement: SQLite serializes writers, so the
        // count subquery and the insert cannot interleave with another
        // booking for the same class. Zero rows back means the seat is gone.
        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, user_id, class_id, status, created_at)
             SELECT ?1, ?2, ?3, ?4, ?5
             WHERE (SELECT COUNT(*) FROM bookings WHERE class_id = ?3 AND status = 'CONFIRMED')
                 < (SELECT capacity FROM classes WHERE id = ?3)
             RETURNING *"
        )
            .bind(&booking.id)
            .bind(&booking.user_id)
            .bind(&booking.class_id)
            .bind(&booking.status)
            .bind(booking.created_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        created.ok_or(AppError::CapacityExceeded)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_confirmed(&self, user_id: &str, class_id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = ? AND class_id = ? AND status = 'CONFIRMED'"
        )
            .bind(user_id)
            .bind(class_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<BookingWithClass>, AppError> {
        let rows = sqlx::query(
            "SELECT b.id, b.user_id, b.class_id, b.status, b.created_at,
                    c.id AS c_id, c.name AS c_name, c.description AS c_description,
                    c.instructor AS c_instructor, c.capacity AS c_capacity,
                    c.start_time AS c_start_time, c.end_time AS c_end_time,
                    c.created_at AS c_created_at
             FROM bookings b
             JOIN classes c ON c.id = b.class_id
             WHERE b.user_id = ?
             ORDER BY c.start_time ASC"
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let joined = rows.into_iter().map(|row| BookingWithClass {
            booking: Booking {
                id: row.get("id"),
                user_id: row.get("user_id"),
                class_id: row.get("class_id"),
                status: row.get("status"),
                created_at: row.get("created_at"),
            },
            class: Class {
                id: row.get("c_id"),
                name: row.get("c_name"),
                description: row.get("c_description"),
                instructor: row.get("c_instructor"),
                capacity: row.get("c_capacity"),
                start_time: row.get("c_start_time"),
                end_time: row.get("c_end_time"),
                created_at: row.get("c_created_at"),
            },
        }).collect();

        Ok(joined)
    }

    async fn count_confirmed(&self, class_id: &str) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM bookings WHERE class_id = ? AND status = 'CONFIRMED'")
            .bind(class_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(row.get::<i64, _>("count"))
    }

    async fn cancel(&self, id: &str) -> Result<Booking, AppError> {
        let cancelled = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = 'CANCELLED' WHERE id = ? AND status = 'CONFIRMED' RETURNING *"
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        cancelled.ok_or_else(|| AppError::Conflict("Booking is already cancelled".into()))
    }
}
