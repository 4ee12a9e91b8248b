use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{ClassWindowQuery, CreateClassRequest},
    responses::ClassWithOccupancy,
};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::class::Class;
use crate::domain::services::{capacity, schedule};
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use uuid::Uuid;
use tracing::info;

pub async fn create_class(
    State(state): State<Arc<AppState>>,
    AuthUser(_user_id): AuthUser,
    Json(payload): Json<CreateClassRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Class name must not be empty".into()));
    }
    if payload.capacity < 1 {
        return Err(AppError::Validation("Capacity must be at least 1".into()));
    }
    if payload.end_time <= payload.start_time {
        return Err(AppError::Validation("End time must be after start time".into()));
    }

    let class = Class {
        id: Uuid::new_v4().to_string(),
        name: payload.name,
        description: payload.description,
        instructor: payload.instructor,
        capacity: payload.capacity,
        start_time: payload.start_time,
        end_time: payload.end_time,
        created_at: Utc::now(),
    };

    let created = state.class_repo.create(&class).await?;

    info!("Class created: {} ({})", created.name, created.id);
    Ok(Json(created))
}

/// Classes whose start falls inside the requested window, defaulting to the
/// current week, each with occupancy derived from a fresh confirmed count.
pub async fn list_classes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ClassWindowQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (default_start, default_end) = schedule::week_bounds(Utc::now());
    let start = query.start.unwrap_or(default_start);
    let end = query.end.unwrap_or(default_end);

    if end < start {
        return Err(AppError::Validation("Window end must not be before start".into()));
    }

    let classes = state.class_repo.list_in_window(start, end).await?;

    let mut result = Vec::with_capacity(classes.len());
    for class in classes {
        let booked = state.booking_repo.count_confirmed(&class.id).await?;
        let occupancy = capacity::evaluate(class.capacity, booked);
        result.push(ClassWithOccupancy { class, occupancy });
    }

    Ok(Json(result))
}

pub async fn get_class(
    State(state): State<Arc<AppState>>,
    Path(class_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let class = state.class_repo.find_by_id(&class_id).await?
        .ok_or(AppError::NotFound("Class not found".into()))?;

    let booked = state.booking_repo.count_confirmed(&class.id).await?;
    let occupancy = capacity::evaluate(class.capacity, booked);

    Ok(Json(ClassWithOccupancy { class, occupancy }))
}
