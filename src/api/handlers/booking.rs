use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreateBookingRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::booking::Booking;
use crate::domain::services::capacity;
use crate::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let class = state.class_repo.find_by_id(&payload.class_id).await?
        .ok_or(AppError::NotFound("Class not found".into()))?;

    if state.booking_repo.find_confirmed(&user_id, &class.id).await?.is_some() {
        return Err(AppError::Conflict("You already have an active booking for this class".into()));
    }

    // Friendly pre-check on a fresh count. The repository re-checks under its
    // own serializing guard, which stays authoritative for the last seat.
    let booked = state.booking_repo.count_confirmed(&class.id).await?;
    let occupancy = capacity::evaluate(class.capacity, booked);
    if occupancy.is_full() {
        warn!("Booking rejected, class {} is full ({}/{})", class.id, booked, class.capacity);
        return Err(AppError::CapacityExceeded);
    }

    let booking = Booking::new(user_id, class.id.clone());
    let created = state.booking_repo.create_confirmed(&booking).await?;

    info!("Booking confirmed: {} for class {}", created.id, class.id);
    Ok(Json(created))
}

pub async fn list_my_bookings(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let bookings = state.booking_repo.list_for_user(&user_id).await?;
    Ok(Json(bookings))
}

pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    // Not the caller's booking: indistinguishable from absent.
    if booking.user_id != user_id {
        return Err(AppError::NotFound("Booking not found".into()));
    }

    let cancelled = state.booking_repo.cancel(&booking.id).await?;

    info!("Booking cancelled: {}", cancelled.id);
    Ok(Json(cancelled))
}
