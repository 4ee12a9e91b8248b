use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::UpdateAvatarRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::auth::UserProfile;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn get_me(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_repo.find_by_id(&user_id).await?
        .ok_or(AppError::Unauthorized)?;

    Ok(Json(UserProfile {
        id: user.id,
        username: user.username,
        avatar_url: user.avatar_url,
    }))
}

// The avatar is the one mutable field on a user.
pub async fn update_avatar(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpdateAvatarRequest>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.user_repo.update_avatar(&user_id, payload.avatar_url).await?;

    info!("Avatar updated for user: {}", updated.id);

    Ok(Json(UserProfile {
        id: updated.id,
        username: updated.username,
        avatar_url: updated.avatar_url,
    }))
}
