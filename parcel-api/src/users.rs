use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use parcel_order::{LoginRequest, UserStats};
use parcel_shared::{NewUser, User, UserId, UserUpdate};
use serde::Serialize;

use crate::error::AppError;
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: UserStats,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/users/register", post(register))
        .route("/api/users/login", post(login))
        .route("/api/users/{id}", get(get_user).patch(update_user))
        .route("/api/users/{id}/stats", get(user_stats))
}

/// POST /api/users/register
async fn register(
    State(state): State<AppState>,
    AppJson(new_user): AppJson<NewUser>,
) -> Result<AppJson<UserResponse>, AppError> {
    let user = state.accounts.register(new_user).await?;
    Ok(AppJson(UserResponse { user }))
}

/// POST /api/users/login
async fn login(
    State(state): State<AppState>,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<AppJson<UserResponse>, AppError> {
    let user = state.accounts.login(&req.username, &req.password).await?;
    Ok(AppJson(UserResponse { user }))
}

async fn get_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<UserId>,
) -> Result<AppJson<UserResponse>, AppError> {
    let user = state.accounts.get(id).await?;
    Ok(AppJson(UserResponse { user }))
}

async fn update_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<UserId>,
    AppJson(update): AppJson<UserUpdate>,
) -> Result<AppJson<UserResponse>, AppError> {
    let user = state.accounts.update(id, update).await?;
    Ok(AppJson(UserResponse { user }))
}

async fn user_stats(
    State(state): State<AppState>,
    AppPath(id): AppPath<UserId>,
) -> Result<AppJson<StatsResponse>, AppError> {
    let stats = state.stats.user_stats(id).await?;
    Ok(AppJson(StatsResponse { stats }))
}
