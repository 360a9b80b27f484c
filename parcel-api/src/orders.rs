use axum::{
    extract::State,
    routing::{get, patch, post},
    Router,
};
use parcel_order::{OrderDraft, TransitionRequest};
use parcel_shared::{Order, OrderId, OrderWithDetails, UserId};
use serde::Serialize;

use crate::error::AppError;
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct OrderResponse<T> {
    pub order: T,
}

#[derive(Debug, Serialize)]
pub struct OrderListResponse {
    pub orders: Vec<OrderWithDetails>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/orders", post(create_order))
        .route("/api/orders/pending", get(pending_orders))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/orders/{id}/status", patch(update_status))
        .route("/api/customers/{id}/orders", get(customer_orders))
        .route("/api/customers/{id}/orders/active", get(active_orders))
}

/// POST /api/orders
/// Price and store a booking
async fn create_order(
    State(state): State<AppState>,
    AppJson(draft): AppJson<OrderDraft>,
) -> Result<AppJson<OrderResponse<Order>>, AppError> {
    let order = state.orders.place_order(draft).await?;
    Ok(AppJson(OrderResponse { order }))
}

/// GET /api/orders/:id
/// Order joined with its customer and assigned partner
async fn get_order(
    State(state): State<AppState>,
    AppPath(id): AppPath<OrderId>,
) -> Result<AppJson<OrderResponse<OrderWithDetails>>, AppError> {
    let order = state.orders.get_order(id).await?;
    Ok(AppJson(OrderResponse { order }))
}

/// PATCH /api/orders/:id/status
async fn update_status(
    State(state): State<AppState>,
    AppPath(id): AppPath<OrderId>,
    AppJson(req): AppJson<TransitionRequest>,
) -> Result<AppJson<OrderResponse<Order>>, AppError> {
    let order = state.orders.transition(id, req).await?;
    Ok(AppJson(OrderResponse { order }))
}

async fn pending_orders(State(state): State<AppState>) -> Result<AppJson<OrderListResponse>, AppError> {
    let orders = state.orders.pending_orders().await?;
    Ok(AppJson(OrderListResponse { orders }))
}

async fn customer_orders(
    State(state): State<AppState>,
    AppPath(customer_id): AppPath<UserId>,
) -> Result<AppJson<OrderListResponse>, AppError> {
    let orders = state.orders.customer_orders(customer_id).await?;
    Ok(AppJson(OrderListResponse { orders }))
}

async fn active_orders(
    State(state): State<AppState>,
    AppPath(customer_id): AppPath<UserId>,
) -> Result<AppJson<OrderListResponse>, AppError> {
    let orders = state.orders.active_orders(customer_id).await?;
    Ok(AppJson(OrderListResponse { orders }))
}
