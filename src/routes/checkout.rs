use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};

use crate::dto::checkout::{CheckoutRequest, CheckoutSessionResponse};
use crate::dto::orders::OrderDetails;
use crate::error::AppResult;
use crate::response::ApiResponse;
use crate::routes::params::SessionQuery;
use crate::services::checkout_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_session))
        .route("/session", get(lookup_session))
}

#[utoipa::path(
    post,
    path = "/api/checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Payment session created", body = ApiResponse<CheckoutSessionResponse>),
        (status = 400, description = "Missing required fields or empty cart"),
        (status = 502, description = "Payment provider rejected the session"),
    ),
    tag = "Checkout"
)]
pub async fn create_session(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<ApiResponse<CheckoutSessionResponse>>> {
    Ok(Json(checkout_service::create_session(&state, payload).await?))
}

#[utoipa::path(
    get,
    path = "/api/checkout/session",
    params(
        ("session_id" = Option<String>, Query, description = "Payment session ID from the success redirect")
    ),
    responses(
        (status = 200, description = "Order details for the confirmation page", body = ApiResponse<OrderDetails>),
        (status = 404, description = "Unknown or missing session id"),
    ),
    tag = "Checkout"
)]
pub async fn lookup_session(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
) -> AppResult<Json<ApiResponse<OrderDetails>>> {
    Ok(Json(
        checkout_service::lookup_session(&state, query.session_id).await?,
    ))
}
