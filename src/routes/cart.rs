use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch},
};

use crate::dto::cart::{AddToCartRequest, CartView, UpdateQuantityRequest};
use crate::error::AppResult;
use crate::response::ApiResponse;
use crate::services::cart_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cart).post(add_to_cart).delete(clear_cart))
        .route("/{id}", patch(update_quantity).delete(remove_from_cart))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Current cart with derived totals", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn list_cart(State(state): State<AppState>) -> AppResult<Json<ApiResponse<CartView>>> {
    Ok(Json(cart_service::list_cart(&state)?))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Item added or merged into an existing line", body = ApiResponse<CartView>),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    Ok(Json(cart_service::add_to_cart(&state, payload)?))
}

#[utoipa::path(
    patch,
    path = "/api/cart/{id}",
    params(
        ("id" = String, Path, description = "Cart line ID")
    ),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Quantity set; zero or negative removes the line", body = ApiResponse<CartView>),
    ),
    tag = "Cart"
)]
pub async fn update_quantity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateQuantityRequest>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    Ok(Json(cart_service::update_quantity(&state, &id, payload)?))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{id}",
    params(
        ("id" = String, Path, description = "Cart line ID")
    ),
    responses(
        (status = 200, description = "Line removed; unknown ids are a no-op", body = ApiResponse<CartView>),
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    Ok(Json(cart_service::remove_from_cart(&state, &id)?))
}

#[utoipa::path(
    delete,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart emptied", body = ApiResponse<CartView>),
    ),
    tag = "Cart"
)]
pub async fn clear_cart(State(state): State<AppState>) -> AppResult<Json<ApiResponse<CartView>>> {
    Ok(Json(cart_service::clear_cart(&state)?))
}
