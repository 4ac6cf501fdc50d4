use axum::{Json, Router, extract::State, routing::post};

use crate::dto::cake::{CakeQuoteResponse, DesignAddedResponse};
use crate::error::AppResult;
use crate::models::CakeDesign;
use crate::response::ApiResponse;
use crate::services::cake_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", post(quote_design))
        .route("/add-to-cart", post(add_design_to_cart))
}

#[utoipa::path(
    post,
    path = "/api/cake/quote",
    request_body = CakeDesign,
    responses(
        (status = 200, description = "Price breakdown for the design", body = ApiResponse<CakeQuoteResponse>),
    ),
    tag = "Custom Cakes"
)]
pub async fn quote_design(
    Json(design): Json<CakeDesign>,
) -> AppResult<Json<ApiResponse<CakeQuoteResponse>>> {
    Ok(Json(cake_service::quote(&design)?))
}

#[utoipa::path(
    post,
    path = "/api/cake/add-to-cart",
    request_body = CakeDesign,
    responses(
        (status = 200, description = "Design committed as a single cart line", body = ApiResponse<DesignAddedResponse>),
    ),
    tag = "Custom Cakes"
)]
pub async fn add_design_to_cart(
    State(state): State<AppState>,
    Json(design): Json<CakeDesign>,
) -> AppResult<Json<ApiResponse<DesignAddedResponse>>> {
    Ok(Json(cake_service::add_design_to_cart(&state, design)?))
}
