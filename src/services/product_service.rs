use crate::dto::products::ProductList;
use crate::error::{AppError, AppResult};
use crate::models::Product;
use crate::response::{ApiResponse, Meta};
use crate::routes::params::ProductQuery;
use crate::state::AppState;

pub fn list_products(state: &AppState, query: ProductQuery) -> AppResult<ApiResponse<ProductList>> {
    let (page, per_page, _) = query.pagination.normalize();
    let (items, total) = state.catalog.search(&query);
    let meta = Meta::new(page, per_page, total);
    Ok(ApiResponse::success(
        "Products",
        ProductList { items },
        Some(meta),
    ))
}

pub fn get_product(state: &AppState, id: &str) -> AppResult<ApiResponse<Product>> {
    let product = state.catalog.get(id).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Product", product, None))
}
