use crate::dto::cart::{AddToCartRequest, CartView, UpdateQuantityRequest};
use crate::error::AppResult;
use crate::pricing::CheckoutTotals;
use crate::response::ApiResponse;
use crate::state::AppState;

pub fn cart_view(state: &AppState) -> CartView {
    let cart = state.cart();
    CartView {
        items: cart.items().to_vec(),
        total_items: cart.total_items(),
        totals: CheckoutTotals::from_subtotal(cart.total_price()),
    }
}

pub fn list_cart(state: &AppState) -> AppResult<ApiResponse<CartView>> {
    Ok(ApiResponse::success("OK", cart_view(state), None))
}

pub fn add_to_cart(
    state: &AppState,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartView>> {
    let item = payload.into_item();
    tracing::debug!(id = %item.id, quantity = item.quantity, "adding to cart");
    state.cart().add_item(item);
    Ok(ApiResponse::success("Added to cart", cart_view(state), None))
}

pub fn update_quantity(
    state: &AppState,
    id: &str,
    payload: UpdateQuantityRequest,
) -> AppResult<ApiResponse<CartView>> {
    state.cart().update_quantity(id, payload.quantity);
    Ok(ApiResponse::success("Cart updated", cart_view(state), None))
}

pub fn remove_from_cart(state: &AppState, id: &str) -> AppResult<ApiResponse<CartView>> {
    state.cart().remove_item(id);
    Ok(ApiResponse::success(
        "Removed from cart",
        cart_view(state),
        None,
    ))
}

pub fn clear_cart(state: &AppState) -> AppResult<ApiResponse<CartView>> {
    state.cart().clear();
    Ok(ApiResponse::success("Cart cleared", cart_view(state), None))
}
