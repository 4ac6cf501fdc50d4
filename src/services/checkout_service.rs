use crate::dto::checkout::{CheckoutRequest, CheckoutSessionResponse};
use crate::dto::orders::{OrderDetails, OrderLineItem};
use crate::error::{AppError, AppResult};
use crate::models::CartItem;
use crate::payments::SessionDetails;
use crate::pricing::CheckoutTotals;
use crate::response::{ApiResponse, Meta};
use crate::state::AppState;

/// Validates the form, derives the totals from the current cart, and creates
/// the hosted payment session. The cart is not cleared here: the shopper has
/// not paid yet, and on any failure the basket must stay intact for a retry.
pub async fn create_session(
    state: &AppState,
    payload: CheckoutRequest,
) -> AppResult<ApiResponse<CheckoutSessionResponse>> {
    let customer = payload.customer_info;
    if let Err(errors) = customer.validate() {
        return Err(AppError::Validation(errors));
    }

    let (items, totals): (Vec<CartItem>, CheckoutTotals) = {
        let cart = state.cart();
        if cart.items().is_empty() {
            return Err(AppError::BadRequest("Cart is empty".to_string()));
        }
        (
            cart.items().to_vec(),
            CheckoutTotals::from_subtotal(cart.total_price()),
        )
    };

    let session = state
        .payments
        .create_checkout_session(&items, &customer, &totals)
        .await?;

    tracing::info!(session_id = %session.id, total = totals.total, "checkout session created");

    Ok(ApiResponse::success(
        "Checkout session created",
        CheckoutSessionResponse {
            session_id: session.id,
            url: session.url,
        },
        Some(Meta::empty()),
    ))
}

/// Confirmation-page lookup. A successful lookup means the order was placed,
/// so the cart is cleared here; a missing or unknown session id degrades to
/// Not Found and the client falls back to its generic confirmation copy.
pub async fn lookup_session(
    state: &AppState,
    session_id: Option<String>,
) -> AppResult<ApiResponse<OrderDetails>> {
    let session_id = session_id
        .filter(|id| !id.is_empty())
        .ok_or(AppError::NotFound)?;

    let session = state.payments.fetch_session(&session_id).await?;
    let details = order_details_from_session(session);

    state.cart().clear();
    tracing::info!(order_id = %details.id, "order confirmed, cart cleared");

    Ok(ApiResponse::success("OK", details, Some(Meta::empty())))
}

fn order_details_from_session(session: SessionDetails) -> OrderDetails {
    let customer_email = session
        .metadata
        .get("customerEmail")
        .cloned()
        .or_else(|| session.customer_details.and_then(|c| c.email))
        .unwrap_or_default();
    let total_amount = session
        .metadata
        .get("totalAmount")
        .cloned()
        .or_else(|| {
            session
                .amount_total
                .map(|cents| format!("{:.2}", cents as f64 / 100.0))
        })
        .unwrap_or_default();

    let items = session
        .line_items
        .map(|line_items| {
            line_items
                .data
                .into_iter()
                .map(|line| OrderLineItem {
                    name: line.description.unwrap_or_default(),
                    quantity: line.quantity.unwrap_or(1),
                    amount: line.amount_total.unwrap_or(0) as f64 / 100.0,
                })
                .collect()
        })
        .unwrap_or_default();

    OrderDetails {
        id: session.id,
        customer_email,
        delivery_date: session
            .metadata
            .get("deliveryDate")
            .cloned()
            .unwrap_or_default(),
        delivery_time: session
            .metadata
            .get("deliveryTime")
            .cloned()
            .unwrap_or_default(),
        total_amount,
        status: session.payment_status.unwrap_or_else(|| "complete".into()),
        items,
    }
}
