use serde::Serialize;
use utoipa::ToSchema;

pub const FREE_SHIPPING_THRESHOLD: f64 = 50.0;
pub const SHIPPING_COST: f64 = 8.99;
pub const TAX_RATE: f64 = 0.08;

pub const CAKE_BASE_PRICE: f64 = 35.0;
pub const CAKE_LAYER_PRICE: f64 = 15.0;
pub const CAKE_DECORATION_PRICE: f64 = 8.0;
pub const CAKE_MESSAGE_PRICE: f64 = 10.0;

/// Amounts shown at checkout and handed to the payment session. Derived on
/// every call from the cart subtotal alone; never stored. Values stay
/// unrounded f64 here, cents conversion happens where money leaves the
/// process.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct CheckoutTotals {
    pub subtotal: f64,
    pub shipping: f64,
    pub tax: f64,
    pub total: f64,
}

impl CheckoutTotals {
    pub fn from_subtotal(subtotal: f64) -> Self {
        let shipping = if subtotal >= FREE_SHIPPING_THRESHOLD {
            0.0
        } else {
            SHIPPING_COST
        };
        // Flat rate on the subtotal only; shipping is not taxed.
        let tax = subtotal * TAX_RATE;
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

/// Whole-currency amount to the smallest unit, rounding half away like the
/// payment provider expects.
pub fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Price breakdown for an in-progress custom cake design.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct CakeQuote {
    pub base: f64,
    pub layers: f64,
    pub decorations: f64,
    pub message: f64,
    pub total: f64,
}

/// Base price plus per-layer and per-decoration charges, plus a flat
/// surcharge when a personal message is present. No bounds are placed on the
/// counts; a zero-layer design prices as just the base.
pub fn quote_cake(
    layer_count: usize,
    decoration_count: usize,
    personal_message: Option<&str>,
) -> CakeQuote {
    let layers = layer_count as f64 * CAKE_LAYER_PRICE;
    let decorations = decoration_count as f64 * CAKE_DECORATION_PRICE;
    let message = match personal_message {
        Some(text) if !text.is_empty() => CAKE_MESSAGE_PRICE,
        _ => 0.0,
    };
    let total = CAKE_BASE_PRICE + layers + decorations + message;
    CakeQuote {
        base: CAKE_BASE_PRICE,
        layers,
        decorations,
        message,
        total,
    }
}
