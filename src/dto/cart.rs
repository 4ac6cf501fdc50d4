use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{CartItem, Customization, LocalizedText};
use crate::pricing::CheckoutTotals;

/// Everything needed to add a product line except the quantity, which
/// defaults to 1 when omitted.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub id: String,
    pub name: LocalizedText,
    pub price: f64,
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub dietary_info: Vec<String>,
    #[serde(default)]
    pub customization: Option<Customization>,
    #[serde(default)]
    pub allergens: Option<Vec<String>>,
    #[serde(default)]
    pub quantity: Option<u32>,
}

impl AddToCartRequest {
    pub fn into_item(self) -> CartItem {
        CartItem {
            id: self.id,
            name: self.name,
            price: self.price,
            image: self.image,
            quantity: self.quantity.unwrap_or(1),
            category: self.category,
            dietary_info: self.dietary_info,
            customization: self.customization,
            allergens: self.allergens,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    /// Zero or negative removes the line entirely.
    pub quantity: i64,
}

/// Cart contents plus the derived figures the drawer and the checkout
/// summary render.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub total_items: u32,
    pub totals: CheckoutTotals,
}
