use serde::Serialize;
use utoipa::ToSchema;

/// What the confirmation page shows for a completed checkout session.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub id: String,
    pub customer_email: String,
    pub delivery_date: String,
    pub delivery_time: String,
    /// Already formatted for display, e.g. "57.59".
    pub total_amount: String,
    pub status: String,
    pub items: Vec<OrderLineItem>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    pub name: String,
    pub quantity: u32,
    pub amount: f64,
}
