use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::cart::CartView;
use crate::models::CartItem;
use crate::pricing::CakeQuote;

#[derive(Debug, Serialize, ToSchema)]
pub struct CakeQuoteResponse {
    pub quote: CakeQuote,
}

/// The committed design's cart line plus the refreshed cart.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesignAddedResponse {
    pub item: CartItem,
    pub cart: CartView,
}
