use uuid::Uuid;

use crate::dto::cake::{CakeQuoteResponse, DesignAddedResponse};
use crate::error::AppResult;
use crate::models::{CakeDesign, CartItem, Customization, LocalizedText};
use crate::pricing::quote_cake;
use crate::response::ApiResponse;
use crate::services::cart_service;
use crate::state::AppState;

pub fn quote(design: &CakeDesign) -> AppResult<ApiResponse<CakeQuoteResponse>> {
    let quote = quote_cake(
        design.layers.len(),
        design.decorations.len(),
        design.personal_message.as_deref(),
    );
    Ok(ApiResponse::success(
        "Quote",
        CakeQuoteResponse { quote },
        None,
    ))
}

/// Commits a design: it collapses into exactly one cart line priced at the
/// current quote, with the design counts carried as descriptive metadata.
pub fn add_design_to_cart(
    state: &AppState,
    design: CakeDesign,
) -> AppResult<ApiResponse<DesignAddedResponse>> {
    let quote = quote_cake(
        design.layers.len(),
        design.decorations.len(),
        design.personal_message.as_deref(),
    );

    let item = CartItem {
        id: format!("custom-{}", Uuid::new_v4()),
        name: LocalizedText::new("Custom Designed Cake", "定制设计蛋糕"),
        price: quote.total,
        image: "/api/placeholder/300/300".to_string(),
        quantity: 1,
        category: "Custom Cakes".to_string(),
        dietary_info: vec!["organic".to_string(), "customizable".to_string()],
        customization: Some(Customization {
            layers: Some(design.layers.len().to_string()),
            decorations: Some(design.decorations.len().to_string()),
            personal_message: design.personal_message.clone(),
            occasion: design.occasion.clone(),
            ..Customization::default()
        }),
        allergens: None,
    };

    tracing::debug!(id = %item.id, price = item.price, "custom cake committed");
    state.cart().add_item(item.clone());

    Ok(ApiResponse::success(
        "Custom cake added to cart",
        DesignAddedResponse {
            item,
            cart: cart_service::cart_view(state),
        },
        None,
    ))
}
