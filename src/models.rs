use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Display text keyed by two-letter locale code ("en", "zh", ...).
/// Lookup falls back to English, then to any available translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct LocalizedText(pub BTreeMap<String, String>);

impl LocalizedText {
    pub fn new(en: impl Into<String>, zh: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert("en".to_string(), en.into());
        map.insert("zh".to_string(), zh.into());
        Self(map)
    }

    pub fn for_locale(&self, locale: &str) -> &str {
        self.0
            .get(locale)
            .or_else(|| self.0.get("en"))
            .or_else(|| self.0.values().next())
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Shopper-chosen options for a customizable product line. All fields are
/// descriptive metadata; none are priced separately once the line exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decorations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
}

/// One product line in the shopper's cart, keyed by `id`. A given id appears
/// at most once; re-adding merges into the existing line's quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub name: LocalizedText,
    pub price: f64,
    pub image: String,
    pub quantity: u32,
    pub category: String,
    pub dietary_info: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customization: Option<Customization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<String>>,
}

/// Catalog entry backing the storefront listing pages.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: LocalizedText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub dietary_info: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allergens: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CakeShape {
    Round,
    Square,
    Heart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DecorationKind {
    Flower,
    Text,
    Candle,
    Fruit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FrostingStyle {
    Smooth,
    Textured,
    Piped,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CakeLayer {
    pub id: String,
    pub shape: CakeShape,
    pub size: f64,
    pub height: f64,
    pub flavor: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CakeDecoration {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DecorationKind,
    pub position: [f64; 3],
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Frosting {
    #[serde(rename = "type")]
    pub style: FrostingStyle,
    pub color: String,
}

/// An in-progress custom cake. Page-local on the client; it only touches the
/// cart when the shopper commits it, at which point it collapses into a
/// single [`CartItem`] priced by the quote.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CakeDesign {
    pub layers: Vec<CakeLayer>,
    pub decorations: Vec<CakeDecoration>,
    pub frosting: Frosting,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
}
