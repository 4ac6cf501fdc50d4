use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        cake::{CakeQuoteResponse, DesignAddedResponse},
        cart::{AddToCartRequest, CartView, UpdateQuantityRequest},
        checkout::{CheckoutRequest, CheckoutSessionResponse, CustomerInfo},
        orders::{OrderDetails, OrderLineItem},
        products::ProductList,
    },
    error::FieldError,
    models::{
        CakeDecoration, CakeDesign, CakeLayer, CakeShape, CartItem, Customization, DecorationKind,
        Frosting, FrostingStyle, LocalizedText, Product,
    },
    pricing::{CakeQuote, CheckoutTotals},
    response::{ApiResponse, Meta},
    routes::{cake, cart, checkout, health, params, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        cart::list_cart,
        cart::add_to_cart,
        cart::update_quantity,
        cart::remove_from_cart,
        cart::clear_cart,
        cake::quote_design,
        cake::add_design_to_cart,
        checkout::create_session,
        checkout::lookup_session,
    ),
    components(
        schemas(
            LocalizedText,
            Customization,
            CartItem,
            Product,
            CakeShape,
            DecorationKind,
            FrostingStyle,
            CakeLayer,
            CakeDecoration,
            Frosting,
            CakeDesign,
            CakeQuote,
            CheckoutTotals,
            FieldError,
            AddToCartRequest,
            UpdateQuantityRequest,
            CartView,
            CakeQuoteResponse,
            DesignAddedResponse,
            CustomerInfo,
            CheckoutRequest,
            CheckoutSessionResponse,
            OrderDetails,
            OrderLineItem,
            params::Pagination,
            params::ProductQuery,
            params::SessionQuery,
            ProductList,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<CartView>,
            ApiResponse<CheckoutSessionResponse>,
            ApiResponse<OrderDetails>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Catalog endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Custom Cakes", description = "Custom cake quoting and commit"),
        (name = "Checkout", description = "Payment session endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
