use serde::Deserialize;

use crate::config::AppConfig;
use crate::dto::checkout::CustomerInfo;
use crate::error::{AppError, AppResult};
use crate::models::CartItem;
use crate::pricing::{CheckoutTotals, to_cents};

/// Stripe Checkout client. Sessions are created with the cart lines as
/// priced line items (plus shipping and tax lines when non-zero), and looked
/// up again when the shopper lands on the confirmation page. `api_base` is
/// configurable so tests can point at a local stub.
pub struct StripeClient {
    http: reqwest::Client,
    secret_key: String,
    api_base: String,
    public_base_url: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SessionDetails {
    pub id: String,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub customer_details: Option<SessionCustomer>,
    #[serde(default)]
    pub metadata: std::collections::BTreeMap<String, String>,
    #[serde(default)]
    pub amount_total: Option<i64>,
    #[serde(default)]
    pub line_items: Option<SessionLineItems>,
}

#[derive(Debug, Deserialize)]
pub struct SessionCustomer {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SessionLineItems {
    #[serde(default)]
    pub data: Vec<SessionLineItem>,
}

#[derive(Debug, Deserialize)]
pub struct SessionLineItem {
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub amount_total: Option<i64>,
}

impl StripeClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key: config.stripe_secret_key.clone(),
            api_base: config.stripe_api_base.trim_end_matches('/').to_string(),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// One-shot, no retry: a failed creation surfaces as a single generic
    /// error and the caller's cart is left untouched for another attempt.
    pub async fn create_checkout_session(
        &self,
        items: &[CartItem],
        customer: &CustomerInfo,
        totals: &CheckoutTotals,
    ) -> AppResult<CheckoutSession> {
        let params = self.session_params(items, customer, totals);

        let response = self
            .http
            .post(format!("{}/v1/checkout/sessions", self.api_base))
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %body, "checkout session creation failed");
            return Err(AppError::PaymentGateway);
        }

        Ok(response.json::<CheckoutSession>().await?)
    }

    pub async fn fetch_session(&self, session_id: &str) -> AppResult<SessionDetails> {
        let response = self
            .http
            .get(format!(
                "{}/v1/checkout/sessions/{session_id}",
                self.api_base
            ))
            .query(&[("expand[]", "line_items")])
            .bearer_auth(&self.secret_key)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::info!(session_id, status = %response.status(), "session lookup failed");
            return Err(AppError::NotFound);
        }

        Ok(response.json::<SessionDetails>().await?)
    }

    fn session_params(
        &self,
        items: &[CartItem],
        customer: &CustomerInfo,
        totals: &CheckoutTotals,
    ) -> Vec<(String, String)> {
        let mut params: Vec<(String, String)> = vec![
            ("mode".into(), "payment".into()),
            ("payment_method_types[0]".into(), "card".into()),
            (
                "success_url".into(),
                format!(
                    "{}/checkout/success?session_id={{CHECKOUT_SESSION_ID}}",
                    self.public_base_url
                ),
            ),
            (
                "cancel_url".into(),
                format!("{}/checkout?cancelled=true", self.public_base_url),
            ),
            ("customer_email".into(), customer.email.clone()),
            ("metadata[customerEmail]".into(), customer.email.clone()),
            (
                "metadata[deliveryDate]".into(),
                customer.delivery_date.clone(),
            ),
            (
                "metadata[deliveryTime]".into(),
                customer.delivery_time.clone(),
            ),
            (
                "metadata[totalAmount]".into(),
                format!("{:.2}", totals.total),
            ),
            (
                "payment_intent_data[description]".into(),
                format!("Bakery order - {} item(s)", items.len()),
            ),
        ];
        if let Some(instructions) = customer
            .special_instructions
            .as_deref()
            .filter(|s| !s.is_empty())
        {
            params.push((
                "metadata[specialInstructions]".into(),
                instructions.to_string(),
            ));
        }

        let mut index = 0;
        for item in items {
            push_line_item(
                &mut params,
                index,
                item.name.for_locale("en"),
                to_cents(item.price),
                item.quantity,
                Some(&item.id),
            );
            index += 1;
        }
        if totals.shipping > 0.0 {
            push_line_item(
                &mut params,
                index,
                "Shipping",
                to_cents(totals.shipping),
                1,
                None,
            );
            index += 1;
        }
        if totals.tax > 0.0 {
            push_line_item(&mut params, index, "Tax", to_cents(totals.tax), 1, None);
        }

        params
    }
}

fn push_line_item(
    params: &mut Vec<(String, String)>,
    index: usize,
    name: &str,
    unit_amount: i64,
    quantity: u32,
    product_id: Option<&str>,
) {
    let prefix = format!("line_items[{index}]");
    params.push((
        format!("{prefix}[price_data][currency]"),
        "usd".to_string(),
    ));
    params.push((
        format!("{prefix}[price_data][product_data][name]"),
        name.to_string(),
    ));
    if let Some(id) = product_id {
        params.push((
            format!("{prefix}[price_data][product_data][metadata][product_id]"),
            id.to_string(),
        ));
    }
    params.push((
        format!("{prefix}[price_data][unit_amount]"),
        unit_amount.to_string(),
    ));
    params.push((format!("{prefix}[quantity]"), quantity.to_string()));
}
