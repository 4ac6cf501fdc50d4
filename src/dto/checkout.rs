use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::FieldError;

fn default_country() -> String {
    "US".to_string()
}

/// Delivery and contact details entered on the checkout form.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    #[serde(default = "default_country")]
    pub country: String,
    pub delivery_date: String,
    pub delivery_time: String,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

impl CustomerInfo {
    /// Every field the form marks required must be non-empty. Violations are
    /// collected so the client can show them all at once.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let required = [
            ("email", &self.email, "Email is required"),
            ("firstName", &self.first_name, "First name is required"),
            ("lastName", &self.last_name, "Last name is required"),
            ("phone", &self.phone, "Phone number is required"),
            ("address", &self.address, "Address is required"),
            ("city", &self.city, "City is required"),
            ("postalCode", &self.postal_code, "Postal code is required"),
            (
                "deliveryDate",
                &self.delivery_date,
                "Delivery date is required",
            ),
            (
                "deliveryTime",
                &self.delivery_time,
                "Delivery time is required",
            ),
        ];

        let errors: Vec<FieldError> = required
            .into_iter()
            .filter(|(_, value, _)| value.is_empty())
            .map(|(field, _, message)| FieldError::new(field, message))
            .collect();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub customer_info: CustomerInfo,
}

/// Hands the shopper off to the hosted payment page.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSessionResponse {
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> CustomerInfo {
        CustomerInfo {
            email: "mei@example.com".into(),
            first_name: "Mei".into(),
            last_name: "Chen".into(),
            phone: "555-0132".into(),
            address: "12 Orchard Lane".into(),
            city: "Portland".into(),
            postal_code: "97201".into(),
            country: "US".into(),
            delivery_date: "2024-02-10".into(),
            delivery_time: "morning".into(),
            special_instructions: None,
        }
    }

    #[test]
    fn complete_form_passes() {
        assert!(customer().validate().is_ok());
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let mut info = customer();
        info.email.clear();
        info.delivery_time.clear();

        let errors = info.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["email", "deliveryTime"]);
    }
}
