//! Per-run test identities and request payloads
//!
//! Every scenario registers a fresh account with a random email and password,
//! so parallel test files never share state on the remote deployment. The
//! billing profile is fixed: the UI assertions need to know which full name
//! the nav menu will display after login.

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::Serialize;
use serde_json::{json, Value};

/// Payment method value used by both the checkout dropdown and the invoice
/// payload. They must agree for the invoice to reference the completed order.
pub const CASH_ON_DELIVERY: &str = "cash-on-delivery";

/// Billing identity shared by registration and invoicing.
#[derive(Debug, Clone, Copy)]
pub struct BillingProfile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub street: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub postal_code: &'static str,
    pub country: &'static str,
}

impl BillingProfile {
    /// Name the nav menu shows once the account is logged in.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

pub const BILLING: BillingProfile = BillingProfile {
    first_name: "Nora",
    last_name: "Verhoeven",
    street: "Kerkstraat 12",
    city: "Utrecht",
    state: "Utrecht",
    postal_code: "3511AB",
    country: "The Netherlands",
};

fn random_suffix(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Fresh mailbox per run so registration never collides with an existing
/// account.
pub fn random_email() -> String {
    format!("e2e-{}@example.com", random_suffix(10).to_lowercase())
}

/// Satisfies the registration password policy: length plus upper, lower,
/// digit, and symbol classes.
pub fn random_password() -> String {
    format!("Aa1!{}", random_suffix(10))
}

#[derive(Debug, Clone, Serialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

/// Registration payload for `POST /users/register`.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub dob: String,
    pub address: Address,
}

impl NewUser {
    /// Fresh identity over the shared billing profile.
    pub fn random() -> Self {
        Self {
            first_name: BILLING.first_name.to_string(),
            last_name: BILLING.last_name.to_string(),
            email: random_email(),
            password: random_password(),
            dob: "1998-07-16".to_string(),
            address: Address {
                street: BILLING.street.to_string(),
                city: BILLING.city.to_string(),
                state: BILLING.state.to_string(),
                country: BILLING.country.to_string(),
                postal_code: BILLING.postal_code.to_string(),
            },
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Invoice payload for `POST /invoices`. The API expects the billing fields
/// flattened, unlike the nested address at registration.
#[derive(Debug, Clone, Serialize)]
pub struct NewInvoice {
    pub billing_street: String,
    pub billing_city: String,
    pub billing_state: String,
    pub billing_country: String,
    pub billing_postal_code: String,
    pub payment_method: String,
    pub payment_details: Value,
    pub cart_id: String,
}

impl NewInvoice {
    /// Invoice for `cart_id`, paid cash on delivery, billed to the shared
    /// profile.
    pub fn cash_on_delivery(cart_id: &str) -> Self {
        Self {
            billing_street: BILLING.street.to_string(),
            billing_city: BILLING.city.to_string(),
            billing_state: BILLING.state.to_string(),
            billing_country: BILLING.country.to_string(),
            billing_postal_code: BILLING.postal_code.to_string(),
            payment_method: CASH_ON_DELIVERY.to_string(),
            payment_details: json!({}),
            cart_id: cart_id.to_string(),
        }
    }
}
