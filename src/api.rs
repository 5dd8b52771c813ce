//! Thin client for the shop API - one function per endpoint
//!
//! Every call normalizes to an [`ApiResponse`] status/body pair so scenarios
//! can assert on both. There is no retry logic and no internal state beyond
//! the HTTP connection pool: an unexpected status is surfaced directly to the
//! caller.

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tracing::debug;

use crate::data::{NewInvoice, NewUser};
use crate::error::{E2eError, E2eResult};

/// Normalized result of one API call.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    /// Fail with the offending status and body when the call did not return
    /// `expected`.
    pub fn expect_status(&self, operation: &'static str, expected: StatusCode) -> E2eResult<()> {
        if self.status != expected {
            return Err(E2eError::UnexpectedStatus {
                operation,
                status: self.status.as_u16(),
                body: self.body.to_string(),
            });
        }
        Ok(())
    }
}

/// Stateless wrapper over the shop API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// `POST /users/register`
    pub async fn register_user(&self, user: &NewUser) -> E2eResult<ApiResponse> {
        let res = self
            .client
            .post(format!("{}/users/register", self.base_url))
            .json(user)
            .send()
            .await?;
        Self::into_response("register_user", res).await
    }

    /// `POST /users/login`. The bearer token lives in `body.access_token`;
    /// see [`ApiClient::access_token`].
    pub async fn login(&self, email: &str, password: &str) -> E2eResult<ApiResponse> {
        let res = self
            .client
            .post(format!("{}/users/login", self.base_url))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        Self::into_response("login", res).await
    }

    /// Extract the non-empty bearer token from a login response.
    pub fn access_token(login: &ApiResponse) -> E2eResult<String> {
        login.body["access_token"]
            .as_str()
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .ok_or(E2eError::MissingField {
                operation: "login",
                field: "access_token",
            })
    }

    /// `GET /products/search?q=name` - resolves the first product whose name
    /// contains `name` (case-insensitive). A missing match is an explicit
    /// lookup failure, not an empty result.
    pub async fn product_id_by_name(&self, name: &str) -> E2eResult<String> {
        let res = self
            .client
            .get(format!("{}/products/search", self.base_url))
            .query(&[("q", name)])
            .send()
            .await?;
        let body: Value = res.json().await?;
        find_product_id(&body, name).ok_or_else(|| E2eError::ProductNotFound(name.to_string()))
    }

    /// `POST /carts` (authenticated) - returns the status and the new cart id.
    pub async fn create_cart(&self, token: &str) -> E2eResult<(StatusCode, String)> {
        let res = self
            .client
            .post(format!("{}/carts", self.base_url))
            .bearer_auth(token)
            .json(&json!({}))
            .send()
            .await?;
        let status = res.status();
        let body: Value = res.json().await?;
        let cart_id = body["id"]
            .as_str()
            .map(str::to_string)
            .ok_or(E2eError::MissingField {
                operation: "create_cart",
                field: "id",
            })?;
        debug!(%status, cart_id, "cart created");
        Ok((status, cart_id))
    }

    /// `POST /carts/{id}` (authenticated) - adds `quantity` of `product_id`
    /// to the cart.
    pub async fn add_product_to_cart(
        &self,
        token: &str,
        cart_id: &str,
        product_id: &str,
        quantity: u32,
    ) -> E2eResult<ApiResponse> {
        let res = self
            .client
            .post(format!("{}/carts/{}", self.base_url, cart_id))
            .bearer_auth(token)
            .json(&json!({ "product_id": product_id, "quantity": quantity }))
            .send()
            .await?;
        Self::into_response("add_product_to_cart", res).await
    }

    /// `POST /invoices` (authenticated)
    pub async fn create_invoice(
        &self,
        token: &str,
        invoice: &NewInvoice,
    ) -> E2eResult<ApiResponse> {
        let res = self
            .client
            .post(format!("{}/invoices", self.base_url))
            .bearer_auth(token)
            .json(invoice)
            .send()
            .await?;
        Self::into_response("create_invoice", res).await
    }

    async fn into_response(operation: &'static str, res: reqwest::Response) -> E2eResult<ApiResponse> {
        let status = res.status();
        // Some endpoints answer with an empty body; treat that as null.
        let body = res.json().await.unwrap_or(Value::Null);
        debug!(operation, %status, "api call finished");
        Ok(ApiResponse { status, body })
    }
}

/// First entry in `data` whose name contains `wanted`, case-insensitive.
fn find_product_id(body: &Value, wanted: &str) -> Option<String> {
    let wanted = wanted.to_lowercase();
    body["data"].as_array()?.iter().find_map(|product| {
        let name = product["name"].as_str()?;
        if name.to_lowercase().contains(&wanted) {
            product["id"].as_str().map(str::to_string)
        } else {
            None
        }
    })
}
