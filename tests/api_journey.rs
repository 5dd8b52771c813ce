//! API-side properties of the journey: registration, login, product lookup,
//! cart handling, and invoicing. No browser involved.
//!
//! These talk to the live deployment, so they are ignored by default. Run
//! them with network access: `cargo test --test api_journey -- --ignored`.

mod common;

use reqwest::StatusCode;
use toolshop_e2e::api::ApiClient;
use toolshop_e2e::data::{NewInvoice, NewUser};

fn api() -> ApiClient {
    ApiClient::new(common::config().api_base_url)
}

/// Register a fresh account and hand back its bearer token.
async fn register_and_login(api: &ApiClient) -> (NewUser, String) {
    let user = NewUser::random();
    let registered = api.register_user(&user).await.expect("register call failed");
    registered
        .expect_status("register_user", StatusCode::CREATED)
        .expect("registration rejected");

    let login = api
        .login(&user.email, &user.password)
        .await
        .expect("login call failed");
    login
        .expect_status("login", StatusCode::OK)
        .expect("login rejected");
    let token = ApiClient::access_token(&login).expect("login response carried no token");
    (user, token)
}

#[tokio::test]
#[ignore = "requires network access to the live shop API"]
async fn registration_returns_201_and_echoes_the_identity() {
    let api = api();
    let user = NewUser::random();

    let res = api.register_user(&user).await.expect("register call failed");
    assert_eq!(res.status, StatusCode::CREATED, "body: {}", res.body);
    assert_eq!(res.body["email"].as_str(), Some(user.email.as_str()));
    assert_eq!(res.body["first_name"].as_str(), Some(user.first_name.as_str()));
    assert_eq!(res.body["last_name"].as_str(), Some(user.last_name.as_str()));
}

#[tokio::test]
#[ignore = "requires network access to the live shop API"]
async fn login_with_fresh_credentials_yields_a_bearer_token() {
    let api = api();
    let (_, token) = register_and_login(&api).await;
    assert!(!token.is_empty());
}

#[tokio::test]
#[ignore = "requires network access to the live shop API"]
async fn ear_protection_resolves_to_a_stable_product_id() {
    let api = api();
    let first = api
        .product_id_by_name("Ear Protection")
        .await
        .expect("product lookup failed");
    assert!(!first.is_empty());

    // Stable across lookups within a run.
    let second = api
        .product_id_by_name("Ear Protection")
        .await
        .expect("repeat product lookup failed");
    assert_eq!(first, second);
}

#[tokio::test]
#[ignore = "requires network access to the live shop API"]
async fn adding_a_product_to_a_fresh_cart_reports_item_added() {
    let api = api();
    let (_, token) = register_and_login(&api).await;

    let product_id = api
        .product_id_by_name("Ear Protection")
        .await
        .expect("product lookup failed");
    let (_, cart_id) = api.create_cart(&token).await.expect("cart creation failed");
    assert!(!cart_id.is_empty());

    let added = api
        .add_product_to_cart(&token, &cart_id, &product_id, 1)
        .await
        .expect("add to cart call failed");
    assert_eq!(added.status, StatusCode::OK, "body: {}", added.body);
    assert_eq!(added.body["result"].as_str(), Some("item added or updated"));
}

#[tokio::test]
#[ignore = "requires network access to the live shop API"]
async fn invoice_creation_for_a_filled_cart_returns_201() {
    let api = api();
    let (_, token) = register_and_login(&api).await;

    let product_id = api
        .product_id_by_name("Ear Protection")
        .await
        .expect("product lookup failed");
    let (_, cart_id) = api.create_cart(&token).await.expect("cart creation failed");
    api.add_product_to_cart(&token, &cart_id, &product_id, 1)
        .await
        .expect("add to cart call failed")
        .expect_status("add_product_to_cart", StatusCode::OK)
        .expect("add to cart rejected");

    let invoice = api
        .create_invoice(&token, &NewInvoice::cash_on_delivery(&cart_id))
        .await
        .expect("invoice call failed");
    assert_eq!(invoice.status, StatusCode::CREATED, "body: {}", invoice.body);
}
