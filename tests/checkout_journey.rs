//! The full interleaved journey: API registration, UI login, API cart
//! creation, the session-storage cart bridge, UI checkout, API invoice.
//!
//! Needs network access to the live deployment and a WebDriver endpoint
//! (`E2E_WEBDRIVER_URL`, default `http://localhost:4444`; set `E2E_BROWSER`
//! to pick the engine). Run with:
//! `cargo test --test checkout_journey -- --ignored`

mod common;

use reqwest::StatusCode;
use toolshop_e2e::api::ApiClient;
use toolshop_e2e::data::{NewInvoice, NewUser};
use toolshop_e2e::pages::{CheckoutPage, LoginPage};
use toolshop_e2e::{BrowserSession, E2eError, E2eResult};

#[tokio::test]
#[ignore = "requires network access and a WebDriver endpoint"]
async fn checkout_journey_bridges_the_api_cart_into_the_ui() {
    let config = common::config();
    let api = ApiClient::new(&config.api_base_url);
    let session = BrowserSession::start(&config)
        .await
        .expect("browser session failed to start");

    let outcome = journey(&api, &session).await;
    if outcome.is_err() {
        // Keep evidence of the failing page state before tearing down.
        let _ = session.capture_screenshot("checkout-journey-failure").await;
    }
    let quit = session.quit().await;

    outcome.expect("checkout journey failed");
    quit.expect("browser session failed to close");
}

/// The scenario proper. Returns an error instead of panicking so the caller
/// can capture a screenshot before the session goes away.
async fn journey(api: &ApiClient, session: &BrowserSession) -> E2eResult<()> {
    let user = NewUser::random();

    // 1. Create the user via the API; the response must echo the identity.
    let registered = api.register_user(&user).await?;
    registered.expect_status("register_user", StatusCode::CREATED)?;
    if registered.body["email"].as_str() != Some(user.email.as_str()) {
        return Err(E2eError::AssertionFailed(format!(
            "registration echoed {}, expected {:?}",
            registered.body["email"], user.email
        )));
    }

    // 2. Log in through the UI with the same credentials.
    let login_page = LoginPage::new(session);
    login_page.goto().await?;
    login_page.login(&user.email, &user.password).await?;
    login_page
        .expect_logged_in(&user.first_name, &user.last_name)
        .await?;

    // 3. Build the cart on the API side, authenticated as the same user.
    let login = api.login(&user.email, &user.password).await?;
    login.expect_status("login", StatusCode::OK)?;
    let token = ApiClient::access_token(&login)?;

    let product_id = api.product_id_by_name("Ear Protection").await?;
    let (_, cart_id) = api.create_cart(&token).await?;
    let added = api
        .add_product_to_cart(&token, &cart_id, &product_id, 1)
        .await?;
    added.expect_status("add_product_to_cart", StatusCode::OK)?;
    if added.body["result"].as_str() != Some("item added or updated") {
        return Err(E2eError::AssertionFailed(format!(
            "add to cart answered {}",
            added.body
        )));
    }

    // 4. Hand the cart to the browser and finish checkout in the UI.
    session.bridge_cart(&cart_id).await?;
    let checkout = CheckoutPage::new(session);
    checkout.goto_cart().await?;
    checkout.proceed_to_checkout_1().await?;
    checkout.proceed_to_checkout_2().await?;
    checkout.proceed_to_checkout_3().await?;
    checkout.select_cash_on_delivery().await?;
    checkout.confirm_order().await?;
    checkout.expect_order_confirmed().await?;

    // 5. Invoice the same cart via the API.
    let invoice = api
        .create_invoice(&token, &NewInvoice::cash_on_delivery(&cart_id))
        .await?;
    invoice.expect_status("create_invoice", StatusCode::CREATED)?;

    Ok(())
}
