use thirtyfour::By;
use tracing::info;

use crate::data::CASH_ON_DELIVERY;
use crate::error::E2eResult;
use crate::session::BrowserSession;

/// Cart page plus the multi-step checkout flow behind it.
pub struct CheckoutPage {
    session: BrowserSession,
    nav_cart: By,
    payment_method: By,
    confirm_button: By,
    confirmation_message: By,
    proceed_1: By,
    proceed_2: By,
    proceed_3: By,
}

impl CheckoutPage {
    pub fn new(session: &BrowserSession) -> Self {
        Self {
            session: session.clone(),
            nav_cart: By::Css("[data-test='nav-cart']"),
            payment_method: By::Css("[data-test='payment-method']"),
            confirm_button: By::Css("[data-test='finish']"),
            confirmation_message: By::Css("[data-test='payment-success-message']"),
            proceed_1: By::Css("[data-test='proceed-1']"),
            proceed_2: By::Css("[data-test='proceed-2']"),
            proceed_3: By::Css("[data-test='proceed-3']"),
        }
    }

    /// Open the cart page in the current logged-in session. The UI picks up
    /// the cart bridged into session storage at this point.
    pub async fn goto_cart(&self) -> E2eResult<()> {
        self.session.goto("/checkout").await
    }

    /// Open the cart via the nav icon instead of direct navigation.
    pub async fn go_to_checkout(&self) -> E2eResult<()> {
        self.session.click(&self.nav_cart).await
    }

    /// First "Proceed to checkout" step (cart summary).
    pub async fn proceed_to_checkout_1(&self) -> E2eResult<()> {
        self.session.click(&self.proceed_1).await
    }

    /// Second step (sign-in confirmation).
    pub async fn proceed_to_checkout_2(&self) -> E2eResult<()> {
        self.session.click(&self.proceed_2).await
    }

    /// Third step (billing address).
    pub async fn proceed_to_checkout_3(&self) -> E2eResult<()> {
        self.session.click(&self.proceed_3).await
    }

    /// Pick "cash on delivery" from the payment method dropdown.
    pub async fn select_cash_on_delivery(&self) -> E2eResult<()> {
        self.session
            .select_value(&self.payment_method, CASH_ON_DELIVERY)
            .await
    }

    /// Submit the order.
    pub async fn confirm_order(&self) -> E2eResult<()> {
        info!("confirming the order");
        self.session.click(&self.confirm_button).await
    }

    /// Wait for the payment success message to become visible.
    pub async fn expect_order_confirmed(&self) -> E2eResult<()> {
        self.session
            .wait_for_visible(&self.confirmation_message)
            .await?;
        Ok(())
    }
}
