use thirtyfour::By;
use tracing::info;

use crate::error::E2eResult;
use crate::session::BrowserSession;

/// The `/auth/login` page.
pub struct LoginPage {
    session: BrowserSession,
    email_input: By,
    password_input: By,
    login_button: By,
    nav_menu: By,
}

impl LoginPage {
    pub fn new(session: &BrowserSession) -> Self {
        Self {
            session: session.clone(),
            email_input: By::Css("[data-test='email']"),
            password_input: By::Css("[data-test='password']"),
            login_button: By::Css("[data-test='login-submit']"),
            nav_menu: By::Css("[data-test='nav-menu']"),
        }
    }

    /// Navigate to the login form.
    pub async fn goto(&self) -> E2eResult<()> {
        self.session.goto("/auth/login").await
    }

    /// Fill in the credentials and submit.
    pub async fn login(&self, email: &str, password: &str) -> E2eResult<()> {
        info!(email, "logging in through the UI");
        self.session.fill(&self.email_input, email).await?;
        self.session.fill(&self.password_input, password).await?;
        self.session.click(&self.login_button).await
    }

    /// Wait for the nav menu to show the user's full name.
    pub async fn expect_logged_in(&self, first_name: &str, last_name: &str) -> E2eResult<()> {
        let full_name = format!("{first_name} {last_name}");
        self.session
            .wait_for_text(&self.nav_menu, full_name.trim())
            .await
    }
}
