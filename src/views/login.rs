use anyhow::Result;
use log::{info, warn};

use crate::router::Route;
use crate::services::auth::AuthService;
use crate::types::token::LoginResponse;
use crate::types::user::User;

use super::{Effect, AUTH_FAILED_MESSAGE};

pub struct LoginView {
    auth: AuthService,
}

impl LoginView {
    pub fn new(auth: AuthService) -> Self {
        Self { auth }
    }

    /// Submits the login form. Nothing is sent unless both fields are set.
    pub async fn on_login(&self, username: &str, password: &str) -> Result<Vec<Effect>> {
        let user = User::new(username, password);
        if !user.is_complete() {
            return Ok(Vec::new());
        }

        match self.auth.login(&user).await {
            Ok(LoginResponse { token: Some(token) }) => {
                self.auth.save_token(&token)?;
                info!("Login success for user '{}'", user.username);
                Ok(vec![Effect::Navigate(Route::MainMenu)])
            }
            Ok(LoginResponse { token: None }) => {
                warn!("Login response carries no token");
                Ok(vec![Effect::Alert(String::from(AUTH_FAILED_MESSAGE))])
            }
            Err(err) => {
                warn!("Login failed: {err}");
                Ok(vec![Effect::Alert(String::from(AUTH_FAILED_MESSAGE))])
            }
        }
    }
}
