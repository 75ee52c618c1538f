use anyhow::Result;
use log::warn;

use crate::router::Route;
use crate::services::auth::AuthService;
use crate::types::user::User;

use super::{Effect, AUTH_FAILED_MESSAGE};

pub const FILL_ALL_FIELDS_MESSAGE: &str = "Please fill in all fields";

pub struct SignUpView {
    auth: AuthService,
}

impl SignUpView {
    pub fn new(auth: AuthService) -> Self {
        Self { auth }
    }

    pub async fn on_register(&self, username: &str, password: &str) -> Result<Vec<Effect>> {
        let user = User::new(username, password);
        if !user.is_complete() {
            return Ok(vec![Effect::Alert(String::from(FILL_ALL_FIELDS_MESSAGE))]);
        }

        match self.auth.register(&user).await {
            Ok(resp) => Ok(vec![
                Effect::Alert(resp.message),
                Effect::Navigate(Route::Login),
            ]),
            Err(err) => {
                warn!("Register failed: {err}");
                Ok(vec![Effect::Alert(String::from(AUTH_FAILED_MESSAGE))])
            }
        }
    }
}
