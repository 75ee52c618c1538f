use serde::{Deserialize, Serialize};

/// Credentials submitted on login and sign-up. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
}

/// The backend expects the credentials wrapped as `{"user": {...}}`.
#[derive(Debug, Serialize)]
pub struct UserRequest<'a> {
    pub user: &'a User,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both form fields were filled in.
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}
