use anyhow::{bail, Result};
use async_trait::async_trait;
use clap::Args;

use crate::router::Route;
use crate::views::login::LoginView;

use super::{prompt, ClientArgs, RunCommand};

/// Log in and store the session token, then show the main menu.
#[derive(Args)]
pub struct LoginArgs {
    /// Username, prompted for when omitted.
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password, prompted for (hidden) when omitted.
    #[arg(short, long)]
    pub password: Option<String>,

    #[command(flatten)]
    pub client: ClientArgs,
}

#[async_trait]
impl RunCommand for LoginArgs {
    async fn run(&self) -> Result<()> {
        let nav = self.client.build_navigator()?;

        let username = match self.username {
            Some(ref username) => username.clone(),
            None => prompt("Username", false)?,
        };
        let password = match self.password {
            Some(ref password) => password.clone(),
            None => prompt("Password", true)?,
        };

        let view = LoginView::new(nav.services().auth.clone());
        let effects = view.on_login(&username, &password).await?;
        if effects.is_empty() {
            bail!("username and password cannot be empty");
        }

        nav.apply(Route::Login, effects).await?;
        Ok(())
    }
}
