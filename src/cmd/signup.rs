use anyhow::Result;
use async_trait::async_trait;
use clap::Args;

use crate::router::Route;
use crate::views::sign_up::SignUpView;

use super::{prompt, ClientArgs, RunCommand};

/// Create a new account.
#[derive(Args)]
pub struct SignupArgs {
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
impl RunCommand for SignupArgs {
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

        let view = SignUpView::new(nav.services().auth.clone());
        let effects = view.on_register(&username, &password).await?;
        nav.apply(Route::SignUp, effects).await?;
        Ok(())
    }
}
