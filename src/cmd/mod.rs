mod config;
mod login;
mod logout;
mod menu;
mod movie;
mod open;
mod profile;
mod rate;
mod search;
mod signup;
mod watch;
mod whoami;

use anyhow::Result;
use async_trait::async_trait;
use clap::{Args, Parser, Subcommand};
use console::Term;
use log::debug;

use crate::client::factory::ClientFactory;
use crate::config::{CommonConfig, ConfigArgs, PathSet};
use crate::display::DisplayStyle;
use crate::logs::LogConfig;
use crate::runtime::terminal::StdTerminal;
use crate::runtime::Navigator;

#[async_trait]
pub trait RunCommand {
    async fn run(&self) -> Result<()>;
}

/// Options shared by every command that talks to the backend.
#[derive(Args, Debug, Clone)]
pub struct ClientArgs {
    /// The display style.
    #[arg(short, long, default_value = "table")]
    pub output: DisplayStyle,

    #[command(flatten)]
    pub config: ConfigArgs,
}

impl ClientArgs {
    pub fn build_path_set(&self) -> Result<PathSet> {
        let ps = self.config.build_path_set()?;
        let log_cfg = ps.load_config("logs", LogConfig::default)?;
        log_cfg.init()?;
        debug!("Using config dir '{}'", ps.config_path.display());
        Ok(ps)
    }

    pub fn build_navigator(&self) -> Result<Navigator<StdTerminal>> {
        let ps = self.build_path_set()?;
        let factory = ClientFactory::load(&ps)?;
        let services = factory.build_services()?;
        Ok(Navigator::new(services, StdTerminal, self.output))
    }
}

/// Reads a form field from the terminal. Without a terminal the field stays
/// empty.
pub fn prompt(label: &str, secure: bool) -> Result<String> {
    let term = Term::stderr();
    if !term.is_term() {
        return Ok(String::new());
    }
    term.write_str(&format!("{label}: "))?;
    let value = if secure {
        term.read_secure_line()?
    } else {
        term.read_line()?
    };
    Ok(value.trim().to_string())
}

/// Terminal client for the Estgflix movie catalog.
#[derive(Parser)]
#[command(author, about, version)]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Config(config::ConfigCommandArgs),
    Login(login::LoginArgs),
    Logout(logout::LogoutArgs),
    Menu(menu::MenuArgs),
    Movie(movie::MovieArgs),
    Open(open::OpenArgs),
    Profile(profile::ProfileArgs),
    Rate(rate::RateArgs),
    Search(search::SearchArgs),
    Signup(signup::SignupArgs),
    Watch(watch::WatchArgs),
    Whoami(whoami::WhoamiArgs),
}

#[async_trait]
impl RunCommand for App {
    async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Config(args) => args.run().await,
            Commands::Login(args) => args.run().await,
            Commands::Logout(args) => args.run().await,
            Commands::Menu(args) => args.run().await,
            Commands::Movie(args) => args.run().await,
            Commands::Open(args) => args.run().await,
            Commands::Profile(args) => args.run().await,
            Commands::Rate(args) => args.run().await,
            Commands::Search(args) => args.run().await,
            Commands::Signup(args) => args.run().await,
            Commands::Watch(args) => args.run().await,
            Commands::Whoami(args) => args.run().await,
        }
    }
}
