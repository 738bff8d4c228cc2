use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::cli::{bulk, can, chat, lead, login, logout, open, whoami};
use crate::common::debug;
use crate::config::Initializer;
use crate::{App, Result};

/// Honduras IA demo gate
#[derive(Parser, Debug)]
#[command(version, propagate_version = true, subcommand_required = true)]
pub struct IagateCommand {
    /// Global options
    #[command(flatten)]
    pub options: GlobalOptions,
    /// Subcommand
    #[command(subcommand)]
    pub command: Command,
}

/// Global options
#[derive(Args, Debug)]
pub struct GlobalOptions {
    /// Configuration file path
    #[arg(
        long,
        short = 'C',
        env = "IAGATE_CONFIG_PATH",
        default_value = "./iagate.yaml",
        global = true
    )]
    pub config: PathBuf,
    /// Directory where session and chat history are stored
    #[arg(long, env = "IAGATE_DIR", default_value = ".iagate", global = true)]
    pub data_dir: PathBuf,
    /// Session storage directory
    #[arg(long, env = "IAGATE_SESSION_DIR", global = true)]
    pub session_dir: Option<PathBuf>,
    /// Chat history directory
    #[arg(long, env = "IAGATE_CHAT_DIR", global = true)]
    pub chat_dir: Option<PathBuf>,
    /// Simulated bulk delivery latency
    #[arg(long, env = "IAGATE_BULK_DELAY_MILLISECONDS", global = true)]
    pub bulk_delay_milliseconds: Option<u64>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in with a username or email
    Login(login::LoginCommand),
    /// Log out
    Logout(logout::LogoutCommand),
    /// Show the current identity
    Whoami(whoami::WhoamiCommand),
    /// Check a capability for the current identity
    Can(can::CanCommand),
    /// Open a view by path
    Open(open::OpenCommand),
    /// Send simulated bulk message campaigns or list previous ones
    Bulk(bulk::BulkCommand),
    /// Chat history
    Chat(chat::ChatCommand),
    /// Ask to be contacted about a plan
    Lead(lead::LeadCommand),
}

/// Parse command line args
pub fn parse() -> IagateCommand {
    IagateCommand::parse()
}

impl IagateCommand {
    pub async fn run(self) -> Result<()> {
        let IagateCommand { options, command } = self;

        let mut app = initialize(options).await?;

        match command {
            Command::Login(cmd) => cmd.run(&mut app),
            Command::Logout(cmd) => cmd.run(&mut app),
            Command::Whoami(cmd) => cmd.run(&app),
            Command::Can(cmd) => cmd.run(&app),
            Command::Open(cmd) => cmd.run(&app).await,
            Command::Bulk(cmd) => cmd.run(&mut app).await,
            Command::Chat(cmd) => cmd.run(&app).await,
            Command::Lead(cmd) => cmd.run(&app).await,
        }
    }
}

/// Load configuration, apply command line overrides and restore the session.
pub async fn initialize(options: GlobalOptions) -> Result<App> {
    let GlobalOptions {
        config,
        data_dir,
        mut session_dir,
        mut chat_dir,
        bulk_delay_milliseconds,
    } = options;

    let mut initializer = Initializer::load_config_file(config).await?;

    initializer.config.session.set_storage_dir(&mut session_dir);
    initializer.config.chat.set_history_dir(&mut chat_dir);
    let bulk = {
        let mut bulk = crate::bulk::Config::default();
        bulk.set_delay_milliseconds(bulk_delay_milliseconds);
        bulk
    };
    initializer.config.bulk.override_merge(&bulk);

    initializer.set_root_dir(data_dir);

    debug!("{:?}", initializer);

    initializer.init_dir().await?;
    initializer.build().await
}
