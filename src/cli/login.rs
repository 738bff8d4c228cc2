use clap::Args;

use crate::cli::open::render;
use crate::navigation::Route;
use crate::{App, Result};

/// Log in
#[derive(Args, Debug)]
pub struct LoginCommand {
    /// Username or email
    identifier: String,
    /// Password
    #[arg(long, short = 'p', env = "IAGATE_PASSWORD", hide_env_values = true)]
    password: String,
}

impl LoginCommand {
    pub fn run(self, app: &mut App) -> Result<()> {
        let LoginCommand {
            identifier,
            password,
        } = self;

        app.session_mut().login(&identifier, &password)?;

        render(app, Route::after_login());

        Ok(())
    }
}
