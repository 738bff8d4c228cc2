use clap::Args;

use crate::navigation::Route;
use crate::{App, Result};

/// Log out
#[derive(Args, Debug)]
pub struct LogoutCommand {}

impl LogoutCommand {
    pub fn run(self, app: &mut App) -> Result<()> {
        app.session_mut().logout();
        println!("Logged out. {}", Route::after_logout());
        Ok(())
    }
}
