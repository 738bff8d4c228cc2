use clap::Args;

use crate::{App, Result};

/// Show the current identity
#[derive(Args, Debug)]
pub struct WhoamiCommand {
    /// Print as json
    #[arg(long)]
    json: bool,
}

impl WhoamiCommand {
    pub fn run(self, app: &App) -> Result<()> {
        let identity = app.session().current_identity();
        if self.json {
            println!("{}", serde_json::to_string(&identity)?);
            return Ok(());
        }
        match identity {
            Some(identity) => println!("{} <{}>", identity.username, identity.email),
            None => println!("anonymous"),
        }
        Ok(())
    }
}
