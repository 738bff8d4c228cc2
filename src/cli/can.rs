use clap::Args;

use crate::core::has_named_permission;
use crate::{App, Result};

/// Check a capability
#[derive(Args, Debug)]
pub struct CanCommand {
    /// Capability name (e.g. bulk-messaging)
    capability: String,
}

impl CanCommand {
    pub fn run(self, app: &App) -> Result<()> {
        let username = app
            .session()
            .current_identity()
            .map(|identity| identity.username.as_str());

        let granted = has_named_permission(username, &self.capability);
        println!("{}: {}", self.capability, if granted { "granted" } else { "denied" });

        Ok(())
    }
}
