use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::fold_case;
use crate::IagateError;

const BULK_MESSAGING_USERS: &[&str] = &["kenneth", "admin", "bolt"];

/// Named permission gate checked before a restricted view or operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    BulkMessaging,
}

impl Capability {
    pub const ALL: &'static [Capability] = &[Capability::BulkMessaging];

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::BulkMessaging => "bulk-messaging",
        }
    }

    fn allowed_users(&self) -> &'static [&'static str] {
        match self {
            Capability::BulkMessaging => BULK_MESSAGING_USERS,
        }
    }

    pub fn is_granted_to(&self, username: &str) -> bool {
        let username = fold_case(username);
        self.allowed_users().iter().any(|allowed| *allowed == username)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = IagateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .iter()
            .find(|capability| capability.as_str() == s)
            .copied()
            .ok_or_else(|| IagateError::UnknownCapability(s.to_owned()))
    }
}

/// Anonymous sessions are never granted anything.
pub fn has_permission(username: Option<&str>, capability: Capability) -> bool {
    match username {
        Some(username) if !username.is_empty() => capability.is_granted_to(username),
        _ => false,
    }
}

/// Unknown capability names are denied.
pub fn has_named_permission(username: Option<&str>, name: &str) -> bool {
    match name.parse::<Capability>() {
        Ok(capability) => has_permission(username, capability),
        Err(_) => false,
    }
}
