use serde::{Deserialize, Serialize};

// Identity is the public part of a credential record.
// It never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    AnonymousUser,
    User(Identity),
}

impl Principal {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Principal::User(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Principal::User(identity) => Some(identity),
            Principal::AnonymousUser => None,
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.identity().map(|identity| identity.username.as_str())
    }
}

impl From<Option<Identity>> for Principal {
    fn from(identity: Option<Identity>) -> Self {
        match identity {
            Some(identity) => Principal::User(identity),
            None => Principal::AnonymousUser,
        }
    }
}
