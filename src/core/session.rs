use crate::common::{info, warn};
use crate::core::{
    fold_case, has_permission, Authenticator, Capability, CredentialProvider, Identity, LoginForm,
    Principal,
};
use crate::storage::SessionStorage;
use crate::{IagateError, Result};

/// Storage key of the persisted identity.
pub const SESSION_KEY: &str = "user";

/// Owns the authentication state of one user agent.
///
/// A session is either anonymous or authenticated as exactly one identity.
/// Every successful login is written to `storage` before it becomes visible,
/// so a fresh manager restored from the same storage sees the same identity.
/// There is no expiry: a persisted session lasts until `logout`.
pub struct SessionManager<S> {
    authenticator: Authenticator,
    storage: S,
    identity: Option<Identity>,
}

impl<S> SessionManager<S>
where
    S: SessionStorage,
{
    /// Anonymous session that ignores whatever the storage holds.
    pub fn new(authenticator: Authenticator, storage: S) -> Self {
        Self {
            authenticator,
            storage,
            identity: None,
        }
    }

    /// Session restored from a previous run.
    pub fn restore(authenticator: Authenticator, storage: S) -> Self {
        let identity = load_identity(&authenticator, &storage);
        if let Some(identity) = &identity {
            info!(user=%identity.username, "Session restored");
        }
        Self {
            authenticator,
            storage,
            identity,
        }
    }

    pub fn login(&mut self, identifier: &str, password: &str) -> Result<Identity> {
        self.login_with(&LoginForm::new(identifier, password))
    }

    /// A rejected or failed login leaves the current session untouched.
    pub fn login_with(&mut self, provider: &dyn CredentialProvider) -> Result<Identity> {
        let identity = match self.authenticator.authenticate(provider) {
            Some(identity) => identity,
            None => {
                warn!("Login rejected");
                return Err(IagateError::InvalidCredentials);
            }
        };

        let encoded = serde_json::to_string(&identity)?;
        self.storage.set_item(SESSION_KEY, &encoded)?;

        info!(user=%identity.username, "Login");
        self.identity = Some(identity.clone());

        Ok(identity)
    }

    pub fn logout(&mut self) {
        if let Some(identity) = self.identity.take() {
            info!(user=%identity.username, "Logout");
        }
        if let Err(err) = self.storage.remove_item(SESSION_KEY) {
            warn!(%err, "Remove persisted session");
        }
    }

    pub fn current_identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn principal(&self) -> Principal {
        Principal::from(self.identity.clone())
    }

    pub fn has_permission(&self, capability: Capability) -> bool {
        has_permission(
            self.current_identity()
                .map(|identity| identity.username.as_str()),
            capability,
        )
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

// Persisted identities that are unreadable or no longer match a configured
// user are discarded. A restored identity always carries the record's fields.
fn load_identity<S: SessionStorage>(authenticator: &Authenticator, storage: &S) -> Option<Identity> {
    let raw = match storage.get_item(SESSION_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            warn!(%err, "Read persisted session");
            return None;
        }
    };

    let identity = match serde_json::from_str::<Identity>(&raw) {
        Ok(identity) => identity,
        Err(err) => {
            warn!(%err, "Discard undecodable session");
            discard(storage);
            return None;
        }
    };

    // The persisted username must name the record by username, not by email.
    let record = authenticator
        .store()
        .find_by_identifier(&identity.username)
        .filter(|record| {
            fold_case(&record.username) == fold_case(&identity.username)
                && fold_case(&record.email) == fold_case(&identity.email)
        });
    match record {
        Some(record) => Some(record.identity()),
        None => {
            warn!(user=%identity.username, "Discard session of unknown user");
            discard(storage);
            None
        }
    }
}

fn discard<S: SessionStorage>(storage: &S) {
    if let Err(err) = storage.remove_item(SESSION_KEY) {
        warn!(%err, "Remove persisted session");
    }
}
