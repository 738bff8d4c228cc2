mod config;
pub use self::config::{Config, UserEntry};

mod credential;
pub use self::credential::{Credential, LoginForm, Password, Provider as CredentialProvider};

mod store;
pub use self::store::{CredentialRecord, CredentialStore};

mod principal;
pub use self::principal::{Identity, Principal};

mod capability;
pub use self::capability::{has_named_permission, has_permission, Capability};

mod authenticator;
pub use self::authenticator::Authenticator;

mod session;
pub use self::session::{SessionManager, SESSION_KEY};

// Usernames and emails are compared after case folding everywhere:
// credential lookup, permission checks and session restore.
pub(crate) fn fold_case(s: &str) -> String {
    s.to_lowercase()
}
