use crate::common::info;
use crate::core::{Credential, CredentialProvider, CredentialStore, Identity, Password};

pub struct Authenticator {
    store: CredentialStore,
}

impl Authenticator {
    pub fn new(store: CredentialStore) -> Self {
        Self { store }
    }

    pub fn authenticate(&self, provider: &dyn CredentialProvider) -> Option<Identity> {
        match provider.credential() {
            Credential::Password(password) => {
                info!(identifier=%password.identifier, "Try authenticate");
                self.authenticate_by_password(password)
            }
        }
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    // Plain string equality. Demo fixture only.
    fn authenticate_by_password(&self, password: Password) -> Option<Identity> {
        let record = self.store.find_by_identifier(&password.identifier)?;
        if record.password == password.password {
            Some(record.identity())
        } else {
            None
        }
    }
}
