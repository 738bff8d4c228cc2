use std::fmt;

use crate::common::warn;
use crate::core::{fold_case, Identity, UserEntry};

#[derive(Clone)]
pub struct CredentialRecord {
    pub username: String,
    pub email: String,
    // Plaintext demo password.
    pub(crate) password: String,
}

impl CredentialRecord {
    pub fn identity(&self) -> Identity {
        Identity {
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }

    fn matches(&self, folded_identifier: &str) -> bool {
        fold_case(&self.username) == folded_identifier || fold_case(&self.email) == folded_identifier
    }
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl From<UserEntry> for CredentialRecord {
    fn from(entry: UserEntry) -> Self {
        Self {
            username: entry.username,
            email: entry.email,
            password: entry.password,
        }
    }
}

// Read only lookup table of the configured users.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    records: Vec<CredentialRecord>,
}

impl CredentialStore {
    // Usernames and emails share one identifier space. A user whose username
    // or email is already taken by an earlier user is skipped.
    pub fn new(users: Vec<UserEntry>) -> Self {
        let mut records: Vec<CredentialRecord> = Vec::with_capacity(users.len());
        for entry in users {
            let identifiers = [fold_case(&entry.username), fold_case(&entry.email)];
            let taken = records.iter().find(|record| {
                let existing = [fold_case(&record.username), fold_case(&record.email)];
                identifiers.iter().any(|id| existing.contains(id))
            });
            if let Some(record) = taken {
                warn!(
                    user=%entry.username,
                    email=%entry.email,
                    conflicts_with=%record.username,
                    "Duplicate identifier, user ignored"
                );
                continue;
            }
            records.push(entry.into());
        }
        Self { records }
    }

    pub fn find_by_identifier(&self, identifier: &str) -> Option<&CredentialRecord> {
        let identifier = fold_case(identifier);
        self.records.iter().find(|record| record.matches(&identifier))
    }

    pub fn records(&self) -> impl Iterator<Item = &CredentialRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
