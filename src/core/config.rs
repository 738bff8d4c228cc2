use serde::Deserialize;

// Credential configuration.
//
// The users listed here are a demo fixture compared in plaintext.
// This is not an authentication mechanism suitable for real accounts.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "demo_users")]
    pub users: Vec<UserEntry>,
}

#[derive(Deserialize, Clone, PartialEq)]
pub struct UserEntry {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserEntry {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for UserEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserEntry")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"****")
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            users: demo_users(),
        }
    }
}

fn demo_users() -> Vec<UserEntry> {
    vec![
        UserEntry::new("admin", "admin@test.com", "admin"),
        UserEntry::new("kenneth", "kenneth@ia.com", "kenneth"),
        UserEntry::new("bolt", "bolt@ia.com", "bolt"),
        UserEntry::new("joser", "joser@demo.com", "JoseR"),
        UserEntry::new("gabriela", "gabriela@demo.com", "Gaby"),
        UserEntry::new("demo", "demo@ia.com", "demo"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_users_fall_back_to_demo_fixture() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.users.len(), 6);
        assert_eq!(config.users[0].username, "admin");
    }

    #[test]
    fn debug_masks_password() {
        let entry = UserEntry::new("joser", "joser@demo.com", "JoseR");
        let debug = format!("{:?}", entry);
        assert!(!debug.contains("JoseR"));
        assert!(debug.contains("joser@demo.com"));
    }
}
