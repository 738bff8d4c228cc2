use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::bulk;
use crate::config::filepath;
use crate::core;
use crate::lead;

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub auth: core::Config,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub bulk: bulk::Config,
    #[serde(default)]
    pub lead: lead::Config,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct SessionConfig {
    // Directory of the persisted session. Relative paths are resolved
    // against the data directory.
    storage_dir: Option<PathBuf>,
}

impl SessionConfig {
    pub fn set_storage_dir(&mut self, val: &mut Option<PathBuf>) {
        if let Some(val) = val.take() {
            self.storage_dir = Some(val)
        }
    }

    pub(crate) fn storage_dir(&self, root: &Path) -> PathBuf {
        resolve(root, self.storage_dir.as_deref(), filepath::SESSION)
    }
}

pub(crate) fn campaign_log_path(root: &Path) -> PathBuf {
    root.join(filepath::BULK).join(filepath::CAMPAIGN_LOG)
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct ChatConfig {
    // Directory of the chat history documents.
    history_dir: Option<PathBuf>,
}

impl ChatConfig {
    pub fn set_history_dir(&mut self, val: &mut Option<PathBuf>) {
        if let Some(val) = val.take() {
            self.history_dir = Some(val)
        }
    }

    pub(crate) fn history_dir(&self, root: &Path) -> PathBuf {
        resolve(root, self.history_dir.as_deref(), filepath::CHAT)
    }
}

fn resolve(root: &Path, configured: Option<&Path>, default: &str) -> PathBuf {
    match configured {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => root.join(path),
        None => root.join(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.auth.users.len(), 6);
        assert_eq!(
            config.session.storage_dir(Path::new("/data")),
            PathBuf::from("/data/session")
        );
        assert_eq!(
            config.chat.history_dir(Path::new("/data")),
            PathBuf::from("/data/chat")
        );
    }

    #[test]
    fn parse_full_file() {
        let yaml = r#"
auth:
  users:
    - username: ana
      email: ana@ia.com
      password: secret
session:
  storage_dir: sessions
chat:
  history_dir: /var/lib/iagate/chat
bulk:
  delay_milliseconds: 10
  success_ratio: 1.0
lead:
  delay_milliseconds: 0
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.auth.users.len(), 1);
        assert_eq!(config.auth.users[0].email, "ana@ia.com");
        assert_eq!(
            config.session.storage_dir(Path::new("/data")),
            PathBuf::from("/data/sessions")
        );
        assert_eq!(
            config.chat.history_dir(Path::new("/data")),
            PathBuf::from("/var/lib/iagate/chat")
        );
    }

    #[test]
    fn override_keeps_unset_values() {
        let mut session = SessionConfig::default();
        session.set_storage_dir(&mut Some(PathBuf::from("a")));
        session.set_storage_dir(&mut None);
        assert_eq!(session.storage_dir(Path::new("/r")), PathBuf::from("/r/a"));
    }
}
