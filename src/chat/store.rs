use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs;

use crate::chat::{ChatMessage, ChatRecord};
use crate::common::debug;
use crate::{IagateError, Result};

const SERVICE: &str = "chat history";

#[async_trait]
pub trait ChatHistoryStore {
    /// Insert or replace the conversation of `user_id`.
    async fn save(&self, user_id: &str, messages: &[ChatMessage]) -> Result<()>;
    /// Last saved conversation of `user_id`, if any.
    async fn load(&self, user_id: &str) -> Result<Option<Vec<ChatMessage>>>;
}

// FileChatHistory stands in for the hosted database with one json document
// per user.
#[derive(Debug, Clone)]
pub struct FileChatHistory {
    dir: PathBuf,
}

impl FileChatHistory {
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(|err| IagateError::external(SERVICE, err))?;
        debug!("Open chat history {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, user_id: &str) -> Result<PathBuf> {
        let valid = !user_id.is_empty()
            && !user_id.starts_with('.')
            && user_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@'));
        if !valid {
            return Err(IagateError::InvalidRequest(format!(
                "invalid chat user id {:?}",
                user_id
            )));
        }
        Ok(self.dir.join(format!("{}.json", user_id)))
    }
}

#[async_trait]
impl ChatHistoryStore for FileChatHistory {
    async fn save(&self, user_id: &str, messages: &[ChatMessage]) -> Result<()> {
        let path = self.path(user_id)?;
        let record = ChatRecord {
            user_id: user_id.to_owned(),
            messages: messages.to_vec(),
            updated_at: Utc::now(),
        };
        let encoded = serde_json::to_vec_pretty(&record)?;

        let tmp = path.with_extension("tmp");
        fs::write(&tmp, encoded)
            .await
            .map_err(|err| IagateError::external(SERVICE, err))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|err| IagateError::external(SERVICE, err))?;

        debug!(user=%user_id, messages=messages.len(), "Chat history saved");
        Ok(())
    }

    async fn load(&self, user_id: &str) -> Result<Option<Vec<ChatMessage>>> {
        let path = self.path(user_id)?;
        let raw = match fs::read(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(IagateError::external(SERVICE, err)),
        };
        let record: ChatRecord =
            serde_json::from_slice(&raw).map_err(|err| IagateError::external(SERVICE, err))?;
        Ok(Some(record.messages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Role;

    #[test]
    fn save_replaces_conversation() {
        tokio_test::block_on(async move {
            let dir = tempfile::tempdir().unwrap();
            let store = FileChatHistory::open(dir.path()).await.unwrap();

            assert!(store.load("demo").await.unwrap().is_none());

            store
                .save("demo", &[ChatMessage::user("hola")])
                .await
                .unwrap();
            store
                .save(
                    "demo",
                    &[
                        ChatMessage::user("hola"),
                        ChatMessage::new(Role::Assistant, "hello"),
                    ],
                )
                .await
                .unwrap();

            let messages = store.load("demo").await.unwrap().unwrap();
            assert_eq!(messages.len(), 2);
            assert_eq!(messages[1].role, Role::Assistant);
            assert!(store.load("admin").await.unwrap().is_none());
        });
    }

    #[test]
    fn reject_path_like_user_ids() {
        tokio_test::block_on(async move {
            let dir = tempfile::tempdir().unwrap();
            let store = FileChatHistory::open(dir.path()).await.unwrap();

            assert!(matches!(
                store.save("../demo", &[]).await,
                Err(IagateError::InvalidRequest(_))
            ));
            assert!(store.load("").await.is_err());
        });
    }

    #[test]
    fn corrupt_record_is_a_service_failure() {
        tokio_test::block_on(async move {
            let dir = tempfile::tempdir().unwrap();
            let store = FileChatHistory::open(dir.path()).await.unwrap();
            std::fs::write(dir.path().join("demo.json"), b"[").unwrap();

            assert!(matches!(
                store.load("demo").await,
                Err(IagateError::ExternalService { .. })
            ));
        });
    }
}
