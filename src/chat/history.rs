use crate::chat::{ChatHistoryStore, ChatMessage};
use crate::common::error;

pub struct ChatHistory<S> {
    store: S,
}

impl<S> ChatHistory<S>
where
    S: ChatHistoryStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn save(&self, user_id: &str, messages: &[ChatMessage]) -> Option<()> {
        match self.store.save(user_id, messages).await {
            Ok(()) => Some(()),
            Err(err) => {
                error!(%err, user=%user_id, "Error saving chat history");
                None
            }
        }
    }

    pub async fn load(&self, user_id: &str) -> Option<Vec<ChatMessage>> {
        match self.store.load(user_id).await {
            Ok(messages) => messages,
            Err(err) => {
                error!(%err, user=%user_id, "Error fetching chat history");
                None
            }
        }
    }

    /// Append `message` and save. Returns the saved conversation.
    ///
    /// Nothing is written when the current conversation cannot be read, so a
    /// transient read failure never overwrites history.
    pub async fn append(&self, user_id: &str, message: ChatMessage) -> Option<Vec<ChatMessage>> {
        let mut messages = match self.store.load(user_id).await {
            Ok(messages) => messages.unwrap_or_default(),
            Err(err) => {
                error!(%err, user=%user_id, "Error fetching chat history");
                return None;
            }
        };
        messages.push(message);
        self.save(user_id, &messages).await.map(|_| messages)
    }

    pub async fn clear(&self, user_id: &str) -> Option<()> {
        self.save(user_id, &[]).await
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
