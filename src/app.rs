use crate::bulk::{BulkRequest, BulkSender, CampaignLog, MessageLog};
use crate::chat::{ChatHistory, ChatHistoryStore, ChatMessage, FileChatHistory};
use crate::common::warn;
use crate::config::Config;
use crate::core::{Authenticator, CredentialStore, Identity, SessionManager};
use crate::lead::{LeadReceipt, LeadRequest, LeadSubmitter};
use crate::navigation::{self, Navigation, Route};
use crate::storage::{FileStorage, SessionStorage};
use crate::{IagateError, Result};

#[derive(Default)]
pub struct Builder {
    config: Config,
    campaigns: Option<CampaignLog>,
}

impl Builder {
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            campaigns: None,
        }
    }

    /// Campaign history to append to. Defaults to an in-memory log.
    pub fn campaign_log(mut self, campaigns: CampaignLog) -> Self {
        self.campaigns = Some(campaigns);
        self
    }

    /// Wire the services together. The session is restored from `storage`.
    pub fn build<S, C>(self, storage: S, chat_store: C) -> App<S, C>
    where
        S: SessionStorage,
        C: ChatHistoryStore,
    {
        let Config {
            auth, bulk, lead, ..
        } = self.config;

        let store = CredentialStore::new(auth.users);
        if store.is_empty() {
            warn!("No users configured, every login will be rejected");
        }

        App {
            session: SessionManager::restore(Authenticator::new(store), storage),
            chat: ChatHistory::new(chat_store),
            bulk: BulkSender::new(bulk, self.campaigns.unwrap_or_default()),
            lead: LeadSubmitter::new(lead),
        }
    }
}

/// Everything one user agent talks to.
pub struct App<S = FileStorage, C = FileChatHistory> {
    session: SessionManager<S>,
    chat: ChatHistory<C>,
    bulk: BulkSender,
    lead: LeadSubmitter,
}

impl<S, C> App<S, C>
where
    S: SessionStorage,
    C: ChatHistoryStore,
{
    pub fn session(&self) -> &SessionManager<S> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionManager<S> {
        &mut self.session
    }

    pub fn chat(&self) -> &ChatHistory<C> {
        &self.chat
    }

    pub fn navigate(&self, route: Route) -> Navigation {
        navigation::resolve(self.session.current_identity(), route)
    }

    pub async fn send_bulk(&mut self, request: &BulkRequest) -> Result<MessageLog> {
        self.bulk.send(&self.session.principal(), request).await
    }

    /// Campaigns sent so far, newest first. Guarded like the bulk view.
    pub fn bulk_logs(&self) -> Result<&[MessageLog]> {
        match self.navigate(Route::BulkMessage) {
            Navigation::Render(_) => Ok(self.bulk.campaigns()),
            Navigation::Redirect { .. } if self.session.current_identity().is_none() => {
                Err(IagateError::Unauthenticated)
            }
            Navigation::Redirect { .. } => Err(IagateError::PermissionDenied {
                capability: crate::Capability::BulkMessaging,
            }),
        }
    }

    pub async fn submit_lead(&self, request: &LeadRequest) -> Result<LeadReceipt> {
        self.lead.submit(request).await
    }

    /// Conversation of the current user. `Ok(None)` when the history
    /// service is unavailable.
    pub async fn chat_history(&self) -> Result<Option<Vec<ChatMessage>>> {
        let identity = self.chat_identity()?;
        Ok(self.chat.load(&identity.username).await)
    }

    pub async fn chat_say(&self, content: &str) -> Result<Option<Vec<ChatMessage>>> {
        let identity = self.chat_identity()?;
        Ok(self
            .chat
            .append(&identity.username, ChatMessage::user(content))
            .await)
    }

    pub async fn chat_clear(&self) -> Result<Option<()>> {
        let identity = self.chat_identity()?;
        Ok(self.chat.clear(&identity.username).await)
    }

    fn chat_identity(&self) -> Result<&Identity> {
        match self.navigate(Route::Chat) {
            Navigation::Render(_) => self
                .session
                .current_identity()
                .ok_or(IagateError::Unauthenticated),
            Navigation::Redirect { .. } => Err(IagateError::Unauthenticated),
        }
    }
}
