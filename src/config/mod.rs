mod initialize;
pub use initialize::Initializer;

mod config;
pub use config::{ChatConfig, Config, SessionConfig};

pub mod env {
    pub const LOG_DIRECTIVE: &str = "IAGATE_LOG";
}

pub(crate) mod filepath {
    pub const SESSION: &str = "session";
    pub const CHAT: &str = "chat";
    pub const BULK: &str = "bulk";
    pub const CAMPAIGN_LOG: &str = "campaigns.json";
}
