//! Simulated bulk messaging.
//!
//! Nothing is delivered. A send waits a fixed delay and then draws a random
//! outcome, which is recorded as a [`MessageLog`] in the [`CampaignLog`].

mod request;
pub use self::request::{Attachment, AttachmentKind, BulkRequest};

mod log;
pub use self::log::CampaignLog;

mod sender;
pub use self::sender::{BulkSender, Config, DeliveryStatus, MessageLog};
