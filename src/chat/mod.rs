//! Chat history persistence.
//!
//! The history lives in an external service. Calls to it are best effort:
//! a failure is logged and reported as absence, it never touches the session.

mod message;
pub use self::message::{ChatMessage, ChatRecord, Role};

mod store;
pub use self::store::{ChatHistoryStore, FileChatHistory};

mod history;
pub use self::history::ChatHistory;
