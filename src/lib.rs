#![allow(clippy::module_inception)]

mod app;
pub use app::{App, Builder};

pub mod bulk;
pub mod chat;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod lead;
pub mod navigation;
pub mod storage;

pub use crate::error::IagateError;
pub type Result<T, E = crate::error::IagateError> = std::result::Result<T, E>;

pub use crate::core::{Capability, Identity};

pub(crate) mod common {
    pub(crate) type ErrorKind = crate::error::internal::ErrorKind;

    pub(crate) type Time = chrono::DateTime<chrono::Utc>;

    pub use tracing::{debug, error, info, trace, warn};
}
