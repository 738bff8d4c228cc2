//! Pricing lead capture.
//!
//! Like bulk messaging this is simulated: a submission waits a fixed delay
//! and is acknowledged with a [`LeadReceipt`]. Nothing leaves the process.

mod request;
pub use self::request::{LeadRequest, Plan};

mod submitter;
pub use self::submitter::{Config, LeadReceipt, LeadSubmitter};
