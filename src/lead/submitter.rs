use serde::Deserialize;
use tokio::time::Duration;

use crate::common::{info, Time};
use crate::lead::LeadRequest;
use crate::Result;

const THANKS: &str = "Thanks for your interest! We will contact you soon.";

// Lead submission configuration.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    // Simulated mail latency.
    delay_milliseconds: Option<u64>,
}

impl Config {
    const DEFAULT_DELAY_MILLISECONDS: u64 = 1000;

    pub fn set_delay_milliseconds(&mut self, val: Option<u64>) {
        if let Some(val) = val {
            self.delay_milliseconds = Some(val)
        }
    }
    pub(crate) fn override_merge(&mut self, other: &Config) {
        self.set_delay_milliseconds(other.delay_milliseconds);
    }

    fn delay(&self) -> Duration {
        Duration::from_millis(
            self.delay_milliseconds
                .unwrap_or(Config::DEFAULT_DELAY_MILLISECONDS),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeadReceipt {
    pub timestamp: Time,
    pub message: String,
}

pub struct LeadSubmitter {
    config: Config,
}

impl LeadSubmitter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Anyone may leave a lead, no session is consulted.
    pub async fn submit(&self, request: &LeadRequest) -> Result<LeadReceipt> {
        request.validate()?;

        // mock mail latency.
        tokio::time::sleep(self.config.delay()).await;

        info!(
            name=%request.name.trim(),
            email=%request.email.trim(),
            plan=?request.plan,
            "Lead received"
        );

        Ok(LeadReceipt {
            timestamp: chrono::Utc::now(),
            message: THANKS.to_owned(),
        })
    }
}
