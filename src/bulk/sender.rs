use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::time::Duration;

use crate::bulk::{BulkRequest, CampaignLog};
use crate::common::{info, warn, Time};
use crate::core::{has_permission, Capability, Principal};
use crate::{IagateError, Result};

// Bulk sender configuration.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    // Simulated delivery latency.
    delay_milliseconds: Option<u64>,
    // Probability in [0, 1] that a send is reported as successful.
    success_ratio: Option<f64>,
}

impl Config {
    const DEFAULT_DELAY_MILLISECONDS: u64 = 2000;
    const DEFAULT_SUCCESS_RATIO: f64 = 0.8;

    pub fn set_delay_milliseconds(&mut self, val: Option<u64>) {
        if let Some(val) = val {
            self.delay_milliseconds = Some(val)
        }
    }
    pub fn set_success_ratio(&mut self, val: Option<f64>) {
        if let Some(val) = val {
            if val.is_finite() {
                self.success_ratio = Some(val.clamp(0.0, 1.0))
            }
        }
    }
    pub(crate) fn override_merge(&mut self, other: &Config) {
        self.set_delay_milliseconds(other.delay_milliseconds);
        self.set_success_ratio(other.success_ratio);
    }

    fn delay(&self) -> Duration {
        Duration::from_millis(
            self.delay_milliseconds
                .unwrap_or(Config::DEFAULT_DELAY_MILLISECONDS),
        )
    }

    fn success_ratio(&self) -> f64 {
        self.success_ratio
            .map(|val| val.clamp(0.0, 1.0))
            .unwrap_or(Config::DEFAULT_SUCCESS_RATIO)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Success,
    Error,
}

/// Outcome of one simulated campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageLog {
    pub id: String,
    pub timestamp: Time,
    pub recipients: usize,
    pub status: DeliveryStatus,
    pub message: String,
}

impl fmt::Display for MessageLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {:?} {}",
            self.id,
            self.timestamp.to_rfc3339(),
            self.status,
            self.message
        )
    }
}

pub struct BulkSender {
    config: Config,
    campaigns: CampaignLog,
}

impl BulkSender {
    pub fn new(config: Config, campaigns: CampaignLog) -> Self {
        Self { config, campaigns }
    }

    /// Previous campaigns, newest first.
    pub fn campaigns(&self) -> &[MessageLog] {
        self.campaigns.entries()
    }

    pub async fn send(
        &mut self,
        principal: &Principal,
        request: &BulkRequest,
    ) -> Result<MessageLog> {
        if !has_permission(principal.username(), Capability::BulkMessaging) {
            warn!(user=?principal.username(), "Bulk send denied");
            return Err(IagateError::PermissionDenied {
                capability: Capability::BulkMessaging,
            });
        }
        request.validate()?;

        let recipients = request.recipients().len();
        info!(
            user=?principal.username(),
            recipients,
            attachments=request.attachments.len(),
            schedule=?request.schedule,
            "Sending messages"
        );

        // mock delivery latency.
        tokio::time::sleep(self.config.delay()).await;

        let status = if rand::random::<f64>() < self.config.success_ratio() {
            DeliveryStatus::Success
        } else {
            DeliveryStatus::Error
        };
        let now = Utc::now();
        let log = MessageLog {
            id: now.timestamp_millis().to_string(),
            timestamp: now,
            recipients,
            status,
            message: format!("Messages sent: {}", recipients),
        };

        match status {
            DeliveryStatus::Success => info!(%log, "Bulk send done"),
            DeliveryStatus::Error => warn!(%log, "Bulk send failed"),
        }
        self.campaigns.record(log.clone()).await;

        Ok(log)
    }
}
