use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::bulk::MessageLog;
use crate::common::{debug, warn};
use crate::{IagateError, Result};

const SERVICE: &str = "campaign log";

/// Campaign history, newest first.
///
/// When opened from a file every recorded entry is written back to it. A
/// failed write is logged and the entry stays in memory.
#[derive(Debug, Default)]
pub struct CampaignLog {
    path: Option<PathBuf>,
    entries: Vec<MessageLog>,
}

impl CampaignLog {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match fs::read(&path).await {
            Ok(raw) => {
                serde_json::from_slice(&raw).map_err(|err| IagateError::external(SERVICE, err))?
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(IagateError::external(SERVICE, err)),
        };
        debug!("Open campaign log {} ({} entries)", path.display(), entries.len());
        Ok(Self {
            path: Some(path),
            entries,
        })
    }

    pub fn entries(&self) -> &[MessageLog] {
        &self.entries
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub async fn record(&mut self, log: MessageLog) {
        self.entries.insert(0, log);

        if let Some(path) = &self.path {
            if let Err(err) = write(path, &self.entries).await {
                warn!(%err, "Error saving campaign log");
            }
        }
    }
}

async fn write(path: &Path, entries: &[MessageLog]) -> Result<()> {
    let encoded = serde_json::to_vec_pretty(entries)?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, encoded)
        .await
        .map_err(|err| IagateError::external(SERVICE, err))?;
    fs::rename(&tmp, path)
        .await
        .map_err(|err| IagateError::external(SERVICE, err))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::bulk::DeliveryStatus;

    fn entry(id: &str, recipients: usize) -> MessageLog {
        MessageLog {
            id: id.to_owned(),
            timestamp: Utc::now(),
            recipients,
            status: DeliveryStatus::Success,
            message: format!("Messages sent: {}", recipients),
        }
    }

    #[test]
    fn newest_first() {
        tokio_test::block_on(async move {
            let mut log = CampaignLog::in_memory();
            log.record(entry("1", 50)).await;
            log.record(entry("2", 25)).await;

            let ids: Vec<&str> = log.entries().iter().map(|e| e.id.as_str()).collect();
            assert_eq!(ids, vec!["2", "1"]);
        });
    }

    #[test]
    fn entries_survive_reopen() {
        tokio_test::block_on(async move {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("campaigns.json");

            let mut log = CampaignLog::open(&path).await.unwrap();
            assert!(log.entries().is_empty());
            log.record(entry("1", 3)).await;
            log.record(entry("2", 4)).await;

            let reopened = CampaignLog::open(&path).await.unwrap();
            assert_eq!(reopened.entries(), log.entries());
            assert_eq!(reopened.entries()[0].id, "2");
        });
    }

    #[test]
    fn corrupt_file_is_a_service_failure() {
        tokio_test::block_on(async move {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("campaigns.json");
            std::fs::write(&path, b"{").unwrap();

            assert!(matches!(
                CampaignLog::open(&path).await,
                Err(IagateError::ExternalService { .. })
            ));
        });
    }

    #[test]
    fn failed_write_keeps_entry_in_memory() {
        tokio_test::block_on(async move {
            let dir = tempfile::tempdir().unwrap();
            // Parent directory does not exist, so every write fails.
            let mut log = CampaignLog::open(dir.path().join("missing").join("campaigns.json"))
                .await
                .unwrap();
            log.record(entry("1", 1)).await;
            assert_eq!(log.entries().len(), 1);
        });
    }
}
