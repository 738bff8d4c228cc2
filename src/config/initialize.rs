use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::bulk::CampaignLog;
use crate::chat::FileChatHistory;
use crate::common::{debug, info};
use crate::config::config::campaign_log_path;
use crate::config::Config;
use crate::storage::FileStorage;
use crate::{App, Builder, Result};

const DEFAULT_ROOT_DIR: &str = ".iagate";

#[derive(Debug)]
pub struct Initializer {
    pub config: Config,
    root_dir: Option<PathBuf>,
}

impl Initializer {
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            root_dir: None,
        }
    }

    /// Load a yaml configuration. A missing file means defaults.
    pub async fn load_config_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = match fs::read(path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("Config file {} not found, use defaults", path.display());
                return Ok(Initializer::from_config(Config::default()));
            }
            Err(err) => return Err(err.into()),
        };
        let config = serde_yaml::from_slice::<Config>(&raw)?;

        Ok(Initializer::from_config(config))
    }

    pub fn set_root_dir(&mut self, root_dir: impl Into<PathBuf>) {
        self.root_dir = Some(root_dir.into());
    }

    pub fn root_dir(&self) -> &Path {
        self.root_dir
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_ROOT_DIR))
    }

    pub async fn init_dir(&self) -> Result<()> {
        let root = self.root_dir();
        for dir in [
            self.config.session.storage_dir(root),
            self.config.chat.history_dir(root),
            root.join(crate::config::filepath::BULK),
        ] {
            fs::create_dir_all(&dir).await?;
        }
        Ok(())
    }

    /// Build the application over file backed storage, restoring any
    /// persisted session.
    pub async fn build(self) -> Result<App> {
        let root = self.root_dir().to_path_buf();

        let storage = FileStorage::open(self.config.session.storage_dir(&root))?;
        let chat_store = FileChatHistory::open(self.config.chat.history_dir(&root)).await?;
        let campaigns = CampaignLog::open(campaign_log_path(&root)).await?;

        info!(root=%root.display(), "Initialized");

        Ok(Builder::from_config(self.config)
            .campaign_log(campaigns)
            .build(storage, chat_store))
    }
}
