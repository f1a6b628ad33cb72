use crate::config::Config;
use crate::error::{NotifierError, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_ROOT: &str = "/opt/mail-notifier";
pub const CONFIG_FILE: &str = "config.json";
pub const SOUND_ASSET: &str = "assets/ring.aif";

/// The directory the notifier was installed into.
#[derive(Debug, Clone)]
pub struct Installation {
    root: PathBuf,
}

impl Installation {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn sound_path(&self) -> PathBuf {
        self.root.join(SOUND_ASSET)
    }

    /// Checks the root, then the config file, then the sound asset.
    pub fn validate(&self) -> Result<()> {
        if !self.root.exists() {
            return Err(NotifierError::InstallationMissing(self.root.clone()));
        }

        let config_path = self.config_path();
        if !config_path.is_file() {
            return Err(NotifierError::ConfigMissing(config_path));
        }

        let sound_path = self.sound_path();
        if !sound_path.is_file() {
            return Err(NotifierError::AssetMissing(sound_path));
        }

        log::debug!("Installation at {} is valid", self.root.display());
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        self.validate()?;
        Config::from_file(self.config_path())
    }
}

impl Default for Installation {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}
