use crate::core::dir_monitor::MonitorOptions;
use crate::core::dirs::get_config_file;
use crate::core::error::SeqMonError;
use crate::core::tracker::ImageFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const MIN_POLL_INTERVAL_MS: u64 = 10;

/// Settings shared by `scan` and `watch`; command-line flags override them
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WatchConfig {
    pub poll_interval_ms: u64,
    pub recursive: bool,
    pub include_hidden: bool,
    /// Extensions to consider, e.g. `["exr", "png"]`; empty means every file
    pub extensions: Vec<String>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
            recursive: false,
            include_hidden: false,
            extensions: Vec::new(),
        }
    }
}

impl WatchConfig {
    /// Load the user's config file, falling back to defaults when none exists
    pub fn load() -> Result<Self, SeqMonError> {
        Self::load_from(&get_config_file()?)
    }

    pub fn load_from(config_file: &Path) -> Result<Self, SeqMonError> {
        if !config_file.exists() {
            log::debug!(
                "No config at {}, using defaults",
                config_file.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_file)
            .map_err(|e| SeqMonError::config_read_failed(config_file, e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| SeqMonError::config_parse_failed(config_file, e))?;
        config.validate()?;

        log::debug!("Loaded config from {}", config_file.display());
        Ok(config)
    }

    pub fn save(&self) -> Result<(), SeqMonError> {
        self.save_to(&get_config_file()?)
    }

    pub fn save_to(&self, config_file: &Path) -> Result<(), SeqMonError> {
        if let Some(config_dir) = config_file.parent() {
            std::fs::create_dir_all(config_dir)
                .map_err(|e| SeqMonError::config_write_failed(config_dir, e))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_file, content)
            .map_err(|e| SeqMonError::config_write_failed(config_file, e))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), SeqMonError> {
        if self.poll_interval_ms < MIN_POLL_INTERVAL_MS {
            return Err(SeqMonError::invalid_poll_interval(self.poll_interval_ms));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn monitor_options(&self) -> MonitorOptions {
        MonitorOptions {
            recursive: self.recursive,
            include_hidden: self.include_hidden,
        }
    }

    pub fn image_filter(&self) -> ImageFilter {
        ImageFilter::new(&self.extensions)
    }
}
