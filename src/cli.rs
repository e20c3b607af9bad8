use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError, DemoVariant};

/// Terminal countdown timer.
#[derive(Debug, Parser)]
#[command(name = "tickdown", version)]
pub struct Cli {
    /// Path to the config file (default: <config_dir>/tickdown/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Countdown origin in seconds.
    #[arg(long, value_name = "SECS", allow_hyphen_values = true)]
    pub start_time: Option<i64>,

    /// Delay between ticks in milliseconds.
    #[arg(long, value_name = "MS")]
    pub duration: Option<u64>,

    /// State-management style used by the view.
    #[arg(long, value_enum)]
    pub variant: Option<DemoVariant>,

    /// Write logs to this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file and layer command-line overrides on top.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(start_time) = self.start_time {
            config.timer.start_time = start_time;
        }
        if let Some(duration) = self.duration {
            config.timer.duration_ms = duration;
        }
        if let Some(variant) = self.variant {
            config.ui.variant = variant;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_leaves_config_untouched() {
        let cli = Cli::parse_from(["tickdown"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "tickdown",
            "--start-time",
            "5",
            "--duration",
            "500",
            "--variant",
            "store",
        ]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.timer.start_time, 5);
        assert_eq!(config.timer.duration_ms, 500);
        assert_eq!(config.ui.variant, DemoVariant::Store);
    }

    #[test]
    fn negative_start_time_parses_then_fails_validation() {
        let cli = Cli::parse_from(["tickdown", "--start-time", "-3"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert!(config.validate().is_err());
    }
}
