use std::io::{self, IsTerminal};

use anyhow::{bail, Context, Result};
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::config::{CommonConfig, PathSet};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LogConfig {
    /// One of `error`, `warn`, `info`, `debug`.
    #[serde(default = "LogConfig::default_level")]
    pub level: String,
}

impl CommonConfig for LogConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }

    fn complete(&mut self, _ps: &PathSet) -> Result<()> {
        self.level_filter()?;
        Ok(())
    }
}

impl LogConfig {
    pub fn default_level() -> String {
        String::from("warn")
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        Ok(match self.level.as_str() {
            "error" => LevelFilter::Error,
            "warn" | "warning" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            _ => bail!("unknown log level '{}'", self.level),
        })
    }

    /// Installs the global logger. Logs go to stderr so that rendered screens
    /// on stdout stay clean.
    pub fn init(&self) -> Result<()> {
        let level = self.level_filter()?;
        let is_terminal = io::stderr().is_terminal();

        let colors = ColoredLevelConfig::new()
            .info(Color::Green)
            .debug(Color::Magenta);

        fern::Dispatch::new()
            .format(move |out, message, record| {
                if is_terminal {
                    out.finish(format_args!(
                        "{} [{}] {}",
                        humantime::format_rfc3339_millis(std::time::SystemTime::now()),
                        colors.color(record.level()),
                        message
                    ))
                } else {
                    out.finish(format_args!(
                        "{} [{}] {}",
                        humantime::format_rfc3339_millis(std::time::SystemTime::now()),
                        record.level(),
                        message
                    ))
                }
            })
            .level(level)
            .chain(io::stderr())
            .apply()
            .context("init logger")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        let mut cfg = <LogConfig as CommonConfig>::default();
        assert_eq!(cfg.level_filter().unwrap(), LevelFilter::Warn);

        cfg.level = String::from("debug");
        assert_eq!(cfg.level_filter().unwrap(), LevelFilter::Debug);

        cfg.level = String::from("verbose");
        assert!(cfg.level_filter().is_err());
    }
}
