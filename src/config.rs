//! Runtime configuration and logger setup.
//!
//! Settings come from the environment, after loading a `.env` file if one
//! exists:
//! - `IPRANGE_LOG_CONFIG` - log4rs yaml file (default `log4rs.yml`)
//! - `IPRANGE_LOG_LEVEL` - root log level; overrides the yaml file's root
//!   level, and is `warn` when neither is given

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{load_config_file, Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

pub const LOG_CONFIG_VAR: &str = "IPRANGE_LOG_CONFIG";
pub const LOG_LEVEL_VAR: &str = "IPRANGE_LOG_LEVEL";
const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_config: PathBuf,
    /// Root level from the environment, if one was set.
    pub log_level: Option<LevelFilter>,
    /// Level string that could not be parsed, reported once logging is up.
    pub bad_log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            log_level: None,
            bad_log_level: None,
        }
    }
}

impl Config {
    /// Load `.env` and read the settings from the environment.
    pub fn from_env() -> Config {
        dotenv::dotenv().ok();
        Config::from_vars(
            std::env::var(LOG_CONFIG_VAR).ok(),
            std::env::var(LOG_LEVEL_VAR).ok(),
        )
    }

    fn from_vars(log_config: Option<String>, log_level: Option<String>) -> Config {
        let mut config = Config::default();
        if let Some(path) = log_config {
            config.log_config = PathBuf::from(path);
        }
        if let Some(level) = log_level {
            match LevelFilter::from_str(level.trim()) {
                Ok(level) => config.log_level = Some(level),
                Err(_) => config.bad_log_level = Some(level),
            }
        }
        config
    }
}

/// Build the log4rs config: the yaml file when it exists, a stderr console
/// appender otherwise. `log_level` replaces the root level in both cases.
pub fn log_config(config: &Config) -> Result<LogConfig, Box<dyn Error>> {
    if config.log_config.exists() {
        let mut from_file = load_config_file(&config.log_config, Default::default())?;
        if let Some(level) = config.log_level {
            from_file.root_mut().set_level(level);
        }
        return Ok(from_file);
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}",
        )))
        .build();
    let level = config.log_level.unwrap_or(DEFAULT_LOG_LEVEL);
    let built = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(built)
}

/// Install the logger built by [`log_config`].
pub fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    log4rs::init_config(log_config(config)?)?;
    log::debug!("logging configured from {:?}", config);
    if let Some(level) = &config.bad_log_level {
        log::warn!("Unknown {LOG_LEVEL_VAR}={level}, ignored");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::from_vars(None, None);
        assert_eq!(config, Config::default());
        assert_eq!(config.log_config, PathBuf::from("log4rs.yml"));
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_config_from_vars() {
        let config = Config::from_vars(Some("other.yml".to_string()), Some("debug".to_string()));
        assert_eq!(config.log_config, PathBuf::from("other.yml"));
        assert_eq!(config.log_level, Some(LevelFilter::Debug));
        assert_eq!(config.bad_log_level, None);

        let config = Config::from_vars(None, Some("TRACE".to_string()));
        assert_eq!(config.log_level, Some(LevelFilter::Trace));
    }

    #[test]
    fn test_config_bad_level() {
        let config = Config::from_vars(None, Some("loud".to_string()));
        assert_eq!(config.log_level, None);
        assert_eq!(config.bad_log_level.as_deref(), Some("loud"));
    }

    #[test]
    fn test_log_config_without_file() {
        let config = Config::from_vars(Some("does-not-exist.yml".to_string()), None);
        let built = log_config(&config).expect("Error building log config");
        assert_eq!(built.root().level(), LevelFilter::Warn);
        assert_eq!(built.appenders().len(), 1);
        assert_eq!(built.appenders()[0].name(), "stderr");

        let config = Config::from_vars(
            Some("does-not-exist.yml".to_string()),
            Some("debug".to_string()),
        );
        let built = log_config(&config).expect("Error building log config");
        assert_eq!(built.root().level(), LevelFilter::Debug);
    }

    #[test]
    fn test_log_config_from_shipped_file() {
        // cargo runs tests from the crate root, next to log4rs.yml
        let config = Config::from_vars(None, None);
        let built = log_config(&config).expect("Error loading log4rs.yml");
        assert_eq!(built.root().level(), LevelFilter::Warn);

        let config = Config::from_vars(None, Some("debug".to_string()));
        let built = log_config(&config).expect("Error loading log4rs.yml");
        assert_eq!(built.root().level(), LevelFilter::Debug);
    }
}
