use std::fs::{self, File};
use std::str::FromStr;

use log::{Level, LevelFilter};
use simplelog::{CombinedLogger, Config, ConfigBuilder, SharedLogger, SimpleLogger, WriteLogger};
use thiserror::Error;
use tim_config::LoggingConfig;

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "latest.log";

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Unknown log level {0:?}")]
    InvalidLevel(String),
    #[error("Couldn't open log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("A logger is already installed: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

/// `RUST_LOG` wins over the configured level when it holds a valid one.
pub fn level_filter(config: &LoggingConfig) -> Result<LevelFilter, LoggingError> {
    if let Some(level) = std::env::var("RUST_LOG")
        .ok()
        .as_deref()
        .map(LevelFilter::from_str)
        .and_then(Result::ok)
    {
        return Ok(level);
    }
    parse_level(&config.level)
}

fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    LevelFilter::from_str(level).map_err(|_| LoggingError::InvalidLevel(level.to_string()))
}

pub fn build_config(config: &LoggingConfig) -> Config {
    let mut builder = ConfigBuilder::new();

    if config.timestamp {
        builder.set_time_format_custom(time::macros::format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ));
        builder.set_time_level(LevelFilter::Trace);
    } else {
        builder.set_time_level(LevelFilter::Off);
    }

    if config.color {
        builder.set_write_log_enable_colors(true);
    } else {
        for level in Level::iter() {
            builder.set_level_color(level, None);
        }
    }

    if config.threads {
        builder.set_thread_level(LevelFilter::Info);
    } else {
        builder.set_thread_level(LevelFilter::Off);
    }

    builder.build()
}

/// Installs the global logger. Does nothing when logging is disabled.
pub fn init_logger(config: &LoggingConfig) -> Result<(), LoggingError> {
    if !config.enabled {
        return Ok(());
    }

    let level = level_filter(config)?;
    let mut loggers: Vec<Box<dyn SharedLogger>> =
        vec![SimpleLogger::new(level, build_config(config))];

    if config.file {
        fs::create_dir_all(LOG_DIR)?;
        let file = File::create(format!("{LOG_DIR}/{LOG_FILE}"))?;
        // No escape codes in the file
        let mut file_config = config.clone();
        file_config.color = false;
        loggers.push(WriteLogger::new(level, build_config(&file_config), file));
    }

    CombinedLogger::init(loggers)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use log::LevelFilter;

    use super::{LoggingError, parse_level};

    #[test]
    fn parses_config_levels() {
        assert_eq!(parse_level("info").unwrap(), LevelFilter::Info);
        assert_eq!(parse_level("TRACE").unwrap(), LevelFilter::Trace);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::Off);
        assert!(matches!(
            parse_level("loud"),
            Err(LoggingError::InvalidLevel(level)) if level == "loud"
        ));
    }
}
