//! Logger initialization.
//!
//! Library crates log through the `log` facade; binaries call [`init_logger`] once at
//! startup to route the records to the console and, optionally, to rolling log files.

use appender::AppenderSpec;
use consts::*;
use log::{warn, LevelFilter};
use log4rs::{
    config::{Appender, Root},
    Config,
};

mod appender;
mod consts;
mod logger;

pub use consts::{DEFAULT_LOGGER_ENV, DEFAULT_LOGGER_FILTERS, ERR_LOG_FILE_NAME, LOG_FILE_NAME};
pub use logger::LogError;

fn build_config(log_dir: Option<&str>, filters: &str) -> Result<(Config, Vec<LogError>), LogError> {
    let filters = if filters.is_empty() { DEFAULT_LOGGER_FILTERS } else { filters };
    let loggers = logger::Builder::new().root_level(LevelFilter::Info).parse_env(DEFAULT_LOGGER_ENV).parse_expression(filters).build();

    let mut appenders = vec![AppenderSpec::console(CONSOLE_APPENDER, None)];
    if let Some(log_dir) = log_dir {
        appenders.push(AppenderSpec::roller(LOG_FILE_APPENDER, None, log_dir, LOG_FILE_NAME)?);
        appenders.push(AppenderSpec::roller(ERR_LOG_FILE_APPENDER, Some(LevelFilter::Warn), log_dir, ERR_LOG_FILE_NAME)?);
    }
    let names = appenders.iter().map(|x| x.name).collect::<Vec<_>>();

    let config = Config::builder()
        .appenders(appenders.into_iter().map(AppenderSpec::appender).collect::<Vec<Appender>>())
        .loggers(loggers.items())
        .build(Root::builder().appenders(names).build(loggers.root_level()))
        .map_err(|err| LogError::Config(err.to_string()))?;
    Ok((config, loggers.rejected().to_vec()))
}

/// Sets the global logger. `filters` is an expression like `info,scriptkit_txscript=trace`,
/// applied on top of the `RUST_LOG` environment variable. When `log_dir` is provided,
/// all records also go to a rolling log file and warnings and errors to a second one.
pub fn init_logger(log_dir: Option<&str>, filters: &str) -> Result<(), LogError> {
    let (config, rejected) = build_config(log_dir, filters)?;
    log4rs::init_config(config).map_err(|_| LogError::AlreadySet)?;
    for err in rejected {
        warn!("ignoring {}", err);
    }
    Ok(())
}

/// Tries to init the global logger, but does not fail if it was already setup.
/// Should be used for tests.
pub fn try_init_logger(filters: &str) {
    if let Ok((config, _)) = build_config(None, filters) {
        let _ = log4rs::init_config(config);
    }
}
