use log::LevelFilter;
use log4rs::config::Logger;
use std::{collections::BTreeMap, env, mem, str::FromStr};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LogError {
    #[error("invalid logging spec '{0}'")]
    ParseLoggerSpecError(String),

    #[error("log appender error: {0}")]
    Appender(String),

    #[error("logger configuration error: {0}")]
    Config(String),

    #[error("a global logger is already set")]
    AlreadySet,
}

/// Parsed logging filters: a root level and per target overrides, sorted by target.
#[derive(Debug)]
pub(super) struct Loggers {
    root_level: LevelFilter,
    targets: Vec<(String, LevelFilter)>,
    rejected: Vec<LogError>,
}

impl Loggers {
    pub fn root_level(&self) -> LevelFilter {
        self.root_level
    }

    pub fn items(&self) -> impl Iterator<Item = Logger> + '_ {
        self.targets.iter().map(|(target, level)| Logger::builder().build(target.clone(), *level))
    }

    /// Specs that could not be parsed. They are reported once a logger is in place.
    pub fn rejected(&self) -> &[LogError] {
        &self.rejected
    }
}

/// Collects levels from expressions such as `info,scriptkit_txscript=trace`.
///
/// A bare level sets the root level, a bare target enables everything for it, and
/// `target=level` sets the level of one target. Later specs override earlier ones.
#[derive(Default)]
pub(super) struct Builder {
    root_level: Option<LevelFilter>,
    targets: BTreeMap<String, LevelFilter>,
    rejected: Vec<LogError>,
}

impl Builder {
    pub fn new() -> Builder {
        Default::default()
    }

    pub fn parse_env(&mut self, env: &str) -> &mut Self {
        self.parse_expression(&env::var(env).unwrap_or_default())
    }

    pub fn parse_expression(&mut self, expression: &str) -> &mut Self {
        for spec in expression.split(',').map(str::trim).filter(|spec| !spec.is_empty()) {
            match parse_spec(spec) {
                Ok((None, level)) => {
                    self.root_level(level);
                }
                Ok((Some(target), level)) => {
                    self.targets.insert(target.to_string(), level);
                }
                Err(err) => self.rejected.push(err),
            }
        }
        self
    }

    pub fn root_level(&mut self, root_level: LevelFilter) -> &mut Self {
        self.root_level = Some(root_level);
        self
    }

    pub fn build(&mut self) -> Loggers {
        Loggers {
            root_level: self.root_level.take().unwrap_or(LevelFilter::Error),
            targets: mem::take(&mut self.targets).into_iter().collect(),
            rejected: mem::take(&mut self.rejected),
        }
    }
}

fn parse_spec(spec: &str) -> Result<(Option<&str>, LevelFilter), LogError> {
    match spec.split_once('=') {
        None => Ok(spec.parse::<LevelFilter>().map_or((Some(spec), LevelFilter::max()), |level| (None, level))),
        Some((target, level)) => {
            let (target, level) = (target.trim(), level.trim());
            if target.is_empty() || level.contains('=') {
                return Err(LogError::ParseLoggerSpecError(spec.to_string()));
            }
            if level.is_empty() {
                return Ok((Some(target), LevelFilter::max()));
            }
            level.parse().map(|level| (Some(target), level)).map_err(|_| LogError::ParseLoggerSpecError(spec.to_string()))
        }
    }
}

impl FromStr for Builder {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut builder = Self::new();
        builder.parse_expression(s);
        Ok(builder)
    }
}
