use crate::error::Error;
use clap::{arg, parser::ValueSource::DefaultValue, Arg, ArgAction, Command};
use serde::{Deserialize, Serialize};
use std::{
    ffi::OsString,
    fmt::{Display, Formatter},
    fs,
    str::FromStr,
};
use toml::from_str;

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Args {
    pub scripts: Vec<String>,
    pub asm: bool,
    pub format: OutputFormat,
    pub view: bool,
    #[serde(rename = "loglevel")]
    pub log_level: String,
    pub logdir: Option<String>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            scripts: vec![],
            asm: false,
            format: OutputFormat::Text,
            view: false,
            log_level: DEFAULT_LOG_LEVEL.into(),
            logdir: None,
        }
    }
}

pub fn cli() -> Command {
    let defaults = Args::default();

    Command::new("script-classify")
        .about(format!("{} v{}", env!("CARGO_PKG_DESCRIPTION"), env!("CARGO_PKG_VERSION")))
        .version(env!("CARGO_PKG_VERSION"))
        .arg(arg!(-C --configfile <CONFIG_FILE> "Path of config file."))
        .arg(
            Arg::new("scripts")
                .value_name("SCRIPT")
                .num_args(0..)
                .action(ArgAction::Append)
                .value_parser(clap::value_parser!(String))
                .help("Scripts to classify, hex encoded (or ASM with --asm). Read from stdin, one per line, when omitted."),
        )
        .arg(arg!(--asm "Parse scripts as ASM, e.g. 'OP_DUP OP_HASH160 <hex> OP_EQUALVERIFY OP_CHECKSIG'."))
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .require_equals(false)
                .value_parser(clap::value_parser!(OutputFormat))
                .help(format!("Output format, text or json (default: {}).", defaults.format)),
        )
        .arg(arg!(--view "Print the disassembly of every script."))
        .arg(
            Arg::new("log_level")
                .short('d')
                .long("loglevel")
                .value_name("LEVEL")
                .default_value(DEFAULT_LOG_LEVEL)
                .value_parser(clap::value_parser!(String))
                .help("Logging level for all subsystems {off, error, warn, info, debug, trace}\n-- You may also specify <subsystem>=<level>,<subsystem2>=<level>,... to set the log level for individual subsystems."),
        )
        .arg(arg!(--logdir <LOG_DIR> "Directory to log output."))
}

/// Reads a TOML config file holding any subset of the [`Args`] fields.
fn load_config(path: &str) -> Result<Args, clap::Error> {
    let config_str = fs::read_to_string(path)?;
    from_str(&config_str).map_err(|err| {
        clap::Error::raw(clap::error::ErrorKind::ValueValidation, format!("invalid config file {path}: {}\n", err.message()))
    })
}

impl Args {
    /// Parses the command line. Values given on it override the config file passed
    /// with `--configfile`, which in turn overrides the defaults.
    pub fn parse<I, T>(itr: I) -> Result<Args, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let m = cli().try_get_matches_from(itr)?;
        let defaults = match m.get_one::<String>("configfile") {
            Some(path) => load_config(path)?,
            None => Args::default(),
        };

        let args = Args {
            scripts: arg_match_many_unwrap_or::<String>(&m, "scripts", defaults.scripts),
            asm: arg_match_unwrap_or::<bool>(&m, "asm", defaults.asm),
            format: arg_match_unwrap_or::<OutputFormat>(&m, "format", defaults.format),
            view: arg_match_unwrap_or::<bool>(&m, "view", defaults.view),
            log_level: arg_match_unwrap_or::<String>(&m, "log_level", defaults.log_level),
            logdir: m.get_one::<String>("logdir").cloned().or(defaults.logdir),
        };

        Ok(args)
    }
}

pub fn parse_args() -> Args {
    match Args::parse(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => err.exit(),
    }
}

/// The value given explicitly on the command line, or `default`.
fn arg_match_unwrap_or<T: Clone + Send + Sync + 'static>(m: &clap::ArgMatches, arg_id: &str, default: T) -> T {
    match m.value_source(arg_id) {
        None | Some(DefaultValue) => default,
        Some(_) => m.get_one::<T>(arg_id).cloned().unwrap_or(default),
    }
}

fn arg_match_many_unwrap_or<T: Clone + Send + Sync + 'static>(m: &clap::ArgMatches, arg_id: &str, default: Vec<T>) -> Vec<T> {
    m.get_many::<T>(arg_id).map(|values| values.cloned().collect()).unwrap_or(default)
}
