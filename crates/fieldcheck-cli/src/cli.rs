//! CLI argument definitions for fieldcheck.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "fieldcheck",
    version,
    about = "Normalize and validate form records using field type metadata",
    long_about = "Normalize and validate form records using field type metadata.\n\n\
                  Names are proper-cased, emails lower-cased, and telephone numbers\n\
                  formatted and verified through the configured verification service."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Service configuration file (JSON). FIELDCHECK_* variables override it.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Allow field values (PII) to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

impl Cli {
    /// Build logging configuration from CLI flags with consistent precedence.
    pub fn log_config(&self) -> LogConfig {
        let mut config = LogConfig {
            level_filter: self.verbosity.tracing_level_filter(),
            ..LogConfig::default()
        };
        config.use_env_filter = !(self.verbosity.is_present() || self.log_level.is_some());
        if let Some(level) = self.log_level {
            config.level_filter = match level {
                LogLevelArg::Error => LevelFilter::ERROR,
                LogLevelArg::Warn => LevelFilter::WARN,
                LogLevelArg::Info => LevelFilter::INFO,
                LogLevelArg::Debug => LevelFilter::DEBUG,
                LogLevelArg::Trace => LevelFilter::TRACE,
            };
        }
        config.format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        config.with_timestamps = self.log_timestamps;
        config.with_target = self.log_target;
        config.log_file = self.log_file.clone();
        config.log_data = self.log_data;
        config.with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        config
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a record and report changed fields.
    Normalize(NormalizeArgs),

    /// Validate email and telephone fields of a record.
    Validate(ValidateArgs),

    /// List the data-type tags and the action each one triggers.
    Tags,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Record file (JSON with a "fields" array).
    #[arg(value_name = "RECORD")]
    pub record: PathBuf,

    /// Write normalized values back into the record file.
    #[arg(long = "write")]
    pub write: bool,

    /// Locale for name casing (overrides the configured locale).
    #[arg(long = "locale", value_name = "TAG")]
    pub locale: Option<String>,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Record file (JSON with a "fields" array).
    #[arg(value_name = "RECORD")]
    pub record: PathBuf,

    /// Reject numbers whose network has no coverage data.
    #[arg(long = "treat-no-coverage-as-invalid")]
    pub treat_no_coverage_as_invalid: bool,

    /// Reject mobile numbers that are currently unreachable.
    #[arg(long = "treat-unavailable-as-invalid")]
    pub treat_unavailable_as_invalid: bool,

    /// Rejection message template; "{name}" is replaced by the field name.
    #[arg(long = "message", value_name = "TEMPLATE")]
    pub message_template: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_flags_reach_log_config() {
        let cli = Cli::parse_from([
            "fieldcheck",
            "--log-timestamps",
            "--log-target",
            "--log-level",
            "debug",
            "--log-format",
            "compact",
            "--color",
            "never",
            "tags",
        ]);
        let config = cli.log_config();
        assert!(config.with_timestamps);
        assert!(config.with_target);
        assert!(!config.with_ansi);
        assert!(!config.use_env_filter);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn log_config_defaults() {
        let config = Cli::parse_from(["fieldcheck", "tags"]).log_config();
        assert!(!config.with_timestamps);
        assert!(!config.with_target);
        assert!(!config.log_data);
        assert!(config.use_env_filter);
        assert_eq!(config.level_filter, LevelFilter::WARN);
    }
}
