//! dolog CLI - Command line interface
//!
//! 在 shell 里按 `%` 模板输出一行日志：控制台（可带时间戳）、syslog 或 tracing。
//!
//! ```text
//! dolog --syslog --facility local0 info "Bound to %s port %d" 0.0.0.0 53
//! ```

use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use dolog::{global, Backend, Facility, LogConfig};
use dolog_config::ConfigError;

mod config;
mod logging;

use crate::config::Overrides;
use crate::logging::LogFormat;

/// CLI 错误
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Log(#[from] dolog::Error),

    #[error("cannot install tracing subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// 日志级别参数
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LevelArg {
    Info,
    Warn,
    Error,
    /// verbose info：未开启 --verbose 时不输出
    Vinfo,
}

#[derive(Parser, Debug)]
#[command(
    name = "dolog",
    about = "Emit a printf-style log line to the console and/or syslog",
    version
)]
struct Cli {
    /// JSON settings file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose-info lines
    #[arg(short, long, overrides_with = "no_verbose")]
    verbose: bool,

    /// Disable verbose-info lines set in the config file
    #[arg(long, overrides_with = "verbose")]
    no_verbose: bool,

    /// Also send the line to the system logger
    #[arg(long, overrides_with = "no_syslog")]
    syslog: bool,

    /// Do not send to the system logger even if the config file asks for it
    #[arg(long, overrides_with = "syslog")]
    no_syslog: bool,

    /// Prefix console lines with `Mon DD HH:MM:SS `
    #[arg(long, overrides_with = "no_timestamps")]
    timestamps: bool,

    /// Drop the console timestamp prefix set in the config file
    #[arg(long, overrides_with = "timestamps")]
    no_timestamps: bool,

    /// Syslog facility (name or number)
    #[arg(long, value_name = "FACILITY")]
    facility: Option<Facility>,

    /// Program identifier for syslog
    #[arg(long, value_name = "NAME")]
    ident: Option<String>,

    /// Delivery backend: console or tracing
    #[arg(long, value_name = "BACKEND")]
    backend: Option<Backend>,

    /// Output format for the tracing backend
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    format: LogFormat,

    /// Severity of the line
    #[arg(value_enum)]
    level: LevelArg,

    /// Template; `%` plus any character takes the next argument, `%%` is a literal `%`
    template: String,

    /// Values substituted into the template
    args: Vec<String>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            verbose: switch(self.verbose, self.no_verbose),
            syslog: switch(self.syslog, self.no_syslog),
            timestamps: switch(self.timestamps, self.no_timestamps),
            facility: self.facility,
            ident: self.ident.clone(),
            backend: self.backend,
        }
    }
}

/// `--x` / `--no-x` 成对开关；都没给出时沿用配置文件
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let settings = config::resolve(cli.config.as_deref(), cli.overrides())?;

    if settings.backend == Backend::Tracing {
        logging::init(cli.format)?;
    }

    let logger = LogConfig::from_settings(settings).init()?;
    global::init(logger)?;

    let args: Vec<&dyn Display> = cli.args.iter().map(|a| a as &dyn Display).collect();
    emit(cli.level, &cli.template, &args)
}

/// 通过进程级日志器输出一行
fn emit(level: LevelArg, template: &str, args: &[&dyn Display]) -> Result<(), CliError> {
    let logger = global::logger();
    match level {
        LevelArg::Info => logger.info(template, args)?,
        LevelArg::Warn => logger.warn(template, args)?,
        LevelArg::Error => logger.error(template, args)?,
        LevelArg::Vinfo => logger.verbose_info(template, args)?,
    }
    Ok(())
}
