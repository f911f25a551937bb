//! dolog Config - Pure configuration data structures
//!
//! This crate contains only data structures and their (de)serialization, no
//! global state. It is the shared configuration vocabulary between the `dolog`
//! library and the `dolog` command line tool.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for [`LogSettings`]
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// Facility name or code is not a known syslog facility
    #[error("unknown syslog facility '{0}'")]
    UnknownFacility(String),

    /// Backend name is not one of `console`, `tracing`
    #[error("unknown backend '{0}' (expected 'console' or 'tracing')")]
    UnknownBackend(String),
}

/// System logger facility
///
/// Accepts names (`daemon`, `LOG_LOCAL0`, ...) or the numeric facility code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FacilityRepr", into = "String")]
pub enum Facility {
    Kern,
    User,
    Mail,
    #[default]
    Daemon,
    Auth,
    Syslog,
    Lpr,
    News,
    Uucp,
    Cron,
    AuthPriv,
    Ftp,
    Local0,
    Local1,
    Local2,
    Local3,
    Local4,
    Local5,
    Local6,
    Local7,
}

const FACILITIES: [Facility; 20] = [
    Facility::Kern,
    Facility::User,
    Facility::Mail,
    Facility::Daemon,
    Facility::Auth,
    Facility::Syslog,
    Facility::Lpr,
    Facility::News,
    Facility::Uucp,
    Facility::Cron,
    Facility::AuthPriv,
    Facility::Ftp,
    Facility::Local0,
    Facility::Local1,
    Facility::Local2,
    Facility::Local3,
    Facility::Local4,
    Facility::Local5,
    Facility::Local6,
    Facility::Local7,
];

impl Facility {
    /// Lowercase name without the `log_` prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            Facility::Kern => "kern",
            Facility::User => "user",
            Facility::Mail => "mail",
            Facility::Daemon => "daemon",
            Facility::Auth => "auth",
            Facility::Syslog => "syslog",
            Facility::Lpr => "lpr",
            Facility::News => "news",
            Facility::Uucp => "uucp",
            Facility::Cron => "cron",
            Facility::AuthPriv => "authpriv",
            Facility::Ftp => "ftp",
            Facility::Local0 => "local0",
            Facility::Local1 => "local1",
            Facility::Local2 => "local2",
            Facility::Local3 => "local3",
            Facility::Local4 => "local4",
            Facility::Local5 => "local5",
            Facility::Local6 => "local6",
            Facility::Local7 => "local7",
        }
    }

    /// Facility code as defined by RFC 3164 (0-11, 16-23)
    pub fn code(&self) -> u8 {
        match self {
            Facility::Kern => 0,
            Facility::User => 1,
            Facility::Mail => 2,
            Facility::Daemon => 3,
            Facility::Auth => 4,
            Facility::Syslog => 5,
            Facility::Lpr => 6,
            Facility::News => 7,
            Facility::Uucp => 8,
            Facility::Cron => 9,
            Facility::AuthPriv => 10,
            Facility::Ftp => 11,
            Facility::Local0 => 16,
            Facility::Local1 => 17,
            Facility::Local2 => 18,
            Facility::Local3 => 19,
            Facility::Local4 => 20,
            Facility::Local5 => 21,
            Facility::Local6 => 22,
            Facility::Local7 => 23,
        }
    }

    /// Look up a facility by its numeric code
    pub fn from_code(code: u8) -> Option<Self> {
        FACILITIES.iter().copied().find(|f| f.code() == code)
    }

    /// Parse a facility name (case-insensitive, optional `log_` prefix) or code
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return Facility::from_code(code)
                .ok_or_else(|| ConfigError::UnknownFacility(s.to_string()));
        }

        let lower = trimmed.to_ascii_lowercase();
        let name = lower.strip_prefix("log_").unwrap_or(&lower);
        FACILITIES
            .iter()
            .copied()
            .find(|f| f.as_str() == name)
            .ok_or_else(|| ConfigError::UnknownFacility(s.to_string()))
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Facility {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Facility::parse(s)
    }
}

impl From<Facility> for String {
    fn from(facility: Facility) -> Self {
        facility.as_str().to_string()
    }
}

/// Facility as written in a config file: a name or a numeric code
#[derive(Deserialize)]
#[serde(untagged)]
enum FacilityRepr {
    Code(u8),
    Name(String),
}

impl TryFrom<FacilityRepr> for Facility {
    type Error = ConfigError;

    fn try_from(repr: FacilityRepr) -> Result<Self, Self::Error> {
        match repr {
            FacilityRepr::Code(code) => Facility::from_code(code)
                .ok_or_else(|| ConfigError::UnknownFacility(code.to_string())),
            FacilityRepr::Name(name) => Facility::parse(&name),
        }
    }
}

/// Which delivery strategy a logger is built with
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Console line, plus the system logger when enabled
    #[default]
    Console,
    /// A single `tracing` subscriber receives every line
    Tracing,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Console => "console",
            Backend::Tracing => "tracing",
        }
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" => Ok(Backend::Console),
            "tracing" => Ok(Backend::Tracing),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}

/// Default program identifier attached to system logger messages
pub const DEFAULT_IDENT: &str = "dolog";

/// Logging settings
///
/// Every field has a default, so a partial JSON document is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// Enables verbose-info lines
    pub verbose: bool,
    /// Forward every line to the system logger as well
    pub syslog: bool,
    /// Prefix console lines with `Mon DD HH:MM:SS `
    pub timestamps: bool,
    /// System logger facility
    pub facility: Facility,
    /// Program identifier for the system logger
    pub ident: String,
    /// Delivery backend
    pub backend: Backend,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            verbose: false,
            syslog: false,
            timestamps: false,
            facility: Facility::default(),
            ident: DEFAULT_IDENT.to_string(),
            backend: Backend::default(),
        }
    }
}

impl LogSettings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }
}
