//! CLI 配置
//!
//! 配置文件（可选）打底，命令行参数覆盖。

use std::path::Path;

use dolog_config::{Backend, ConfigError, Facility, LogSettings};

/// 命令行上给出的覆盖项，`None` 表示沿用配置文件
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub verbose: Option<bool>,
    pub syslog: Option<bool>,
    pub timestamps: Option<bool>,
    pub facility: Option<Facility>,
    pub ident: Option<String>,
    pub backend: Option<Backend>,
}

impl Overrides {
    /// 应用到设置上：给出的字段替换文件中的值
    pub fn apply(self, mut settings: LogSettings) -> LogSettings {
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(syslog) = self.syslog {
            settings.syslog = syslog;
        }
        if let Some(timestamps) = self.timestamps {
            settings.timestamps = timestamps;
        }
        if let Some(facility) = self.facility {
            settings.facility = facility;
        }
        if let Some(ident) = self.ident {
            settings.ident = ident;
        }
        if let Some(backend) = self.backend {
            settings.backend = backend;
        }
        settings
    }
}

/// 读取配置文件（如有）并应用覆盖项
pub fn resolve(file: Option<&Path>, overrides: Overrides) -> Result<LogSettings, ConfigError> {
    let base = match file {
        Some(path) => LogSettings::load(path)?,
        None => LogSettings::default(),
    };
    Ok(overrides.apply(base))
}
