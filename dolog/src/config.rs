//! 日志配置
//!
//! 由 [`LogSettings`] 或构建器方法决定输出目标，一键初始化日志器。

use std::path::Path;
use std::sync::Arc;

use dolog_config::{Backend, Facility, LogSettings};

use crate::logger::{ConsoleSink, LogSink};
use crate::{Logger, Result};
#[cfg(not(all(feature = "syslog", feature = "tracing")))]
use crate::Error;

/// 日志输出目标（按写入顺序）
#[derive(Clone, Debug, PartialEq)]
pub enum OutputConfig {
    /// 系统日志
    Syslog { ident: String, facility: Facility },
    /// 标准输出，可选时间戳前缀
    Console { timestamps: bool },
    /// `tracing` 订阅者
    Tracing,
}

/// 日志配置
///
/// # 示例
///
/// ```
/// use dolog::LogConfig;
///
/// let logger = LogConfig::new().verbose(true).timestamps(true).init().unwrap();
/// assert!(logger.is_verbose());
/// dolog::vinfolog!(logger, "Got %s connection from %s", "TCP", "127.0.0.1");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogConfig {
    /// 基础设置
    pub settings: LogSettings,
}

impl LogConfig {
    /// 默认设置：控制台，无 syslog，无时间戳，verbose 关闭
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: LogSettings) -> Self {
        LogConfig { settings }
    }

    /// 从 JSON 配置文件加载
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_settings(LogSettings::load(path)?))
    }

    /// 开发环境推荐配置
    ///
    /// - verbose 开启
    /// - 控制台带时间戳
    pub fn dev() -> Self {
        Self::new().verbose(true).timestamps(true)
    }

    /// 守护进程推荐配置
    ///
    /// - 控制台 + syslog（daemon facility）
    /// - 无时间戳（syslog 自带）
    pub fn daemon(ident: impl Into<String>) -> Self {
        Self::new()
            .syslog(true)
            .facility(Facility::Daemon)
            .ident(ident)
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.settings.verbose = verbose;
        self
    }

    pub fn syslog(mut self, syslog: bool) -> Self {
        self.settings.syslog = syslog;
        self
    }

    pub fn timestamps(mut self, timestamps: bool) -> Self {
        self.settings.timestamps = timestamps;
        self
    }

    pub fn facility(mut self, facility: Facility) -> Self {
        self.settings.facility = facility;
        self
    }

    pub fn ident(mut self, ident: impl Into<String>) -> Self {
        self.settings.ident = ident.into();
        self
    }

    pub fn backend(mut self, backend: Backend) -> Self {
        self.settings.backend = backend;
        self
    }

    /// 解析出的输出目标
    pub fn outputs(&self) -> Vec<OutputConfig> {
        let settings = &self.settings;
        let mut outputs = Vec::new();
        match settings.backend {
            Backend::Console => {
                if settings.syslog {
                    outputs.push(OutputConfig::Syslog {
                        ident: settings.ident.clone(),
                        facility: settings.facility,
                    });
                }
                outputs.push(OutputConfig::Console {
                    timestamps: settings.timestamps,
                });
            }
            Backend::Tracing => outputs.push(OutputConfig::Tracing),
        }
        outputs
    }

    /// 初始化日志系统
    ///
    /// syslog 连接无法打开，或所需后端未编译进来时返回错误。
    pub fn init(self) -> Result<Arc<Logger>> {
        self.build(open_syslog)
    }

    /// 使用自定义 syslog 连接器初始化
    #[cfg(feature = "syslog")]
    pub fn init_with_connector<C>(self, connector: C) -> Result<Arc<Logger>>
    where
        C: crate::SyslogConnector + Clone + 'static,
    {
        self.build(|ident, facility| {
            let sink = crate::SyslogSink::with_connector(ident, facility, connector.clone())?;
            Ok(Box::new(sink) as Box<dyn LogSink>)
        })
    }

    fn build<F>(self, mut open_syslog: F) -> Result<Arc<Logger>>
    where
        F: FnMut(String, Facility) -> Result<Box<dyn LogSink>>,
    {
        let logger = Logger::new(self.settings.verbose);

        for output in self.outputs() {
            match output {
                OutputConfig::Syslog { ident, facility } => {
                    logger.add_sink(open_syslog(ident, facility)?);
                }
                OutputConfig::Console { timestamps } => {
                    logger.add_sink(ConsoleSink::stdout(timestamps));
                }
                OutputConfig::Tracing => {
                    logger.add_sink(tracing_sink()?);
                }
            }
        }

        Ok(logger)
    }
}

impl From<LogSettings> for LogConfig {
    fn from(settings: LogSettings) -> Self {
        Self::from_settings(settings)
    }
}

#[cfg(feature = "syslog")]
fn open_syslog(ident: String, facility: Facility) -> Result<Box<dyn LogSink>> {
    Ok(Box::new(crate::SyslogSink::open(ident, facility)?))
}

#[cfg(not(feature = "syslog"))]
fn open_syslog(ident: String, facility: Facility) -> Result<Box<dyn LogSink>> {
    let _ = (ident, facility);
    Err(Error::Unsupported("syslog"))
}

#[cfg(feature = "tracing")]
fn tracing_sink() -> Result<Box<dyn LogSink>> {
    Ok(Box::new(crate::TracingSink))
}

#[cfg(not(feature = "tracing"))]
fn tracing_sink() -> Result<Box<dyn LogSink>> {
    Err(Error::Unsupported("tracing"))
}
