//! dolog - printf 风格的控制台 / syslog 日志
//!
//! 特点：
//! - **`%` 占位符**：`%` 加任意字符按位置代入参数，参数只需实现 `Display`，
//!   说明符字母被忽略（`%d` 也能打印字符串和浮点数），`%%` 输出 `%`
//! - **永不失败的格式化**：参数不足时剩余占位符原样输出
//! - **显式传递**：配置通过 [`LogConfig`] 传入，不依赖全局开关
//! - **可替换后端**：控制台（+ syslog）或 `tracing`，构建时选择
//!
//! # 快速开始
//!
//! ```toml
//! [dependencies]
//! dolog = { version = "0.1" }
//! ```
//!
//! ```ignore
//! use dolog::{LogConfig, infolog, vinfolog, warnlog};
//!
//! let logger = LogConfig::daemon("dnsdist").timestamps(true).init()?;
//! infolog!(logger, "Bound to %s port %d", address, port);
//! vinfolog!(logger, "Got TCP connection from %s", remote);
//! warnlog!(logger, "Query took %d milliseconds", 1232.4); // %d 也没关系
//! ```
//!
//! # Features
//!
//! | Feature | 说明 |
//! |---------|------|
//! | `syslog` (默认) | 系统日志 sink（unix socket） |
//! | `tracing` (默认) | `tracing` 后端 |

mod config;
mod format;
pub mod global;
mod logger;
mod macros;
mod record;

#[cfg(test)]
mod capture;

#[cfg(feature = "syslog")]
mod syslog_sink;

#[cfg(feature = "tracing")]
mod tracing_sink;

pub use config::{LogConfig, OutputConfig};
pub use format::{format, write_template, Template};
pub use logger::{ConsoleSink, LogSink, Logger};
pub use record::{console_timestamp, Record, Severity};

#[cfg(feature = "syslog")]
pub use syslog_sink::{SyslogConnection, SyslogConnector, SyslogSink, UnixSocket};

#[cfg(feature = "tracing")]
pub use tracing_sink::TracingSink;

pub use dolog_config::{Backend, Facility, LogSettings};

// 宏通过 #[macro_export] 自动导出到 crate 根：
// infolog!, warnlog!, errlog!, vinfolog!, genlog!

/// 日志结果类型
pub type Result<T> = std::result::Result<T, Error>;

/// 日志系统错误类型
///
/// 格式化本身从不出错；这里只有 sink 和配置的失败。
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 控制台写入失败
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 系统日志连接或发送失败
    #[error("syslog error: {0}")]
    Syslog(String),
    /// 系统日志连接已关闭（重连失败后）
    #[error("syslog connection is not open")]
    NotConnected,
    /// 配置错误
    #[error(transparent)]
    Config(#[from] dolog_config::ConfigError),
    /// 后端未编译进来
    #[error("{0} backend not supported in this build")]
    Unsupported(&'static str),
    /// 进程级日志器已安装
    #[error("global logger already initialized")]
    AlreadyInitialized,
}
