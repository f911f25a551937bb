//! 系统日志 sink
//!
//! 连接在创建时立即打开，标识为 `ident[pid]`。修改 facility 时先关闭旧连接
//! 再重新打开，任何时刻每个 sink 至多持有一个连接。

use std::sync::{Mutex, MutexGuard, PoisonError};

use dolog_config::Facility;

use crate::logger::LogSink;
use crate::record::{Record, Severity};
use crate::{Error, Result};

/// 一个已打开的系统日志连接，drop 即关闭
pub trait SyslogConnection: Send {
    fn send(&mut self, severity: Severity, message: &str) -> Result<()>;
}

/// 打开系统日志连接
pub trait SyslogConnector: Send + Sync {
    fn connect(&self, ident: &str, facility: Facility) -> Result<Box<dyn SyslogConnection>>;
}

/// 本机 unix socket（`/dev/log` 等），RFC 3164 格式
#[derive(Clone, Copy, Debug, Default)]
pub struct UnixSocket;

impl SyslogConnector for UnixSocket {
    fn connect(&self, ident: &str, facility: Facility) -> Result<Box<dyn SyslogConnection>> {
        let formatter = ::syslog::Formatter3164 {
            facility: syslog_facility(facility),
            hostname: None,
            process: ident.to_string(),
            pid: std::process::id(),
        };
        let logger = ::syslog::unix(formatter).map_err(|e| Error::Syslog(e.to_string()))?;
        Ok(Box::new(UnixConnection(logger)))
    }
}

struct UnixConnection(::syslog::Logger<::syslog::LoggerBackend, ::syslog::Formatter3164>);

impl SyslogConnection for UnixConnection {
    fn send(&mut self, severity: Severity, message: &str) -> Result<()> {
        let sent = match severity {
            Severity::Info => self.0.info(message),
            Severity::Warning => self.0.warning(message),
            Severity::Error => self.0.err(message),
        };
        sent.map_err(|e| Error::Syslog(e.to_string()))
    }
}

/// 映射到 `syslog` crate 的 facility
pub(crate) fn syslog_facility(facility: Facility) -> ::syslog::Facility {
    use ::syslog::Facility as F;
    match facility {
        Facility::Kern => F::LOG_KERN,
        Facility::User => F::LOG_USER,
        Facility::Mail => F::LOG_MAIL,
        Facility::Daemon => F::LOG_DAEMON,
        Facility::Auth => F::LOG_AUTH,
        Facility::Syslog => F::LOG_SYSLOG,
        Facility::Lpr => F::LOG_LPR,
        Facility::News => F::LOG_NEWS,
        Facility::Uucp => F::LOG_UUCP,
        Facility::Cron => F::LOG_CRON,
        Facility::AuthPriv => F::LOG_AUTHPRIV,
        Facility::Ftp => F::LOG_FTP,
        Facility::Local0 => F::LOG_LOCAL0,
        Facility::Local1 => F::LOG_LOCAL1,
        Facility::Local2 => F::LOG_LOCAL2,
        Facility::Local3 => F::LOG_LOCAL3,
        Facility::Local4 => F::LOG_LOCAL4,
        Facility::Local5 => F::LOG_LOCAL5,
        Facility::Local6 => F::LOG_LOCAL6,
        Facility::Local7 => F::LOG_LOCAL7,
    }
}

struct SyslogState {
    facility: Facility,
    connection: Option<Box<dyn SyslogConnection>>,
}

/// 系统日志 sink
pub struct SyslogSink {
    ident: String,
    connector: Box<dyn SyslogConnector>,
    state: Mutex<SyslogState>,
}

impl SyslogSink {
    /// 通过本机 unix socket 打开
    pub fn open(ident: impl Into<String>, facility: Facility) -> Result<Self> {
        Self::with_connector(ident, facility, UnixSocket)
    }

    /// 使用自定义连接器打开
    pub fn with_connector<C: SyslogConnector + 'static>(
        ident: impl Into<String>,
        facility: Facility,
        connector: C,
    ) -> Result<Self> {
        let ident = ident.into();
        let connection = connector.connect(&ident, facility)?;
        Ok(SyslogSink {
            ident,
            connector: Box::new(connector),
            state: Mutex::new(SyslogState {
                facility,
                connection: Some(connection),
            }),
        })
    }

    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// 当前 facility
    pub fn facility(&self) -> Facility {
        self.state().facility
    }

    /// 是否持有连接（重连失败后为 false）
    pub fn is_connected(&self) -> bool {
        self.state().connection.is_some()
    }

    /// 关闭当前连接，并以新 facility 重新打开
    ///
    /// 重连失败时保持关闭状态，之后的写入返回 [`Error::NotConnected`]。
    pub fn reopen(&self, facility: Facility) -> Result<()> {
        let mut state = self.state();
        state.connection = None;
        state.facility = facility;
        state.connection = Some(self.connector.connect(&self.ident, facility)?);
        Ok(())
    }

    fn state(&self) -> MutexGuard<'_, SyslogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl core::fmt::Debug for SyslogSink {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = self.state();
        f.debug_struct("SyslogSink")
            .field("ident", &self.ident)
            .field("facility", &state.facility)
            .field("connected", &state.connection.is_some())
            .finish()
    }
}

impl LogSink for SyslogSink {
    fn write(&self, record: &Record) -> Result<()> {
        match self.state().connection.as_mut() {
            Some(connection) => connection.send(record.severity, &record.message),
            None => Err(Error::NotConnected),
        }
    }

    fn set_facility(&self, facility: Facility) -> Result<()> {
        self.reopen(facility)
    }
}
