//! 日志器实现

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use core::fmt::Display;

use dolog_config::Facility;

use crate::format::format;
use crate::record::{Record, Severity};
use crate::Result;

/// 日志输出目标trait
pub trait LogSink: Send + Sync {
    /// 写入日志记录
    fn write(&self, record: &Record) -> Result<()>;

    /// 重新设置系统日志 facility
    ///
    /// 持有系统日志连接的 sink 必须先关闭旧连接再重新打开；其他 sink 忽略。
    fn set_facility(&self, facility: Facility) -> Result<()> {
        let _ = facility;
        Ok(())
    }
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn write(&self, record: &Record) -> Result<()> {
        (**self).write(record)
    }

    fn set_facility(&self, facility: Facility) -> Result<()> {
        (**self).set_facility(facility)
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn write(&self, record: &Record) -> Result<()> {
        (**self).write(record)
    }

    fn set_facility(&self, facility: Facility) -> Result<()> {
        (**self).set_facility(facility)
    }
}

/// 日志器配置和状态
///
/// 所有 sink 共用一把锁：同一个日志器写出的行不会互相穿插。
pub struct Logger {
    /// verbose info 开关（原子存储）
    verbose: AtomicBool,
    /// 输出目标列表（按添加顺序写入）
    sinks: Mutex<Vec<Box<dyn LogSink>>>,
}

impl Logger {
    /// 创建新的日志器（无 sink）
    pub fn new(verbose: bool) -> Arc<Self> {
        Arc::new(Logger {
            verbose: AtomicBool::new(verbose),
            sinks: Mutex::new(Vec::new()),
        })
    }

    /// 添加输出目标
    pub fn with_sink<S: LogSink + 'static>(self: Arc<Self>, sink: S) -> Arc<Self> {
        self.add_sink(sink);
        self
    }

    /// 添加 sink（内部方法，用于 config）
    pub fn add_sink<S: LogSink + 'static>(&self, sink: S) {
        self.sinks().push(Box::new(sink));
    }

    /// 当前 sink 数量
    pub fn sink_count(&self) -> usize {
        self.sinks().len()
    }

    /// 动态开关 verbose info
    pub fn set_verbose(&self, verbose: bool) {
        self.verbose.store(verbose, Ordering::Relaxed);
    }

    /// verbose info 是否启用
    pub fn is_verbose(&self) -> bool {
        self.verbose.load(Ordering::Relaxed)
    }

    /// 格式化并写入所有 sink
    ///
    /// 每个 sink 都会被尝试；返回第一个 sink 错误。
    #[inline(never)]
    pub fn log(&self, severity: Severity, template: &str, args: &[&dyn Display]) -> Result<()> {
        let record = Record::new(severity, format(template, args));
        self.dispatch(&record)
    }

    /// 写入一条已格式化的记录
    pub fn dispatch(&self, record: &Record) -> Result<()> {
        let sinks = self.sinks();
        let mut first_err = None;
        for sink in sinks.iter() {
            if let Err(e) = sink.write(record) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    pub fn info(&self, template: &str, args: &[&dyn Display]) -> Result<()> {
        self.log(Severity::Info, template, args)
    }

    pub fn warn(&self, template: &str, args: &[&dyn Display]) -> Result<()> {
        self.log(Severity::Warning, template, args)
    }

    pub fn error(&self, template: &str, args: &[&dyn Display]) -> Result<()> {
        self.log(Severity::Error, template, args)
    }

    /// verbose info：未启用时直接返回，不格式化
    pub fn verbose_info(&self, template: &str, args: &[&dyn Display]) -> Result<()> {
        if !self.is_verbose() {
            return Ok(());
        }
        self.info(template, args)
    }

    /// 重新设置系统日志 facility（影响之后的所有写入）
    ///
    /// 持有 sink 锁完成关闭和重连，不会与本日志器的写入交错。
    pub fn set_facility(&self, facility: Facility) -> Result<()> {
        let sinks = self.sinks();
        let mut first_err = None;
        for sink in sinks.iter() {
            if let Err(e) = sink.set_facility(facility) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    /// 创建没有任何 sink 的日志器（用于测试或禁用场景）
    pub fn noop() -> Arc<Self> {
        Self::new(false)
    }

    fn sinks(&self) -> MutexGuard<'_, Vec<Box<dyn LogSink>>> {
        self.sinks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl core::fmt::Debug for Logger {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Logger")
            .field("verbose", &self.is_verbose())
            .field("sinks", &self.sink_count())
            .finish()
    }
}

// 日志器本身也是 sink，支持链式日志器
impl LogSink for Logger {
    fn write(&self, record: &Record) -> Result<()> {
        self.dispatch(record)
    }

    fn set_facility(&self, facility: Facility) -> Result<()> {
        Logger::set_facility(self, facility)
    }
}

/// 控制台 sink：`[Mon DD HH:MM:SS ]<line>\n`，每行刷新
pub struct ConsoleSink {
    out: Mutex<Box<dyn Write + Send>>,
    timestamps: bool,
}

impl ConsoleSink {
    /// 写到标准输出
    pub fn stdout(timestamps: bool) -> Self {
        Self::with_writer(io::stdout(), timestamps)
    }

    /// 写到任意 writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W, timestamps: bool) -> Self {
        ConsoleSink {
            out: Mutex::new(Box::new(writer)),
            timestamps,
        }
    }

    /// 是否带时间戳前缀
    pub fn timestamps(&self) -> bool {
        self.timestamps
    }
}

impl LogSink for ConsoleSink {
    fn write(&self, record: &Record) -> Result<()> {
        let line = record.console_line(self.timestamps);
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}
