//! 日志记录定义

use core::fmt;
use core::fmt::Write as _;

use chrono::{DateTime, Local, TimeZone};

/// 日志严重级别
///
/// 与系统日志优先级一一对应：`info` / `warning` / `err`。
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// 一般信息（含 verbose info）
    Info,
    /// 警告
    Warning,
    /// 错误
    Error,
}

impl Severity {
    /// 将级别转换为字符串
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单条日志记录
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// 产生时刻（本地时间）
    pub time: DateTime<Local>,
    /// 严重级别
    pub severity: Severity,
    /// 格式化后的消息
    pub message: String,
}

impl Record {
    /// 创建新记录（当前时间）
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self::at(Local::now(), severity, message)
    }

    /// 创建指定时间的记录
    pub fn at(time: DateTime<Local>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            time,
            severity,
            message: message.into(),
        }
    }

    /// 控制台行（不含换行符）：`[Mon DD HH:MM:SS ]<message>`
    pub fn console_line(&self, timestamps: bool) -> String {
        if !timestamps {
            return self.message.clone();
        }
        match console_timestamp(&self.time) {
            Some(mut line) => {
                line.push_str(&self.message);
                line
            }
            None => self.message.clone(),
        }
    }
}

/// 控制台时间戳前缀，例如 `Jan 05 07:08:09 `
///
/// 时间格式化失败时返回 `None`，调用方直接省略前缀。
pub fn console_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> Option<String>
where
    Tz::Offset: fmt::Display,
{
    let mut prefix = String::with_capacity(16);
    write!(prefix, "{}", time.format("%b %d %H:%M:%S ")).ok()?;
    Some(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 5, 7, 8, 9).unwrap()
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Warning.to_string(), "WARNING");
    }

    #[test]
    fn test_record_creation() {
        let record = Record::new(Severity::Info, "test message");
        assert_eq!(record.severity, Severity::Info);
        assert_eq!(record.message, "test message");
    }

    #[test]
    fn test_console_timestamp() {
        assert_eq!(
            console_timestamp(&fixed_time()).as_deref(),
            Some("Jan 05 07:08:09 ")
        );
    }

    #[test]
    fn test_console_line() {
        let record = Record::at(fixed_time(), Severity::Error, "Unable to bind");
        assert_eq!(record.console_line(false), "Unable to bind");
        assert_eq!(record.console_line(true), "Jan 05 07:08:09 Unable to bind");
    }

    #[test]
    fn test_console_line_24_hour_clock() {
        let time = Local.with_ymd_and_hms(2023, 11, 30, 23, 59, 1).unwrap();
        let record = Record::at(time, Severity::Info, "x");
        assert_eq!(record.console_line(true), "Nov 30 23:59:01 x");
    }

    #[test]
    fn test_record_clone_eq() {
        let record = Record::at(fixed_time(), Severity::Info, "same");
        assert_eq!(record.clone(), record);
        assert_ne!(Record::at(fixed_time(), Severity::Error, "same"), record);
    }
}
