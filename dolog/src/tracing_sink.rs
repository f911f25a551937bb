//! tracing 后端：每行作为一个 `tracing` 事件发出
//!
//! 时间戳、输出位置都交给订阅者决定。

use crate::logger::LogSink;
use crate::record::{Record, Severity};
use crate::Result;

/// 事件 target
pub const TARGET: &str = "dolog";

/// 转发到当前 `tracing` 订阅者
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, record: &Record) -> Result<()> {
        let message = record.message.as_str();
        match record.severity {
            Severity::Info => tracing::info!(target: TARGET, "{message}"),
            Severity::Warning => tracing::warn!(target: TARGET, "{message}"),
            Severity::Error => tracing::error!(target: TARGET, "{message}"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_events_reach_subscriber() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingSink
                .write(&Record::new(Severity::Info, "Bound to 0.0.0.0 port 53"))
                .unwrap();
            TracingSink
                .write(&Record::new(Severity::Warning, "Query took 12 milliseconds"))
                .unwrap();
            TracingSink
                .write(&Record::new(Severity::Error, "Unable to bind"))
                .unwrap();
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("Bound to 0.0.0.0 port 53"));
        assert!(lines[1].contains("WARN"));
        assert!(lines[1].contains("dolog"));
        assert!(lines[1].contains("Query took 12 milliseconds"));
        assert!(lines[2].contains("ERROR"));
        assert!(lines[2].contains("Unable to bind"));
    }
}
