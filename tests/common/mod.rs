//! 测试辅助工具
//!
//! 内存 writer 和假的 syslog 连接器，端到端测试不接触真实 IO。

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use dolog_workspace::{Facility, Result, Severity, SyslogConnection, SyslogConnector};

/// 共享内存缓冲，可作为控制台 writer
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// syslog 收到的一条消息
#[derive(Clone, Debug, PartialEq)]
pub struct SyslogLine {
    pub ident: String,
    pub facility: Facility,
    pub severity: Severity,
    pub message: String,
}

/// 记录连接和消息的假 syslog
#[derive(Clone, Default)]
pub struct FakeSyslog {
    pub opened: Arc<AtomicUsize>,
    pub live: Arc<AtomicUsize>,
    pub lines: Arc<Mutex<Vec<SyslogLine>>>,
}

impl FakeSyslog {
    pub fn live_connections(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    pub fn opened_connections(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn lines(&self) -> Vec<SyslogLine> {
        self.lines.lock().unwrap().clone()
    }
}

struct FakeConnection {
    ident: String,
    facility: Facility,
    live: Arc<AtomicUsize>,
    lines: Arc<Mutex<Vec<SyslogLine>>>,
}

impl SyslogConnector for FakeSyslog {
    fn connect(&self, ident: &str, facility: Facility) -> Result<Box<dyn SyslogConnection>> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        self.live.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakeConnection {
            ident: ident.to_string(),
            facility,
            live: Arc::clone(&self.live),
            lines: Arc::clone(&self.lines),
        }))
    }
}

impl SyslogConnection for FakeConnection {
    fn send(&mut self, severity: Severity, message: &str) -> Result<()> {
        self.lines.lock().unwrap().push(SyslogLine {
            ident: self.ident.clone(),
            facility: self.facility,
            severity,
            message: message.to_string(),
        });
        Ok(())
    }
}

impl Drop for FakeConnection {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}
