//! 测试用 sink：收集写入的记录

use std::sync::{Arc, Mutex};

use crate::logger::LogSink;
use crate::record::Record;
use crate::Result;

#[derive(Debug, Default)]
pub(crate) struct Capture {
    records: Mutex<Vec<Record>>,
}

impl Capture {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Capture::default())
    }

    pub(crate) fn records(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }

    pub(crate) fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.message).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for Capture {
    fn write(&self, record: &Record) -> Result<()> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
