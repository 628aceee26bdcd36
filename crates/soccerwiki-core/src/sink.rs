//! Record sinks
//!
//! The crawl ends by handing its sorted records to a sink. Sinks only
//! persist; they must not reorder or alter records.

use crate::error::SinkError;
use crate::types::{CrawlReport, PlayerRecord};

/// Destination for crawled records (spreadsheet, CSV, memory, ...).
pub trait RecordSink {
    /// Persist `records` in the given order
    fn write_records(&mut self, records: &[PlayerRecord]) -> Result<(), SinkError>;
}

/// Hand a finished crawl to a sink, returning how many rows were written.
pub fn deliver<K>(report: &CrawlReport, sink: &mut K) -> Result<usize, SinkError>
where
    K: RecordSink + ?Sized,
{
    sink.write_records(&report.records)?;
    Ok(report.records.len())
}

/// Sink that keeps records in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<PlayerRecord>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records written so far
    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }

    /// Consume the sink, returning what was written
    pub fn into_records(self) -> Vec<PlayerRecord> {
        self.records
    }
}

impl RecordSink for MemorySink {
    fn write_records(&mut self, records: &[PlayerRecord]) -> Result<(), SinkError> {
        self.records.extend_from_slice(records);
        Ok(())
    }
}
