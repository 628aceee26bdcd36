//! File sinks for crawled records
//!
//! Every format writes the same seven columns in `PlayerRecord::COLUMNS`
//! order, one row per record, in the order received.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, XlsxError};
use soccerwiki_core::{PlayerRecord, RecordSink, SinkError};

use crate::cli::OutputFormat;

const SHEET_NAME: &str = "Players";

/// Writes records to a single-sheet `.xlsx` workbook.
pub struct XlsxSink {
    path: PathBuf,
}

impl XlsxSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Header row followed by one row per record.
fn build_workbook(records: &[PlayerRecord]) -> std::result::Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, name) in PlayerRecord::COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }
    for (row, record) in records.iter().enumerate() {
        for (col, value) in record.row().iter().enumerate() {
            sheet.write_string(row as u32 + 1, col as u16, *value)?;
        }
    }

    Ok(workbook)
}

fn encode_error(e: impl std::fmt::Display) -> SinkError {
    SinkError::Encode(e.to_string())
}

impl RecordSink for XlsxSink {
    fn write_records(&mut self, records: &[PlayerRecord]) -> std::result::Result<(), SinkError> {
        let mut workbook = build_workbook(records).map_err(encode_error)?;
        workbook.save(&self.path).map_err(encode_error)
    }
}

/// Writes records as CSV with a header row.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> std::result::Result<W, SinkError> {
        self.writer
            .into_inner()
            .map_err(|e| SinkError::Io(e.into_error()))
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_records(&mut self, records: &[PlayerRecord]) -> std::result::Result<(), SinkError> {
        self.writer
            .write_record(PlayerRecord::COLUMNS)
            .map_err(encode_error)?;
        for record in records {
            self.writer.write_record(record.row()).map_err(encode_error)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes records as a pretty-printed JSON array.
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for JsonSink<W> {
    fn write_records(&mut self, records: &[PlayerRecord]) -> std::result::Result<(), SinkError> {
        serde_json::to_writer_pretty(&mut self.writer, records).map_err(encode_error)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Open the sink for `format` at `path`, creating parent directories.
pub fn open_sink(format: OutputFormat, path: &Path) -> Result<Box<dyn RecordSink>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed creating directory {}", parent.display()))?;
    }

    let sink: Box<dyn RecordSink> = match format {
        OutputFormat::Xlsx => Box::new(XlsxSink::new(path)),
        OutputFormat::Csv => Box::new(CsvSink::new(BufWriter::new(create(path)?))),
        OutputFormat::Json => Box::new(JsonSink::new(BufWriter::new(create(path)?))),
    };
    Ok(sink)
}

fn create(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("failed creating {}", path.display()))
}
