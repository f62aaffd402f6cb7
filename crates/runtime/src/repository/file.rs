//! CSV-backed action source.
//!
//! Action logs are headed CSV files with the columns
//! `date,actor,action_type,target,metadata`. The whole log is read and
//! validated up front, so a malformed row fails before any action is applied.
//! Short rows are accepted; their missing trailing fields read as empty.

use std::collections::VecDeque;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::api::{Result, RuntimeError};

use super::{ActionRecord, ActionSource};

pub struct CsvActionSource {
    records: VecDeque<ActionRecord>,
}

impl CsvActionSource {
    /// Reads every record from a CSV file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(path)?;
        let source = Self::from_csv(reader)?;
        debug!(path = %path.display(), records = source.remaining(), "opened action log");
        Ok(source)
    }

    /// Reads every record from any reader, e.g. stdin or an in-memory buffer.
    pub fn from_reader(reader: impl io::Read) -> Result<Self> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        Self::from_csv(reader)
    }

    fn from_csv<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let headers = reader.headers()?.clone();
        let mut records = VecDeque::new();
        for row in reader.records() {
            let mut row = row?;
            while row.len() < headers.len() {
                row.push_field("");
            }
            records.push_back(row.deserialize::<ActionRecord>(Some(&headers))?);
        }
        Ok(Self { records })
    }

    /// Records not yet consumed.
    pub fn remaining(&self) -> usize {
        self.records.len()
    }
}

impl ActionSource for CsvActionSource {
    fn has_another_action(&self) -> bool {
        !self.records.is_empty()
    }

    fn next_action(&mut self) -> Result<ActionRecord> {
        self.records
            .pop_front()
            .ok_or(RuntimeError::SourceExhausted)
    }
}
