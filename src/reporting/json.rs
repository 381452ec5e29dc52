/*!
 * JSON Lines Trace Writer
 * One serde_json object per line: a header record, then one record per tick
 */

use super::traits::Reporter;
use super::types::Snapshot;
use crate::core::errors::ReportError;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct HeaderRecord<'a> {
    processes: &'a [&'a str],
}

pub struct JsonLinesWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record<T: Serialize>(&mut self, record: &T) -> Result<(), ReportError> {
        serde_json::to_writer(&mut self.out, record)?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> Reporter for JsonLinesWriter<W> {
    fn header(&mut self, names: &[&str]) -> Result<(), ReportError> {
        self.write_record(&HeaderRecord { processes: names })
    }

    fn snapshot(&mut self, snapshot: &Snapshot) -> Result<(), ReportError> {
        self.write_record(snapshot)
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        self.out.flush()?;
        Ok(())
    }
}
