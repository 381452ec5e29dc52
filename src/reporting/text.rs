/*!
 * Text Trace Writer
 * Plain `<time> <status...>` lines to any writer
 */

use super::traits::Reporter;
use super::types::Snapshot;
use crate::core::errors::ReportError;
use crate::core::limits::TRACE_TIME_LABEL;
use std::io::Write;

pub struct TraceWriter<W: Write> {
    out: W,
}

impl<W: Write> TraceWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TraceWriter<W> {
    fn header(&mut self, names: &[&str]) -> Result<(), ReportError> {
        write!(self.out, "{}", TRACE_TIME_LABEL)?;
        for name in names {
            write!(self.out, " {}", name)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn snapshot(&mut self, snapshot: &Snapshot) -> Result<(), ReportError> {
        writeln!(self.out, "{}", snapshot)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessStatus;

    #[test]
    fn test_text_trace() {
        let mut writer = TraceWriter::new(Vec::new());
        writer.header(&["A", "B"]).unwrap();
        writer
            .snapshot(&Snapshot::new(
                0,
                vec![ProcessStatus::Running, ProcessStatus::Waiting],
            ))
            .unwrap();
        writer.finish().unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(text, "time A B\n0 R W\n");
    }

    #[test]
    fn test_file_trace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.txt");

        let file = std::fs::File::create(&path).unwrap();
        let mut writer = TraceWriter::new(std::io::BufWriter::new(file));
        writer.header(&["P"]).unwrap();
        writer
            .snapshot(&Snapshot::new(0, vec![ProcessStatus::Running]))
            .unwrap();
        writer.finish().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "time P\n0 R\n");
    }
}
