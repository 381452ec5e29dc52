/*!
 * Record Loader
 * Parses `name totalService arrival` lines into validated process records
 *
 * Blank lines and `#` comments are skipped. Everything else must be exactly
 * three whitespace-separated fields with non-negative integer service and
 * arrival values; anything else is rejected before the simulation starts.
 */

use crate::core::errors::LoadError;
use crate::process::ProcessRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Load every record from the file at `path`
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<ProcessRecord>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let records = parse_records(BufReader::new(file))?;
    info!(path = %path.display(), count = records.len(), "loaded process records");
    Ok(records)
}

/// Parse records from any buffered reader, in file order
pub fn parse_records(reader: impl BufRead) -> Result<Vec<ProcessRecord>, LoadError> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let record = parse_line(trimmed, index + 1)?;
        debug!(line = index + 1, name = %record.name, "parsed record");
        records.push(record);
    }
    Ok(records)
}

fn parse_line(line: &str, line_no: usize) -> Result<ProcessRecord, LoadError> {
    let invalid = |reason: String| LoadError::InvalidRecord {
        line: line_no,
        reason,
    };

    let mut fields = line.split_whitespace();
    let name = fields
        .next()
        .ok_or_else(|| invalid("missing name".into()))?;
    let total_service = parse_field(fields.next(), "totalService").map_err(invalid)?;
    let arrival = parse_field(fields.next(), "arrival").map_err(invalid)?;

    if let Some(extra) = fields.next() {
        return Err(invalid(format!("unexpected trailing field {:?}", extra)));
    }

    Ok(ProcessRecord::new(name, total_service, arrival))
}

fn parse_field(field: Option<&str>, label: &str) -> Result<u64, String> {
    let raw = field.ok_or_else(|| format!("missing {}", label))?;
    raw.parse::<u64>()
        .map_err(|_| format!("{} {:?} is not a non-negative integer", label, raw))
}
