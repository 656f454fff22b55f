//! Workload input provider.
//!
//! Parses process records from structured text: one `pid arrival burst
//! priority` line per process, whitespace separated. Any malformed line
//! rejects the whole input, since the schedulers assume a consistent,
//! complete list.

use crate::core::{Pid, ProcessRecord, Ticks};
use crate::error::{Result, SchedError};
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a workload from `path`.
pub fn load(path: &Path) -> Result<Vec<ProcessRecord>> {
    let file = File::open(path).map_err(|source| SchedError::InvalidPath {
        path: path.to_path_buf(),
        source,
    })?;
    parse(BufReader::new(file))
}

/// Parse records from any line-oriented reader. Blank lines are skipped.
pub fn parse<R: BufRead>(reader: R) -> Result<Vec<ProcessRecord>> {
    let mut records = Vec::new();
    let mut seen = FxHashSet::default();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = number + 1;
        if line.trim().is_empty() {
            continue;
        }

        let record = parse_record(&line, line_no)?;
        if !seen.insert(record.pid) {
            return Err(SchedError::MalformedRecord {
                line: line_no,
                reason: format!("duplicate pid {}", record.pid),
            });
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(SchedError::EmptyWorkload);
    }
    Ok(records)
}

fn parse_record(line: &str, line_no: usize) -> Result<ProcessRecord> {
    let malformed = |reason: String| SchedError::MalformedRecord {
        line: line_no,
        reason,
    };

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 4 {
        return Err(malformed(format!(
            "expected 4 fields, found {}",
            fields.len()
        )));
    }

    let pid: Pid = fields[0]
        .parse()
        .map_err(|_| malformed(format!("bad pid {:?}", fields[0])))?;
    if pid == 0 {
        return Err(malformed("pid must be positive".to_string()));
    }

    let arrival: Ticks = fields[1]
        .parse()
        .map_err(|_| malformed(format!("bad arrival time {:?}", fields[1])))?;

    let burst: Ticks = fields[2]
        .parse()
        .map_err(|_| malformed(format!("bad burst time {:?}", fields[2])))?;
    if burst == 0 {
        return Err(malformed("burst time must be at least 1".to_string()));
    }

    let priority: i32 = fields[3]
        .parse()
        .map_err(|_| malformed(format!("bad priority {:?}", fields[3])))?;

    Ok(ProcessRecord::new(pid, arrival, burst, priority))
}
