//! Report rendering: the human-readable output sink.

use crate::sim::PolicyMetrics;
use std::io;

/// Render one policy's metrics as a labeled table followed by the two
/// averages, rounded to 2 decimal places.
pub fn render<W: io::Write>(out: &mut W, metrics: &PolicyMetrics) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "********* {}", metrics.label)?;
    writeln!(
        out,
        "{:>8} {:>12} {:>14} {:>17}",
        "pid", "burst time", "waiting time", "turnaround time"
    )?;
    for row in &metrics.processes {
        writeln!(
            out,
            "{:>8} {:>12} {:>14} {:>17}",
            row.pid, row.burst, row.waiting, row.turnaround
        )?;
    }
    writeln!(out)?;
    writeln!(out, "average waiting time    = {:.2}", metrics.avg_waiting)?;
    writeln!(
        out,
        "average turnaround time = {:.2}",
        metrics.avg_turnaround
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProcessRecord;
    use crate::sim::{apply_turnaround, PolicyMetrics};

    #[test]
    fn renders_rows_and_rounded_averages() {
        let mut records = vec![
            ProcessRecord::new(1, 0, 5, 0),
            ProcessRecord::new(2, 0, 3, 0),
            ProcessRecord::new(3, 0, 8, 0),
        ];
        records[1].waiting = 5;
        records[2].waiting = 8;
        apply_turnaround(&mut records);

        let metrics = PolicyMetrics::collect("FCFS".to_string(), &records);
        let mut out = Vec::new();
        render(&mut out, &metrics).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("********* FCFS"));
        assert!(text.contains("turnaround time"));
        assert!(text.contains("average waiting time    = 4.33"));
        assert!(text.contains("average turnaround time = 9.67"));

        // One header row plus one row per process.
        let rows = text
            .lines()
            .filter(|line| line.starts_with(' ') && !line.trim().is_empty())
            .count();
        assert_eq!(rows, 4);
    }
}
