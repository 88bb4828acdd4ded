//! Tab-separated export of ensemble summaries.
//!
//! Layout: one header line, then one row per frame.
//!
//! ```text
//! t	mean_I	sem_I	mean_SI	sem_SI
//! 0	3	0	6.2	0.41
//! 1	3.4	0.22	5.9	0.39
//! ```
//!
//! The `t` column is the frame index times the output resolution, in
//! units of Δt.

use std::io::Write;

use crate::{EnsembleSummary, ObsError};

/// Write `columns` as a TSV table to `writer`.
///
/// Each `(label, summary)` pair contributes a `mean_<label>` and a
/// `sem_<label>` column. Frame `f` is written at `t = f * resolution`.
///
/// # Errors
///
/// Returns `Err(ObsError::LengthMismatch)` if the summaries have
/// different frame counts, or `Err(ObsError::Csv)` / `Err(ObsError::Io)`
/// on write failure.
pub fn write_summary_table<W: Write>(
    writer: W,
    resolution: usize,
    columns: &[(&str, &EnsembleSummary)],
) -> Result<(), ObsError> {
    let frames = columns.first().map_or(0, |(_, s)| s.len());
    for (label, summary) in columns {
        if summary.len() != frames {
            return Err(ObsError::LengthMismatch {
                label: (*label).to_string(),
                expected: frames,
                got: summary.len(),
            });
        }
    }

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);

    let mut header = vec!["t".to_string()];
    for (label, _) in columns {
        header.push(format!("mean_{label}"));
        header.push(format!("sem_{label}"));
    }
    wtr.write_record(&header)?;

    let mut row = Vec::with_capacity(header.len());
    for frame in 0..frames {
        row.clear();
        row.push((frame * resolution).to_string());
        for (_, summary) in columns {
            row.push(summary.mean()[frame].to_string());
            row.push(summary.standard_error()[frame].to_string());
        }
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}
