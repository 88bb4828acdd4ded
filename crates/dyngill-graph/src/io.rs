//! Tab-separated temporal edge lists.
//!
//! One contact per line, `t<TAB>i<TAB>j`, where `t` is the 0-based slice
//! index and `i`, `j` are node ids. Surrounding spaces in a field are
//! trimmed. Blank lines and lines starting with `#` are skipped. Lines
//! may appear in any order; slices `0..=max t` that list no contact
//! become empty slices. Empty slices after the last listed contact
//! cannot be expressed in this format.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use dyngill_core::{Contact, ContactSlice, TemporalNetwork};
use serde::{Deserialize, Serialize};

use crate::GraphError;

/// Largest number of slices a file may span; `t` must stay below it.
pub const MAX_SLICES: usize = 1 << 20;

const COLUMNS: [&str; 3] = ["t", "i", "j"];

#[derive(Debug, Deserialize, Serialize)]
struct EdgeRow {
    t: usize,
    i: u32,
    j: u32,
}

/// Parse a temporal edge list.
///
/// With `node_count = None` the population size is inferred as the
/// largest node id plus one.
///
/// # Errors
///
/// Returns `Err(GraphError::Parse)` with the 1-based line number for a
/// malformed line or a slice index `>= MAX_SLICES`, or
/// `Err(GraphError::Network)` if a contact is out of range for the given
/// `node_count` (or the file lists no contact at all and `node_count` is
/// `None`).
///
/// # Examples
///
/// ```
/// use dyngill_graph::io::read_edge_list;
///
/// let text = "# t\ti\tj\n0\t0\t1\n2\t1\t2\n";
/// let net = read_edge_list(text.as_bytes(), None).unwrap();
/// assert_eq!(net.node_count(), 3);
/// assert_eq!(net.slice_count(), 3);
/// assert!(net.slice(1).unwrap().is_empty());
/// ```
pub fn read_edge_list<R: Read>(
    reader: R,
    node_count: Option<u32>,
) -> Result<TemporalNetwork, GraphError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .comment(Some(b'#'))
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut record = csv::StringRecord::new();
    while rdr.read_record(&mut record).map_err(csv_error)? {
        let line = record.position().map_or(0, |p| p.line() as usize);
        if record.len() != COLUMNS.len() {
            return Err(GraphError::Parse {
                line,
                reason: format!("expected 3 columns `t i j`, got {}", record.len()),
            });
        }
        let row: EdgeRow = record
            .deserialize(None)
            .map_err(|e| column_error(line, e))?;
        if row.t >= MAX_SLICES {
            return Err(GraphError::Parse {
                line,
                reason: format!("slice index {} exceeds the limit of {MAX_SLICES} slices", row.t),
            });
        }
        rows.push(row);
    }

    // Every t is below MAX_SLICES, so t + 1 cannot overflow.
    let slice_count = rows.iter().map(|r| r.t + 1).max().unwrap_or(0);
    let mut slices = vec![ContactSlice::new(); slice_count];
    for row in rows {
        slices[row.t].push(Contact::new(row.i, row.j));
    }

    let network = match node_count {
        Some(n) => TemporalNetwork::new(n, slices)?,
        None => TemporalNetwork::from_slices(slices)?,
    };
    Ok(network)
}

/// Read a temporal edge list from a file. See [`read_edge_list`].
pub fn load_edge_list(
    path: impl AsRef<Path>,
    node_count: Option<u32>,
) -> Result<TemporalNetwork, GraphError> {
    let file = File::open(path)?;
    read_edge_list(file, node_count)
}

/// Write `network` as a temporal edge list, preceded by a comment
/// header naming the columns.
pub fn write_edge_list<W: Write>(writer: W, network: &TemporalNetwork) -> Result<(), GraphError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(["# t", "i", "j"]).map_err(csv_error)?;
    for (t, slice) in network.iter().enumerate() {
        for &Contact(i, j) in slice {
            wtr.serialize(EdgeRow { t, i: i.0, j: j.0 })
                .map_err(csv_error)?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Write a temporal edge list to a file. See [`write_edge_list`].
pub fn save_edge_list(path: impl AsRef<Path>, network: &TemporalNetwork) -> Result<(), GraphError> {
    let file = File::create(path)?;
    write_edge_list(BufWriter::new(file), network)
}

fn csv_error(err: csv::Error) -> GraphError {
    if err.is_io_error() {
        return GraphError::Io(err.into());
    }
    GraphError::Parse {
        line: err.position().map_or(0, |p| p.line() as usize),
        reason: err.to_string(),
    }
}

fn column_error(line: usize, err: csv::Error) -> GraphError {
    let reason = match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => {
            let column = err
                .field()
                .and_then(|f| COLUMNS.get(f as usize))
                .copied()
                .unwrap_or("?");
            format!("column `{column}`: {}", err.kind())
        }
        _ => err.to_string(),
    };
    GraphError::Parse { line, reason }
}
