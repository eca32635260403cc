//! Parser for the bracketed matrix text format.
//!
//! One row per line, wrapped in `[` and `]` with comma separated entries:
//!
//! ```text
//! [0, 1, 1]
//! [1, 0, 1]
//! [1, 1, 0]
//! ```
//!
//! Blank lines are skipped. Squareness is checked by the core.

use std::io::BufRead;

use tracing::trace;

use super::commands::CliError;

/// Reads a weight matrix from `reader`.
///
/// # Errors
/// - [`CliError::Read`] when the reader fails.
/// - [`CliError::Parse`] when a line is not a bracketed row of numbers.
///
/// # Examples
/// ```
/// use kruskal_cli::cli::parse_matrix;
///
/// let matrix = parse_matrix("[0, 2]\n\n[2, 0]\n".as_bytes())?;
/// assert_eq!(matrix, vec![vec![0.0, 2.0], vec![2.0, 0.0]]);
/// # Ok::<(), kruskal_cli::cli::CliError>(())
/// ```
pub fn parse_matrix(reader: impl BufRead) -> Result<Vec<Vec<f64>>, CliError> {
    let mut rows = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(CliError::Read)?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        rows.push(parse_row(trimmed).map_err(|reason| CliError::Parse {
            line: index + 1,
            reason,
        })?);
    }
    trace!(rows = rows.len(), "matrix parsed");
    Ok(rows)
}

fn parse_row(row: &str) -> Result<Vec<f64>, String> {
    let inner = row
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| "row must be wrapped in `[` and `]`".to_owned())?;
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }
    inner
        .split(',')
        .map(|entry| {
            let entry = entry.trim();
            entry
                .parse::<f64>()
                .map_err(|_| format!("`{entry}` is not a number"))
        })
        .collect()
}
