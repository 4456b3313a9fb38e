use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, info};

use super::model::{BenchmarkDataset, BenchmarkRow, REQUIRED_COLUMNS};
use crate::error::LoadError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load benchmark results from a comma-delimited file with a header row,
/// one benchmark instance per line.
///
/// The six [`REQUIRED_COLUMNS`] are checked before any row is parsed; any
/// other column is ignored. Header names are trimmed so `domain, n_problem`
/// style headers still match.
pub fn load_file(path: &Path) -> Result<BenchmarkDataset, LoadError> {
    let parse_err = |row: usize, e: csv::Error| LoadError::Parse {
        path: path.to_path_buf(),
        row,
        message: e.to_string(),
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(open(path)?));

    let headers = reader.headers().map_err(|e| parse_err(0, e))?.clone();
    let columns: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    debug!("CSV header: {columns:?}");
    check_columns(path, &columns)?;

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row_no = i + 1;
        let record = result.map_err(|e| parse_err(row_no, e))?;
        let row: BenchmarkRow = record
            .deserialize(Some(&headers))
            .map_err(|e| parse_err(row_no, e))?;
        rows.push(row);
    }

    info!(
        "loaded {} rows ({} columns) from {}",
        rows.len(),
        columns.len(),
        path.display()
    );
    Ok(BenchmarkDataset::new(rows, columns))
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })
}

fn check_columns(path: &Path, columns: &[String]) -> Result<(), LoadError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|req| !columns.iter().any(|c| c == *req))
        .map(|req| req.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(LoadError::MissingColumns {
            path: path.to_path_buf(),
            missing,
        })
    }
}
