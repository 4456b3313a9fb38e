use std::fmt;

use serde::{Deserialize, Serialize};

/// Column names every results file must provide.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "domain",
    "n_problem",
    "SAT_temps",
    "HSP_temps",
    "SAT_taille",
    "HSP_taille",
];

// ---------------------------------------------------------------------------
// BenchmarkRow – one line of resultats.csv
// ---------------------------------------------------------------------------

/// One benchmark instance: the same problem solved by both planners.
///
/// `temps` is the solving time and `taille` the plan size, as written by the
/// benchmark harness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRow {
    pub domain: String,
    pub n_problem: f64,
    #[serde(rename = "SAT_temps")]
    pub sat_temps: f64,
    #[serde(rename = "HSP_temps")]
    pub hsp_temps: f64,
    #[serde(rename = "SAT_taille")]
    pub sat_taille: f64,
    #[serde(rename = "HSP_taille")]
    pub hsp_taille: f64,
}

// ---------------------------------------------------------------------------
// Metric – which pair of columns a chart panel shows
// ---------------------------------------------------------------------------

/// A measured quantity, available for both planners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Temps,
    Taille,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Temps, Metric::Taille];

    /// Axis / title label.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Temps => "Temps",
            Metric::Taille => "Taille",
        }
    }

    /// `(SAT, HSP)` values of this metric for one row.
    pub fn values(self, row: &BenchmarkRow) -> (f64, f64) {
        match self {
            Metric::Temps => (row.sat_temps, row.hsp_temps),
            Metric::Taille => (row.sat_taille, row.hsp_taille),
        }
    }
}

// ---------------------------------------------------------------------------
// BenchmarkDataset – the complete loaded file
// ---------------------------------------------------------------------------

/// All rows of a results file, in file order.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkDataset {
    pub rows: Vec<BenchmarkRow>,
    /// Header names as they appeared in the file (may include extra columns).
    pub columns: Vec<String>,
}

impl BenchmarkDataset {
    pub fn new(rows: Vec<BenchmarkRow>, columns: Vec<String>) -> Self {
        BenchmarkDataset { rows, columns }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first `n` rows, printable as a table.
    pub fn head(&self, n: usize) -> Head<'_> {
        Head {
            rows: &self.rows[..n.min(self.rows.len())],
            columns: &self.columns,
        }
    }
}

// ---------------------------------------------------------------------------
// Head – tabular preview
// ---------------------------------------------------------------------------

/// Borrowed preview of the leading rows of a dataset.
#[derive(Debug, Clone, Copy)]
pub struct Head<'a> {
    pub rows: &'a [BenchmarkRow],
    /// Header of the source file, listed when there are no rows to show.
    pub columns: &'a [String],
}

impl fmt::Display for Head<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            let columns: Vec<&str> = if self.columns.is_empty() {
                REQUIRED_COLUMNS.to_vec()
            } else {
                self.columns.iter().map(String::as_str).collect()
            };
            return write!(
                f,
                "Empty DataFrame\nColumns: [{}]\nIndex: []",
                columns.join(", ")
            );
        }

        let cells: Vec<[String; 7]> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, r)| {
                [
                    i.to_string(),
                    r.domain.clone(),
                    format_number(r.n_problem),
                    format_number(r.sat_temps),
                    format_number(r.hsp_temps),
                    format_number(r.sat_taille),
                    format_number(r.hsp_taille),
                ]
            })
            .collect();

        let mut widths = [0usize; 7];
        widths[1..]
            .iter_mut()
            .zip(REQUIRED_COLUMNS)
            .for_each(|(w, name)| *w = name.chars().count());
        for row in &cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        // Header: blank index cell, then right-aligned column names.
        write!(f, "{:>w$}", "", w = widths[0])?;
        for (name, &w) in REQUIRED_COLUMNS.iter().zip(&widths[1..]) {
            write!(f, "  {name:>w$}")?;
        }
        for row in &cells {
            writeln!(f)?;
            write!(f, "{:<w$}", row[0], w = widths[0])?;
            for (cell, &w) in row[1..].iter().zip(&widths[1..]) {
                write!(f, "  {cell:>w$}")?;
            }
        }
        Ok(())
    }
}

/// Integers print without a fractional part, everything else with up to
/// four decimals.
fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.0}")
    } else {
        let s = format!("{v:.4}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(domain: &str, n: f64) -> BenchmarkRow {
        BenchmarkRow {
            domain: domain.to_string(),
            n_problem: n,
            sat_temps: 1.25,
            hsp_temps: 0.5,
            sat_taille: 12.0,
            hsp_taille: 14.0,
        }
    }

    #[test]
    fn head_is_clamped_to_length() {
        let ds = BenchmarkDataset::new(vec![row("a", 1.0), row("b", 2.0)], vec![]);
        assert_eq!(ds.head(5).rows.len(), 2);
        assert_eq!(ds.head(1).rows.len(), 1);
        assert_eq!(ds.head(0).rows.len(), 0);
    }

    #[test]
    fn head_renders_header_and_rows() {
        let ds = BenchmarkDataset::new(vec![row("blocks", 1.0), row("gripper", 2.0)], vec![]);
        let text = ds.head(5).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        for name in REQUIRED_COLUMNS {
            assert!(lines[0].contains(name), "header misses {name}: {}", lines[0]);
        }
        assert!(lines[1].starts_with('0'));
        assert!(lines[1].contains("blocks"));
        assert!(lines[1].contains("1.25"));
        assert!(lines[2].starts_with('1'));
        assert!(lines[2].contains("gripper"));
    }

    #[test]
    fn head_of_empty_dataset_lists_columns() {
        let columns: Vec<String> = REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();
        let ds = BenchmarkDataset::new(vec![], columns);

        assert_eq!(
            ds.head(5).to_string(),
            "Empty DataFrame\n\
             Columns: [domain, n_problem, SAT_temps, HSP_temps, SAT_taille, HSP_taille]\n\
             Index: []"
        );
    }

    #[test]
    fn head_of_empty_dataset_keeps_extra_columns() {
        let columns = vec!["domain".to_string(), "note".to_string()];
        let text = BenchmarkDataset::new(vec![], columns).head(5).to_string();

        assert!(text.contains("Columns: [domain, note]"), "{text}");
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(1.23456), "1.2346");
    }

    #[test]
    fn metric_values_pick_matching_columns() {
        let r = row("x", 1.0);
        assert_eq!(Metric::Temps.values(&r), (1.25, 0.5));
        assert_eq!(Metric::Taille.values(&r), (12.0, 14.0));
    }
}
