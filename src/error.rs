use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading a results file into a [`BenchmarkDataset`].
///
/// [`BenchmarkDataset`]: crate::data::model::BenchmarkDataset
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is missing required column(s): {}", path.display(), missing.join(", "))]
    MissingColumns { path: PathBuf, missing: Vec<String> },

    #[error("{} row {row}: {message}", path.display())]
    Parse {
        path: PathBuf,
        /// 1-based data row (0 means the header).
        row: usize,
        message: String,
    },
}

/// Failures while drawing or writing a chart.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing chart for domain '{domain}': {message}")]
    Draw { domain: String, message: String },

    #[error("creating output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("writing {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
