use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::chart::{self, ChartOptions};
use crate::data::group::{group_by_domain, unique_domains};
use crate::data::loader::load_file;

/// Rows shown in the preview table.
pub const PREVIEW_ROWS: usize = 5;

/// Load `input`, print a preview of it to `preview`, then write one chart
/// per domain into `out_dir`. Returns the written image paths.
pub fn run(
    input: &Path,
    out_dir: &Path,
    opts: &ChartOptions,
    mut preview: impl Write,
) -> Result<Vec<PathBuf>> {
    let dataset = load_file(input)
        .with_context(|| format!("loading benchmark results from {}", input.display()))?;

    writeln!(preview, "{}", dataset.head(PREVIEW_ROWS)).context("writing preview")?;

    let domains = unique_domains(&dataset);
    info!("{} domain(s) to plot: {domains:?}", domains.len());

    let groups = group_by_domain(&dataset);

    let written = chart::render_all(&groups, opts, out_dir)
        .with_context(|| format!("writing charts to {}", out_dir.display()))?;
    Ok(written)
}
