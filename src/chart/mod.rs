//! Chart layer: one two-panel PNG per domain group.
//!
//! ```text
//!   DomainGroup ──► panel::draw_panel (Temps) ─┐
//!               └─► panel::draw_panel (Taille) ┴─► RGB buffer ──► output ──► images/<domain>_graph.png
//! ```

pub mod output;
pub mod panel;

use std::path::{Path, PathBuf};

use log::info;
use plotters::prelude::*;

use crate::color::generate_palette;
use crate::data::group::DomainGroup;
use crate::data::model::Metric;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Chart options
// ---------------------------------------------------------------------------

/// Fixed rendering parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    /// Full figure size in pixels (both panels).
    pub size: (u32, u32),
    pub margin: u32,
    pub x_label_area: u32,
    pub y_label_area: u32,
    pub title_font_size: u32,
    pub label_font_size: u32,
    pub line_width: u32,
    pub marker_radius: u32,
}

impl Default for ChartOptions {
    /// A 10×5 inch figure at 100 dpi.
    fn default() -> Self {
        Self {
            size: (1000, 500),
            margin: 10,
            x_label_area: 40,
            y_label_area: 60,
            title_font_size: 22,
            label_font_size: 14,
            line_width: 2,
            marker_radius: 4,
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render one domain and write it to `<out_dir>/<stem>_graph.png`,
/// replacing any previous file. Returns the written path.
pub fn render_domain(
    group: &DomainGroup<'_>,
    stem: &str,
    opts: &ChartOptions,
    out_dir: &Path,
) -> Result<PathBuf, RenderError> {
    let (width, height) = opts.size;
    let draw_err = |e: &dyn std::fmt::Display| RenderError::Draw {
        domain: group.domain.to_string(),
        message: e.to_string(),
    };

    let colors = generate_palette(panel::SERIES_LABELS.len());
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| draw_err(&e))?;

        let panels = root.split_evenly((1, Metric::ALL.len()));
        for (area, metric) in panels.iter().zip(Metric::ALL) {
            panel::draw_panel(area, group, metric, &colors, opts).map_err(|e| draw_err(&e))?;
        }
        root.present().map_err(|e| draw_err(&e))?;
    }

    let path = output::image_path(out_dir, stem);
    let img = image::RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| draw_err(&"pixel buffer does not match figure size"))?;
    img.save_with_format(&path, image::ImageFormat::Png)
        .map_err(|source| RenderError::Encode {
            path: path.clone(),
            source,
        })?;

    info!(
        "domain '{}' ({} rows) -> {}",
        group.domain,
        group.len(),
        path.display()
    );
    Ok(path)
}

/// Create `out_dir` if needed, then render every group in order.
///
/// Stops at the first failure; charts written before it are left in place.
pub fn render_all(
    groups: &[DomainGroup<'_>],
    opts: &ChartOptions,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, RenderError> {
    output::ensure_output_dir(out_dir)?;

    let domains: Vec<&str> = groups.iter().map(|g| g.domain).collect();
    let stems = output::file_stems(&domains);

    groups
        .iter()
        .zip(&stems)
        .map(|(group, stem)| render_domain(group, stem, opts, out_dir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::BenchmarkRow;

    fn rows(domain: &str, n: usize) -> Vec<BenchmarkRow> {
        (1..=n)
            .map(|i| BenchmarkRow {
                domain: domain.to_string(),
                n_problem: i as f64,
                sat_temps: 0.1 * (i * i) as f64,
                hsp_temps: 0.05 * i as f64,
                sat_taille: (4 * i) as f64,
                hsp_taille: (5 * i) as f64,
            })
            .collect()
    }

    #[test]
    fn renders_png_of_configured_size() {
        let tmp = tempfile::tempdir().unwrap();
        let data = rows("blocks", 4);
        let group = DomainGroup {
            domain: "blocks",
            rows: data.iter().collect(),
        };
        let opts = ChartOptions::default();

        let path = render_domain(&group, "blocks", &opts, tmp.path()).unwrap();
        assert_eq!(path, tmp.path().join("blocks_graph.png"));

        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), opts.size);
    }

    #[test]
    fn single_row_domain_still_renders() {
        let tmp = tempfile::tempdir().unwrap();
        let data = rows("tiny", 1);
        let group = DomainGroup {
            domain: "tiny",
            rows: data.iter().collect(),
        };

        let path = render_domain(&group, "tiny", &ChartOptions::default(), tmp.path()).unwrap();
        assert!(std::fs::metadata(path).unwrap().len() > 0);
    }

    #[test]
    fn render_all_uses_sanitized_names() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("images");
        let a = rows("ipc/2000", 2);
        let b = rows("gripper", 2);
        let groups = vec![
            DomainGroup {
                domain: "gripper",
                rows: b.iter().collect(),
            },
            DomainGroup {
                domain: "ipc/2000",
                rows: a.iter().collect(),
            },
        ];

        let written = render_all(&groups, &ChartOptions::default(), &out).unwrap();
        assert_eq!(
            written,
            vec![out.join("gripper_graph.png"), out.join("ipc_2000_graph.png")]
        );
        assert!(written.iter().all(|p| p.is_file()));
    }

    #[test]
    fn extreme_values_still_render() {
        let tmp = tempfile::tempdir().unwrap();
        let data = vec![
            BenchmarkRow {
                domain: "A".to_string(),
                n_problem: 1.0,
                sat_temps: 1e308,
                hsp_temps: -1e308,
                sat_taille: 1.0,
                hsp_taille: 2.0,
            },
            BenchmarkRow {
                domain: "A".to_string(),
                n_problem: 2.0,
                sat_temps: 1.75e308,
                hsp_temps: 1.0,
                sat_taille: 1.0,
                hsp_taille: 1.0,
            },
        ];
        let group = DomainGroup {
            domain: "A",
            rows: data.iter().collect(),
        };

        let path = render_domain(&group, "A", &ChartOptions::default(), tmp.path()).unwrap();
        assert!(std::fs::metadata(path).unwrap().len() > 0);
    }

    #[test]
    fn unwritable_image_path_is_an_encode_error() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("images");
        let blocked = out.join("A_graph.png");
        std::fs::create_dir_all(&blocked).unwrap();
        let data = rows("A", 2);
        let groups = vec![DomainGroup {
            domain: "A",
            rows: data.iter().collect(),
        }];

        match render_all(&groups, &ChartOptions::default(), &out) {
            Err(RenderError::Encode { path, .. }) => assert_eq!(path, blocked),
            other => panic!("expected Encode error, got {other:?}"),
        }
    }
}
