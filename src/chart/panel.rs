use std::ops::Range;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use super::ChartOptions;
use crate::data::group::DomainGroup;
use crate::data::model::Metric;

/// Legend names, in the order the series are drawn.
pub const SERIES_LABELS: [&str; 2] = ["SAT", "HSP"];

const X_DESC: &str = "Problème";

/// Draw one metric of a domain (both planners) into `area`.
pub fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    group: &DomainGroup<'_>,
    metric: Metric,
    colors: &[RGBColor],
    opts: &ChartOptions,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let series = series_points(group, metric);

    let x_range = axis_range(series.iter().flatten().map(|&(x, _)| x));
    let y_range = axis_range(series.iter().flatten().map(|&(_, y)| y));

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("{} pour {}", metric.label(), group.domain),
            ("sans-serif", opts.title_font_size),
        )
        .margin(opts.margin)
        .x_label_area_size(opts.x_label_area)
        .y_label_area_size(opts.y_label_area)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(X_DESC)
        .y_desc(metric.label())
        .label_style(("sans-serif", opts.label_font_size).into_font())
        .draw()?;

    for ((label, points), &color) in SERIES_LABELS.iter().zip(&series).zip(colors) {
        let line_width = opts.line_width;
        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                color.stroke_width(line_width),
            ))?
            .label(*label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(line_width))
            });

        chart.draw_series(
            points
                .iter()
                .map(|&p| Circle::new(p, opts.marker_radius, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", opts.label_font_size).into_font())
        .draw()?;

    Ok(())
}

/// `(n_problem, value)` points for the SAT and HSP series, in row order.
/// Rows with a non-finite coordinate are left out of that series.
pub fn series_points(group: &DomainGroup<'_>, metric: Metric) -> [Vec<(f64, f64)>; 2] {
    let mut sat = Vec::with_capacity(group.len());
    let mut hsp = Vec::with_capacity(group.len());
    for row in &group.rows {
        let x = row.n_problem;
        if !x.is_finite() {
            continue;
        }
        let (s, h) = metric.values(row);
        if s.is_finite() {
            sat.push((x, s));
        }
        if h.is_finite() {
            hsp.push((x, h));
        }
    }
    [sat, hsp]
}

/// Data extent padded by 5% on each side.
///
/// A zero-width extent is widened by 5% of its value (or by 1 around zero);
/// no finite values at all gives `0..1`. The result always has finite bounds
/// and a finite width, so extents near `f64::MAX` are narrowed around their
/// midpoint instead of overflowing.
pub fn axis_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if lo > hi {
        return 0.0..1.0;
    }
    // Halves first: `hi - lo` overflows for extents wider than f64::MAX.
    let mid = lo / 2.0 + hi / 2.0;
    let half_span = hi / 2.0 - lo / 2.0;
    let half = if half_span > 0.0 {
        half_span * 1.1
    } else if lo != 0.0 {
        lo.abs() * 0.05
    } else {
        1.0
    };
    let half = half.min(f64::MAX / 4.0);
    (mid - half).max(f64::MIN)..(mid + half).min(f64::MAX)
}
