//! Stacked-bar rendering of a `ChartSpec` to PNG.
//!
//! Purely a drawing layer: grouping, sorting, and bottom offsets are all
//! decided by the aggregators in kakeibo-core.

use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;

use kakeibo_core::ChartSpec;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 1500;

/// Default font family. Category and description labels are Japanese, so
/// jobs should point this at an installed CJK face such as
/// "Noto Sans CJK JP" or "MS Gothic"; the generic family keeps rendering
/// working on systems without one.
pub const DEFAULT_FONT: &str = "sans-serif";

pub fn render_png(spec: &ChartSpec, path: &Path, font: &str) -> Result<()> {
    let columns = spec.tick_labels.len().max(1);
    let y_max = (spec.max_top() as f64 * 1.1).max(1.0);

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut builder = ChartBuilder::on(&root);
    builder
        .x_label_area_size(80)
        .y_label_area_size(110)
        .margin(40);
    if let Some(title) = &spec.title {
        builder.caption(title.as_str(), (font, 36));
    }
    let mut chart =
        builder.build_cartesian_2d(-0.5f64..(columns as f64 - 0.5), 0f64..y_max)?;

    let tick_labels = spec.tick_labels.clone();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(columns)
        .x_label_formatter(&move |x| {
            let i = x.round();
            if (x - i).abs() < 0.25 && i >= 0.0 && (i as usize) < tick_labels.len() {
                tick_labels[i as usize].clone()
            } else {
                String::new()
            }
        })
        .y_desc(spec.y_label.clone())
        .axis_desc_style((font, 24))
        .label_style((font, 18))
        .draw()?;

    chart.draw_series(spec.segments.iter().enumerate().map(|(i, seg)| {
        let x = seg.column as f64;
        Rectangle::new(
            [
                (x - 0.35, seg.bottom as f64),
                (x + 0.35, (seg.bottom + seg.height) as f64),
            ],
            Palette99::pick(i).filled(),
        )
    }))?;

    for seg in &spec.segments {
        let x = seg.column as f64;
        let y = seg.bottom as f64 + seg.height as f64 / 2.0;
        chart.draw_series(std::iter::once(Text::new(
            seg.label.clone(),
            (x, y),
            (font, 18),
        )))?;
    }

    root.present()
        .with_context(|| format!("writing chart to {}", path.display()))?;
    Ok(())
}
