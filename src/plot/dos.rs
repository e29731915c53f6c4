//! # 态密度曲线绘制
//!
//! 使用 `plotters` 绘制单条态密度曲线（电子 DOS 或声子 DOS）。
//!
//! ## 依赖关系
//! - 被 `commands/dos.rs`, `commands/phonon.rs` 调用
//! - 使用 `models/curve.rs`
//! - 使用 `plotters` 渲染图表

use crate::error::{QepostError, Result};
use crate::models::Curve;

use plotters::prelude::*;
use std::path::Path;

/// 绘制单条态密度曲线
#[allow(clippy::too_many_arguments)]
pub fn plot_dos_curve(
    curve: &Curve,
    output_path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    series_label: &str,
    line_color: RGBColor,
    width: u32,
    height: u32,
) -> Result<()> {
    let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| QepostError::Other(format!("{:?}", e)))?;

    let (x_min, x_max) = curve.x_range().unwrap_or((0.0, 1.0));
    let y_max = curve.y_max().unwrap_or(1.0);
    let y_lo = curve.y.iter().fold(0.0_f64, |acc, &v| acc.min(v));
    let y_hi = y_max + (y_max - y_lo).abs().max(1.0) * 0.05;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_lo..y_hi)
        .map_err(|e| QepostError::Other(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| QepostError::Other(format!("{:?}", e)))?;

    let series = chart
        .draw_series(LineSeries::new(
            curve.x.iter().zip(&curve.y).map(|(x, y)| (*x, *y)),
            line_color.stroke_width(2),
        ))
        .map_err(|e| QepostError::Other(format!("{:?}", e)))?;

    if !series_label.is_empty() {
        series
            .label(series_label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_color));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(|e| QepostError::Other(format!("{:?}", e)))?;
    }

    root.present()
        .map_err(|e| QepostError::Other(e.to_string()))?;

    Ok(())
}
