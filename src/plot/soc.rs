//! # 自旋轨道耦合对比图绘制
//!
//! 叠加绘制含 / 不含 SOC 的两组能带，便于直接观察劈裂。
//!
//! ## 依赖关系
//! - 被 `commands/soc.rs` 调用
//! - 使用 `models/bandset.rs`
//! - 使用 `plotters` 渲染图表

use crate::error::{QepostError, Result};
use crate::models::BandSet;

use plotters::prelude::*;
use std::path::Path;

/// 绘制 SOC 对比图：标量能带为蓝色，SOC 能带为红色
pub fn plot_soc_comparison(
    scalar: &BandSet,
    soc: &BandSet,
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
) -> Result<()> {
    let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| QepostError::Other(format!("{:?}", e)))?;

    let (k_min, k_max) = match (scalar.k_range(), soc.k_range()) {
        (Some((a_lo, a_hi)), Some((b_lo, b_hi))) => (a_lo.min(b_lo), a_hi.max(b_hi)),
        (Some(r), None) | (None, Some(r)) => r,
        (None, None) => (0.0, 1.0),
    };
    let (e_min, e_max) = match (scalar.energy_range(), soc.energy_range()) {
        (Some((a_lo, a_hi)), Some((b_lo, b_hi))) => (a_lo.min(b_lo), a_hi.max(b_hi)),
        (Some(r), None) | (None, Some(r)) => r,
        (None, None) => (0.0, 1.0),
    };
    let e_margin = ((e_max - e_min).abs() * 0.05).max(0.1);
    let (y_lo, y_hi) = (e_min - e_margin, e_max + e_margin);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(k_min..k_max, y_lo..y_hi)
        .map_err(|e| QepostError::Other(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("K-points")
        .y_desc("Energy (eV)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| QepostError::Other(format!("{:?}", e)))?;

    for (i, band) in scalar.bands.iter().enumerate() {
        let series = chart
            .draw_series(LineSeries::new(
                scalar.kpoints.iter().zip(band).map(|(k, e)| (*k, *e)),
                BLUE.mix(0.5).stroke_width(1),
            ))
            .map_err(|e| QepostError::Other(format!("{:?}", e)))?;
        if i == 0 {
            series
                .label("Without SOC")
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
        }
    }

    for (i, band) in soc.bands.iter().enumerate() {
        let series = chart
            .draw_series(LineSeries::new(
                soc.kpoints.iter().zip(band).map(|(k, e)| (*k, *e)),
                RED.mix(0.7).stroke_width(1),
            ))
            .map_err(|e| QepostError::Other(format!("{:?}", e)))?;
        if i == 0 {
            series
                .label("With SOC")
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
        }
    }

    chart
        .draw_series(DashedLineSeries::new(
            vec![(k_min, 0.0), (k_max, 0.0)],
            8,
            6,
            BLACK.mix(0.5).stroke_width(1),
        ))
        .map_err(|e| QepostError::Other(format!("{:?}", e)))?
        .label("Fermi Level")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| QepostError::Other(format!("{:?}", e)))?;

    root.present()
        .map_err(|e| QepostError::Other(e.to_string()))?;

    Ok(())
}
