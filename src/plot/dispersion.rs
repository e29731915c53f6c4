//! # 色散图绘制
//!
//! 使用 `plotters` 绘制能带结构 / 声子色散图。
//!
//! ## 功能
//! - 每条能带（声子支）一条折线
//! - 可选费米能级虚线 (y = 0)
//! - 高对称点竖直参考线与标注（按 k 路径索引均分）
//!
//! ## 依赖关系
//! - 被 `commands/bands.rs`, `commands/phonon.rs` 调用
//! - 使用 `models/bandset.rs`
//! - 使用 `plotters` 渲染图表

use crate::error::{QepostError, Result};
use crate::models::BandSet;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// 绘制色散图（能带结构或声子色散）
#[allow(clippy::too_many_arguments)]
pub fn plot_dispersion(
    bands: &BandSet,
    output_path: &Path,
    title: &str,
    labels: &[String],
    line_color: RGBColor,
    x_desc: &str,
    y_desc: &str,
    fermi_line: bool,
    width: u32,
    height: u32,
) -> Result<()> {
    let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| QepostError::Other(format!("{:?}", e)))?;

    let (k_min, k_max) = bands.k_range().unwrap_or((0.0, 1.0));
    let (e_min, e_max) = bands.energy_range().unwrap_or((0.0, 1.0));
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
        .x_desc(x_desc)
        .y_desc(y_desc)
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| QepostError::Other(format!("{:?}", e)))?;

    // 逐条能带绘制
    for band in &bands.bands {
        chart
            .draw_series(LineSeries::new(
                bands.kpoints.iter().zip(band).map(|(k, e)| (*k, *e)),
                line_color.mix(0.7).stroke_width(1),
            ))
            .map_err(|e| QepostError::Other(format!("{:?}", e)))?;
    }

    // 费米能级参考线
    if fermi_line {
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
    }

    // 高对称点参考线与标注
    if labels.len() > 1 && bands.n_kpoints() > 1 {
        let n_k = bands.n_kpoints();
        let label_style = ("sans-serif", 16)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Top));

        for (i, label) in labels.iter().enumerate() {
            let idx = i * (n_k - 1) / (labels.len() - 1);
            let k = bands.kpoints[idx];

            chart
                .draw_series(DashedLineSeries::new(
                    vec![(k, y_lo), (k, y_hi)],
                    2,
                    4,
                    RED.mix(0.5).stroke_width(1),
                ))
                .map_err(|e| QepostError::Other(format!("{:?}", e)))?;

            chart
                .draw_series(std::iter::once(Text::new(
                    label.clone(),
                    (k, y_hi),
                    label_style.clone(),
                )))
                .map_err(|e| QepostError::Other(format!("{:?}", e)))?;
        }
    }

    if fermi_line {
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
