//! # 投影态密度绘制
//!
//! 使用 `plotters` 绘制多物种 PDOS 叠加图：每个物种一条曲线加
//! 半透明面积填充，费米能级处画竖直虚线并标注。
//!
//! ## 依赖关系
//! - 被 `commands/pdos.rs` 调用
//! - 使用 `models/curve.rs`
//! - 使用 `plotters` 渲染图表

use crate::error::{QepostError, Result};
use crate::models::Curve;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// 物种颜色循环表（黑 / 深青 / 浅绿 / 浅红）
pub const PDOS_PALETTE: [RGBColor; 4] = [
    RGBColor(0, 0, 0),
    RGBColor(0, 102, 153),
    RGBColor(153, 255, 153),
    RGBColor(255, 153, 153),
];

/// 按索引取物种颜色，超出表长时循环
pub fn palette_color(index: usize) -> RGBColor {
    PDOS_PALETTE[index % PDOS_PALETTE.len()]
}

/// 绘制多物种 PDOS 叠加图
pub fn plot_pdos(
    species: &[(String, Curve)],
    output_path: &Path,
    title: &str,
    energy_range: (f64, f64),
    y_max: f64,
    width: u32,
    height: u32,
) -> Result<()> {
    let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| QepostError::Other(format!("{:?}", e)))?;

    let (x_lo, x_hi) = energy_range;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, 0.0..y_max)
        .map_err(|e| QepostError::Other(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Energy (eV)")
        .y_desc("PDOS (eV⁻¹)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| QepostError::Other(format!("{:?}", e)))?;

    for (i, (name, curve)) in species.iter().enumerate() {
        let color = palette_color(i);
        // 只保留能量窗口内的采样点，纵向超出窗口的值截断到上边界
        let points: Vec<(f64, f64)> = curve
            .x
            .iter()
            .zip(&curve.y)
            .filter(|(x, _)| **x >= x_lo && **x <= x_hi)
            .map(|(x, y)| (*x, y.min(y_max)))
            .collect();

        chart
            .draw_series(AreaSeries::new(points.iter().copied(), 0.0, color.mix(0.3)))
            .map_err(|e| QepostError::Other(format!("{:?}", e)))?;

        chart
            .draw_series(LineSeries::new(
                points.into_iter(),
                color.stroke_width(1),
            ))
            .map_err(|e| QepostError::Other(format!("{:?}", e)))?
            .label(name.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    // 费米能级竖直参考线与旋转标注
    chart
        .draw_series(DashedLineSeries::new(
            vec![(0.0, 0.0), (0.0, y_max)],
            8,
            6,
            BLACK.stroke_width(1),
        ))
        .map_err(|e| QepostError::Other(format!("{:?}", e)))?;

    let fermi_style = ("sans-serif", 16)
        .into_font()
        .color(&BLACK)
        .transform(FontTransform::Rotate270)
        .pos(Pos::new(HPos::Right, VPos::Top));
    chart
        .draw_series(std::iter::once(Text::new(
            "Fermi Level",
            (-0.1, y_max * 0.9),
            fermi_style,
        )))
        .map_err(|e| QepostError::Other(format!("{:?}", e)))?;

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

// ─────────────────────────────────────────────
// 测试
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(0), PDOS_PALETTE[0]);
        assert_eq!(palette_color(3), PDOS_PALETTE[3]);
        assert_eq!(palette_color(4), PDOS_PALETTE[0]);
        assert_eq!(palette_color(9), PDOS_PALETTE[1]);
    }
}
