//! # 加权积分分析
//!
//! 采样曲线的复合梯形积分与 x 加权平均位置，
//! 用于声子平均频率和 PDOS 价带/导带贡献。
//!
//! ## 数值约定
//! - 梯形公式 Σ (x[i+1]-x[i]) * (y[i]+y[i+1]) / 2，允许非均匀步长
//! - 样本数不足 2 时积分为 0
//! - 总积分为零的曲线不存在加权平均位置（显式报错，而非除零）
//!
//! ## 依赖关系
//! - 被 `commands/phonon.rs`, `commands/pdos.rs`, `commands/dos.rs` 调用
//! - 使用 `models/curve.rs`

use crate::error::{QepostError, Result};
use crate::models::Curve;

/// 零积分判定阈值
const INTEGRAL_EPS: f64 = 1e-12;

/// 复合梯形积分
pub fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..n - 1 {
        sum += (x[i + 1] - x[i]) * (y[i] + y[i + 1]) / 2.0;
    }
    sum
}

/// 曲线全程积分 ∫y dx
pub fn integral(curve: &Curve) -> f64 {
    trapezoid(&curve.x, &curve.y)
}

/// 索引区间 [lo, hi) 上的积分
pub fn integral_between(curve: &Curve, lo: usize, hi: usize) -> f64 {
    let hi = hi.min(curve.n_samples());
    if lo >= hi {
        return 0.0;
    }
    trapezoid(&curve.x[lo..hi], &curve.y[lo..hi])
}

/// x 加权平均位置 ∫x·y dx / ∫y dx
pub fn weighted_mean(curve: &Curve) -> Result<f64> {
    let total = integral(curve);
    if total.abs() < INTEGRAL_EPS {
        return Err(QepostError::DegenerateData(
            "curve integrates to zero, weighted mean position is undefined".to_string(),
        ));
    }

    let weighted: Vec<f64> = curve.x.iter().zip(&curve.y).map(|(x, y)| x * y).collect();
    Ok(trapezoid(&curve.x, &weighted) / total)
}

/// 声子态密度统计量
#[derive(Debug, Clone)]
pub struct PhononStats {
    /// 最高频率 (cm⁻¹)，取频率轴最大值
    pub max_frequency: f64,
    /// 态密度加权平均频率 (cm⁻¹)
    pub average_frequency: f64,
    /// 总声子态数 ∫DOS df
    pub total_states: f64,
}

/// 由声子态密度曲线计算统计量
pub fn phonon_stats(curve: &Curve) -> Result<PhononStats> {
    let (_, max_frequency) = curve.x_range().ok_or_else(|| {
        QepostError::DegenerateData("phonon DOS curve has no samples".to_string())
    })?;

    Ok(PhononStats {
        max_frequency,
        average_frequency: weighted_mean(curve)?,
        total_states: integral(curve),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_curve_integrates_exactly() {
        // y = c 在长度 L 区间上积分恰为 c*L
        let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let y = vec![2.5; 5];

        let got = trapezoid(&x, &y);
        assert!((got - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_uniform_spacing() {
        // y = x 在 [0, 3]，非均匀网格，梯形法则对线性函数精确
        let x = vec![0.0, 0.5, 2.0, 3.0];
        let y = x.clone();

        let got = trapezoid(&x, &y);
        assert!((got - 4.5).abs() < 1e-12);
    }

    #[test]
    fn test_short_input_is_zero() {
        assert_eq!(trapezoid(&[], &[]), 0.0);
        assert_eq!(trapezoid(&[1.0], &[3.0]), 0.0);
    }

    #[test]
    fn test_integral_between_matches_numpy_slicing() {
        let curve = Curve::new(vec![0.0, 1.0, 2.0, 3.0], vec![1.0, 1.0, 1.0, 1.0]);

        // [0, 2) 只覆盖前两个采样点之间的一段
        assert!((integral_between(&curve, 0, 2) - 1.0).abs() < 1e-12);
        // [2, 4) 覆盖最后一段
        assert!((integral_between(&curve, 2, 4) - 1.0).abs() < 1e-12);
        // 空区间
        assert_eq!(integral_between(&curve, 3, 3), 0.0);
        assert_eq!(integral_between(&curve, 5, 9), 0.0);
    }

    #[test]
    fn test_weighted_mean_of_symmetric_curve_is_zero() {
        let curve = Curve::new(
            vec![-2.0, -1.0, 0.0, 1.0, 2.0],
            vec![1.0, 2.0, 3.0, 2.0, 1.0],
        );

        let mean = weighted_mean(&curve).unwrap();
        assert!(mean.abs() < 1e-12);
    }

    #[test]
    fn test_weighted_mean_of_offset_peak() {
        // 权重全部集中在 x = 100 附近
        let curve = Curve::new(vec![99.0, 100.0, 101.0], vec![0.0, 5.0, 0.0]);

        let mean = weighted_mean(&curve).unwrap();
        assert!((mean - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_integral_is_degenerate() {
        let flat = Curve::new(vec![0.0, 1.0, 2.0], vec![0.0, 0.0, 0.0]);
        let err = weighted_mean(&flat).unwrap_err();
        assert!(err.to_string().contains("Degenerate"));
    }

    #[test]
    fn test_phonon_stats() {
        // 对称 DOS：平均频率为区间中点，总态数为梯形面积
        let curve = Curve::new(
            vec![0.0, 100.0, 200.0, 300.0, 400.0],
            vec![0.0, 1.0, 2.0, 1.0, 0.0],
        );

        let stats = phonon_stats(&curve).unwrap();
        assert!((stats.max_frequency - 400.0).abs() < 1e-12);
        assert!((stats.average_frequency - 200.0).abs() < 1e-9);
        assert!((stats.total_states - 400.0).abs() < 1e-12);
    }

    #[test]
    fn test_phonon_stats_zero_dos_is_degenerate() {
        let flat = Curve::new(vec![0.0, 100.0], vec![0.0, 0.0]);
        assert!(phonon_stats(&flat).is_err());
    }
}
