//! # 能带差值分析
//!
//! 逐元素比较两组同形能带表（如含/不含自旋轨道耦合的计算），
//! 给出平均与最大绝对差。形状不一致是致命错误，不做对齐或截断。
//!
//! ## 依赖关系
//! - 被 `commands/soc.rs`, `commands/report.rs` 调用
//! - 使用 `models/bandset.rs`

use crate::error::{QepostError, Result};
use crate::models::BandSet;

/// 两组能带的差值统计
#[derive(Debug, Clone)]
pub struct DiffStats {
    /// 平均绝对差 (eV)
    pub mean_abs: f64,

    /// 最大绝对差 (eV)
    pub max_abs: f64,
}

/// 逐元素比较两组能带表
pub fn compare(a: &BandSet, b: &BandSet) -> Result<DiffStats> {
    if a.n_kpoints() != b.n_kpoints() || a.n_bands() != b.n_bands() {
        return Err(QepostError::ShapeMismatch {
            expected: format!("{} k-points x {} bands", a.n_kpoints(), a.n_bands()),
            found: format!("{} k-points x {} bands", b.n_kpoints(), b.n_bands()),
        });
    }

    let count = a.n_kpoints() * a.n_bands();
    if count == 0 {
        return Err(QepostError::DegenerateData(
            "band tables are empty, nothing to compare".to_string(),
        ));
    }

    let mut sum = 0.0;
    let mut max = 0.0_f64;
    for (band_a, band_b) in a.bands.iter().zip(&b.bands) {
        for (ea, eb) in band_a.iter().zip(band_b) {
            let d = (ea - eb).abs();
            sum += d;
            max = max.max(d);
        }
    }

    Ok(DiffStats {
        mean_abs: sum / count as f64,
        max_abs: max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> BandSet {
        BandSet::new(
            vec![0.0, 0.5, 1.0],
            vec![vec![-1.0, -0.8, -0.9], vec![0.4, 0.2, 0.5]],
        )
    }

    #[test]
    fn test_identical_sets_give_zero_stats() {
        let set = sample_set();
        let stats = compare(&set, &set).unwrap();

        assert_eq!(stats.mean_abs, 0.0);
        assert_eq!(stats.max_abs, 0.0);
    }

    #[test]
    fn test_constant_offset() {
        let a = sample_set();
        let mut b = sample_set();
        for band in &mut b.bands {
            for e in band.iter_mut() {
                *e += 0.1;
            }
        }

        let stats = compare(&a, &b).unwrap();
        assert!((stats.mean_abs - 0.1).abs() < 1e-12);
        assert!((stats.max_abs - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_shape_mismatch_is_fatal() {
        let a = sample_set();
        let b = BandSet::new(vec![0.0, 0.5], vec![vec![-1.0, -0.8], vec![0.4, 0.2]]);

        let err = compare(&a, &b).unwrap_err();
        assert!(err.to_string().contains("Shape mismatch"));
    }

    #[test]
    fn test_band_count_mismatch_is_fatal() {
        let a = sample_set();
        let b = BandSet::new(vec![0.0, 0.5, 1.0], vec![vec![-1.0, -0.8, -0.9]]);

        assert!(compare(&a, &b).is_err());
    }

    #[test]
    fn test_empty_tables_are_degenerate() {
        let a = BandSet::new(vec![], vec![]);
        let b = BandSet::new(vec![], vec![]);

        let err = compare(&a, &b).unwrap_err();
        assert!(err.to_string().contains("Degenerate"));
    }
}
