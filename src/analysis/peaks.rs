//! # 峰定位分析
//!
//! 在 DOS/PDOS 曲线上定位价带峰与导带峰：
//! 分割索引之前的最大 y 为价带峰，之后（含分割点）的最大 y 为导带峰。
//! 并列时取先出现的采样点（标准 argmax 语义）。
//!
//! ## 依赖关系
//! - 被 `commands/pdos.rs`, `commands/dos.rs` 调用
//! - 使用 `models/curve.rs`

use crate::error::{QepostError, Result};
use crate::models::Curve;

/// 价带/导带峰位
#[derive(Debug, Clone)]
pub struct PeakPair {
    /// 价带峰能量 (eV)
    pub valence_energy: f64,

    /// 价带峰高度
    pub valence_height: f64,

    /// 导带峰能量 (eV)
    pub conduction_energy: f64,

    /// 导带峰高度
    pub conduction_height: f64,
}

/// 定位价带峰与导带峰；split 两侧都不能为空
pub fn locate_peaks(curve: &Curve, split: usize) -> Result<PeakPair> {
    if split == 0 || split >= curve.n_samples() {
        return Err(QepostError::DegenerateData(format!(
            "split index {} leaves an empty side ({} samples)",
            split,
            curve.n_samples()
        )));
    }

    let (v_idx, v_height) = argmax(&curve.y[..split]);
    let (c_idx, c_height) = argmax(&curve.y[split..]);

    Ok(PeakPair {
        valence_energy: curve.x[v_idx],
        valence_height: v_height,
        conduction_energy: curve.x[split + c_idx],
        conduction_height: c_height,
    })
}

/// 首次出现的最大值 (索引, 值)；调用方保证非空
fn argmax(values: &[f64]) -> (usize, f64) {
    let mut idx = 0;
    for (i, v) in values.iter().enumerate() {
        if *v > values[idx] {
            idx = i;
        }
    }
    (idx, values[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_peaks_literal_case() {
        let curve = Curve::new(
            vec![-2.0, -1.0, 0.0, 1.0, 2.0],
            vec![1.0, 5.0, 2.0, 8.0, 3.0],
        );

        // 费米索引 2 (x = 0)
        let peaks = locate_peaks(&curve, 2).unwrap();
        assert!((peaks.valence_energy - (-1.0)).abs() < 1e-12);
        assert!((peaks.valence_height - 5.0).abs() < 1e-12);
        assert!((peaks.conduction_energy - 1.0).abs() < 1e-12);
        assert!((peaks.conduction_height - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_tie_takes_first_occurrence() {
        let curve = Curve::new(
            vec![-3.0, -2.0, -1.0, 1.0, 2.0, 3.0],
            vec![4.0, 4.0, 1.0, 7.0, 7.0, 7.0],
        );

        let peaks = locate_peaks(&curve, 3).unwrap();
        assert!((peaks.valence_energy - (-3.0)).abs() < 1e-12);
        assert!((peaks.conduction_energy - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_split_point_belongs_to_conduction_side() {
        // 最大值正好落在分割点上：应算作导带峰
        let curve = Curve::new(vec![-1.0, 0.0, 1.0], vec![1.0, 9.0, 2.0]);

        let peaks = locate_peaks(&curve, 1).unwrap();
        assert!((peaks.conduction_energy - 0.0).abs() < 1e-12);
        assert!((peaks.valence_energy - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_empty_side_is_guarded() {
        let curve = Curve::new(vec![0.0, 1.0], vec![1.0, 2.0]);

        assert!(locate_peaks(&curve, 0).is_err());
        assert!(locate_peaks(&curve, 2).is_err());
    }
}
