//! # 带隙极值分析
//!
//! 由能带表求价带顶 (VBM)、导带底 (CBM) 与带隙。
//! 价带/导带按固定的能带序号划分；序号由调用方给出
//! （数据集相关常数，不是物理不变量）。
//!
//! ## 依赖关系
//! - 被 `commands/bands.rs`, `commands/report.rs` 调用
//! - 使用 `models/bandset.rs`

use crate::error::{QepostError, Result};
use crate::models::BandSet;

/// 带隙分析结果
#[derive(Debug, Clone)]
pub struct GapAnalysis {
    /// 价带顶 (eV)
    pub vbm: f64,

    /// 导带底 (eV)
    pub cbm: f64,

    /// 带隙 CBM - VBM (eV)，能带交叠时为负
    pub gap: f64,
}

/// 计算带隙：前 n_valence 条能带为价带，其余为导带
pub fn band_gap(bands: &BandSet, n_valence: usize) -> Result<GapAnalysis> {
    if n_valence == 0 || n_valence >= bands.n_bands() {
        return Err(QepostError::DegenerateData(format!(
            "valence/conduction split at band {} leaves an empty side ({} bands total)",
            n_valence,
            bands.n_bands()
        )));
    }

    if bands.n_kpoints() == 0 {
        return Err(QepostError::DegenerateData(
            "band table has no k-points".to_string(),
        ));
    }

    let vbm = bands.bands[..n_valence]
        .iter()
        .flatten()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    let cbm = bands.bands[n_valence..]
        .iter()
        .flatten()
        .copied()
        .fold(f64::INFINITY, f64::min);

    Ok(GapAnalysis {
        vbm,
        cbm,
        gap: cbm - vbm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_gap_literal_case() {
        // 价带 [[-1.0, -0.5]]，导带 [[0.2, 0.3]]
        let set = BandSet::new(vec![0.0, 1.0], vec![vec![-1.0, -0.5], vec![0.2, 0.3]]);

        let result = band_gap(&set, 1).unwrap();
        assert!((result.vbm - (-0.5)).abs() < 1e-12);
        assert!((result.cbm - 0.2).abs() < 1e-12);
        assert!((result.gap - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_band_gap_scans_all_valence_bands() {
        let set = BandSet::new(
            vec![0.0, 1.0, 2.0],
            vec![
                vec![-3.0, -2.0, -2.5],
                vec![-1.0, -0.4, -0.9],
                vec![1.0, 0.6, 0.8],
                vec![2.0, 1.9, 2.2],
            ],
        );

        let result = band_gap(&set, 2).unwrap();
        assert!((result.vbm - (-0.4)).abs() < 1e-12);
        assert!((result.cbm - 0.6).abs() < 1e-12);
        assert!((result.gap - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_metallic_overlap_gives_negative_gap() {
        let set = BandSet::new(vec![0.0, 1.0], vec![vec![0.5, 0.4], vec![0.1, 0.8]]);

        let result = band_gap(&set, 1).unwrap();
        assert!(result.gap < 0.0);
    }

    #[test]
    fn test_empty_side_is_guarded() {
        let set = BandSet::new(vec![0.0], vec![vec![-1.0], vec![0.2]]);

        assert!(band_gap(&set, 0).is_err());
        assert!(band_gap(&set, 2).is_err());
        assert!(band_gap(&set, 5).is_err());
    }
}
