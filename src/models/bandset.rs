//! # 能带数据模型
//!
//! 表示一组能带（或声子支）：k 点坐标加上每条能带一列能量。
//! 列长一致由解析器保证（不一致的输入在解析阶段即报错）。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `analysis/`, `plot/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 能带集合：k 点坐标 + 逐能带能量列
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandSet {
    /// k 点（或 q 点）坐标
    pub kpoints: Vec<f64>,

    /// 能带能量，bands[b][k]，每条能带与 kpoints 等长
    pub bands: Vec<Vec<f64>>,
}

impl BandSet {
    pub fn new(kpoints: Vec<f64>, bands: Vec<Vec<f64>>) -> Self {
        BandSet { kpoints, bands }
    }

    /// k 点数
    pub fn n_kpoints(&self) -> usize {
        self.kpoints.len()
    }

    /// 能带数
    pub fn n_bands(&self) -> usize {
        self.bands.len()
    }

    /// k 轴范围 (min, max)
    pub fn k_range(&self) -> Option<(f64, f64)> {
        if self.kpoints.is_empty() {
            return None;
        }

        let min = self.kpoints.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self
            .kpoints
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }

    /// 全部能带的能量范围 (min, max)
    pub fn energy_range(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for band in &self.bands {
            for &e in band {
                min = min.min(e);
                max = max.max(e);
            }
        }

        if min.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let set = BandSet::new(
            vec![0.0, 0.5, 1.0],
            vec![vec![-1.0, -0.8, -0.9], vec![0.4, 0.2, 0.5]],
        );

        assert_eq!(set.n_kpoints(), 3);
        assert_eq!(set.n_bands(), 2);
        assert_eq!(set.bands[1], vec![0.4, 0.2, 0.5]);
    }

    #[test]
    fn test_energy_range_spans_all_bands() {
        let set = BandSet::new(
            vec![0.0, 1.0],
            vec![vec![-1.0, -0.5], vec![0.2, 0.3]],
        );
        assert_eq!(set.energy_range(), Some((-1.0, 0.3)));
    }

    #[test]
    fn test_empty_ranges() {
        let set = BandSet::new(vec![], vec![]);
        assert_eq!(set.k_range(), None);
        assert_eq!(set.energy_range(), None);
    }
}
