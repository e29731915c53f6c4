//! # 谱线数据模型
//!
//! 表示一条采样曲线：x 轴为能量或频率，y 轴为态密度等采样值。
//! 数据按读入顺序保存，不校验单调性或唯一性。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `analysis/`, `plot/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 采样曲线 (x, y) 序列
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Curve {
    /// x 采样点（eV 或 cm⁻¹）
    pub x: Vec<f64>,

    /// y 采样值（states/eV 等）
    pub y: Vec<f64>,
}

impl Curve {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Curve { x, y }
    }

    /// 采样点数
    pub fn n_samples(&self) -> usize {
        self.x.len()
    }

    /// 返回 x 轴平移后的副本（x - shift），用于对齐费米能级
    pub fn shifted(&self, shift: f64) -> Curve {
        Curve {
            x: self.x.iter().map(|xi| xi - shift).collect(),
            y: self.y.clone(),
        }
    }

    /// 最接近 x = 0 的采样点索引（费米能级位置），并列时取第一个
    pub fn fermi_index(&self) -> Option<usize> {
        if self.x.is_empty() {
            return None;
        }

        let mut idx = 0;
        for (i, xi) in self.x.iter().enumerate() {
            if xi.abs() < self.x[idx].abs() {
                idx = i;
            }
        }
        Some(idx)
    }

    /// x 轴范围 (min, max)
    pub fn x_range(&self) -> Option<(f64, f64)> {
        if self.x.is_empty() {
            return None;
        }

        let min = self.x.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }

    /// y 最大值
    pub fn y_max(&self) -> Option<f64> {
        if self.y.is_empty() {
            return None;
        }

        Some(self.y.iter().copied().fold(f64::NEG_INFINITY, f64::max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fermi_index_closest_to_zero() {
        let curve = Curve::new(vec![-2.0, -1.0, 0.1, 1.0, 2.0], vec![0.0; 5]);
        assert_eq!(curve.fermi_index(), Some(2));
    }

    #[test]
    fn test_fermi_index_tie_takes_first() {
        // -0.5 和 0.5 等距，取先出现的
        let curve = Curve::new(vec![-0.5, 0.5], vec![0.0, 0.0]);
        assert_eq!(curve.fermi_index(), Some(0));
    }

    #[test]
    fn test_fermi_index_empty() {
        let curve = Curve::new(vec![], vec![]);
        assert_eq!(curve.fermi_index(), None);
    }

    #[test]
    fn test_shifted_moves_x_only() {
        let curve = Curve::new(vec![0.0, 1.0], vec![3.0, 4.0]);
        let shifted = curve.shifted(-0.21);

        assert!((shifted.x[0] - 0.21).abs() < 1e-12);
        assert!((shifted.x[1] - 1.21).abs() < 1e-12);
        assert_eq!(shifted.y, curve.y);
    }

    #[test]
    fn test_ranges() {
        let curve = Curve::new(vec![-1.0, 0.0, 2.0], vec![5.0, 1.0, 3.0]);
        assert_eq!(curve.x_range(), Some((-1.0, 2.0)));
        assert_eq!(curve.y_max(), Some(5.0));

        let empty = Curve::new(vec![], vec![]);
        assert_eq!(empty.x_range(), None);
        assert_eq!(empty.y_max(), None);
    }
}
