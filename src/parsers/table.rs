//! # 数值表格解析器
//!
//! 解析 Quantum ESPRESSO 后处理输出的空白分隔数值表格
//! (bands.dat, dos.dat, phonon_dos.dat, atom_X_tot.dat 等)。
//!
//! ## 格式约定
//! - 无表头，首列为 x 轴（k 点坐标 / 能量 / 频率），其余列为 y 序列
//! - 空行与 `#` 开头的注释行跳过
//! - 非数值 token 或列数不一致视为致命解析错误
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型

use crate::error::{QepostError, Result};
use crate::models::{BandSet, Curve};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// 解析空白分隔数值表格，按行返回
pub fn parse_table(path: &Path) -> Result<Vec<Vec<f64>>> {
    let file = File::open(path).map_err(|e| QepostError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let reader = BufReader::new(file);
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| QepostError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut row = Vec::new();
        for token in trimmed.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| QepostError::ParseError {
                format: "data table".to_string(),
                path: path.display().to_string(),
                reason: format!("non-numeric token '{}' at line {}", token, lineno + 1),
            })?;
            row.push(value);
        }

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(QepostError::ParseError {
                    format: "data table".to_string(),
                    path: path.display().to_string(),
                    reason: format!(
                        "line {} has {} columns, expected {}",
                        lineno + 1,
                        row.len(),
                        first.len()
                    ),
                });
            }
        }

        rows.push(row);
    }

    if rows.is_empty() {
        return Err(QepostError::ParseError {
            format: "data table".to_string(),
            path: path.display().to_string(),
            reason: "no data rows".to_string(),
        });
    }

    Ok(rows)
}

/// 读取双列曲线（首列 x，第二列 y）
pub fn load_curve(path: &Path) -> Result<Curve> {
    let rows = parse_table(path)?;
    require_columns(path, &rows, 2)?;

    let x = rows.iter().map(|r| r[0]).collect();
    let y = rows.iter().map(|r| r[1]).collect();
    Ok(Curve::new(x, y))
}

/// 读取能带表（首列 k 点，其余列逐能带能量）
pub fn load_bands(path: &Path) -> Result<BandSet> {
    let rows = parse_table(path)?;
    require_columns(path, &rows, 2)?;

    let n_bands = rows[0].len() - 1;
    let kpoints: Vec<f64> = rows.iter().map(|r| r[0]).collect();

    // 按列转置：bands[b][k]
    let mut bands = vec![Vec::with_capacity(rows.len()); n_bands];
    for row in &rows {
        for (b, value) in row[1..].iter().enumerate() {
            bands[b].push(*value);
        }
    }

    Ok(BandSet::new(kpoints, bands))
}

/// 文件缺失时返回 Ok(None)（"无数据"哨兵），解析失败仍然报错
pub fn try_load_curve(path: &Path) -> Result<Option<Curve>> {
    if !path.exists() {
        return Ok(None);
    }
    load_curve(path).map(Some)
}

/// 文件缺失时返回 Ok(None)，解析失败仍然报错
pub fn try_load_bands(path: &Path) -> Result<Option<BandSet>> {
    if !path.exists() {
        return Ok(None);
    }
    load_bands(path).map(Some)
}

/// 校验最小列数
fn require_columns(path: &Path, rows: &[Vec<f64>], min: usize) -> Result<()> {
    let found = rows.first().map(|r| r.len()).unwrap_or(0);
    if found < min {
        return Err(QepostError::ParseError {
            format: "data table".to_string(),
            path: path.display().to_string(),
            reason: format!("expected at least {} columns, found {}", min, found),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_data(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_curve() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_data(&dir, "dos.dat", "-1.0 0.5\n0.0 1.5\n1.0 0.25\n");

        let curve = load_curve(&path).unwrap();
        assert_eq!(curve.x, vec![-1.0, 0.0, 1.0]);
        assert_eq!(curve.y, vec![0.5, 1.5, 0.25]);
    }

    #[test]
    fn test_load_bands_transposes_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_data(&dir, "bands.dat", "0.0 -1.0 0.2\n0.5 -0.5 0.3\n");

        let set = load_bands(&path).unwrap();
        assert_eq!(set.kpoints, vec![0.0, 0.5]);
        assert_eq!(set.n_bands(), 2);
        assert_eq!(set.bands[0], vec![-1.0, -0.5]);
        assert_eq!(set.bands[1], vec![0.2, 0.3]);
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_data(
            &dir,
            "dos.dat",
            "# E (eV)   DOS (states/eV)\n\n  1.0 2.0\n\n# tail comment\n2.0 3.0\n",
        );

        let curve = load_curve(&path).unwrap();
        assert_eq!(curve.n_samples(), 2);
        assert_eq!(curve.x, vec![1.0, 2.0]);
    }

    #[test]
    fn test_missing_file_returns_sentinel() {
        let path = Path::new("definitely_not_here.dat");
        assert!(try_load_curve(path).unwrap().is_none());
        assert!(try_load_bands(path).unwrap().is_none());
    }

    #[test]
    fn test_non_numeric_token_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_data(&dir, "bad.dat", "0.0 1.0\n0.5 oops\n");

        let err = load_curve(&path).unwrap_err();
        assert!(err.to_string().contains("non-numeric token 'oops'"));

        // 文件存在但内容损坏：哨兵接口也必须报错
        assert!(try_load_curve(&path).is_err());
    }

    #[test]
    fn test_ragged_rows_are_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_data(&dir, "ragged.dat", "0.0 1.0 2.0\n0.5 1.0\n");

        let err = load_bands(&path).unwrap_err();
        assert!(err.to_string().contains("expected 3"));
    }

    #[test]
    fn test_empty_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_data(&dir, "empty.dat", "# only a comment\n");

        let err = load_curve(&path).unwrap_err();
        assert!(err.to_string().contains("no data rows"));
    }

    #[test]
    fn test_single_column_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_data(&dir, "one.dat", "1.0\n2.0\n");

        let err = load_curve(&path).unwrap_err();
        assert!(err.to_string().contains("at least 2 columns"));
    }
}
