//! # 核素基础数据表解析器
//!
//! 解析 CSV 格式的核素基础数据表（nucbasics）。
//!
//! ## 格式说明
//! ```text
//! z,n,symbol,half life (s)
//! 92,146,U,1.41e17
//! 6,8,C,1.8e11
//! 6,6,C,stable
//! ```
//! - 必需列: `z`, `n`, `symbol`, `half life (s)`，其余列忽略
//! - 半衰期无法解析或整列缺省（短行）时置为未定义，不报错
//! - `z`/`n` 必须是非负整数（允许 `92.0` 这类整数值浮点）
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `parsers/half_life.rs`, `models/nuclide.rs`
//! - 使用 `csv` + `serde` 按表头反序列化

use crate::error::{NucxError, Result};
use crate::models::{Nuclide, NuclideTable};
use crate::parsers::half_life::coerce_half_life;

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// 必需列名
pub const REQUIRED_COLUMNS: [&str; 4] = ["z", "n", "symbol", "half life (s)"];

/// CSV 原始行（全部按文本读入，再逐列校验）
#[derive(Debug, Deserialize)]
struct RawRow {
    z: String,
    n: String,
    symbol: String,
    // 行尾缺省的半衰期按空值处理
    #[serde(rename = "half life (s)", default)]
    half_life: String,
}

/// 读取并解析核素数据文件
pub fn load_nucbasics_file(path: &Path) -> Result<NuclideTable> {
    if !path.exists() {
        return Err(NucxError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| NucxError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_nucbasics_content(&content, &path.display().to_string())
}

/// 从字符串内容解析核素数据表
pub fn parse_nucbasics_content(content: &str, source_name: &str) -> Result<NuclideTable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(NucxError::MissingColumn {
                path: source_name.to_string(),
                column: column.to_string(),
            });
        }
    }

    let mut nuclides = Vec::new();

    for (idx, record) in reader.records().enumerate() {
        // 表头占第 1 行
        let line = idx + 2;
        let record = record?;
        let raw: RawRow = record.deserialize(Some(&headers)).map_err(|e| NucxError::ParseError {
            path: source_name.to_string(),
            reason: format!("row {}: {}", line, e),
        })?;

        let z = parse_count(&raw.z).ok_or_else(|| NucxError::ParseError {
            path: source_name.to_string(),
            reason: format!("row {}: invalid proton count '{}'", line, raw.z),
        })?;
        let n = parse_count(&raw.n).ok_or_else(|| NucxError::ParseError {
            path: source_name.to_string(),
            reason: format!("row {}: invalid neutron count '{}'", line, raw.n),
        })?;

        let symbol = raw.symbol.trim();
        if symbol.is_empty() {
            return Err(NucxError::ParseError {
                path: source_name.to_string(),
                reason: format!("row {}: empty element symbol", line),
            });
        }

        let half_life_s = coerce_half_life(&raw.half_life);
        if half_life_s.is_none() {
            log::trace!(
                "row {}: half-life '{}' coerced to undefined",
                line,
                raw.half_life.trim()
            );
        }

        nuclides.push(Nuclide::new(z, n, symbol, half_life_s));
    }

    let table = NuclideTable::new(nuclides);
    log::debug!(
        "loaded {} nuclides from {} ({} without a defined half-life)",
        table.len(),
        source_name,
        table.undefined_half_lives
    );

    Ok(table)
}

/// 解析非负整数计数；接受整数值浮点（如 `92.0`）
fn parse_count(raw: &str) -> Option<u32> {
    let text = raw.trim();
    if let Ok(v) = text.parse::<u32>() {
        return Some(v);
    }
    let v: f64 = text.parse().ok()?;
    if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 {
        Some(v as u32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
z,n,symbol,half life (s),decay mode
92,146,U,1.41e17,A
6,8,C,1.8e11,B-
6,6,C,,
26,30,Fe,stable,
";

    #[test]
    fn test_parse_basic_table() {
        let table = parse_nucbasics_content(SAMPLE, "sample").unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.undefined_half_lives, 2);

        let u = &table.nuclides[0];
        assert_eq!((u.z, u.n, u.symbol.as_str()), (92, 146, "U"));
        assert_eq!(u.half_life_s, Some(1.41e17));
        assert_eq!(table.nuclides[2].half_life_s, None);
        assert_eq!(table.nuclides[3].half_life_s, None);
    }

    #[test]
    fn test_column_order_irrelevant() {
        let content = "symbol,half life (s),n,z\nU,2.1e17,146,92\n";
        let table = parse_nucbasics_content(content, "reordered").unwrap();
        assert_eq!(table.nuclides[0].mass_number(), 238);
    }

    #[test]
    fn test_float_counts_accepted() {
        let content = "z,n,symbol,half life (s)\n92.0,146.0,U,2.1e17\n";
        let table = parse_nucbasics_content(content, "floats").unwrap();
        assert_eq!(table.nuclides[0].z, 92);
    }

    #[test]
    fn test_missing_column() {
        let content = "z,n,symbol\n92,146,U\n";
        let err = parse_nucbasics_content(content, "nohl").unwrap_err();
        assert!(matches!(
            err,
            NucxError::MissingColumn { ref column, .. } if column == "half life (s)"
        ));
    }

    #[test]
    fn test_invalid_counts() {
        let content = "z,n,symbol,half life (s)\n-1,146,U,2.1e17\n";
        assert!(matches!(
            parse_nucbasics_content(content, "neg"),
            Err(NucxError::ParseError { .. })
        ));

        let content = "z,n,symbol,half life (s)\n92,14.5,U,2.1e17\n";
        assert!(parse_nucbasics_content(content, "frac").is_err());
    }

    #[test]
    fn test_short_row_half_life_is_undefined() {
        let content = "z,n,symbol,half life (s)\n92,146,U,2.1e17\n6,6,C\n";
        let table = parse_nucbasics_content(content, "short").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.nuclides[1].label(), "12C");
        assert_eq!(table.nuclides[1].half_life_s, None);
        assert_eq!(table.undefined_half_lives, 1);
    }

    #[test]
    fn test_short_row_missing_symbol() {
        let content = "z,n,symbol,half life (s)\n92,146\n";
        assert!(matches!(
            parse_nucbasics_content(content, "nosym"),
            Err(NucxError::ParseError { .. })
        ));
    }

    #[test]
    fn test_huge_counts_do_not_overflow_mass_number() {
        let content = "z,n,symbol,half life (s)\n4000000000,4000000000,X,1\n";
        let table = parse_nucbasics_content(content, "huge").unwrap();
        assert_eq!(table.nuclides[0].mass_number(), 8_000_000_000);
        assert_eq!(table.nuclides[0].label(), "8000000000X");
    }

    #[test]
    fn test_empty_symbol() {
        let content = "z,n,symbol,half life (s)\n92,146, ,2.1e17\n";
        assert!(parse_nucbasics_content(content, "nosym").is_err());
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let content = "z,n,symbol,half life (s)\n";
        let table = parse_nucbasics_content(content, "empty").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let table = load_nucbasics_file(file.path()).unwrap();
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");
        assert!(matches!(
            load_nucbasics_file(&missing),
            Err(NucxError::FileNotFound { .. })
        ));
    }
}
