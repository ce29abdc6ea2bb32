//! # 核素数据模型
//!
//! 单个核素记录与加载后的只读核素表。
//!
//! ## 依赖关系
//! - 被 `parsers/nucbasics.rs` 构建
//! - 被 `halflife/` 和 `commands/` 使用

/// 核素记录（加载后不可变）
#[derive(Debug, Clone, PartialEq)]
pub struct Nuclide {
    /// 质子数 Z
    pub z: u32,

    /// 中子数 N
    pub n: u32,

    /// 元素符号
    pub symbol: String,

    /// 半衰期 (s)；稳定核素或缺失/无法解析的数据为 None
    pub half_life_s: Option<f64>,
}

impl Nuclide {
    pub fn new(z: u32, n: u32, symbol: impl Into<String>, half_life_s: Option<f64>) -> Self {
        Nuclide {
            z,
            n,
            symbol: symbol.into(),
            half_life_s,
        }
    }

    /// 质量数 A = Z + N（u64，任意 u32 计数相加都不会溢出）
    pub fn mass_number(&self) -> u64 {
        u64::from(self.z) + u64::from(self.n)
    }

    /// 纯文本标签，例如 `238U`
    pub fn label(&self) -> String {
        format!("{}{}", self.mass_number(), self.symbol)
    }

    /// HTML 标签，例如 `<sup>238</sup>U`
    pub fn html_label(&self) -> String {
        format!(
            "<sup>{}</sup>{}",
            self.mass_number(),
            escape_html(&self.symbol)
        )
    }

    /// 终端上标标签，例如 `²³⁸U`
    pub fn superscript_label(&self) -> String {
        let digits: String = self
            .mass_number()
            .to_string()
            .chars()
            .map(superscript_digit)
            .collect();
        format!("{}{}", digits, self.symbol)
    }
}

fn superscript_digit(c: char) -> char {
    match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        other => other,
    }
}

/// 转义 HTML 特殊字符
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// 加载后的核素表
///
/// 每个进程加载一次，之后只以共享引用传入各次查询。
#[derive(Debug, Clone, Default)]
pub struct NuclideTable {
    /// 全部核素（保持源文件顺序）
    pub nuclides: Vec<Nuclide>,

    /// 半衰期被强制置为未定义的行数
    pub undefined_half_lives: usize,
}

impl NuclideTable {
    pub fn new(nuclides: Vec<Nuclide>) -> Self {
        let undefined_half_lives = nuclides.iter().filter(|n| n.half_life_s.is_none()).count();
        NuclideTable {
            nuclides,
            undefined_half_lives,
        }
    }

    /// 核素数
    pub fn len(&self) -> usize {
        self.nuclides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nuclides.is_empty()
    }

    /// 具有确定半衰期的核素数
    pub fn measured_count(&self) -> usize {
        self.len() - self.undefined_half_lives
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mass_number_and_labels() {
        let u = Nuclide::new(92, 146, "U", Some(1.41e17));
        assert_eq!(u.mass_number(), 238);
        assert_eq!(u.label(), "238U");
        assert_eq!(u.html_label(), "<sup>238</sup>U");
        assert_eq!(u.superscript_label(), "²³⁸U");
    }

    #[test]
    fn test_mass_number_at_count_limits() {
        let extreme = Nuclide::new(u32::MAX, u32::MAX, "X", None);
        assert_eq!(extreme.mass_number(), 2 * u64::from(u32::MAX));
        assert_eq!(extreme.label(), "8589934590X");
    }

    #[test]
    fn test_html_label_escapes_symbol() {
        let odd = Nuclide::new(1, 0, "<b>", None);
        assert_eq!(odd.html_label(), "<sup>1</sup>&lt;b&gt;");
    }

    #[test]
    fn test_table_counts_undefined() {
        let table = NuclideTable::new(vec![
            Nuclide::new(6, 8, "C", Some(1.8e11)),
            Nuclide::new(6, 6, "C", None),
            Nuclide::new(26, 30, "Fe", None),
        ]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.undefined_half_lives, 2);
        assert_eq!(table.measured_count(), 1);
        assert!(!table.is_empty());
        assert!(NuclideTable::default().is_empty());
    }
}
