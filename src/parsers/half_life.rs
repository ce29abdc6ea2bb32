//! # 半衰期数值规整
//!
//! 源数据中的半衰期列可能是数字、文本（如 "stable"）、空白或其他格式错误的值。
//! 这里采用严格规则：能按 `f64` 语法解析为有限非负数则保留，否则视为未定义。
//!
//! ## 规则
//! - 去除首尾空白
//! - 只接受 `.` 作为小数点，可带指数（`1.8e11`）
//! - 空串、NaN、无穷、负数 → None
//! - 不做本地化解析，不接受单位后缀
//!
//! ## 依赖关系
//! - 被 `parsers/nucbasics.rs` 调用

/// 将半衰期文本规整为秒数；无法解析则返回 None
pub fn coerce_half_life(raw: &str) -> Option<f64> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    // f64::from_str 会接受 "inf"/"NaN"，下面统一过滤
    let value: f64 = text.parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(coerce_half_life("1.8e11"), Some(1.8e11));
        assert_eq!(coerce_half_life(" 2.1E17 "), Some(2.1e17));
        assert_eq!(coerce_half_life("0"), Some(0.0));
        assert_eq!(coerce_half_life("42"), Some(42.0));
        assert_eq!(coerce_half_life(".5"), Some(0.5));
    }

    #[test]
    fn test_textual_values_are_undefined() {
        assert_eq!(coerce_half_life(""), None);
        assert_eq!(coerce_half_life("   "), None);
        assert_eq!(coerce_half_life("stable"), None);
        assert_eq!(coerce_half_life("STABLE"), None);
        assert_eq!(coerce_half_life("> 1e20"), None);
        assert_eq!(coerce_half_life("1.2 y"), None);
    }

    #[test]
    fn test_locale_formats_rejected() {
        assert_eq!(coerce_half_life("1,5"), None);
        assert_eq!(coerce_half_life("1 000"), None);
    }

    #[test]
    fn test_non_finite_and_negative_rejected() {
        assert_eq!(coerce_half_life("NaN"), None);
        assert_eq!(coerce_half_life("inf"), None);
        assert_eq!(coerce_half_life("-infinity"), None);
        assert_eq!(coerce_half_life("-3.0"), None);
    }
}
