//! # 半衰期区间筛选
//!
//! 按闭区间 `[lo, hi]`（单位：秒）筛选核素。
//!
//! ## 规则
//! - 半衰期未定义的核素永不匹配
//! - 保持输入顺序，不重新排序
//! - `lo > hi` 时结果为空，不视为错误
//!
//! ## 依赖关系
//! - 被 `halflife/query.rs` 调用
//! - 使用 `models/nuclide.rs`

use crate::halflife::units::Quantity;
use crate::models::Nuclide;

/// 秒为单位的上下界
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundPair {
    pub lo_s: f64,
    pub hi_s: f64,
}

impl BoundPair {
    pub fn new(lo_s: f64, hi_s: f64) -> Self {
        BoundPair { lo_s, hi_s }
    }

    /// 由两个带单位的量构造
    pub fn from_quantities(lower: Quantity, upper: Quantity) -> Self {
        BoundPair::new(lower.to_seconds(), upper.to_seconds())
    }

    /// 区间是否倒置
    pub fn is_inverted(&self) -> bool {
        self.lo_s > self.hi_s
    }

    /// 半衰期是否落在区间内（含两端）
    pub fn contains(&self, half_life_s: Option<f64>) -> bool {
        match half_life_s {
            Some(h) => self.lo_s <= h && h <= self.hi_s,
            None => false,
        }
    }
}

/// 返回半衰期落在 `[lo_s, hi_s]` 内的全部核素
pub fn filter_by_half_life(records: &[Nuclide], lo_s: f64, hi_s: f64) -> Vec<&Nuclide> {
    let bounds = BoundPair::new(lo_s, hi_s);
    records
        .iter()
        .filter(|r| bounds.contains(r.half_life_s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::halflife::units::TimeUnit;
    use proptest::prelude::*;

    fn sample() -> Vec<Nuclide> {
        vec![
            Nuclide::new(92, 146, "U", Some(2.1e17)),
            Nuclide::new(6, 8, "C", Some(1.8e11)),
        ]
    }

    #[test]
    fn test_uranium_scenario() {
        let records = sample();
        let bounds = BoundPair::from_quantities(
            Quantity::new(100.0, TimeUnit::MegaAnnum),
            Quantity::new(10000.0, TimeUnit::MegaAnnum),
        );
        let hits = filter_by_half_life(&records, bounds.lo_s, bounds.hi_s);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].symbol, "U");
    }

    #[test]
    fn test_inverted_bounds_empty() {
        let records = sample();
        let bounds = BoundPair::from_quantities(
            Quantity::new(5000.0, TimeUnit::MegaAnnum),
            Quantity::new(0.1, TimeUnit::MegaAnnum),
        );
        assert!(bounds.is_inverted());
        assert!(filter_by_half_life(&records, bounds.lo_s, bounds.hi_s).is_empty());
    }

    #[test]
    fn test_inclusive_edges() {
        let records = sample();
        let hits = filter_by_half_life(&records, 1.8e11, 2.1e17);
        assert_eq!(hits.len(), 2);
        let hits = filter_by_half_life(&records, 2.1e17, 2.1e17);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_undefined_never_matches() {
        let records = vec![Nuclide::new(1, 0, "H", None)];
        assert!(filter_by_half_life(&records, f64::NEG_INFINITY, f64::INFINITY).is_empty());
    }

    fn arb_nuclide() -> impl Strategy<Value = Nuclide> {
        (0u32..120, 0u32..180, prop::option::of(0.0f64..1e20))
            .prop_map(|(z, n, h)| Nuclide::new(z, n, "X", h))
    }

    proptest! {
        #[test]
        fn prop_defined_in_range_is_kept(
            records in prop::collection::vec(arb_nuclide(), 0..40),
            lo in 0.0f64..1e19,
            width in 0.0f64..1e19,
        ) {
            let hi = lo + width;
            let hits = filter_by_half_life(&records, lo, hi);
            for r in &records {
                let expected = matches!(r.half_life_s, Some(h) if lo <= h && h <= hi);
                prop_assert_eq!(hits.iter().any(|hit| std::ptr::eq(*hit, r)), expected);
            }
        }

        #[test]
        fn prop_inverted_is_empty(
            records in prop::collection::vec(arb_nuclide(), 0..40),
            hi in 1.0f64..1e19,
            factor in 1.5f64..100.0,
        ) {
            prop_assert!(filter_by_half_life(&records, hi * factor, hi).is_empty());
        }

        #[test]
        fn prop_order_preserved(
            records in prop::collection::vec(arb_nuclide(), 0..40),
            lo in 0.0f64..1e19,
            hi in 0.0f64..1e20,
        ) {
            let hits = filter_by_half_life(&records, lo, hi);
            let positions: Vec<usize> = hits
                .iter()
                .map(|hit| records.iter().position(|r| std::ptr::eq(r, *hit)).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
