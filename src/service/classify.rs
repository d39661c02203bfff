use bigdecimal::BigDecimal;

use crate::models::MatchCategory;

/// 价格容差: 差额绝对值严格小于 0.01 (一分钱) 视为相等
fn price_tolerance() -> BigDecimal {
    BigDecimal::from(1) / BigDecimal::from(100)
}

/// 价格相等判定 (绝不使用浮点精确相等)
///
/// 任一侧缺失即不相等; 恰好相差 0.01 不算相等 (严格小于)。
pub fn prices_within_tolerance(a: Option<&BigDecimal>, b: Option<&BigDecimal>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => (a - b).abs() < price_tolerance(),
        _ => false,
    }
}

/// 两侧都存在时的分类阶梯 (按优先级顺序求值)
pub fn classify_matched(qty_equal: bool, price_equal: bool) -> MatchCategory {
    if qty_equal && price_equal {
        MatchCategory::PartQtyPrice
    } else if qty_equal {
        MatchCategory::PartQty
    } else if price_equal {
        MatchCategory::PartPrice
    } else {
        MatchCategory::PartOnly
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn ladder_evaluates_in_priority_order() {
        assert_eq!(classify_matched(true, true), MatchCategory::PartQtyPrice);
        assert_eq!(classify_matched(true, false), MatchCategory::PartQty);
        assert_eq!(classify_matched(false, true), MatchCategory::PartPrice);
        assert_eq!(classify_matched(false, false), MatchCategory::PartOnly);
    }

    #[test]
    fn tolerance_boundary_is_strict() {
        // 恰好差 0.01 不相等
        assert!(!prices_within_tolerance(
            Some(&dec("100.00")),
            Some(&dec("100.01"))
        ));
        // 差 0.0099 相等
        assert!(prices_within_tolerance(
            Some(&dec("100.00")),
            Some(&dec("100.0099"))
        ));
        assert!(prices_within_tolerance(
            Some(&dec("100.00")),
            Some(&dec("100.00"))
        ));
    }

    #[test]
    fn absent_price_never_compares_equal() {
        assert!(!prices_within_tolerance(None, Some(&dec("100.00"))));
        assert!(!prices_within_tolerance(Some(&dec("100.00")), None));
        assert!(!prices_within_tolerance(None, None));
    }

    #[test]
    fn tolerance_is_symmetric() {
        assert!(prices_within_tolerance(
            Some(&dec("100.0099")),
            Some(&dec("100.00"))
        ));
    }
}
