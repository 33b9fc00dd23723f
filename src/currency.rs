//! 货币格式化
//!
//! 唯一的货币格式化器：前缀符号 + 分组数字 + 固定小数位。

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// 整数部分的分组方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// 南亚分组: 12,34,567
    #[default]
    Lakh,
    /// 千位分组: 1,234,567
    Thousands,
}

/// 货币设置 (config.toml 中的 [currency])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    pub symbol: String,
    pub grouping: Grouping,
    pub fraction_digits: u8,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: "BDT".to_string(),
            grouping: Grouping::Lakh,
            fraction_digits: 2,
        }
    }
}

pub const MAX_FRACTION_DIGITS: u8 = 6;

#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    config: CurrencyConfig,
}

impl CurrencyFormatter {
    pub fn new(config: CurrencyConfig) -> Self {
        Self { config }
    }

    /// 格式化金额，例如 -BDT 1,10,000.00
    pub fn format(&self, amount: f64) -> String {
        if amount.is_nan() {
            return format!("{} NaN", self.config.symbol);
        }
        let sign = if amount < 0.0 { "-" } else { "" };
        if amount.is_infinite() {
            return format!("{}{} ∞", sign, self.config.symbol);
        }

        let digits = self.config.fraction_digits.min(MAX_FRACTION_DIGITS);
        let fixed = round_half_away(amount.abs(), digits);
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        // 四舍五入后可能得到 0.00，此时不显示负号
        let sign = if fixed.bytes().all(|b| b == b'0' || b == b'.') {
            ""
        } else {
            sign
        };

        let mut out = format!(
            "{}{} {}",
            sign,
            self.config.symbol,
            group_digits(int_part, self.config.grouping)
        );
        if let Some(frac) = frac_part {
            out.push('.');
            out.push_str(frac);
        }
        out
    }

    /// 不带货币符号的分组数字，小数部分按原样保留，用于预设标签
    pub fn format_plain(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let raw = value.abs().to_string();
        let (int_part, frac_part) = match raw.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (raw.as_str(), None),
        };

        let mut out = String::new();
        if value < 0.0 {
            out.push('-');
        }
        out.push_str(&group_digits(int_part, self.config.grouping));
        if let Some(frac) = frac_part {
            out.push('.');
            out.push_str(frac);
        }
        out
    }
}

/// 按精确十进制值四舍五入 (0.125 -> 0.13)，返回固定小数位的字符串
fn round_half_away(value: f64, digits: u8) -> String {
    match Decimal::from_f64_retain(value) {
        Some(d) => {
            let mut rounded =
                d.round_dp_with_strategy(u32::from(digits), RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(u32::from(digits));
            rounded.to_string()
        }
        // 超出 Decimal 范围的值没有小数部分，不存在中点
        None => format!("{:.*}", usize::from(digits), value),
    }
}

/// 对纯数字串插入逗号
pub fn group_digits(digits: &str, grouping: Grouping) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let step = match grouping {
        Grouping::Lakh => 2,
        Grouping::Thousands => 3,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(step);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lakh() -> CurrencyFormatter {
        CurrencyFormatter::new(CurrencyConfig::default())
    }

    fn thousands() -> CurrencyFormatter {
        CurrencyFormatter::new(CurrencyConfig {
            grouping: Grouping::Thousands,
            ..CurrencyConfig::default()
        })
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("0", Grouping::Lakh), "0");
        assert_eq!(group_digits("999", Grouping::Lakh), "999");
        assert_eq!(group_digits("1000", Grouping::Lakh), "1,000");
        assert_eq!(group_digits("110000", Grouping::Lakh), "1,10,000");
        assert_eq!(group_digits("1234567", Grouping::Lakh), "12,34,567");
        assert_eq!(group_digits("1234567", Grouping::Thousands), "1,234,567");
        assert_eq!(group_digits("123456", Grouping::Thousands), "123,456");
    }

    #[test]
    fn test_format_amounts() {
        assert_eq!(lakh().format(10000.0), "BDT 10,000.00");
        assert_eq!(lakh().format(110000.0), "BDT 1,10,000.00");
        assert_eq!(thousands().format(310000.0), "BDT 310,000.00");
        assert_eq!(lakh().format(0.0), "BDT 0.00");
        assert_eq!(lakh().format(12.345678), "BDT 12.35");
    }

    #[test]
    fn test_exact_halves_round_away_from_zero() {
        assert_eq!(lakh().format(0.125), "BDT 0.13");
        let interest = crate::calculator::compute_interest(1.0, 12.5, 1.0);
        assert_eq!(lakh().format(interest), "BDT 0.13");
        assert_eq!(lakh().format(-0.125), "-BDT 0.13");
        assert_eq!(lakh().format(2.675), "BDT 2.67"); // 二进制值略小于 2.675

        let whole = CurrencyFormatter::new(CurrencyConfig {
            fraction_digits: 0,
            ..CurrencyConfig::default()
        });
        assert_eq!(whole.format(2.5), "BDT 3");
        assert_eq!(whole.format(-2.5), "-BDT 3");
    }

    #[test]
    fn test_large_amounts_outside_decimal_range() {
        assert_eq!(
            lakh().format(1e30),
            format!("BDT {}.00", group_digits(&format!("{:.0}", 1e30), Grouping::Lakh))
        );
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(lakh().format(-5000.0), "-BDT 5,000.00");
        assert_eq!(lakh().format(-0.0), "BDT 0.00");
        assert_eq!(lakh().format(-0.001), "BDT 0.00");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(lakh().format(f64::INFINITY), "BDT ∞");
        assert_eq!(lakh().format(f64::NEG_INFINITY), "-BDT ∞");
        assert_eq!(lakh().format(f64::NAN), "BDT NaN");
    }

    #[test]
    fn test_zero_fraction_digits() {
        let fmt = CurrencyFormatter::new(CurrencyConfig {
            symbol: "৳".to_string(),
            fraction_digits: 0,
            ..CurrencyConfig::default()
        });
        assert_eq!(fmt.format(61250.4), "৳ 61,250");
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(lakh().format_plain(250000.0), "2,50,000");
        assert_eq!(thousands().format_plain(50000.0), "50,000");
        assert_eq!(lakh().format_plain(7.5), "7.5");
        assert_eq!(lakh().format_plain(-1500.25), "-1,500.25");
    }
}
