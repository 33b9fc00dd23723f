//! 单利计算核心
//!
//! 公式: (P × R × T) / 100
//! 所有输入先经过数值强制转换，无法解析的值一律按 0 处理，因此这里的函数永远不会失败。

/// 未经校验的原始输入值
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl RawValue {
    /// 转换为 f64，失败时回退为 0
    pub fn coerce(&self) -> f64 {
        match self {
            RawValue::Number(n) => zero_if_nan(*n),
            RawValue::Text(s) => coerce_str(s),
            RawValue::Missing => 0.0,
        }
    }
}

fn zero_if_nan(n: f64) -> f64 {
    if n.is_nan() { 0.0 } else { n }
}

/// 文本强制转换：去掉首尾空白，空串或解析失败都得到 0
pub fn coerce_str(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().map(zero_if_nan).unwrap_or(0.0)
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<&String> for RawValue {
    fn from(s: &String) -> Self {
        RawValue::Text(s.clone())
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawValue::Missing)
    }
}

/// 计算单利 (P × R × T) / 100，不做取整和范围校验
pub fn compute_interest(
    principal: impl Into<RawValue>,
    rate: impl Into<RawValue>,
    time: impl Into<RawValue>,
) -> f64 {
    let p = principal.into().coerce();
    let r = rate.into().coerce();
    let t = time.into().coerce();
    (p * r * t) / 100.0
}

/// 本息合计 = 强制转换后的本金 + 利息
pub fn compute_total(principal: impl Into<RawValue>, interest: f64) -> f64 {
    principal.into().coerce() + interest
}

/// 一组原始输入 (本金, 利率, 期限)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InterestInput {
    pub principal: RawValue,
    pub rate: RawValue,
    pub time: RawValue,
}

impl InterestInput {
    pub fn new(
        principal: impl Into<RawValue>,
        rate: impl Into<RawValue>,
        time: impl Into<RawValue>,
    ) -> Self {
        Self {
            principal: principal.into(),
            rate: rate.into(),
            time: time.into(),
        }
    }
}

/// 派生结果，满足 total_amount = principal' + interest_amount
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterestResult {
    pub interest_amount: f64,
    pub total_amount: f64,
}

impl InterestResult {
    pub fn evaluate(input: &InterestInput) -> Self {
        let interest_amount = compute_interest(
            input.principal.clone(),
            input.rate.clone(),
            input.time.clone(),
        );
        let total_amount = compute_total(input.principal.clone(), interest_amount);
        Self {
            interest_amount,
            total_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(p: impl Into<RawValue> + Clone, r: f64, t: f64) -> (f64, f64) {
        let interest = compute_interest(p.clone(), r, t);
        (interest, compute_total(p, interest))
    }

    #[test]
    fn test_concrete_scenarios() {
        assert_eq!(scenario(100000.0, 10.0, 1.0), (10000.0, 110000.0));
        assert_eq!(scenario(50000.0, 7.5, 3.0), (11250.0, 61250.0));
        assert_eq!(scenario(250000.0, 12.0, 2.0), (60000.0, 310000.0));
        assert_eq!(scenario("", 10.0, 1.0), (0.0, 0.0));
        assert_eq!(scenario(100000.0, -5.0, 1.0), (-5000.0, 95000.0));
        assert_eq!(scenario(0.0, 0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn test_matches_formula_exactly() {
        let cases = [(1234.56, 3.3, 0.25), (0.1, 0.2, 0.3), (1e12, 99.9, 40.0)];
        for (p, r, t) in cases {
            assert_eq!(compute_interest(p, r, t), (p * r * t) / 100.0);
            assert_eq!(
                compute_total(p, compute_interest(p, r, t)),
                p + (p * r * t) / 100.0
            );
        }
    }

    #[test]
    fn test_malformed_text_coerces_to_zero() {
        for raw in ["", "   ", "abc", "12abc", "1,000", "--5"] {
            assert_eq!(coerce_str(raw), 0.0, "input {:?}", raw);
            assert_eq!(
                compute_interest(raw, 10.0, 1.0),
                compute_interest(0.0, 10.0, 1.0)
            );
        }
        assert_eq!(compute_interest(None::<f64>, 10.0, 1.0), 0.0);
        assert_eq!(compute_interest(RawValue::Missing, 10.0, 1.0), 0.0);
    }

    #[test]
    fn test_numeric_text_is_parsed() {
        assert_eq!(coerce_str(" 7.5 "), 7.5);
        assert_eq!(coerce_str("-5"), -5.0);
        assert_eq!(coerce_str("1e3"), 1000.0);
        assert_eq!(compute_interest("50000", "7.5", "3"), 11250.0);
    }

    #[test]
    fn test_nan_becomes_zero_but_infinity_passes_through() {
        assert_eq!(RawValue::Number(f64::NAN).coerce(), 0.0);
        assert_eq!(coerce_str("NaN"), 0.0);
        assert_eq!(coerce_str("inf"), f64::INFINITY);
        assert!(compute_interest("inf", 10.0, 1.0).is_infinite());
    }

    #[test]
    fn test_idempotent() {
        let first = compute_interest("1234.5", 6.75, 2.5);
        let second = compute_interest("1234.5", 6.75, 2.5);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_evaluate_keeps_total_invariant() {
        let input = InterestInput::new("  2500 ", "4", Some("2"));
        let result = InterestResult::evaluate(&input);
        assert_eq!(result.interest_amount, 200.0);
        assert_eq!(result.total_amount, 2500.0 + result.interest_amount);

        let empty = InterestResult::evaluate(&InterestInput::default());
        assert_eq!(empty.interest_amount, 0.0);
        assert_eq!(empty.total_amount, 0.0);
    }
}
