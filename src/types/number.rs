use regex::Regex;
use std::sync::LazyLock;

static NUMBER_RX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-])?(?:(\d+)(?:\.(\d*))?|\.(\d+))(?:[eE]([+-]?\d+))?$")
        .expect("number pattern is valid")
});

/// Decimal number text split into its parts.
///
/// Accepted text is an optional sign, decimal digits with at most one decimal
/// point (`".5"` and `"5."` are both fine), and an optional `e`/`E` exponent.
/// Digit separators such as `_` or `,`, hexadecimal, `Infinity` and `NaN`
/// are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NumberLiteral<'a> {
    pub negative: bool,
    pub integer: &'a str,
    pub fraction: &'a str,
    pub exponent: &'a str
}

impl<'a> NumberLiteral<'a> {
    pub fn parse(text: &'a str) -> Option<Self> {
        let captures = NUMBER_RX.captures(text)?;
        let part = |index: usize| captures.get(index).map_or("", |found| found.as_str());

        let fraction = if captures.get(4).is_some() { part(4) } else { part(3) };

        Some(Self {
            negative: part(1) == "-",
            integer: part(2),
            fraction,
            exponent: part(5)
        })
    }

    pub fn is_zero(&self) -> bool {
        self.integer.chars().chain(self.fraction.chars()).all(|digit| digit == '0')
    }

    /// Exponent value, clamped to the `i64` range.
    pub fn exponent(&self) -> i64 {
        if self.exponent.is_empty() {
            return 0;
        }

        self.exponent.parse().unwrap_or(if self.exponent.starts_with('-') { i64::MIN } else { i64::MAX })
    }

    /// Count of digits before the decimal point once the exponent is applied.
    ///
    /// Values below one give zero or a negative count: `"0.004"` is -2.
    pub fn magnitude(&self) -> i64 {
        let significant_integer = self.integer.trim_start_matches('0');

        let digits = if significant_integer.is_empty() {
            let leading_zeros = self.fraction.len() - self.fraction.trim_start_matches('0').len();
            -(leading_zeros as i64)
        } else {
            significant_integer.len() as i64
        };

        digits.saturating_add(self.exponent())
    }

    /// The same number in the `mantissa e exponent` shape `rust_decimal` reads.
    pub fn to_scientific(&self) -> String {
        let sign = if self.negative { "-" } else { "" };
        let integer = match self.integer.trim_start_matches('0') {
            "" => "0",
            digits => digits
        };
        let fraction = if self.fraction.is_empty() { "0" } else { self.fraction };

        format!("{sign}{integer}.{fraction}e{}", self.exponent())
    }
}
