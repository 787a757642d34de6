use crate::types::errors::AmountError;
use crate::types::number::NumberLiteral;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::AddAssign;
use std::str::FromStr;
use tracing::error;

const DECIMAL_PLACES: usize = 2;
pub const SCALE: i64 = 10i64.pow(DECIMAL_PLACES as u32);
/// Most digits a whole-unit value can have before its minor units leave `i64`.
const MAX_MAGNITUDE: i64 = (i64::MAX.ilog10() + 1) as i64 - DECIMAL_PLACES as i64;

/// A signed quantity of money held as an integer count of minor units (cents).
///
/// Positive amounts are income and negative amounts are expenses. Zero is a
/// valid amount that counts towards neither.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn from_minor_units(minor_units: i64) -> Self {
        Amount(minor_units)
    }

    pub fn minor_units(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    fn saturating_from_wide(value: i128) -> Amount {
        match i64::try_from(value) {
            Ok(minor_units) => Amount(minor_units),
            Err(_) => {
                error!("Amount overflow: {value} minor units saturated to the i64 range");
                Amount(if value < 0 { i64::MIN } else { i64::MAX })
            }
        }
    }
}

impl AddAssign<Amount> for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        *self = Amount::saturating_from_wide(i128::from(self.0) + i128::from(rhs.0));
    }
}

/// Exact sum over `i128`, saturated once at the end so that intermediate
/// overflows which cancel out still give the true total.
impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        let total: i128 = iter.map(|amount| i128::from(amount.0)).sum();
        Amount::saturating_from_wide(total)
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let integer = abs / SCALE as u64;
        let fraction = abs % SCALE as u64;
        write!(formatter, "{}{}.{:0width$}", sign, integer, fraction, width = DECIMAL_PLACES)
    }
}

/// Parses user-entered amount text into minor units.
///
/// The text must be a plain decimal number, optionally in scientific
/// notation (see `NumberLiteral`). It is read exactly, scaled by 100 and
/// rounded to the nearest integer with halves going towards positive
/// infinity, so `"2.345"` becomes 235 and `"-2.345"` becomes -234. Values
/// below a tenth of a minor unit become zero whatever their precision;
/// otherwise at most 28 significant digits are read.
impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
        }

        let literal = NumberLiteral::parse(value)
            .ok_or_else(|| AmountError::InvalidFormat(format!("Value '{value}' is not a number")))?;

        let magnitude = literal.magnitude();
        if literal.is_zero() || magnitude < -(DECIMAL_PLACES as i64) {
            return Ok(Amount::ZERO);
        }
        if magnitude > MAX_MAGNITUDE {
            return Err(AmountError::Overflow);
        }

        let decimal = Decimal::from_scientific(&literal.to_scientific())
            .map_err(|error| {
                AmountError::InvalidFormat(format!("Value '{value}' has too many significant digits: {error}"))
            })?;

        let half = Decimal::new(5, 1);
        let scaled = decimal.checked_mul(Decimal::from(SCALE))
            .and_then(|scaled| scaled.checked_add(half))
            .ok_or(AmountError::Overflow)?
            .floor();

        let minor_units = scaled.to_i64().ok_or(AmountError::Overflow)?;

        Ok(Amount(minor_units))
    }
}
