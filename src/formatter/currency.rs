use crate::formatter::errors::FormatError;
use crate::types::{Amount, NumberLiteral, SCALE};
use num_format::{Locale, ToFormattedString};

/// Symbol used by English formatting rules for Australian dollars.
pub const CURRENCY_SYMBOL: &str = "A$";

const LOCALE: Locale = Locale::en;

/// Formats stored minor units for display, e.g. `-123456` as `-A$1,234.56`.
pub fn format_currency(amount: Amount) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let magnitude = u128::from(amount.minor_units().unsigned_abs());

    format!("{sign}{}", format_magnitude(magnitude))
}

/// Formats a signed amount given as text.
///
/// The sign comes from the numeric value of the whole text. The magnitude
/// comes from its digits alone, read as minor units, so `"-12.34"` and
/// `"-1234"` both render as `-A$12.34`.
pub fn format_currency_text(raw_value: &str) -> Result<String, FormatError> {
    let trimmed = raw_value.trim();

    let literal = NumberLiteral::parse(trimmed)
        .ok_or_else(|| FormatError::InvalidNumber(raw_value.to_string()))?;

    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    let magnitude = digits.parse::<u128>().map_err(|_| FormatError::Overflow)?;

    let sign = if literal.negative && !literal.is_zero() { "-" } else { "" };

    Ok(format!("{sign}{}", format_magnitude(magnitude)))
}

fn format_magnitude(minor_units: u128) -> String {
    let scale = SCALE as u128;
    let integer = (minor_units / scale).to_formatted_string(&LOCALE);
    let fraction = minor_units % scale;

    format!("{CURRENCY_SYMBOL}{integer}{}{fraction:02}", LOCALE.decimal())
}
