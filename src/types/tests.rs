use super::{Amount, AmountError, NumberLiteral};
use anyhow::Result;
use std::str::FromStr;

#[test]
fn test_amount_successfully_parses_valid_strings() -> Result<()> {
    let test_cases = vec![
        ("12.34", 1234),
        ("0", 0),
        ("500.00", 50000),
        ("-20.00", -2000),
        ("  1.5  ", 150),
        ("-0.01", -1),
        ("100", 10000),
        ("1e3", 100000),
        ("1.5E2", 15000),
        ("+5", 500),
        (".5", 50),
        ("5.", 500),
        ("-0", 0),
        ("1e16", 1_000_000_000_000_000_000),
        ("92233720368547758.07", i64::MAX),
        ("-92233720368547758.08", i64::MIN),
    ];

    for (input_string, expected_minor_units) in test_cases {
        assert_eq!(Amount::from_str(input_string)?.minor_units(), expected_minor_units, "input: {input_string}");
    }

    Ok(())
}

#[test]
fn test_amount_rounds_half_cents_towards_positive_infinity() -> Result<()> {
    assert_eq!(Amount::from_str("2.345")?.minor_units(), 235);
    assert_eq!(Amount::from_str("-2.345")?.minor_units(), -234);
    assert_eq!(Amount::from_str("0.004")?.minor_units(), 0);
    assert_eq!(Amount::from_str("-0.006")?.minor_units(), -1);

    Ok(())
}

#[test]
fn test_amount_fails_to_parse_invalid_strings() {
    assert!(matches!(Amount::from_str(""), Err(AmountError::InvalidFormat(_))));
    assert!(matches!(Amount::from_str("   "), Err(AmountError::InvalidFormat(_))));
    assert!(matches!(Amount::from_str("abc"), Err(AmountError::InvalidFormat(_))));
    assert!(matches!(Amount::from_str("1.2.3"), Err(AmountError::InvalidFormat(_))));
}

#[test]
fn test_amount_rejects_text_outside_the_decimal_grammar() {
    let test_cases = vec!["1_000", "1,000", "1 000", "0x10", "Infinity", "NaN", "12e", "e5", ".", "--1", "1e+-2"];

    for input_string in test_cases {
        assert!(
            matches!(Amount::from_str(input_string), Err(AmountError::InvalidFormat(_))),
            "input: {input_string}"
        );
    }
}

#[test]
fn test_amount_reports_overflow_for_values_beyond_minor_unit_range() {
    let test_cases = vec!["100000000000000000", "92233720368547758.08", "-92233720368547758.09", "1e30", "-1e30", "1e99999999999999999999"];

    for input_string in test_cases {
        assert!(matches!(Amount::from_str(input_string), Err(AmountError::Overflow)), "input: {input_string}");
    }
}

#[test]
fn test_amount_reads_tiny_values_as_zero() -> Result<()> {
    assert_eq!(Amount::from_str("1e-30")?, Amount::ZERO);
    assert_eq!(Amount::from_str("-0.0001")?, Amount::ZERO);
    assert_eq!(Amount::from_str("0.000000000000000000000000000000000000001")?, Amount::ZERO);
    assert_eq!(Amount::from_str("5e-3")?.minor_units(), 1);

    Ok(())
}

#[test]
fn test_number_literal_splits_parts_and_measures_magnitude() -> Result<()> {
    let literal = NumberLiteral::parse("-0012.50e3").ok_or_else(|| anyhow::anyhow!("literal rejected"))?;

    assert!(literal.negative);
    assert_eq!(literal.integer, "0012");
    assert_eq!(literal.fraction, "50");
    assert_eq!(literal.exponent(), 3);
    assert_eq!(literal.magnitude(), 5);
    assert_eq!(literal.to_scientific(), "-12.50e3");

    let fraction_only = NumberLiteral::parse(".004").ok_or_else(|| anyhow::anyhow!("literal rejected"))?;
    assert_eq!(fraction_only.magnitude(), -2);
    assert_eq!(fraction_only.to_scientific(), "0.004e0");

    Ok(())
}

#[test]
fn test_amount_displays_two_decimal_places() {
    assert_eq!(Amount::from_minor_units(1234).to_string(), "12.34");
    assert_eq!(Amount::from_minor_units(-5).to_string(), "-0.05");
    assert_eq!(Amount::from_minor_units(0).to_string(), "0.00");
    assert_eq!(Amount::from_minor_units(i64::MIN).to_string(), "-92233720368547758.08");
}

#[test]
fn test_amount_sum_saturates_instead_of_dropping_addends() {
    let amounts = vec![
        Amount::from_minor_units(i64::MAX - 1),
        Amount::from_minor_units(1),
        Amount::from_minor_units(1),
    ];

    let total: Amount = amounts.into_iter().sum();

    assert_eq!(total.minor_units(), i64::MAX);
}

#[test]
fn test_amount_sum_is_exact_when_intermediate_overflow_cancels_out() {
    let amounts = vec![
        Amount::from_minor_units(i64::MAX),
        Amount::from_minor_units(1),
        Amount::from_minor_units(-1),
    ];

    let total: Amount = amounts.into_iter().sum();

    assert_eq!(total.minor_units(), i64::MAX);
}

#[test]
fn test_amount_add_assign_saturates() {
    let mut total = Amount::from_minor_units(i64::MIN + 1);
    total += Amount::from_minor_units(-5);

    assert_eq!(total.minor_units(), i64::MIN);
}

#[test]
fn test_amount_serializes_as_bare_integer() -> Result<()> {
    let amount = Amount::from_minor_units(-2000);

    assert_eq!(serde_json::to_string(&amount)?, "-2000");
    assert_eq!(serde_json::from_str::<Amount>("1234")?, Amount::from_minor_units(1234));

    Ok(())
}
