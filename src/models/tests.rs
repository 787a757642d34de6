use super::{Ledger, LedgerError, NewTransaction, Summary};

use std::str::FromStr;

use anyhow::{anyhow, Result};

use crate::types::Amount;

fn create_transaction(description: &str, amount: &str, date: &str) -> Result<NewTransaction> {
    Ok(NewTransaction {
        description: description.to_string(),
        amount: Amount::from_str(amount)?,
        date: date.to_string()
    })
}

fn assert_aggregate_invariants(ledger: &Ledger) {
    let mut expected_total = ledger.incomes();
    expected_total += ledger.expenses();

    assert_eq!(ledger.total(), expected_total);
    assert!(ledger.expenses() <= Amount::ZERO);
    assert!(Amount::ZERO <= ledger.incomes());
}

#[test]
fn test_empty_ledger_has_zero_aggregates() {
    let ledger = Ledger::new();

    assert!(ledger.is_empty());
    assert_eq!(ledger.summary(), Summary::default());
}

#[test]
fn test_salary_then_expense_then_removal_scenario() -> Result<()> {
    let mut ledger = Ledger::new();

    let salary_id = ledger.add(create_transaction("Salary", "500.00", "2024-01-01")?)?;

    assert_eq!(ledger.incomes().minor_units(), 50000);
    assert_eq!(ledger.expenses().minor_units(), 0);
    assert_eq!(ledger.total().minor_units(), 50000);

    let rent_id = ledger.add(create_transaction("Rent", "-20.00", "2024-01-02")?)?;

    assert_eq!(ledger.expenses().minor_units(), -2000);
    assert_eq!(ledger.total().minor_units(), 48000);

    ledger.remove(salary_id)?;

    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.transactions()[0].id, rent_id);
    assert_eq!(ledger.incomes().minor_units(), 0);
    assert_eq!(ledger.expenses().minor_units(), -2000);
    assert_eq!(ledger.total().minor_units(), -2000);

    Ok(())
}

#[test]
fn test_zero_amount_counts_towards_neither_aggregate() -> Result<()> {
    let mut ledger = Ledger::new();
    ledger.add(create_transaction("Nothing", "0", "2024-01-01")?)?;

    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.summary(), Summary::default());

    Ok(())
}

#[test]
fn test_aggregate_invariants_hold_after_every_addition() -> Result<()> {
    let amounts = ["10.00", "-3.50", "0", "-100", "0.01", "2500.75", "-0.01", "-2500.75", "42"];
    let mut ledger = Ledger::new();

    for (index, amount) in amounts.iter().enumerate() {
        ledger.add(create_transaction(&format!("Item {index}"), amount, "2024-05-01")?)?;
        assert_aggregate_invariants(&ledger);
    }

    assert_eq!(ledger.incomes().minor_units(), 1000 + 1 + 250075 + 4200);
    assert_eq!(ledger.expenses().minor_units(), -350 - 10000 - 1 - 250075);

    Ok(())
}

#[test]
fn test_ledger_preserves_insertion_order() -> Result<()> {
    let mut ledger = Ledger::new();
    ledger.add(create_transaction("First", "1", "2024-01-01")?)?;
    ledger.add(create_transaction("Second", "2", "2024-01-02")?)?;
    ledger.add(create_transaction("Third", "3", "2024-01-03")?)?;

    let descriptions: Vec<&str> = ledger.iter().map(|transaction| transaction.description.as_str()).collect();

    assert_eq!(descriptions, vec!["First", "Second", "Third"]);

    Ok(())
}

#[test]
fn test_identifiers_stay_stable_across_removals() -> Result<()> {
    let mut ledger = Ledger::new();
    let first = ledger.add(create_transaction("First", "1", "2024-01-01")?)?;
    let second = ledger.add(create_transaction("Second", "2", "2024-01-02")?)?;
    let third = ledger.add(create_transaction("Third", "3", "2024-01-03")?)?;

    ledger.remove(first)?;

    let remaining = ledger.get(third).ok_or_else(|| anyhow!("Third transaction missing"))?;
    assert_eq!(remaining.description, "Third");

    let removed = ledger.remove(second)?;
    assert_eq!(removed.description, "Second");

    let fourth = ledger.add(create_transaction("Fourth", "4", "2024-01-04")?)?;
    assert_eq!(fourth, third + 1);

    Ok(())
}

#[test]
fn test_removing_an_unknown_identifier_fails_and_changes_nothing() -> Result<()> {
    let mut ledger = Ledger::new();
    ledger.add(create_transaction("Salary", "500.00", "2024-01-01")?)?;
    let before = ledger.clone();

    let result = ledger.remove(99);

    assert!(matches!(result, Err(LedgerError::TransactionNotFound { transaction_id: 99 })));
    assert_eq!(ledger, before);

    Ok(())
}

#[test]
fn test_addition_overflowing_incomes_is_rejected() -> Result<()> {
    let mut ledger = Ledger::new();
    ledger.add(create_transaction("Windfall", "90000000000000000", "2024-01-01")?)?;
    let before = ledger.clone();

    let result = ledger.add(create_transaction("Windfall", "90000000000000000", "2024-01-02")?);

    assert!(matches!(result, Err(LedgerError::AggregateOverflow { .. })));
    assert_eq!(ledger, before);
    assert_eq!(ledger.incomes().minor_units(), 9_000_000_000_000_000_000);

    Ok(())
}

#[test]
fn test_addition_overflowing_expenses_is_rejected() -> Result<()> {
    let mut ledger = Ledger::new();
    ledger.add(create_transaction("Mortgage", "-90000000000000000", "2024-01-01")?)?;

    let result = ledger.add(create_transaction("Mortgage", "-90000000000000000", "2024-01-02")?);

    assert!(matches!(result, Err(LedgerError::AggregateOverflow { .. })));
    assert_eq!(ledger.len(), 1);

    // an income still fits and brings the total back within range
    ledger.add(create_transaction("Windfall", "90000000000000000", "2024-01-03")?)?;
    assert_eq!(ledger.total(), Amount::ZERO);

    Ok(())
}

#[test]
fn test_identifiers_are_not_reused_once_exhausted() -> Result<()> {
    let last = create_transaction("Last", "1", "2024-01-01")?.into_transaction(u64::MAX);
    let mut ledger = Ledger::from_transactions(vec![last]);

    let result = ledger.add(create_transaction("Next", "1", "2024-01-02")?);

    assert!(matches!(result, Err(LedgerError::IdentifiersExhausted { last_id: u64::MAX })));
    assert_eq!(ledger.len(), 1);

    Ok(())
}
