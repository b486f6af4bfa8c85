// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use billsplit::application::{Ledger, LedgerConfig};
use billsplit::cli::{Session, SessionOptions, SessionOutcome};
use billsplit::domain::{Amount, Participant};
use std::io::Cursor;

/// Tolerance for comparing floating-point money in assertions
pub const EPSILON: Amount = 1e-9;

pub fn assert_close(actual: Amount, expected: Amount) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Helper to create a ledger with a total and participants already declared
pub fn test_ledger(total: Amount, people: &[&str]) -> Result<Ledger> {
    let mut ledger = Ledger::new(LedgerConfig::default());
    ledger.declare_total(total)?;
    ledger.declare_participants(people)?;
    Ok(ledger)
}

/// Test fixture: dinner for two with one unitemized tip
pub struct Dinner;

impl Dinner {
    /// total=120, food=90 shared by a and b, drinks=10 for a
    pub fn create() -> Result<Ledger> {
        let mut ledger = test_ledger(120.0, &["a", "b"])?;
        ledger.add_item("food", 90.0, &["a", "b"])?;
        ledger.add_item("drinks", 10.0, &["a"])?;
        Ok(ledger)
    }
}

/// Snapshot of (name, direct charge, items) for every participant
pub fn snapshot(ledger: &Ledger) -> Vec<(String, Amount, Vec<String>)> {
    ledger
        .list_participants()
        .into_iter()
        .map(|Participant { name, direct_charge, items }| (name, direct_charge, items))
        .collect()
}

/// Sum of `price / |sharers|` per sharer, over all items
pub fn expected_direct_total(ledger: &Ledger) -> Amount {
    ledger
        .list_items()
        .iter()
        .map(|item| item.price / item.sharers.len() as Amount * item.sharers.len() as Amount)
        .sum()
}

pub fn direct_total(ledger: &Ledger) -> Amount {
    ledger
        .list_participants()
        .iter()
        .map(|p| p.direct_charge)
        .sum()
}

/// Drive a session with scripted input; returns the outcome, what was
/// printed, and the ledger as the session left it
pub fn run_session(
    script: &str,
    options: SessionOptions,
) -> Result<(SessionOutcome, String, Ledger)> {
    let mut out = Vec::new();
    let mut session = Session::new(
        Ledger::new(LedgerConfig::default()),
        Cursor::new(script.as_bytes()),
        &mut out,
        options,
    );
    let outcome = session.run()?;
    let ledger = session.ledger().clone();
    drop(session);
    Ok((outcome, String::from_utf8(out)?, ledger))
}
