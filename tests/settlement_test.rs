mod common;

use anyhow::Result;
use billsplit::application::{Ledger, LedgerConfig, SettlementWarning};
use common::{assert_close, test_ledger, Dinner};

#[test]
fn test_residual_follows_direct_spend() -> Result<()> {
    let ledger = Dinner::create()?;

    let report = ledger.settle()?;

    assert_close(report.total, 120.0);
    assert_close(report.spent, 100.0);
    assert_close(report.residual, 20.0);

    let a = report.charge_for("a").expect("a settled");
    assert_close(a.direct, 55.0);
    assert_close(a.charge, 66.0);
    assert_eq!(a.items, vec!["food", "drinks"]);

    let b = report.charge_for("b").expect("b settled");
    assert_close(b.direct, 45.0);
    assert_close(b.charge, 54.0);

    assert_close(report.accounted, 120.0);
    assert!(report.warnings.is_empty());
    Ok(())
}

#[test]
fn test_zero_spend_settles_without_nan() -> Result<()> {
    let ledger = test_ledger(50.0, &["solo"])?;

    let report = ledger.settle()?;

    let solo = report.charge_for("solo").expect("solo settled");
    assert!(solo.charge.is_finite());
    assert_eq!(solo.charge, 0.0);
    assert_eq!(report.spent, 0.0);
    assert!(report
        .warnings
        .contains(&SettlementWarning::ResidualUndistributed { residual: 50.0 }));
    assert_eq!(report.unaccounted(), Some(50.0));
    Ok(())
}

#[test]
fn test_items_over_total_reduce_charges() -> Result<()> {
    let mut ledger = test_ledger(90.0, &["a", "b"])?;
    ledger.add_item("steak", 60.0, &["a"])?;
    ledger.add_item("salad", 40.0, &["b"])?;

    let report = ledger.settle()?;

    assert_close(report.residual, -10.0);
    assert_close(report.charge_for("a").unwrap().charge, 54.0);
    assert_close(report.charge_for("b").unwrap().charge, 36.0);
    assert_close(report.accounted, 90.0);
    assert!(report.warnings.is_empty());
    Ok(())
}

#[test]
fn test_participant_without_items_pays_nothing() -> Result<()> {
    let mut ledger = test_ledger(110.0, &["a", "b", "c"])?;
    ledger.add_item("food", 100.0, &["a", "b"])?;

    let report = ledger.settle()?;

    assert_close(report.charge_for("a").unwrap().charge, 55.0);
    assert_close(report.charge_for("b").unwrap().charge, 55.0);
    assert_close(report.charge_for("c").unwrap().charge, 0.0);
    assert!(report.charge_for("c").unwrap().items.is_empty());
    Ok(())
}

#[test]
fn test_uneven_thirds_stay_within_tolerance() -> Result<()> {
    let mut ledger = test_ledger(13.0, &["a", "b", "c"])?;
    ledger.add_item("bread", 10.0, &["all"])?;

    let report = ledger.settle()?;

    for charge in &report.charges {
        assert!((charge.charge - 13.0 / 3.0).abs() < 1e-9);
    }
    assert!(report.unaccounted().is_none());
    Ok(())
}

#[test]
fn test_discrepancy_respects_configured_tolerance() -> Result<()> {
    // With no items the whole total is unaccounted
    let mut strict = Ledger::new(LedgerConfig::new(0.5)?);
    strict.declare_total(0.75)?;
    strict.declare_participants(["a"])?;
    assert_eq!(strict.settle()?.unaccounted(), Some(0.75));

    let mut lenient = Ledger::new(LedgerConfig::new(1.0)?);
    lenient.declare_total(0.75)?;
    lenient.declare_participants(["a"])?;
    assert_eq!(lenient.settle()?.unaccounted(), None);
    Ok(())
}

#[test]
fn test_settlement_after_removal() -> Result<()> {
    let mut ledger = Dinner::create()?;
    ledger.remove_item("drinks")?;

    let report = ledger.settle()?;

    assert_close(report.spent, 90.0);
    assert_close(report.charge_for("a").unwrap().charge, 60.0);
    assert_close(report.charge_for("b").unwrap().charge, 60.0);
    assert_eq!(report.charge_for("a").unwrap().items, vec!["food"]);
    Ok(())
}

#[test]
fn test_huge_items_never_settle_to_nan() -> Result<()> {
    let mut ledger = test_ledger(100.0, &["a", "b"])?;
    ledger.add_item("x", 1e308, &["a"])?;
    assert!(ledger.add_item("y", 1e308, &["b"]).is_err());

    let report = ledger.settle()?;

    assert!(report.spent.is_finite());
    assert!(report.residual.is_finite());
    assert!(report.accounted.is_finite());
    for charge in &report.charges {
        assert!(charge.charge.is_finite(), "{} got {}", charge.name, charge.charge);
    }
    assert!(report.unaccounted().is_some());
    Ok(())
}
