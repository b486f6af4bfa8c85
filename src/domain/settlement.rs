use std::collections::HashMap;

use super::{Amount, Item, Participant};

/// Sum of raw item prices (not per-person shares).
pub fn total_spent(items: &[Item]) -> Amount {
    items.iter().map(|item| item.price).sum()
}

/// Charge for one participant once the residual is spread proportionally to
/// direct spend: `direct + direct / spent * residual`.
/// With nothing spent there is no proportion to follow, so the direct charge
/// is returned unchanged.
pub fn final_charge(direct: Amount, spent: Amount, residual: Amount) -> Amount {
    if !has_spend(spent) {
        return direct;
    }
    direct + (direct / spent) * residual
}

/// Returns false when `spent` is too close to zero to divide by.
pub fn has_spend(spent: Amount) -> bool {
    spent.abs() > f64::EPSILON
}

/// Returns the unaccounted amount when `accounted` drifts from `total` by more
/// than `tolerance`. A non-finite gap always counts as a discrepancy.
pub fn discrepancy(total: Amount, accounted: Amount, tolerance: Amount) -> Option<Amount> {
    let gap = (total - accounted).abs();
    (gap > tolerance || gap.is_nan()).then_some(gap)
}

/// Check that item and participant views agree: every sharer is a known
/// participant, every attributed item exists and lists that participant, and
/// direct charges add up to the item shares.
pub fn integrity_issues(
    participants: &[Participant],
    items: &[Item],
    tolerance: Amount,
) -> Vec<String> {
    let mut issues = Vec::new();

    let by_name: HashMap<&str, &Participant> =
        participants.iter().map(|p| (p.name.as_str(), p)).collect();
    let item_by_name: HashMap<&str, &Item> = items.iter().map(|i| (i.name.as_str(), i)).collect();

    for item in items {
        for sharer in &item.sharers {
            match by_name.get(sharer.as_str()) {
                None => issues.push(format!(
                    "Item '{}' is shared by unknown participant '{}'",
                    item.name, sharer
                )),
                Some(p) if !p.items.contains(&item.name) => issues.push(format!(
                    "Item '{}' is missing from the item list of '{}'",
                    item.name, sharer
                )),
                Some(_) => {}
            }
        }
    }

    for participant in participants {
        for item_name in &participant.items {
            match item_by_name.get(item_name.as_str()) {
                None => issues.push(format!(
                    "Participant '{}' references unknown item '{}'",
                    participant.name, item_name
                )),
                Some(item) if !item.sharers.contains(&participant.name) => {
                    issues.push(format!(
                        "Participant '{}' lists item '{}' without sharing it",
                        participant.name, item_name
                    ))
                }
                Some(_) => {}
            }
        }
    }

    let attributed: Amount = participants.iter().map(|p| p.direct_charge).sum();
    let shared: Amount = items
        .iter()
        .map(|i| i.share() * i.sharers.len() as Amount)
        .sum();
    if (attributed - shared).abs() > tolerance {
        issues.push(format!(
            "Direct charges ({:.2}) do not match item shares ({:.2})",
            attributed, shared
        ));
    }

    issues
}
