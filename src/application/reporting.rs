use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Amount;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementReport {
    pub settled_at: DateTime<Utc>,
    pub total: Amount,
    /// Sum of item prices
    pub spent: Amount,
    /// Total minus spent: tax, tip and fees not tied to an item
    pub residual: Amount,
    /// Sum of all final charges
    pub accounted: Amount,
    pub charges: Vec<ParticipantCharge>,
    pub warnings: Vec<SettlementWarning>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantCharge {
    pub name: String,
    pub direct: Amount,
    pub charge: Amount,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SettlementWarning {
    /// Final charges drift from the total by more than the tolerance
    Discrepancy { unaccounted: Amount },
    /// Nothing was spent on items, so the residual had nobody to follow
    ResidualUndistributed { residual: Amount },
}

impl SettlementReport {
    pub fn charge_for(&self, name: &str) -> Option<&ParticipantCharge> {
        self.charges.iter().find(|c| c.name == name)
    }

    pub fn unaccounted(&self) -> Option<Amount> {
        self.warnings.iter().find_map(|w| match w {
            SettlementWarning::Discrepancy { unaccounted } => Some(*unaccounted),
            _ => None,
        })
    }
}
