use serde::{Deserialize, Serialize};

use crate::domain::Amount;

use super::LedgerError;

/// Default drift, in currency units, tolerated between the declared total
/// and the sum of final charges before a warning is raised.
pub const DEFAULT_TOLERANCE: Amount = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    pub tolerance: Amount,
}

impl LedgerConfig {
    pub fn new(tolerance: Amount) -> Result<Self, LedgerError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(LedgerError::InvalidAmount(format!(
                "tolerance must be a non-negative number, got {}",
                tolerance
            )));
        }
        Ok(Self { tolerance })
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}
