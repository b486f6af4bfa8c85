use serde::{Deserialize, Serialize};

use super::Amount;

/// A single priced entry on the bill, shared by a subset of participants.
/// The sharer list keeps the order it was entered in, for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: Amount,
    pub sharers: Vec<String>,
}

impl Item {
    pub fn new(name: impl Into<String>, price: Amount, sharers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            price,
            sharers,
        }
    }

    /// The amount each sharer carries for this item.
    /// Callers never build an item without sharers; an empty list yields 0.
    pub fn share(&self) -> Amount {
        if self.sharers.is_empty() {
            return 0.0;
        }
        self.price / self.sharers.len() as Amount
    }
}
