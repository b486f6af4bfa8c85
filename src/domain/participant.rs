use serde::{Deserialize, Serialize};

use super::Amount;

/// A person sharing the bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    /// Accumulated share of item prices, before the residual is distributed
    pub direct_charge: Amount,
    /// Names of the items attributed to this participant, in the order added
    pub items: Vec<String>,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direct_charge: 0.0,
            items: Vec::new(),
        }
    }

    /// Attribute one share of an item to this participant.
    pub fn attribute(&mut self, item_name: &str, share: Amount) {
        self.items.push(item_name.to_string());
        self.direct_charge += share;
    }

    /// Undo a single `attribute` call for the given item.
    /// Only the first matching entry of the item list is removed.
    pub fn detach(&mut self, item_name: &str, share: Amount) {
        self.direct_charge -= share;
        if let Some(index) = self.items.iter().position(|i| i == item_name) {
            self.items.remove(index);
        }
    }
}
