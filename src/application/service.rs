use chrono::Utc;
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, info, warn};

use crate::domain::{
    discrepancy, final_charge, has_spend, integrity_issues, normalize_name, total_spent, Amount,
    Item, Participant,
};

use super::{LedgerConfig, LedgerError, ParticipantCharge, SettlementReport, SettlementWarning};

/// Sharer keyword that stands for every declared participant.
pub const ALL_PARTICIPANTS: &str = "all";

/// The bill being split: its declared total, the people sharing it and the
/// items recorded so far.
/// This is the only interface a client (the interactive shell, tests, ...)
/// uses; both tables are kept consistent by every mutation.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    config: LedgerConfig,
    total: Option<Amount>,
    participants: IndexMap<String, Participant>,
    items: IndexMap<String, Item>,
}

impl Ledger {
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    // ========================
    // Setup
    // ========================

    /// Set the bill total. It can only be set once.
    pub fn declare_total(&mut self, amount: Amount) -> Result<(), LedgerError> {
        if self.total.is_some() {
            return Err(LedgerError::TotalAlreadyDeclared);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(format!(
                "total must be greater than 0, got {}",
                amount
            )));
        }

        debug!(total = amount, "declared bill total");
        self.total = Some(amount);
        Ok(())
    }

    pub fn total(&self) -> Option<Amount> {
        self.total
    }

    /// Register the people sharing the bill.
    /// Whitespace is stripped from each name and blank names are skipped.
    /// A name given twice is registered once.
    pub fn declare_participants<I, S>(&mut self, raw_names: I) -> Result<(), LedgerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !self.participants.is_empty() {
            return Err(LedgerError::ParticipantsAlreadyDeclared);
        }

        let mut registry = IndexMap::new();
        for raw in raw_names {
            let name = normalize_name(raw.as_ref());
            if name.is_empty() {
                continue;
            }
            registry.insert(name.clone(), Participant::new(name));
        }

        if registry.is_empty() {
            return Err(LedgerError::NoParticipants);
        }

        debug!(count = registry.len(), "declared participants");
        self.participants = registry;
        Ok(())
    }

    // ========================
    // Item operations
    // ========================

    /// Record a new item and attribute an equal share of its price to each
    /// sharer. Nothing is mutated unless every sharer resolves.
    pub fn add_item<S: AsRef<str>>(
        &mut self,
        name: &str,
        price: Amount,
        sharer_names: &[S],
    ) -> Result<Item, LedgerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::InvalidItemName);
        }
        if self.items.contains_key(name) {
            return Err(LedgerError::DuplicateItem(name.to_string()));
        }
        if !price.is_finite() || price <= 0.0 {
            return Err(LedgerError::InvalidAmount(format!(
                "price of {} must be greater than 0, got {}",
                name, price
            )));
        }

        let sharers = self.resolve_sharers(sharer_names);
        if sharers.is_empty() {
            return Err(LedgerError::EmptySharerList(name.to_string()));
        }
        if let Some(unknown) = sharers.iter().find(|s| !self.participants.contains_key(*s)) {
            return Err(LedgerError::UnknownParticipant(unknown.clone()));
        }

        let item = Item::new(name, price, sharers);
        let share = item.share();
        self.ensure_finite_after(&item, share)?;
        for sharer in &item.sharers {
            if let Some(participant) = self.participants.get_mut(sharer) {
                participant.attribute(&item.name, share);
            }
        }

        debug!(item = %item.name, price, sharers = item.sharers.len(), share, "added item");
        self.items.insert(item.name.clone(), item.clone());
        Ok(item)
    }

    /// Remove an item and take its share back from every stored sharer.
    pub fn remove_item(&mut self, name: &str) -> Result<Item, LedgerError> {
        let name = name.trim();
        let item = self
            .items
            .shift_remove(name)
            .ok_or_else(|| LedgerError::ItemNotFound(name.to_string()))?;

        let deduct = item.share();
        for sharer in &item.sharers {
            match self.participants.get_mut(sharer) {
                Some(participant) => participant.detach(&item.name, deduct),
                None => warn!(item = %item.name, sharer = %sharer, "sharer missing from registry"),
            }
        }

        debug!(item = %item.name, deduct, "removed item");
        Ok(item)
    }

    /// Refuse an item whose price would push the total spent, or any
    /// sharer's direct charge, past the range of `Amount`. Once a sum is
    /// infinite, removing the item can no longer restore it.
    fn ensure_finite_after(&self, item: &Item, share: Amount) -> Result<(), LedgerError> {
        let spent: Amount = self.items.values().map(|i| i.price).sum::<Amount>() + item.price;
        if !spent.is_finite() {
            return Err(LedgerError::InvalidAmount(format!(
                "price of {} overflows the amount spent",
                item.name
            )));
        }

        let overflowing = item.sharers.iter().find(|sharer| {
            self.participants
                .get(*sharer)
                .is_some_and(|p| !(p.direct_charge + share).is_finite())
        });
        if let Some(sharer) = overflowing {
            return Err(LedgerError::InvalidAmount(format!(
                "price of {} overflows the charge of {}",
                item.name, sharer
            )));
        }
        Ok(())
    }

    /// Strip, expand `all`, and de-duplicate the raw sharer names, keeping
    /// their first-seen order. Names are not checked against the registry.
    fn resolve_sharers<S: AsRef<str>>(&self, sharer_names: &[S]) -> Vec<String> {
        let names: Vec<String> = sharer_names
            .iter()
            .map(|s| normalize_name(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect();

        if names.iter().any(|n| n == ALL_PARTICIPANTS) {
            return self.participants.keys().cloned().collect();
        }

        names
            .into_iter()
            .collect::<IndexSet<String>>()
            .into_iter()
            .collect()
    }

    // ========================
    // Queries
    // ========================

    pub fn list_participants(&self) -> Vec<Participant> {
        self.participants.values().cloned().collect()
    }

    pub fn list_items(&self) -> Vec<Item> {
        self.items.values().cloned().collect()
    }

    pub fn participant_names(&self) -> Vec<String> {
        self.participants.keys().cloned().collect()
    }

    pub fn participant(&self, name: &str) -> Option<&Participant> {
        self.participants.get(name)
    }

    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    /// Consistency problems between the participant and item tables.
    /// An empty list means the ledger is sound.
    pub fn check_integrity(&self) -> Vec<String> {
        let participants = self.list_participants();
        let items = self.list_items();
        // Drift well below a cent is float noise, not a broken ledger.
        integrity_issues(&participants, &items, 1e-6)
    }

    // ========================
    // Settlement
    // ========================

    /// Spread the residual (total minus item prices) over participants in
    /// proportion to their direct charges.
    /// Read-only: the ledger can be settled speculatively and keeps its state.
    pub fn settle(&self) -> Result<SettlementReport, LedgerError> {
        let total = self.total.ok_or(LedgerError::TotalNotDeclared)?;

        let items = self.list_items();
        let spent = total_spent(&items);
        let residual = total - spent;

        let charges: Vec<ParticipantCharge> = self
            .participants
            .values()
            .map(|p| ParticipantCharge {
                name: p.name.clone(),
                direct: p.direct_charge,
                charge: final_charge(p.direct_charge, spent, residual),
                items: p.items.clone(),
            })
            .collect();
        let accounted: Amount = charges.iter().map(|c| c.charge).sum();

        let mut warnings = Vec::new();
        if !has_spend(spent) {
            warn!(residual, "nothing spent on items, residual left undistributed");
            warnings.push(SettlementWarning::ResidualUndistributed { residual });
        }
        if let Some(unaccounted) = discrepancy(total, accounted, self.config.tolerance) {
            warn!(total, accounted, unaccounted, "settlement does not add up to the total");
            warnings.push(SettlementWarning::Discrepancy { unaccounted });
        }

        info!(total, spent, residual, participants = charges.len(), "settled bill");

        Ok(SettlementReport {
            settled_at: Utc::now(),
            total,
            spent,
            residual,
            accounted,
            charges,
            warnings,
        })
    }
}
