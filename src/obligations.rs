use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::decimal::Money;
use crate::errors::{AffordabilityError, Result};
use crate::types::{Obligation, ObligationId, ObligationUpdate};

/// ordered collection of existing obligations keyed by id
///
/// every edit returns a new list and leaves `self` untouched. ids are unique
/// and only used for addressing; order is insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Obligation>", into = "Vec<Obligation>")]
pub struct ObligationList {
    items: Vec<Obligation>,
}

impl ObligationList {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// append an obligation, rejecting a duplicate id
    pub fn with_added(&self, obligation: Obligation) -> Result<Self> {
        if self.contains(obligation.id) {
            return Err(AffordabilityError::DuplicateObligation { id: obligation.id });
        }

        let mut items = self.items.clone();
        items.push(obligation);
        Ok(Self { items })
    }

    /// apply a single-field edit to the obligation with `id`
    pub fn with_updated(&self, id: ObligationId, update: ObligationUpdate) -> Result<Self> {
        let position = self.position(id)?;

        let mut items = self.items.clone();
        let target = &mut items[position];
        match update {
            ObligationUpdate::Description(description) => target.description = description,
            ObligationUpdate::Amount(amount) => target.amount = amount,
        }
        Ok(Self { items })
    }

    /// drop the obligation with `id`, keeping the others in order
    pub fn without(&self, id: ObligationId) -> Result<Self> {
        self.position(id)?;

        let items = self
            .items
            .iter()
            .filter(|o| o.id != id)
            .cloned()
            .collect();
        Ok(Self { items })
    }

    /// sum of all obligation amounts
    pub fn total(&self) -> Money {
        self.items.iter().map(|o| o.amount).sum()
    }

    pub fn get(&self, id: ObligationId) -> Option<&Obligation> {
        self.items.iter().find(|o| o.id == id)
    }

    pub fn contains(&self, id: ObligationId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Obligation> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[Obligation] {
        &self.items
    }

    fn position(&self, id: ObligationId) -> Result<usize> {
        self.items
            .iter()
            .position(|o| o.id == id)
            .ok_or(AffordabilityError::ObligationNotFound { id })
    }
}

impl TryFrom<Vec<Obligation>> for ObligationList {
    type Error = AffordabilityError;

    fn try_from(items: Vec<Obligation>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for obligation in &items {
            if !seen.insert(obligation.id) {
                return Err(AffordabilityError::DuplicateObligation { id: obligation.id });
            }
        }
        Ok(Self { items })
    }
}

impl From<ObligationList> for Vec<Obligation> {
    fn from(list: ObligationList) -> Self {
        list.items
    }
}

/// collects in order; a later entry with an already-seen id is skipped
impl FromIterator<Obligation> for ObligationList {
    fn from_iter<I: IntoIterator<Item = Obligation>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let items = iter
            .into_iter()
            .filter(|o| seen.insert(o.id))
            .collect();
        Self { items }
    }
}

impl<'a> IntoIterator for &'a ObligationList {
    type Item = &'a Obligation;
    type IntoIter = std::slice::Iter<'a, Obligation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
