use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::decimal::Money;

/// unique identifier for an existing obligation, used only for addressing
pub type ObligationId = Uuid;

/// an existing monthly debt obligation (another loan's installment, a card payment, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obligation {
    pub id: ObligationId,
    pub description: String,
    pub amount: Money,
}

impl Obligation {
    /// create with a freshly generated id
    pub fn new(description: impl Into<String>, amount: Money) -> Self {
        Self::with_id(Uuid::new_v4(), description, amount)
    }

    /// create with a caller-assigned id
    pub fn with_id(id: ObligationId, description: impl Into<String>, amount: Money) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
        }
    }
}

/// single-field edit applied to an obligation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObligationUpdate {
    Description(String),
    Amount(Money),
}

/// three-tier verdict derived from the obligation ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EligibilityTier {
    /// at or below the ideal ratio
    Eligible,
    /// above ideal, at or below the maximum
    Marginal,
    /// above the maximum ratio
    NotEligible,
}

impl EligibilityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            EligibilityTier::Eligible => "eligible",
            EligibilityTier::Marginal => "marginal",
            EligibilityTier::NotEligible => "not-eligible",
        }
    }
}

impl fmt::Display for EligibilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
