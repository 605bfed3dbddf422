use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::EligibilityTier;

/// derived affordability figures for one `LoanInput` snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub total_income: Money,
    pub total_existing_obligations: Money,
    pub proposed_installment: Money,
    pub total_obligations: Money,
    /// obligations as a percent of income, zero when income is zero
    pub foir_percent: Decimal,
    pub eligibility_tier: EligibilityTier,
    pub max_eligible_principal: Money,
    /// income left after obligations and expenses, may be negative
    pub disposable_income: Money,
    pub total_repayment: Money,
    pub total_interest_payable: Money,
}

impl EligibilityResult {
    pub fn is_eligible(&self) -> bool {
        self.eligibility_tier == EligibilityTier::Eligible
    }

    /// how much of the proposed principal exceeds the max eligible amount
    pub fn principal_shortfall(&self, proposed_principal: Money) -> Money {
        (proposed_principal - self.max_eligible_principal).max(Money::ZERO)
    }

    /// get current result as pretty json
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("JSON error: {}", e))
    }
}
