use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{AffordabilityError, Result};
use crate::obligations::ObligationList;
use crate::types::Obligation;

/// complete snapshot of an applicant's finances and the proposed loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanInput {
    pub monthly_income: Money,
    pub other_income: Money,
    #[serde(default)]
    pub existing_obligations: ObligationList,
    pub proposed_principal: Money,
    /// written and read as a percent, e.g. `"8.5"` for 8.5% a year
    #[serde(rename = "annual_interest_rate_percent", with = "crate::decimal::percent")]
    pub annual_interest_rate: Rate,
    pub term_months: u32,
    #[serde(default)]
    pub monthly_expenses: Money,
}

impl LoanInput {
    /// builder for loan inputs
    pub fn builder() -> LoanInputBuilder {
        LoanInputBuilder::new()
    }

    /// parse from json and validate
    pub fn from_json(json: &str) -> Result<Self> {
        let input: Self = serde_json::from_str(json)?;
        input.validate()?;
        Ok(input)
    }

    /// check the domain the calculator expects; `evaluate` itself never does this
    pub fn validate(&self) -> Result<()> {
        non_negative("monthly_income", self.monthly_income)?;
        non_negative("other_income", self.other_income)?;
        non_negative("proposed_principal", self.proposed_principal)?;
        non_negative("monthly_expenses", self.monthly_expenses)?;

        for obligation in &self.existing_obligations {
            non_negative(&format!("obligation {}", obligation.id), obligation.amount)?;
        }

        if self.annual_interest_rate.is_negative() {
            return Err(AffordabilityError::InvalidInterestRate {
                rate: self.annual_interest_rate,
            });
        }

        if self.term_months == 0 {
            return Err(AffordabilityError::InvalidTerm {
                term_months: self.term_months,
            });
        }

        Ok(())
    }

    /// same input with a different obligation list
    pub fn with_obligations(&self, existing_obligations: ObligationList) -> Self {
        Self {
            existing_obligations,
            ..self.clone()
        }
    }
}

fn non_negative(field: &str, amount: Money) -> Result<()> {
    if amount.is_negative() {
        return Err(AffordabilityError::NegativeAmount {
            field: field.to_string(),
            amount,
        });
    }
    Ok(())
}

/// builder for `LoanInput`, defaults to a 500000 loan at 8.5% over 60 months
#[derive(Debug, Clone)]
pub struct LoanInputBuilder {
    monthly_income: Money,
    other_income: Money,
    existing_obligations: Vec<Obligation>,
    proposed_principal: Money,
    annual_interest_rate: Rate,
    term_months: u32,
    monthly_expenses: Money,
}

impl Default for LoanInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoanInputBuilder {
    pub fn new() -> Self {
        Self {
            monthly_income: Money::ZERO,
            other_income: Money::ZERO,
            existing_obligations: Vec::new(),
            proposed_principal: Money::from_major(500_000),
            annual_interest_rate: Rate::from_percent(dec!(8.5)),
            term_months: 60,
            monthly_expenses: Money::ZERO,
        }
    }

    pub fn monthly_income(mut self, amount: Money) -> Self {
        self.monthly_income = amount;
        self
    }

    pub fn other_income(mut self, amount: Money) -> Self {
        self.other_income = amount;
        self
    }

    /// add one existing obligation
    pub fn obligation(mut self, obligation: Obligation) -> Self {
        self.existing_obligations.push(obligation);
        self
    }

    /// replace all existing obligations
    pub fn obligations(mut self, obligations: impl IntoIterator<Item = Obligation>) -> Self {
        self.existing_obligations = obligations.into_iter().collect();
        self
    }

    pub fn principal(mut self, amount: Money) -> Self {
        self.proposed_principal = amount;
        self
    }

    pub fn annual_rate(mut self, rate: Rate) -> Self {
        self.annual_interest_rate = rate;
        self
    }

    pub fn term_months(mut self, months: u32) -> Self {
        self.term_months = months;
        self
    }

    pub fn monthly_expenses(mut self, amount: Money) -> Self {
        self.monthly_expenses = amount;
        self
    }

    /// build and validate
    pub fn build(self) -> Result<LoanInput> {
        let existing_obligations = ObligationList::try_from(self.existing_obligations)?;

        let input = LoanInput {
            monthly_income: self.monthly_income,
            other_income: self.other_income,
            existing_obligations,
            proposed_principal: self.proposed_principal,
            annual_interest_rate: self.annual_interest_rate,
            term_months: self.term_months,
            monthly_expenses: self.monthly_expenses,
        };
        input.validate()?;
        Ok(input)
    }
}
