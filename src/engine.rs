use log::debug;

use crate::config::EligibilityPolicy;
use crate::decimal::Money;
use crate::errors::Result;
use crate::input::LoanInput;
use crate::installment::{
    compute_installment, principal_for_installment, total_interest_payable, total_repayment,
};
use crate::result::EligibilityResult;

/// affordability engine grading loan proposals against a foir policy
#[derive(Debug, Clone, Copy, Default)]
pub struct AffordabilityEngine {
    policy: EligibilityPolicy,
}

impl AffordabilityEngine {
    /// create engine with a validated policy
    pub fn new(policy: EligibilityPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &EligibilityPolicy {
        &self.policy
    }

    /// recompute every derived figure from `input`
    ///
    /// total over the caller's domain: zero income, negative disposable income
    /// and no headroom all produce numbers rather than errors.
    pub fn evaluate(&self, input: &LoanInput) -> EligibilityResult {
        let total_income = input.monthly_income + input.other_income;
        let total_existing_obligations = input.existing_obligations.total();

        let proposed_installment = compute_installment(
            input.proposed_principal,
            input.annual_interest_rate,
            input.term_months,
        );

        let total_obligations = total_existing_obligations + proposed_installment;
        // zero income reads as 0%, which grades as eligible
        let foir_percent = total_obligations.percent_of(total_income);
        let disposable_income = total_income - total_obligations - input.monthly_expenses;
        let eligibility_tier = self.policy.classify(foir_percent);

        let max_eligible_principal =
            self.max_eligible_principal(input, total_income, total_existing_obligations);

        debug!(
            "evaluated: income={} obligations={} installment={} foir={}% tier={} max_principal={}",
            total_income,
            total_obligations,
            proposed_installment,
            foir_percent.round_dp(2),
            eligibility_tier,
            max_eligible_principal
        );

        EligibilityResult {
            total_income,
            total_existing_obligations,
            proposed_installment,
            total_obligations,
            foir_percent,
            eligibility_tier,
            max_eligible_principal,
            disposable_income,
            total_repayment: total_repayment(proposed_installment, input.term_months),
            total_interest_payable: total_interest_payable(
                proposed_installment,
                input.proposed_principal,
                input.term_months,
            ),
        }
    }

    /// validate `input` first, then evaluate
    pub fn try_evaluate(&self, input: &LoanInput) -> Result<EligibilityResult> {
        input.validate()?;
        Ok(self.evaluate(input))
    }

    /// largest principal at the proposal's rate and term that keeps foir at the ideal ceiling
    fn max_eligible_principal(
        &self,
        input: &LoanInput,
        total_income: Money,
        total_existing_obligations: Money,
    ) -> Money {
        // ceiling is the ideal ratio whatever tier the proposal lands in
        let headroom = self
            .policy
            .installment_headroom(total_income, total_existing_obligations);
        if !headroom.is_positive() {
            return Money::ZERO;
        }

        principal_for_installment(headroom, input.annual_interest_rate, input.term_months)
    }
}

/// evaluate with the standard 40% / 50% policy
pub fn evaluate(input: &LoanInput) -> EligibilityResult {
    AffordabilityEngine::default().evaluate(input)
}
