use log::{trace, warn};
use rust_decimal::{Decimal, MathematicalOps};

use crate::decimal::{Money, Rate};

/// monthly installment for `principal` over `term_months` at `annual_rate`
///
/// EMI = P * r * (1 + r)^n / ((1 + r)^n - 1), with `r` the monthly rate
/// (annual percent / 1200). never fails: non-positive principal gives zero,
/// a zero rate gives the straight-line `principal / n`, a zero term gives the
/// principal itself, and products past the decimal range saturate.
pub fn compute_installment(principal: Money, annual_rate: Rate, term_months: u32) -> Money {
    if !principal.is_positive() {
        return Money::ZERO;
    }
    if term_months == 0 {
        return principal;
    }

    let r = annual_rate.monthly_rate().as_decimal();
    if r <= Decimal::ZERO {
        return principal / Decimal::from(term_months);
    }

    let installment = match compound_factor(r, term_months) {
        Some(compound) => {
            let denominator = compound - Decimal::ONE;
            if denominator.is_zero() {
                // rate too small to register over the term
                return principal / Decimal::from(term_months);
            }
            // compound / (compound - 1) stays near 1 for long terms, so it is
            // formed before multiplying to keep the product in range
            let ratio = compound / denominator;
            let installment = principal
                .as_decimal()
                .checked_mul(r)
                .and_then(|d| d.checked_mul(ratio))
                .unwrap_or_else(|| saturated(principal.as_decimal(), term_months));
            Money::from_decimal(installment)
        }
        // (1+r)^n / ((1+r)^n - 1) tends to 1 as n grows
        None => Money::from_decimal(
            principal
                .as_decimal()
                .checked_mul(r)
                .unwrap_or_else(|| saturated(principal.as_decimal(), term_months)),
        ),
    };

    trace!(
        "installment: principal={} rate={} term={} -> {}",
        principal,
        annual_rate,
        term_months,
        installment
    );
    installment
}

/// largest principal whose installment equals `installment` at the given rate and term
pub fn principal_for_installment(installment: Money, annual_rate: Rate, term_months: u32) -> Money {
    if !installment.is_positive() {
        return Money::ZERO;
    }
    if term_months == 0 {
        return installment;
    }

    let r = annual_rate.monthly_rate().as_decimal();
    if r <= Decimal::ZERO {
        return installment * Decimal::from(term_months);
    }

    let principal = match compound_factor(r, term_months) {
        Some(compound) => {
            let numerator = compound - Decimal::ONE;
            if numerator.is_zero() {
                return installment * Decimal::from(term_months);
            }
            let ratio = numerator / compound;
            let principal = installment
                .as_decimal()
                .checked_mul(ratio)
                .and_then(|d| d.checked_div(r))
                .unwrap_or_else(|| saturated(installment.as_decimal(), term_months));
            Money::from_decimal(principal)
        }
        None => Money::from_decimal(
            installment
                .as_decimal()
                .checked_div(r)
                .unwrap_or_else(|| saturated(installment.as_decimal(), term_months)),
        ),
    };

    principal.max(Money::ZERO)
}

/// interest paid over the full term on top of the principal
pub fn total_interest_payable(installment: Money, principal: Money, term_months: u32) -> Money {
    total_repayment(installment, term_months) - principal
}

/// sum of all installments over the term
pub fn total_repayment(installment: Money, term_months: u32) -> Money {
    installment * Decimal::from(term_months)
}

/// clamp for a product that left the decimal range
fn saturated(amount: Decimal, term_months: u32) -> Decimal {
    warn!(
        "installment math overflow for amount {} over {} months, saturating",
        amount, term_months
    );
    Decimal::MAX
}

/// `(1 + r)^n`, or `None` when it leaves the decimal range
fn compound_factor(monthly_rate: Decimal, term_months: u32) -> Option<Decimal> {
    let factor = (Decimal::ONE + monthly_rate).checked_powu(u64::from(term_months));
    if factor.is_none() {
        warn!(
            "compound factor overflow at monthly rate {} over {} months, using limit",
            monthly_rate, term_months
        );
    }
    factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_car_loan() {
        let emi = compute_installment(
            Money::from_major(500_000),
            Rate::from_percent(dec!(8.5)),
            60,
        );
        assert_eq!(emi.round_dp(2), Money::from_decimal(dec!(10258.27)));
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let principal = Money::from_major(120_000);
        let emi = compute_installment(principal, Rate::ZERO, 48);
        assert_eq!(emi, principal / dec!(48));
        assert_eq!(emi, Money::from_major(2_500));
    }

    #[test]
    fn test_non_positive_principal_is_zero() {
        let rate = Rate::from_percent(dec!(10));
        assert_eq!(compute_installment(Money::ZERO, rate, 12), Money::ZERO);
        assert_eq!(compute_installment(Money::from_major(-500), rate, 12), Money::ZERO);
    }

    #[test]
    fn test_single_month_term() {
        // one payment covers principal plus one month of interest
        let emi = compute_installment(Money::from_major(1_200), Rate::from_percent(dec!(12)), 1);
        assert_eq!(emi, Money::from_major(1_212));
    }

    #[test]
    fn test_zero_term_returns_principal() {
        let principal = Money::from_major(10_000);
        assert_eq!(compute_installment(principal, Rate::from_percentage(9), 0), principal);
    }

    #[test]
    fn test_longer_term_lowers_installment() {
        let principal = Money::from_major(800_000);
        let rate = Rate::from_percent(dec!(9));
        let short = compute_installment(principal, rate, 36);
        let long = compute_installment(principal, rate, 84);
        assert!(long < short);
    }

    #[test]
    fn test_inverse_recovers_principal() {
        let rate = Rate::from_percent(dec!(9));
        let max = principal_for_installment(Money::from_major(7_000), rate, 48);
        assert_eq!(max.round_dp(2), Money::from_decimal(dec!(281293.47)));

        let back = compute_installment(max, rate, 48);
        assert!((back - Money::from_major(7_000)).abs() < Money::from_decimal(dec!(0.0001)));
    }

    #[test]
    fn test_inverse_at_zero_rate() {
        let max = principal_for_installment(Money::from_major(2_500), Rate::ZERO, 48);
        assert_eq!(max, Money::from_major(120_000));
    }

    #[test]
    fn test_inverse_of_non_positive_installment() {
        let rate = Rate::from_percent(dec!(9));
        assert_eq!(principal_for_installment(Money::ZERO, rate, 48), Money::ZERO);
        assert_eq!(principal_for_installment(Money::from_major(-1), rate, 48), Money::ZERO);
    }

    #[test]
    fn test_overflowing_compound_uses_limit() {
        // (1.5)^u32::MAX cannot be represented
        let principal = Money::from_major(1_000);
        let rate = Rate::from_percentage(1800);
        let emi = compute_installment(principal, rate, u32::MAX);
        assert_eq!(emi, Money::from_major(1_500));
        assert_eq!(principal_for_installment(emi, rate, u32::MAX), principal);
    }

    #[test]
    fn test_very_long_term_stays_in_range() {
        // (1.0075)^8000 fits a decimal but times the principal it would not
        let rate = Rate::from_percent(dec!(9));
        let emi = compute_installment(Money::from_major(500_000), rate, 8_000);
        assert_eq!(emi.round_dp(2), Money::from_major(3_750));

        let max = principal_for_installment(Money::from_major(7_000), rate, 8_000);
        assert_eq!(max.round_dp(2), Money::from_decimal(dec!(933333.33)));
    }

    #[test]
    fn test_huge_principal_saturates() {
        let emi = compute_installment(Money::from_decimal(Decimal::MAX), Rate::from_percentage(1800), 1);
        assert!(emi.is_positive());
    }

    #[test]
    fn test_totals() {
        let emi = Money::from_major(2_100);
        assert_eq!(total_repayment(emi, 12), Money::from_major(25_200));
        assert_eq!(
            total_interest_payable(emi, Money::from_major(24_000), 12),
            Money::from_major(1_200)
        );
    }
}
