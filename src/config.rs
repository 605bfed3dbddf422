use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{AffordabilityError, Result};
use crate::types::EligibilityTier;

/// foir thresholds used to grade a proposal and size the max loan
///
/// `ideal_foir_percent` is both the upper edge of the eligible tier and the
/// ceiling for the max eligible principal. `max_foir_percent` only bounds the
/// marginal tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityPolicy {
    pub ideal_foir_percent: Decimal,
    pub max_foir_percent: Decimal,
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl EligibilityPolicy {
    /// 40% ideal, 50% maximum
    pub fn standard() -> Self {
        Self {
            ideal_foir_percent: dec!(40),
            max_foir_percent: dec!(50),
        }
    }

    /// create and validate a custom policy
    pub fn new(ideal_foir_percent: Decimal, max_foir_percent: Decimal) -> Result<Self> {
        let policy = Self {
            ideal_foir_percent,
            max_foir_percent,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// load from a json document such as `{"ideal_foir_percent": "35", "max_foir_percent": "45"}`
    pub fn from_json(json: &str) -> Result<Self> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<()> {
        for percent in [self.ideal_foir_percent, self.max_foir_percent] {
            if percent <= Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
                return Err(AffordabilityError::ThresholdOutOfRange { percent });
            }
        }

        if self.ideal_foir_percent > self.max_foir_percent {
            return Err(AffordabilityError::InvalidPolicy {
                message: format!(
                    "ideal foir {}% exceeds maximum foir {}%",
                    self.ideal_foir_percent, self.max_foir_percent
                ),
            });
        }

        Ok(())
    }

    /// grade a foir percentage; both tier edges are inclusive
    pub fn classify(&self, foir_percent: Decimal) -> EligibilityTier {
        if foir_percent <= self.ideal_foir_percent {
            EligibilityTier::Eligible
        } else if foir_percent <= self.max_foir_percent {
            EligibilityTier::Marginal
        } else {
            EligibilityTier::NotEligible
        }
    }

    /// installment room left under the ideal ceiling, may be negative
    pub fn installment_headroom(&self, total_income: Money, existing_obligations: Money) -> Money {
        total_income.percentage(self.ideal_foir_percent) - existing_obligations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_thresholds() {
        let policy = EligibilityPolicy::default();
        assert_eq!(policy.ideal_foir_percent, dec!(40));
        assert_eq!(policy.max_foir_percent, dec!(50));
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_tier_edges() {
        let policy = EligibilityPolicy::standard();
        assert_eq!(policy.classify(dec!(0)), EligibilityTier::Eligible);
        assert_eq!(policy.classify(dec!(40.0)), EligibilityTier::Eligible);
        assert_eq!(policy.classify(dec!(40.0001)), EligibilityTier::Marginal);
        assert_eq!(policy.classify(dec!(50)), EligibilityTier::Marginal);
        assert_eq!(policy.classify(dec!(50.0001)), EligibilityTier::NotEligible);
    }

    #[test]
    fn test_headroom() {
        let policy = EligibilityPolicy::standard();
        let headroom = policy.installment_headroom(Money::from_major(30_000), Money::from_major(5_000));
        assert_eq!(headroom, Money::from_major(7_000));

        let negative = policy.installment_headroom(Money::from_major(10_000), Money::from_major(5_000));
        assert_eq!(negative, Money::from_major(-1_000));
    }

    #[test]
    fn test_from_json() {
        let policy =
            EligibilityPolicy::from_json(r#"{"ideal_foir_percent": "35", "max_foir_percent": "55"}"#)
                .unwrap();
        assert_eq!(policy.ideal_foir_percent, dec!(35));
        assert_eq!(policy.max_foir_percent, dec!(55));
    }

    #[test]
    fn test_invalid_policies() {
        assert!(matches!(
            EligibilityPolicy::new(dec!(60), dec!(50)),
            Err(AffordabilityError::InvalidPolicy { .. })
        ));
        assert!(matches!(
            EligibilityPolicy::new(dec!(0), dec!(50)),
            Err(AffordabilityError::ThresholdOutOfRange { .. })
        ));
        assert!(matches!(
            EligibilityPolicy::new(dec!(40), dec!(120)),
            Err(AffordabilityError::ThresholdOutOfRange { .. })
        ));
        assert!(matches!(
            EligibilityPolicy::from_json("{\"ideal_foir_percent\": \"40\"}"),
            Err(AffordabilityError::Json { .. })
        ));
    }
}
