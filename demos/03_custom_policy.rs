/// stricter lender policy loaded from json
use foir_affordability_rs::{AffordabilityEngine, EligibilityPolicy, LoanInput, Money, Obligation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let policy = EligibilityPolicy::from_json(
        r#"{"ideal_foir_percent": "35", "max_foir_percent": "45"}"#,
    )?;
    let strict = AffordabilityEngine::new(policy)?;
    let standard = AffordabilityEngine::default();

    let input = LoanInput::builder()
        .monthly_income(Money::from_major(60_000))
        .obligation(Obligation::new("home loan", Money::from_major(12_000)))
        .principal(Money::from_major(400_000))
        .build()?;

    for (name, engine) in [("standard", standard), ("strict", strict)] {
        let result = engine.evaluate(&input);
        println!(
            "{:<8} foir {}% -> {}, max loan {}",
            name,
            result.foir_percent.round_dp(1),
            result.eligibility_tier,
            result.max_eligible_principal.round_dp(2)
        );
    }

    Ok(())
}
