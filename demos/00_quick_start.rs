/// quick start - grade a single car loan proposal
use foir_affordability_rs::{evaluate, LoanInput, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // 500,000 over 5 years at 8.5% for someone earning 50,000 a month
    let input = LoanInput::builder()
        .monthly_income(Money::from_major(50_000))
        .principal(Money::from_major(500_000))
        .annual_rate(Rate::from_percent(dec!(8.5)))
        .term_months(60)
        .build()?;

    let result = evaluate(&input);

    println!("installment: {}", result.proposed_installment.round_dp(2));
    println!("foir:        {}%", result.foir_percent.round_dp(1));
    println!("verdict:     {}", result.eligibility_tier);
    println!("max loan:    {}", result.max_eligible_principal.round_dp(2));

    Ok(())
}
