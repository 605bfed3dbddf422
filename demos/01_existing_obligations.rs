/// editing the list of existing obligations and re-evaluating after each change
use foir_affordability_rs::{
    evaluate, LoanInput, Money, Obligation, ObligationList, ObligationUpdate, Rate,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let base = LoanInput::builder()
        .monthly_income(Money::from_major(30_000))
        .principal(Money::from_major(800_000))
        .annual_rate(Rate::from_percent(dec!(9)))
        .term_months(48)
        .build()?;

    let personal = Obligation::new("personal loan", Money::from_major(5_000));
    let card = Obligation::new("credit card", Money::from_major(1_500));
    let card_id = card.id;

    let obligations = ObligationList::new()
        .with_added(personal)?
        .with_added(card)?;
    let input = base.with_obligations(obligations);
    report("with two obligations", &input);

    // card minimum payment drops
    let reduced = input
        .existing_obligations
        .with_updated(card_id, ObligationUpdate::Amount(Money::from_major(500)))?;
    let input = input.with_obligations(reduced);
    report("after card paydown", &input);

    // card closed
    let closed = input.existing_obligations.without(card_id)?;
    let input = input.with_obligations(closed);
    report("after closing card", &input);

    Ok(())
}

fn report(label: &str, input: &LoanInput) {
    let result = evaluate(input);
    println!("--- {} ---", label);
    println!("existing obligations: {}", result.total_existing_obligations);
    println!("proposed installment: {}", result.proposed_installment.round_dp(2));
    println!("foir:                 {}%", result.foir_percent.round_dp(1));
    println!("verdict:              {}", result.eligibility_tier);
    println!(
        "max eligible loan:    {} (short by {})",
        result.max_eligible_principal.round_dp(2),
        result.principal_shortfall(input.proposed_principal).round_dp(2)
    );
}
