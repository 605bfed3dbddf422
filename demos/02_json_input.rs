/// json in, json out
use foir_affordability_rs::{AffordabilityEngine, LoanInput};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let json = r#"{
        "monthly_income": "65000",
        "other_income": "12000",
        "existing_obligations": [
            {"id": "0b6f3f8e-2f6a-4c1d-9d8e-5a7b9c0d1e2f", "description": "home loan", "amount": "18000"},
            {"id": "5c2a1b3d-4e5f-4a6b-8c7d-9e0f1a2b3c4d", "description": "two-wheeler", "amount": "2500"}
        ],
        "proposed_principal": "900000",
        "annual_interest_rate_percent": "9.25",
        "term_months": 72,
        "monthly_expenses": "20000"
    }"#;

    let input = LoanInput::from_json(json)?;
    let engine = AffordabilityEngine::default();
    let result = engine.try_evaluate(&input)?;

    println!("{}", result.json());

    Ok(())
}
