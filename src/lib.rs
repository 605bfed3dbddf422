pub mod config;
pub mod decimal;
pub mod engine;
pub mod errors;
pub mod input;
pub mod installment;
pub mod obligations;
pub mod result;
pub mod types;

// re-export key types
pub use config::EligibilityPolicy;
pub use decimal::{Money, Rate};
pub use engine::{evaluate, AffordabilityEngine};
pub use errors::{AffordabilityError, Result};
pub use input::{LoanInput, LoanInputBuilder};
pub use installment::{
    compute_installment, principal_for_installment, total_interest_payable, total_repayment,
};
pub use obligations::ObligationList;
pub use result::EligibilityResult;
pub use types::{EligibilityTier, Obligation, ObligationId, ObligationUpdate};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
