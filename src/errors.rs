use rust_decimal::Decimal;
use thiserror::Error;

use crate::decimal::{Money, Rate};
use crate::types::ObligationId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AffordabilityError {
    #[error("negative amount for {field}: {amount}")]
    NegativeAmount {
        field: String,
        amount: Money,
    },

    #[error("invalid interest rate: {rate}")]
    InvalidInterestRate {
        rate: Rate,
    },

    #[error("invalid term: {term_months} months, must be at least 1")]
    InvalidTerm {
        term_months: u32,
    },

    #[error("obligation already exists: {id}")]
    DuplicateObligation {
        id: ObligationId,
    },

    #[error("obligation not found: {id}")]
    ObligationNotFound {
        id: ObligationId,
    },

    #[error("invalid policy: {message}")]
    InvalidPolicy {
        message: String,
    },

    #[error("foir threshold out of range: {percent}")]
    ThresholdOutOfRange {
        percent: Decimal,
    },

    #[error("json error: {message}")]
    Json {
        message: String,
    },
}

impl From<serde_json::Error> for AffordabilityError {
    fn from(e: serde_json::Error) -> Self {
        AffordabilityError::Json {
            message: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AffordabilityError>;
