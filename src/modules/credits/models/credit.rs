// Credit model with validation
//
// A credit is a loan record owned by exactly one customer. The credit code
// is a generated UUID, distinct from the numeric database id, and is the
// handle customers use to look the credit up later. Customer income is
// snapshotted at issuance so later income changes do not rewrite history.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};

/// Credit lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditStatus {
    /// Credit issued, installments outstanding
    #[serde(rename = "IN_PROGRESS")]
    InProgress,

    /// All installments settled
    #[serde(rename = "PAID")]
    Paid,

    /// Customer stopped paying
    #[serde(rename = "DEFAULTED")]
    Defaulted,
}

impl Default for CreditStatus {
    fn default() -> Self {
        CreditStatus::InProgress
    }
}

impl std::fmt::Display for CreditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreditStatus::InProgress => write!(f, "IN_PROGRESS"),
            CreditStatus::Paid => write!(f, "PAID"),
            CreditStatus::Defaulted => write!(f, "DEFAULTED"),
        }
    }
}

impl std::str::FromStr for CreditStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "IN_PROGRESS" => Ok(CreditStatus::InProgress),
            "PAID" => Ok(CreditStatus::Paid),
            "DEFAULTED" => Ok(CreditStatus::Defaulted),
            _ => Err(format!("Invalid credit status: {}", s)),
        }
    }
}

/// A loan record tied to a customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credit {
    /// Database-generated id, None until persisted
    #[serde(skip_deserializing)]
    pub id: Option<i64>,

    /// Generated unique lookup token
    pub credit_code: Uuid,

    /// Amount of the credit, always positive
    pub credit_value: Decimal,

    /// Due date of the first installment, never in the past at issuance
    pub day_first_installment: NaiveDate,

    /// How many installments the credit is split into
    pub number_of_installments: u32,

    pub status: CreditStatus,

    /// Owning customer, must exist when the credit is created
    pub customer_id: i64,

    /// Customer income at the moment of issuance
    pub income_snapshot: Decimal,

    pub created_at: DateTime<Utc>,
}

impl Credit {
    /// Create a new credit with validation
    ///
    /// Pure derivation, no I/O: generates the credit code, stamps the
    /// issuance time and starts the credit as `IN_PROGRESS`. The income
    /// snapshot is supplied by the caller, which has already loaded the
    /// owning customer.
    pub fn new(
        credit_value: Decimal,
        day_first_installment: NaiveDate,
        number_of_installments: u32,
        customer_id: i64,
        income_snapshot: Decimal,
    ) -> Result<Self> {
        Self::validate_credit_value(credit_value)?;
        Self::validate_installments(number_of_installments)?;
        Self::validate_first_installment(day_first_installment)?;

        Ok(Self {
            id: None,
            credit_code: Uuid::new_v4(),
            credit_value,
            day_first_installment,
            number_of_installments,
            status: CreditStatus::InProgress,
            customer_id,
            income_snapshot,
            created_at: Utc::now(),
        })
    }

    fn validate_credit_value(value: Decimal) -> Result<()> {
        if value <= Decimal::ZERO {
            return Err(AppError::validation(
                "Credit value must be greater than zero",
            ));
        }

        Ok(())
    }

    fn validate_installments(count: u32) -> Result<()> {
        if count == 0 {
            return Err(AppError::validation(
                "Number of installments must be greater than zero",
            ));
        }

        Ok(())
    }

    fn validate_first_installment(date: NaiveDate) -> Result<()> {
        if date < Utc::now().date_naive() {
            return Err(AppError::validation(
                "First installment date cannot be in the past",
            ));
        }

        Ok(())
    }
}

/// Request body for POST /credits
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCreditRequest {
    pub credit_value: Decimal,
    pub day_first_installment: NaiveDate,
    pub number_of_installments: u32,
    pub customer_id: i64,
}

/// Projection returned when a credit is created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditResponse {
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    pub day_first_installment: NaiveDate,
    pub number_of_installments: u32,
    pub status: CreditStatus,
    pub customer_id: i64,
}

impl From<Credit> for CreditResponse {
    fn from(credit: Credit) -> Self {
        CreditResponse {
            credit_code: credit.credit_code,
            credit_value: credit.credit_value,
            day_first_installment: credit.day_first_installment,
            number_of_installments: credit.number_of_installments,
            status: credit.status,
            customer_id: credit.customer_id,
        }
    }
}

/// Compact projection used by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditSummary {
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    pub number_of_installments: u32,
}

impl From<Credit> for CreditSummary {
    fn from(credit: Credit) -> Self {
        CreditSummary {
            credit_code: credit.credit_code,
            credit_value: credit.credit_value,
            number_of_installments: credit.number_of_installments,
        }
    }
}

/// Full detail returned by the lookup-by-code endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditDetail {
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    pub day_first_installment: NaiveDate,
    pub number_of_installments: u32,
    pub status: CreditStatus,
    pub customer_id: i64,
    pub income_snapshot: Decimal,
}

impl From<Credit> for CreditDetail {
    fn from(credit: Credit) -> Self {
        CreditDetail {
            credit_code: credit.credit_code,
            credit_value: credit.credit_value,
            day_first_installment: credit.day_first_installment,
            number_of_installments: credit.number_of_installments,
            status: credit.status,
            customer_id: credit.customer_id,
            income_snapshot: credit.income_snapshot,
        }
    }
}
