// Customer model with validation
//
// A customer owns zero or more credits. CPF and email are unique across
// customers; income is snapshotted onto each credit at issuance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Postal address embedded in a customer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub zip_code: String,
    pub street: String,
}

/// An account holder who can take out credits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Database-generated id, None until persisted
    #[serde(skip_deserializing)]
    pub id: Option<i64>,

    pub first_name: String,
    pub last_name: String,

    /// National tax id, 11 digits, unique
    pub cpf: String,

    /// Unique contact email
    pub email: String,

    /// Credentials placeholder, never serialized in responses
    #[serde(skip_serializing)]
    pub password: String,

    /// Monthly income, copied onto credits at issuance
    pub income: Decimal,

    pub address: Address,
}

impl Customer {
    /// Create a new customer with validation
    pub fn new(
        first_name: String,
        last_name: String,
        cpf: String,
        email: String,
        password: String,
        income: Decimal,
        address: Address,
    ) -> Result<Self> {
        Self::validate_name(&first_name, "First name")?;
        Self::validate_name(&last_name, "Last name")?;
        Self::validate_cpf(&cpf)?;
        Self::validate_email(&email)?;
        Self::validate_income(income)?;
        Self::validate_address(&address)?;

        Ok(Self {
            id: None,
            first_name,
            last_name,
            cpf,
            email,
            password,
            income,
            address,
        })
    }

    fn validate_name(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(AppError::validation(format!("{} cannot be empty", field)));
        }

        Ok(())
    }

    fn validate_cpf(cpf: &str) -> Result<()> {
        if cpf.len() != 11 || !cpf.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::validation("CPF must be exactly 11 digits"));
        }

        Ok(())
    }

    fn validate_email(email: &str) -> Result<()> {
        let valid = match email.split_once('@') {
            Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
            None => false,
        };

        if !valid {
            return Err(AppError::validation(format!(
                "'{}' is not a valid email address",
                email
            )));
        }

        Ok(())
    }

    fn validate_income(income: Decimal) -> Result<()> {
        if income < Decimal::ZERO {
            return Err(AppError::validation("Income cannot be negative"));
        }

        Ok(())
    }

    fn validate_address(address: &Address) -> Result<()> {
        if address.zip_code.trim().is_empty() {
            return Err(AppError::validation("Zip code cannot be empty"));
        }

        if address.street.trim().is_empty() {
            return Err(AppError::validation("Street cannot be empty"));
        }

        Ok(())
    }
}

/// Request body for POST /customers
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub email: String,
    pub password: String,
    pub income: Decimal,
    pub zip_code: String,
    pub street: String,
}

/// Customer projection returned by the API (no credentials)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub email: String,
    pub income: Decimal,
    pub zip_code: String,
    pub street: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        CustomerResponse {
            id: customer.id.unwrap_or_default(),
            first_name: customer.first_name,
            last_name: customer.last_name,
            cpf: customer.cpf,
            email: customer.email,
            income: customer.income,
            zip_code: customer.address.zip_code,
            street: customer.address.street,
        }
    }
}
