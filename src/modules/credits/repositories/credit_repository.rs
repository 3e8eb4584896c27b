// CreditRepository trait and MySQL implementation
//
// The insert relies on the customers foreign key to close the race where a
// customer is deleted between the service's existence check and the write:
// the violating insert fails inside its own statement and is reported as the
// same client error as a missing customer.

use async_trait::async_trait;
use sqlx::MySqlPool;
use std::str::FromStr;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::credits::models::{Credit, CreditStatus};

/// Store abstraction for credit records
#[async_trait]
pub trait CreditRepository: Send + Sync {
    /// Persist a new credit, returning it with the generated id
    async fn create(&self, credit: Credit) -> Result<Credit>;

    /// All credits owned by a customer, oldest first; empty when none exist
    async fn find_by_customer(&self, customer_id: i64) -> Result<Vec<Credit>>;

    /// Find a credit by its generated code
    async fn find_by_code(&self, credit_code: Uuid) -> Result<Option<Credit>>;
}

/// MySQL-backed credit repository
pub struct MySqlCreditRepository {
    pool: MySqlPool,
}

impl MySqlCreditRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CreditRepository for MySqlCreditRepository {
    async fn create(&self, credit: Credit) -> Result<Credit> {
        let result = sqlx::query(
            r#"
            INSERT INTO credits (
                credit_code, credit_value, day_first_installment,
                number_of_installments, status, customer_id, income_snapshot, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(credit.credit_code.to_string())
        .bind(credit.credit_value)
        .bind(credit.day_first_installment)
        .bind(credit.number_of_installments)
        .bind(credit.status.to_string())
        .bind(credit.customer_id)
        .bind(credit.income_snapshot)
        .bind(credit.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return AppError::validation(format!(
                        "Customer with id {} not found",
                        credit.customer_id
                    ));
                }
            }
            AppError::Internal(format!("Failed to create credit: {}", e))
        })?;

        let mut created = credit;
        created.id = Some(result.last_insert_id() as i64);

        Ok(created)
    }

    async fn find_by_customer(&self, customer_id: i64) -> Result<Vec<Credit>> {
        let rows = sqlx::query_as::<_, CreditRow>(
            r#"
            SELECT id, credit_code, credit_value, day_first_installment,
                   number_of_installments, status, customer_id, income_snapshot, created_at
            FROM credits
            WHERE customer_id = ?
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to list credits: {}", e)))?;

        rows.into_iter().map(CreditRow::into_credit).collect()
    }

    async fn find_by_code(&self, credit_code: Uuid) -> Result<Option<Credit>> {
        let row = sqlx::query_as::<_, CreditRow>(
            r#"
            SELECT id, credit_code, credit_value, day_first_installment,
                   number_of_installments, status, customer_id, income_snapshot, created_at
            FROM credits
            WHERE credit_code = ?
            "#,
        )
        .bind(credit_code.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to fetch credit: {}", e)))?;

        row.map(CreditRow::into_credit).transpose()
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CreditRow {
    id: i64,
    credit_code: String,
    credit_value: rust_decimal::Decimal,
    day_first_installment: chrono::NaiveDate,
    number_of_installments: u32,
    status: String,
    customer_id: i64,
    income_snapshot: rust_decimal::Decimal,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl CreditRow {
    fn into_credit(self) -> Result<Credit> {
        let credit_code = Uuid::from_str(&self.credit_code)
            .map_err(|e| AppError::Internal(format!("Invalid credit code in database: {}", e)))?;

        let status = CreditStatus::from_str(&self.status)
            .map_err(|e| AppError::Internal(format!("Invalid status in database: {}", e)))?;

        Ok(Credit {
            id: Some(self.id),
            credit_code,
            credit_value: self.credit_value,
            day_first_installment: self.day_first_installment,
            number_of_installments: self.number_of_installments,
            status,
            customer_id: self.customer_id,
            income_snapshot: self.income_snapshot,
            created_at: self.created_at,
        })
    }
}
