use std::sync::Arc;

use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::credits::models::{
    CreateCreditRequest, Credit, CreditDetail, CreditResponse, CreditSummary,
};
use crate::modules::credits::repositories::CreditRepository;
use crate::modules::customers::repositories::CustomerRepository;

/// Service for credit business logic
pub struct CreditService {
    customer_repo: Arc<dyn CustomerRepository>,
    credit_repo: Arc<dyn CreditRepository>,
}

impl CreditService {
    pub fn new(
        customer_repo: Arc<dyn CustomerRepository>,
        credit_repo: Arc<dyn CreditRepository>,
    ) -> Self {
        Self {
            customer_repo,
            credit_repo,
        }
    }

    /// Create a new credit for an existing customer
    ///
    /// An unknown customer is a client error (400): the caller referenced an
    /// id that does not exist, nothing is written. Customer income is copied
    /// onto the credit at this moment.
    pub async fn create_credit(&self, request: CreateCreditRequest) -> Result<CreditResponse> {
        let customer = self
            .customer_repo
            .find_by_id(request.customer_id)
            .await?
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Customer with id {} not found",
                    request.customer_id
                ))
            })?;

        let credit = Credit::new(
            request.credit_value,
            request.day_first_installment,
            request.number_of_installments,
            request.customer_id,
            customer.income,
        )?;

        let created = self.credit_repo.create(credit).await?;

        tracing::info!(
            credit_code = %created.credit_code,
            customer_id = created.customer_id,
            "Credit created"
        );

        Ok(CreditResponse::from(created))
    }

    /// List all credits owned by a customer
    ///
    /// No existence check: an unknown customer simply has no credits.
    pub async fn list_credits(&self, customer_id: i64) -> Result<Vec<CreditSummary>> {
        let credits = self.credit_repo.find_by_customer(customer_id).await?;

        Ok(credits.into_iter().map(CreditSummary::from).collect())
    }

    /// Fetch full credit detail by its generated code
    ///
    /// Fails with 404 when no credit with that code belongs to the customer,
    /// including when the code exists but is owned by someone else.
    pub async fn find_credit_by_code(
        &self,
        customer_id: i64,
        credit_code: Uuid,
    ) -> Result<CreditDetail> {
        let credit = self
            .credit_repo
            .find_by_code(credit_code)
            .await?
            .filter(|credit| credit.customer_id == customer_id)
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Credit with code {} not found for customer {}",
                    credit_code, customer_id
                ))
            })?;

        Ok(CreditDetail::from(credit))
    }
}
