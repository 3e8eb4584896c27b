use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::customers::models::{
    Address, CreateCustomerRequest, Customer, CustomerResponse,
};
use crate::modules::customers::repositories::CustomerRepository;

/// Service for customer business logic
pub struct CustomerService {
    customer_repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(customer_repo: Arc<dyn CustomerRepository>) -> Self {
        Self { customer_repo }
    }

    /// Validate and persist a new customer
    pub async fn create_customer(&self, request: CreateCustomerRequest) -> Result<CustomerResponse> {
        let customer = Customer::new(
            request.first_name,
            request.last_name,
            request.cpf,
            request.email,
            request.password,
            request.income,
            Address {
                zip_code: request.zip_code,
                street: request.street,
            },
        )?;

        let created = self.customer_repo.create(customer).await?;

        tracing::info!(customer_id = ?created.id, "Customer created");

        Ok(CustomerResponse::from(created))
    }

    /// Fetch a customer by id
    pub async fn get_customer(&self, id: i64) -> Result<CustomerResponse> {
        let customer = self
            .customer_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Customer with id {} not found", id)))?;

        Ok(CustomerResponse::from(customer))
    }

    /// Delete a customer by id
    pub async fn delete_customer(&self, id: i64) -> Result<()> {
        let deleted = self.customer_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::not_found(format!(
                "Customer with id {} not found",
                id
            )));
        }

        tracing::info!(customer_id = id, "Customer deleted");

        Ok(())
    }
}
