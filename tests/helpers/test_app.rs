use std::sync::Arc;

use creditline::modules::credits::services::CreditService;
use creditline::modules::customers::services::CustomerService;

use super::memory::{InMemoryCreditRepository, InMemoryCustomerRepository};

/// Fully wired services over in-memory stores.
///
/// The repositories are kept alongside the services so tests can inspect
/// store state directly (e.g. row counts after a rejected creation).
pub struct TestContext {
    pub customer_service: Arc<CustomerService>,
    pub credit_service: Arc<CreditService>,
    pub customer_repo: Arc<InMemoryCustomerRepository>,
    pub credit_repo: Arc<InMemoryCreditRepository>,
}

impl TestContext {
    pub fn new() -> Self {
        let customer_repo = Arc::new(InMemoryCustomerRepository::new());
        let credit_repo = Arc::new(InMemoryCreditRepository::new());

        let customer_service = Arc::new(CustomerService::new(customer_repo.clone()));
        let credit_service =
            Arc::new(CreditService::new(customer_repo.clone(), credit_repo.clone()));

        Self {
            customer_service,
            credit_service,
            customer_repo,
            credit_repo,
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
