pub mod credit_service;

pub use credit_service::CreditService;
