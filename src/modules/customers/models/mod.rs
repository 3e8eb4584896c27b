pub mod customer;

pub use customer::{Address, CreateCustomerRequest, Customer, CustomerResponse};
