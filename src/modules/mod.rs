pub mod credits;
pub mod customers;
