// Credits module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Credit, CreditStatus};
pub use repositories::{CreditRepository, MySqlCreditRepository};
pub use services::CreditService;
