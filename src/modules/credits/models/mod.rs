pub mod credit;

pub use credit::{
    CreateCreditRequest, Credit, CreditDetail, CreditResponse, CreditStatus, CreditSummary,
};
