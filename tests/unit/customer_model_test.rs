// Unit tests for customer validation

use creditline::modules::customers::models::{Address, Customer};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn address() -> Address {
    Address {
        zip_code: "12345678".to_string(),
        street: "Rua da Cecilia, 100".to_string(),
    }
}

fn build(cpf: &str, email: &str, income: Decimal) -> Result<Customer, creditline::core::AppError> {
    Customer::new(
        "Cami".to_string(),
        "Cavalcante".to_string(),
        cpf.to_string(),
        email.to_string(),
        "12345".to_string(),
        income,
        address(),
    )
}

#[test]
fn test_valid_customer_accepted() {
    let customer = build("28475934625", "camila@email.com", dec!(1000));

    assert!(customer.is_ok());
    assert!(customer.unwrap().id.is_none());
}

#[test]
fn test_empty_first_name_rejected() {
    let result = Customer::new(
        "  ".to_string(),
        "Cavalcante".to_string(),
        "28475934625".to_string(),
        "camila@email.com".to_string(),
        "12345".to_string(),
        dec!(1000),
        address(),
    );

    assert!(result.is_err());
}

#[test]
fn test_non_numeric_cpf_rejected() {
    assert!(build("2847593462a", "camila@email.com", dec!(1000)).is_err());
}

#[test]
fn test_wrong_length_cpf_rejected() {
    assert!(build("284759346", "camila@email.com", dec!(1000)).is_err());
    assert!(build("284759346251", "camila@email.com", dec!(1000)).is_err());
}

#[test]
fn test_email_without_at_rejected() {
    assert!(build("28475934625", "camila.email.com", dec!(1000)).is_err());
}

#[test]
fn test_email_missing_domain_rejected() {
    assert!(build("28475934625", "camila@", dec!(1000)).is_err());
}

#[test]
fn test_negative_income_rejected() {
    assert!(build("28475934625", "camila@email.com", dec!(-0.01)).is_err());
}

#[test]
fn test_zero_income_accepted() {
    assert!(build("28475934625", "camila@email.com", Decimal::ZERO).is_ok());
}

#[test]
fn test_empty_street_rejected() {
    let result = Customer::new(
        "Cami".to_string(),
        "Cavalcante".to_string(),
        "28475934625".to_string(),
        "camila@email.com".to_string(),
        "12345".to_string(),
        dec!(1000),
        Address {
            zip_code: "12345678".to_string(),
            street: "".to_string(),
        },
    );

    assert!(result.is_err());
}

proptest! {
    /// Property: any 11-digit CPF passes format validation
    #[test]
    fn prop_eleven_digit_cpf_accepted(cpf in "[0-9]{11}") {
        prop_assert!(build(&cpf, "camila@email.com", Decimal::from(1000u64)).is_ok());
    }

    /// Property: CPFs of any other length are rejected
    #[test]
    fn prop_wrong_length_cpf_rejected(cpf in "[0-9]{1,10}") {
        prop_assert!(build(&cpf, "camila@email.com", Decimal::from(1000u64)).is_err());
    }
}
