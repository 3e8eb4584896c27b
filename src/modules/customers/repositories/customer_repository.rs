// CustomerRepository trait and MySQL implementation
//
// The service layer only sees the trait; the MySQL implementation maps
// unique-key violations on cpf/email to validation errors so the boundary
// reports them as client errors rather than 500s.

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::customers::models::{Address, Customer};

/// Store abstraction for customer records
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Persist a new customer, returning it with the generated id
    async fn create(&self, customer: Customer) -> Result<Customer>;

    /// Find a customer by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>>;

    /// Delete a customer by id, returning whether a row was removed
    async fn delete(&self, id: i64) -> Result<bool>;
}

/// MySQL-backed customer repository
pub struct MySqlCustomerRepository {
    pool: MySqlPool,
}

impl MySqlCustomerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for MySqlCustomerRepository {
    async fn create(&self, customer: Customer) -> Result<Customer> {
        let result = sqlx::query(
            r#"
            INSERT INTO customers (
                first_name, last_name, cpf, email, password, income, zip_code, street
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.cpf)
        .bind(&customer.email)
        .bind(&customer.password)
        .bind(customer.income)
        .bind(&customer.address.zip_code)
        .bind(&customer.address.street)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::validation(format!(
                        "Customer with cpf '{}' or email '{}' already exists",
                        customer.cpf, customer.email
                    ));
                }
            }
            AppError::Internal(format!("Failed to create customer: {}", e))
        })?;

        let mut created = customer;
        created.id = Some(result.last_insert_id() as i64);

        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, first_name, last_name, cpf, email, password, income, zip_code, street
            FROM customers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to fetch customer: {}", e)))?;

        Ok(row.map(CustomerRow::into_customer))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to delete customer: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    first_name: String,
    last_name: String,
    cpf: String,
    email: String,
    password: String,
    income: rust_decimal::Decimal,
    zip_code: String,
    street: String,
}

impl CustomerRow {
    fn into_customer(self) -> Customer {
        Customer {
            id: Some(self.id),
            first_name: self.first_name,
            last_name: self.last_name,
            cpf: self.cpf,
            email: self.email,
            password: self.password,
            income: self.income,
            address: Address {
                zip_code: self.zip_code,
                street: self.street,
            },
        }
    }
}
