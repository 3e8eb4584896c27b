use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::customers::models::CreateCustomerRequest;
use crate::modules::customers::services::CustomerService;

/// Create a new customer
/// POST /customers
pub async fn create_customer(
    service: web::Data<Arc<CustomerService>>,
    request: web::Json<CreateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let customer = service.create_customer(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(customer))
}

/// Get customer by id
/// GET /customers/{id}
pub async fn get_customer(
    service: web::Data<Arc<CustomerService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let customer = service.get_customer(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(customer))
}

/// Delete customer by id
/// DELETE /customers/{id}
pub async fn delete_customer(
    service: web::Data<Arc<CustomerService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete_customer(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure customer routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/customers")
            .route("", web::post().to(create_customer))
            .route("/{id}", web::get().to(get_customer))
            .route("/{id}", web::delete().to(delete_customer)),
    );
}
