use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::core::error::AppError;
use crate::modules::credits::models::CreateCreditRequest;
use crate::modules::credits::services::CreditService;

/// Query parameters for credit lookups
#[derive(Debug, Deserialize)]
pub struct CustomerIdQuery {
    pub customer_id: i64,
}

/// Create a new credit
/// POST /credits
pub async fn create_credit(
    service: web::Data<Arc<CreditService>>,
    request: web::Json<CreateCreditRequest>,
) -> Result<HttpResponse, AppError> {
    let credit = service.create_credit(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(credit))
}

/// List credits for a customer
/// GET /credits?customer_id=
pub async fn list_credits(
    service: web::Data<Arc<CreditService>>,
    query: web::Query<CustomerIdQuery>,
) -> Result<HttpResponse, AppError> {
    let credits = service.list_credits(query.customer_id).await?;

    Ok(HttpResponse::Ok().json(credits))
}

/// Get full credit detail by code
/// GET /credits/{credit_code}?customer_id=
pub async fn get_credit_by_code(
    service: web::Data<Arc<CreditService>>,
    path: web::Path<Uuid>,
    query: web::Query<CustomerIdQuery>,
) -> Result<HttpResponse, AppError> {
    let credit = service
        .find_credit_by_code(query.customer_id, path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(credit))
}

/// Configure credit routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/credits")
            .route("", web::post().to(create_credit))
            .route("", web::get().to(list_credits))
            .route("/{credit_code}", web::get().to(get_credit_by_code)),
    );
}
