use std::sync::Arc;

use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use creditline::config::Config;
use creditline::middleware::RequestId;
use creditline::modules::credits::controllers::credit_controller;
use creditline::modules::credits::repositories::{CreditRepository, MySqlCreditRepository};
use creditline::modules::credits::services::CreditService;
use creditline::modules::customers::controllers::customer_controller;
use creditline::modules::customers::repositories::{CustomerRepository, MySqlCustomerRepository};
use creditline::modules::customers::services::CustomerService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "creditline=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting Creditline credit-management service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .expect("Failed to create database pool");

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    // Apply embedded schema migrations
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");

    // Wire repositories and services
    let customer_repo: Arc<dyn CustomerRepository> =
        Arc::new(MySqlCustomerRepository::new(db_pool.clone()));
    let credit_repo: Arc<dyn CreditRepository> =
        Arc::new(MySqlCreditRepository::new(db_pool.clone()));

    let customer_service = Arc::new(CustomerService::new(customer_repo.clone()));
    let credit_service = Arc::new(CreditService::new(customer_repo, credit_repo));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .app_data(web::Data::new(customer_service.clone()))
            .app_data(web::Data::new(credit_service.clone()))
            .configure(customer_controller::configure)
            .configure(credit_controller::configure)
            .route("/health", web::get().to(health_check))
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "creditline"
    }))
}
