use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use petshop::config::Config;
use petshop::modules::{
    animals, appointments, clients, financials, monetary_types, products, sales, stock,
    veterinarians,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "petshop=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting Pet Shop Management API");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .expect("Failed to create database pool");

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(db_pool.clone()))
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .route("/health", web::get().to(health_check))
            .route("/", web::get().to(index))
            .service(
                web::scope("/clients")
                    .route("", web::get().to(clients::controllers::list_clients))
                    .route("", web::post().to(clients::controllers::create_client))
                    .route("/{id}", web::get().to(clients::controllers::get_client))
                    .route("/{id}", web::put().to(clients::controllers::update_client))
                    .route("/{id}", web::delete().to(clients::controllers::delete_client)),
            )
            .service(
                web::scope("/animals")
                    .route("", web::get().to(animals::controllers::list_animals))
                    .route("", web::post().to(animals::controllers::create_animal))
                    .route("/{id}", web::get().to(animals::controllers::get_animal))
                    .route("/{id}", web::put().to(animals::controllers::update_animal))
                    .route("/{id}", web::delete().to(animals::controllers::delete_animal)),
            )
            .service(
                web::scope("/veterinarian-categories")
                    .route(
                        "",
                        web::get().to(veterinarians::controllers::list_veterinarian_categories),
                    )
                    .route(
                        "",
                        web::post().to(veterinarians::controllers::create_veterinarian_category),
                    )
                    .route(
                        "/{id}",
                        web::get().to(veterinarians::controllers::get_veterinarian_category),
                    )
                    .route(
                        "/{id}",
                        web::put().to(veterinarians::controllers::update_veterinarian_category),
                    )
                    .route(
                        "/{id}",
                        web::delete().to(veterinarians::controllers::delete_veterinarian_category),
                    ),
            )
            .service(
                web::scope("/veterinarians")
                    .route("", web::get().to(veterinarians::controllers::list_veterinarians))
                    .route("", web::post().to(veterinarians::controllers::create_veterinarian))
                    .route("/{id}", web::get().to(veterinarians::controllers::get_veterinarian))
                    .route("/{id}", web::put().to(veterinarians::controllers::update_veterinarian))
                    .route(
                        "/{id}",
                        web::delete().to(veterinarians::controllers::delete_veterinarian),
                    ),
            )
            .service(
                web::scope("/product-categories")
                    .route("", web::get().to(products::controllers::list_product_categories))
                    .route("", web::post().to(products::controllers::create_product_category))
                    .route("/{id}", web::get().to(products::controllers::get_product_category))
                    .route("/{id}", web::put().to(products::controllers::update_product_category))
                    .route(
                        "/{id}",
                        web::delete().to(products::controllers::delete_product_category),
                    ),
            )
            .service(
                web::scope("/products")
                    .route("", web::get().to(products::controllers::list_products))
                    .route("", web::post().to(products::controllers::create_product))
                    .route("/{id}", web::get().to(products::controllers::get_product))
                    .route("/{id}", web::put().to(products::controllers::update_product))
                    .route("/{id}", web::delete().to(products::controllers::delete_product)),
            )
            .service(
                web::scope("/monetary-types")
                    .route("", web::get().to(monetary_types::controllers::list_monetary_types))
                    .route("", web::post().to(monetary_types::controllers::create_monetary_type))
                    .route("/{id}", web::get().to(monetary_types::controllers::get_monetary_type))
                    .route(
                        "/{id}",
                        web::delete().to(monetary_types::controllers::delete_monetary_type),
                    ),
            )
            .service(
                web::scope("/stock-movements")
                    .route("", web::get().to(stock::controllers::list_stock_movements))
                    .route("/input", web::post().to(stock::controllers::register_stock_input))
                    .route("/output", web::post().to(stock::controllers::register_stock_output)),
            )
            .service(
                web::scope("/financials")
                    .route("", web::get().to(financials::controllers::list_financials))
                    .route("", web::post().to(financials::controllers::create_financial))
                    .route(
                        "/payments/{payment_id}/refund",
                        web::post().to(financials::controllers::refund_payment),
                    )
                    .route("/{id}", web::get().to(financials::controllers::get_financial))
                    .route("/{id}", web::delete().to(financials::controllers::delete_financial))
                    .route(
                        "/{id}/payments",
                        web::post().to(financials::controllers::pay_financial),
                    ),
            )
            .service(
                web::scope("/sales")
                    .route("", web::get().to(sales::controllers::list_sales))
                    .route("", web::post().to(sales::controllers::create_sale))
                    .route("/{id}", web::get().to(sales::controllers::get_sale))
                    .route("/{id}/cancel", web::post().to(sales::controllers::cancel_sale)),
            )
            .service(
                web::scope("/appointments")
                    .route("", web::get().to(appointments::controllers::list_appointments))
                    .route("", web::post().to(appointments::controllers::create_appointment))
                    .route("/{id}", web::get().to(appointments::controllers::get_appointment))
                    .route("/{id}", web::put().to(appointments::controllers::update_appointment))
                    .route(
                        "/{id}",
                        web::delete().to(appointments::controllers::delete_appointment),
                    ),
            )
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "petshop"
    }))
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Pet Shop Management API",
        "version": "0.1.0",
        "status": "running"
    }))
}
