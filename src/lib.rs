pub mod application;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::artwork_service::ArtworkService;
use application::order_service::OrderService;
use infrastructure::artwork_repo::DieselArtworkRepository;
use infrastructure::order_repo::DieselOrderRepository;

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::artworks::list_artworks,
        handlers::artworks::get_artwork,
        handlers::orders::create_order,
    ),
    components(schemas(
        handlers::artworks::ArtworkResponse,
        handlers::artworks::ArtworkListResponse,
        handlers::artworks::ArtworkDetailResponse,
        handlers::orders::CreateOrderRequest,
        handlers::orders::CreateOrderResponse,
    )),
    tags(
        (name = "artworks", description = "Artwork browsing"),
        (name = "orders", description = "Order placement"),
    )
)]
pub struct ApiDoc;

/// The routing table, shared by `build_server` and the integration tests.
/// Anything unmatched under `/api` is a 404 "Endpoint not found"; anything
/// outside it is a 404 "API not found".
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(handlers::json_config())
        .service(
            web::scope("/api")
                .route("/artworks", web::get().to(handlers::artworks::list_artworks))
                .route(
                    "/artworks/{id}",
                    web::get().to(handlers::artworks::get_artwork),
                )
                .route("/order", web::post().to(handlers::orders::create_order))
                .default_service(web::route().to(handlers::endpoint_not_found)),
        )
        .default_service(web::route().to(handlers::api_not_found));
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let artworks = web::Data::new(ArtworkService::new(Arc::new(DieselArtworkRepository::new(
        pool.clone(),
    ))));
    let orders = web::Data::new(OrderService::new(Arc::new(DieselOrderRepository::new(pool))));

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(artworks.clone())
            .app_data(orders.clone())
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(routes)
    })
    .bind((host.to_string(), port))?
    .run())
}
