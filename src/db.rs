use std::time::Duration;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

/// Upper bound on waiting for a pooled connection; hitting it surfaces as a
/// 500 to the client instead of hanging the request.
const CHECKOUT_TIMEOUT: Duration = Duration::from_secs(5);

pub fn create_pool(database_url: &str) -> DbPool {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .connection_timeout(CHECKOUT_TIMEOUT)
        .build(manager)
        .expect("Failed to create database connection pool")
}
