use diesel::r2d2::{ConnectionManager, Pool, PoolError, PooledConnection};
use diesel::SqliteConnection;
use dotenv::dotenv;
use std::env;

use crate::error::StoreError;

pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;
pub type SqlitePooledConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Build a pool over the database at `database_url` (a filesystem path
/// for SQLite).
pub fn init_pool(database_url: &str) -> Result<SqlitePool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder().build(manager)
}

/// Build a pool from the `DATABASE_URL` env variable, loading `.env`
/// first if present.
pub fn establish_connection() -> Result<SqlitePool, StoreError> {
    dotenv().ok();

    let database_url = env::var("DATABASE_URL").map_err(|_| StoreError::DatabaseUrlMissing)?;
    log::info!("opening database at {}", database_url);
    Ok(init_pool(&database_url)?)
}
