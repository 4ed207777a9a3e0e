use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::error::StoreError;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Apply any pending migrations. Safe to call on every startup; an
/// already-migrated database is a no-op.
pub fn run(db_connection: &mut SqliteConnection) -> Result<(), StoreError> {
    let applied = db_connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| StoreError::Migration(err.to_string()))?;

    for version in &applied {
        log::info!("applied migration {}", version);
    }
    Ok(())
}
