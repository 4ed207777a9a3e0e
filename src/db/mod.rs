pub mod connection;
pub mod migrations;
pub mod repos;
pub mod schema;

/// Mint a fresh UUID-shaped id for any of the tracker tables.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
