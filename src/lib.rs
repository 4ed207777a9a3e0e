//! Embedded SQLite data layer for a Kanban-style project tracker.
//!
//! The schema holds five tables: boards, columns, epics, issues, and
//! epic-to-epic dependencies. Each table gets a repo module under
//! [`db::repos`] with typed create/get/update/delete operations over a
//! pooled connection. Migrations are embedded and applied with
//! [`db::migrations::run`].
//!
//! ```no_run
//! use boardstore::db::{connection, migrations, repos::epic::{CreateEpic, Epic, NewEpic}};
//!
//! # fn main() -> Result<(), boardstore::StoreError> {
//! let pool = connection::establish_connection()?;
//! let mut conn = pool.get()?;
//! migrations::run(&mut conn)?;
//!
//! let epic = Epic::create(
//!     NewEpic {
//!         id: &boardstore::db::generate_id(),
//!         column_id: "backlog",
//!         assignee_id: None,
//!         reporter_id: "user-1",
//!         name: "Ship the tracker",
//!         description: None,
//!         start_date: None,
//!         due_date: None,
//!     },
//!     pool.get()?,
//! )?;
//! assert_eq!(epic.due_date - epic.start_date, chrono::Duration::days(1));
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod error;

pub use db::connection::{SqlitePool, SqlitePooledConnection};
pub use error::StoreError;
