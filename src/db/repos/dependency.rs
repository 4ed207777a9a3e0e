use diesel::prelude::*;
use diesel::{delete, insert_into, update};

use crate::db::connection::SqlitePooledConnection;
use crate::db::schema::dependencies;
use crate::error::StoreError;

/// A blocks-edge between two epics: the blocked epic should not start
/// until the blocking epic is done.
#[derive(Queryable, PartialEq, Debug, Clone)]
pub struct Dependency {
    pub id: String,
    pub blocking_epic_id: String,
    pub blocked_epic_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = dependencies)]
pub struct NewDependency<'a> {
    pub id: &'a str,
    pub blocking_epic_id: &'a str,
    pub blocked_epic_id: &'a str,
}

#[derive(AsChangeset, Default)]
#[diesel(table_name = dependencies)]
pub struct DependencyChangeSet {
    pub blocking_epic_id: Option<String>,
    pub blocked_epic_id: Option<String>,
}

impl DependencyChangeSet {
    pub fn is_empty(&self) -> bool {
        self.blocking_epic_id.is_none() && self.blocked_epic_id.is_none()
    }
}

pub trait CreateDependency {
    fn create(
        new_dependency: NewDependency<'_>,
        db_connection: SqlitePooledConnection,
    ) -> Result<Dependency, StoreError>;
}

impl CreateDependency for Dependency {
    fn create(
        new_dependency: NewDependency<'_>,
        mut db_connection: SqlitePooledConnection,
    ) -> Result<Dependency, StoreError> {
        log::debug!(
            "creating dependency {} ({} blocks {})",
            new_dependency.id,
            new_dependency.blocking_epic_id,
            new_dependency.blocked_epic_id
        );
        let dependency: Dependency = insert_into(dependencies::dsl::dependencies)
            .values(new_dependency)
            .get_result(&mut *db_connection)?;

        Ok(dependency)
    }
}

pub trait GetDependency {
    fn get(
        dependency_id: &str,
        db_connection: SqlitePooledConnection,
    ) -> Result<Dependency, StoreError>;

    /// Dependencies where the given epic is the one doing the blocking.
    fn list_blocking(
        epic_id: &str,
        db_connection: SqlitePooledConnection,
    ) -> Result<Vec<Dependency>, StoreError>;

    /// Dependencies where the given epic is the one being blocked.
    fn list_blocked(
        epic_id: &str,
        db_connection: SqlitePooledConnection,
    ) -> Result<Vec<Dependency>, StoreError>;
}

impl GetDependency for Dependency {
    fn get(
        dependency_id: &str,
        mut db_connection: SqlitePooledConnection,
    ) -> Result<Dependency, StoreError> {
        dependencies::dsl::dependencies
            .filter(dependencies::dsl::id.eq(dependency_id))
            .first::<Dependency>(&mut *db_connection)
            .optional()?
            .ok_or_else(|| StoreError::NotFound(format!("dependency {}", dependency_id)))
    }

    fn list_blocking(
        epic_id: &str,
        mut db_connection: SqlitePooledConnection,
    ) -> Result<Vec<Dependency>, StoreError> {
        Ok(dependencies::dsl::dependencies
            .filter(dependencies::dsl::blocking_epic_id.eq(epic_id))
            .load::<Dependency>(&mut *db_connection)?)
    }

    fn list_blocked(
        epic_id: &str,
        mut db_connection: SqlitePooledConnection,
    ) -> Result<Vec<Dependency>, StoreError> {
        Ok(dependencies::dsl::dependencies
            .filter(dependencies::dsl::blocked_epic_id.eq(epic_id))
            .load::<Dependency>(&mut *db_connection)?)
    }
}

pub trait UpdateDependency {
    fn update(
        dependency_id: &str,
        change_set: DependencyChangeSet,
        db_connection: SqlitePooledConnection,
    ) -> Result<Dependency, StoreError>;
}

impl UpdateDependency for Dependency {
    fn update(
        dependency_id: &str,
        change_set: DependencyChangeSet,
        mut db_connection: SqlitePooledConnection,
    ) -> Result<Dependency, StoreError> {
        // diesel rejects a SET with no changes.
        if change_set.is_empty() {
            return Self::get(dependency_id, db_connection);
        }

        log::debug!("updating dependency {}", dependency_id);
        let result: Vec<Dependency> = update(dependencies::dsl::dependencies)
            .filter(dependencies::dsl::id.eq(dependency_id))
            .set(change_set)
            .get_results(&mut *db_connection)?;

        result
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(format!("dependency {}", dependency_id)))
    }
}

pub trait DeleteDependency {
    fn delete(
        dependency_id: &str,
        db_connection: SqlitePooledConnection,
    ) -> Result<Dependency, StoreError>;
}

impl DeleteDependency for Dependency {
    fn delete(
        dependency_id: &str,
        mut db_connection: SqlitePooledConnection,
    ) -> Result<Dependency, StoreError> {
        log::debug!("deleting dependency {}", dependency_id);
        let result: Vec<Dependency> = delete(dependencies::dsl::dependencies)
            .filter(dependencies::dsl::id.eq(dependency_id))
            .get_results(&mut *db_connection)?;

        result
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(format!("dependency {}", dependency_id)))
    }
}
