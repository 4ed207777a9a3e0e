use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::{delete, insert_into, update};

use crate::db::connection::SqlitePooledConnection;
use crate::db::schema::epics;
use crate::error::StoreError;

#[derive(Queryable, PartialEq, Debug, Clone)]
pub struct Epic {
    pub id: String,
    pub column_id: String,
    pub assignee_id: Option<String>,
    pub reporter_id: String,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDateTime,
    pub due_date: NaiveDateTime,
}

/// Insertable epic. Leaving `start_date`/`due_date` as `None` lets the
/// schema defaults fill them: start at insertion time, due one day
/// later.
#[derive(Insertable)]
#[diesel(table_name = epics)]
pub struct NewEpic<'a> {
    pub id: &'a str,
    pub column_id: &'a str,
    pub assignee_id: Option<&'a str>,
    pub reporter_id: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub start_date: Option<NaiveDateTime>,
    pub due_date: Option<NaiveDateTime>,
}

#[derive(AsChangeset, Default)]
#[diesel(table_name = epics)]
pub struct EpicChangeSet {
    pub column_id: Option<String>,
    pub assignee_id: Option<String>,
    pub reporter_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub due_date: Option<NaiveDateTime>,
}

impl EpicChangeSet {
    pub fn is_empty(&self) -> bool {
        self.column_id.is_none()
            && self.assignee_id.is_none()
            && self.reporter_id.is_none()
            && self.name.is_none()
            && self.description.is_none()
            && self.start_date.is_none()
            && self.due_date.is_none()
    }
}

// The schema does not constrain due_date against start_date, so the
// repo checks the pair on every write that carries dates.
fn check_date_range(start: NaiveDateTime, due: NaiveDateTime) -> Result<(), StoreError> {
    if due < start {
        return Err(StoreError::InvalidDateRange { start, due });
    }
    Ok(())
}

pub trait CreateEpic {
    fn create(
        new_epic: NewEpic<'_>,
        db_connection: SqlitePooledConnection,
    ) -> Result<Epic, StoreError>;
}

impl CreateEpic for Epic {
    fn create(
        new_epic: NewEpic<'_>,
        mut db_connection: SqlitePooledConnection,
    ) -> Result<Epic, StoreError> {
        if let (Some(start), Some(due)) = (new_epic.start_date, new_epic.due_date) {
            check_date_range(start, due)?;
        }

        log::debug!("creating epic {}", new_epic.id);
        let epic: Epic = insert_into(epics::dsl::epics)
            .values(new_epic)
            .get_result(&mut *db_connection)?;

        Ok(epic)
    }
}

pub trait GetEpic {
    fn get(epic_id: &str, db_connection: SqlitePooledConnection) -> Result<Epic, StoreError>;

    fn list_by_column(
        column_id: &str,
        db_connection: SqlitePooledConnection,
    ) -> Result<Vec<Epic>, StoreError>;
}

impl GetEpic for Epic {
    fn get(epic_id: &str, mut db_connection: SqlitePooledConnection) -> Result<Epic, StoreError> {
        epics::dsl::epics
            .filter(epics::dsl::id.eq(epic_id))
            .first::<Epic>(&mut *db_connection)
            .optional()?
            .ok_or_else(|| StoreError::NotFound(format!("epic {}", epic_id)))
    }

    fn list_by_column(
        column_id: &str,
        mut db_connection: SqlitePooledConnection,
    ) -> Result<Vec<Epic>, StoreError> {
        Ok(epics::dsl::epics
            .filter(epics::dsl::column_id.eq(column_id))
            .load::<Epic>(&mut *db_connection)?)
    }
}

pub trait UpdateEpic {
    fn update(
        epic_id: &str,
        change_set: EpicChangeSet,
        db_connection: SqlitePooledConnection,
    ) -> Result<Epic, StoreError>;
}

impl UpdateEpic for Epic {
    fn update(
        epic_id: &str,
        change_set: EpicChangeSet,
        mut db_connection: SqlitePooledConnection,
    ) -> Result<Epic, StoreError> {
        let existing: Epic = epics::dsl::epics
            .filter(epics::dsl::id.eq(epic_id))
            .first::<Epic>(&mut *db_connection)
            .optional()?
            .ok_or_else(|| StoreError::NotFound(format!("epic {}", epic_id)))?;

        // Validate the dates the row will hold after the update, not
        // just the ones the changeset carries.
        let start = change_set.start_date.unwrap_or(existing.start_date);
        let due = change_set.due_date.unwrap_or(existing.due_date);
        check_date_range(start, due)?;

        // diesel rejects a SET with no changes; the row is already here.
        if change_set.is_empty() {
            return Ok(existing);
        }

        log::debug!("updating epic {}", epic_id);
        let epic: Epic = update(epics::dsl::epics)
            .filter(epics::dsl::id.eq(epic_id))
            .set(change_set)
            .get_result(&mut *db_connection)?;

        Ok(epic)
    }
}

pub trait DeleteEpic {
    fn delete(epic_id: &str, db_connection: SqlitePooledConnection) -> Result<Epic, StoreError>;
}

impl DeleteEpic for Epic {
    fn delete(
        epic_id: &str,
        mut db_connection: SqlitePooledConnection,
    ) -> Result<Epic, StoreError> {
        log::debug!("deleting epic {}", epic_id);
        let result: Vec<Epic> = delete(epics::dsl::epics)
            .filter(epics::dsl::id.eq(epic_id))
            .get_results(&mut *db_connection)?;

        result
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(format!("epic {}", epic_id)))
    }
}
