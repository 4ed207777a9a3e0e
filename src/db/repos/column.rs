use diesel::prelude::*;
use diesel::{delete, insert_into, update};

use crate::db::connection::SqlitePooledConnection;
use crate::db::schema::columns;
use crate::error::StoreError;

#[derive(Queryable, PartialEq, Debug, Clone)]
pub struct Column {
    pub id: String,
    pub board_id: String,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = columns)]
pub struct NewColumn<'a> {
    pub id: &'a str,
    pub board_id: &'a str,
    pub name: &'a str,
}

#[derive(AsChangeset, Default)]
#[diesel(table_name = columns)]
pub struct ColumnChangeSet {
    pub name: Option<String>,
}

impl ColumnChangeSet {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

pub trait CreateColumn {
    fn create(
        new_column: NewColumn<'_>,
        db_connection: SqlitePooledConnection,
    ) -> Result<Column, StoreError>;
}

impl CreateColumn for Column {
    fn create(
        new_column: NewColumn<'_>,
        mut db_connection: SqlitePooledConnection,
    ) -> Result<Column, StoreError> {
        log::debug!("creating column {} on board {}", new_column.id, new_column.board_id);
        let column: Column = insert_into(columns::dsl::columns)
            .values(new_column)
            .get_result(&mut *db_connection)?;

        Ok(column)
    }
}

pub trait GetColumn {
    fn get(column_id: &str, db_connection: SqlitePooledConnection) -> Result<Column, StoreError>;

    fn list_by_board(
        board_id: &str,
        db_connection: SqlitePooledConnection,
    ) -> Result<Vec<Column>, StoreError>;
}

impl GetColumn for Column {
    fn get(
        column_id: &str,
        mut db_connection: SqlitePooledConnection,
    ) -> Result<Column, StoreError> {
        columns::dsl::columns
            .filter(columns::dsl::id.eq(column_id))
            .first::<Column>(&mut *db_connection)
            .optional()?
            .ok_or_else(|| StoreError::NotFound(format!("column {}", column_id)))
    }

    fn list_by_board(
        board_id: &str,
        mut db_connection: SqlitePooledConnection,
    ) -> Result<Vec<Column>, StoreError> {
        Ok(columns::dsl::columns
            .filter(columns::dsl::board_id.eq(board_id))
            .load::<Column>(&mut *db_connection)?)
    }
}

pub trait UpdateColumn {
    fn update(
        column_id: &str,
        change_set: ColumnChangeSet,
        db_connection: SqlitePooledConnection,
    ) -> Result<Column, StoreError>;
}

impl UpdateColumn for Column {
    fn update(
        column_id: &str,
        change_set: ColumnChangeSet,
        mut db_connection: SqlitePooledConnection,
    ) -> Result<Column, StoreError> {
        // diesel rejects a SET with no changes.
        if change_set.is_empty() {
            return Self::get(column_id, db_connection);
        }

        log::debug!("updating column {}", column_id);
        let result: Vec<Column> = update(columns::dsl::columns)
            .filter(columns::dsl::id.eq(column_id))
            .set(change_set)
            .get_results(&mut *db_connection)?;

        result
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(format!("column {}", column_id)))
    }
}

pub trait DeleteColumn {
    fn delete(column_id: &str, db_connection: SqlitePooledConnection)
        -> Result<Column, StoreError>;
}

impl DeleteColumn for Column {
    fn delete(
        column_id: &str,
        mut db_connection: SqlitePooledConnection,
    ) -> Result<Column, StoreError> {
        log::debug!("deleting column {}", column_id);
        let result: Vec<Column> = delete(columns::dsl::columns)
            .filter(columns::dsl::id.eq(column_id))
            .get_results(&mut *db_connection)?;

        result
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(format!("column {}", column_id)))
    }
}
