use diesel::prelude::*;
use diesel::{delete, insert_into};

use crate::db::connection::SqlitePooledConnection;
use crate::db::schema::boards;
use crate::error::StoreError;

#[derive(Queryable, PartialEq, Debug, Clone)]
pub struct Board {
    pub id: String,
    pub project_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = boards)]
pub struct NewBoard<'a> {
    pub id: &'a str,
    pub project_id: &'a str,
}

pub trait CreateBoard {
    fn create(
        new_board: NewBoard<'_>,
        db_connection: SqlitePooledConnection,
    ) -> Result<Board, StoreError>;
}

impl CreateBoard for Board {
    fn create(
        new_board: NewBoard<'_>,
        mut db_connection: SqlitePooledConnection,
    ) -> Result<Board, StoreError> {
        log::debug!("creating board {}", new_board.id);
        let board: Board = insert_into(boards::dsl::boards)
            .values(new_board)
            .get_result(&mut *db_connection)?;

        Ok(board)
    }
}

pub trait GetBoard {
    fn get(board_id: &str, db_connection: SqlitePooledConnection) -> Result<Board, StoreError>;
}

impl GetBoard for Board {
    fn get(board_id: &str, mut db_connection: SqlitePooledConnection) -> Result<Board, StoreError> {
        boards::dsl::boards
            .filter(boards::dsl::id.eq(board_id))
            .first::<Board>(&mut *db_connection)
            .optional()?
            .ok_or_else(|| StoreError::NotFound(format!("board {}", board_id)))
    }
}

pub trait DeleteBoard {
    fn delete(board_id: &str, db_connection: SqlitePooledConnection) -> Result<Board, StoreError>;
}

impl DeleteBoard for Board {
    fn delete(
        board_id: &str,
        mut db_connection: SqlitePooledConnection,
    ) -> Result<Board, StoreError> {
        log::debug!("deleting board {}", board_id);
        let result: Vec<Board> = delete(boards::dsl::boards)
            .filter(boards::dsl::id.eq(board_id))
            .get_results(&mut *db_connection)?;

        result
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(format!("board {}", board_id)))
    }
}
