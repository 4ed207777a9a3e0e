use diesel::prelude::*;
use diesel::{delete, insert_into, update};

use crate::db::connection::SqlitePooledConnection;
use crate::db::schema::issues;
use crate::error::StoreError;

#[derive(Queryable, PartialEq, Debug, Clone)]
pub struct Issue {
    pub id: String,
    pub column_id: String,
    pub epic_id: String,
    pub title: String,
    pub description: String,
}

#[derive(Insertable)]
#[diesel(table_name = issues)]
pub struct NewIssue<'a> {
    pub id: &'a str,
    pub column_id: &'a str,
    pub epic_id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
}

#[derive(AsChangeset, Default)]
#[diesel(table_name = issues)]
pub struct IssueChangeSet {
    pub column_id: Option<String>,
    pub epic_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl IssueChangeSet {
    pub fn is_empty(&self) -> bool {
        self.column_id.is_none()
            && self.epic_id.is_none()
            && self.title.is_none()
            && self.description.is_none()
    }
}

pub trait CreateIssue {
    fn create(
        new_issue: NewIssue<'_>,
        db_connection: SqlitePooledConnection,
    ) -> Result<Issue, StoreError>;
}

impl CreateIssue for Issue {
    fn create(
        new_issue: NewIssue<'_>,
        mut db_connection: SqlitePooledConnection,
    ) -> Result<Issue, StoreError> {
        log::debug!("creating issue {} in epic {}", new_issue.id, new_issue.epic_id);
        let issue: Issue = insert_into(issues::dsl::issues)
            .values(new_issue)
            .get_result(&mut *db_connection)?;

        Ok(issue)
    }
}

pub trait GetIssue {
    fn get(issue_id: &str, db_connection: SqlitePooledConnection) -> Result<Issue, StoreError>;

    fn list_by_column(
        column_id: &str,
        db_connection: SqlitePooledConnection,
    ) -> Result<Vec<Issue>, StoreError>;

    fn list_by_epic(
        epic_id: &str,
        db_connection: SqlitePooledConnection,
    ) -> Result<Vec<Issue>, StoreError>;
}

impl GetIssue for Issue {
    fn get(issue_id: &str, mut db_connection: SqlitePooledConnection) -> Result<Issue, StoreError> {
        issues::dsl::issues
            .filter(issues::dsl::id.eq(issue_id))
            .first::<Issue>(&mut *db_connection)
            .optional()?
            .ok_or_else(|| StoreError::NotFound(format!("issue {}", issue_id)))
    }

    fn list_by_column(
        column_id: &str,
        mut db_connection: SqlitePooledConnection,
    ) -> Result<Vec<Issue>, StoreError> {
        Ok(issues::dsl::issues
            .filter(issues::dsl::column_id.eq(column_id))
            .load::<Issue>(&mut *db_connection)?)
    }

    fn list_by_epic(
        epic_id: &str,
        mut db_connection: SqlitePooledConnection,
    ) -> Result<Vec<Issue>, StoreError> {
        Ok(issues::dsl::issues
            .filter(issues::dsl::epic_id.eq(epic_id))
            .load::<Issue>(&mut *db_connection)?)
    }
}

pub trait UpdateIssue {
    fn update(
        issue_id: &str,
        change_set: IssueChangeSet,
        db_connection: SqlitePooledConnection,
    ) -> Result<Issue, StoreError>;
}

impl UpdateIssue for Issue {
    fn update(
        issue_id: &str,
        change_set: IssueChangeSet,
        mut db_connection: SqlitePooledConnection,
    ) -> Result<Issue, StoreError> {
        // diesel rejects a SET with no changes.
        if change_set.is_empty() {
            return Self::get(issue_id, db_connection);
        }

        log::debug!("updating issue {}", issue_id);
        let result: Vec<Issue> = update(issues::dsl::issues)
            .filter(issues::dsl::id.eq(issue_id))
            .set(change_set)
            .get_results(&mut *db_connection)?;

        result
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(format!("issue {}", issue_id)))
    }
}

pub trait DeleteIssue {
    fn delete(issue_id: &str, db_connection: SqlitePooledConnection) -> Result<Issue, StoreError>;
}

impl DeleteIssue for Issue {
    fn delete(
        issue_id: &str,
        mut db_connection: SqlitePooledConnection,
    ) -> Result<Issue, StoreError> {
        log::debug!("deleting issue {}", issue_id);
        let result: Vec<Issue> = delete(issues::dsl::issues)
            .filter(issues::dsl::id.eq(issue_id))
            .get_results(&mut *db_connection)?;

        result
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(format!("issue {}", issue_id)))
    }
}
