diesel::table! {
    boards (id) {
        id -> Text,
        project_id -> Text,
    }
}

diesel::table! {
    columns (id) {
        id -> Text,
        board_id -> Text,
        name -> Text,
    }
}

diesel::table! {
    dependencies (id) {
        id -> Text,
        blocking_epic_id -> Text,
        blocked_epic_id -> Text,
    }
}

diesel::table! {
    epics (id) {
        id -> Text,
        column_id -> Text,
        assignee_id -> Nullable<Text>,
        reporter_id -> Text,
        name -> Text,
        description -> Nullable<Text>,
        start_date -> Timestamp,
        due_date -> Timestamp,
    }
}

diesel::table! {
    issues (id) {
        id -> Text,
        column_id -> Text,
        epic_id -> Text,
        title -> Text,
        description -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    boards,
    columns,
    dependencies,
    epics,
    issues,
);
