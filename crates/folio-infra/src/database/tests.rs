use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use folio_core::domain::{LoginLog, Publication, PublicationStatus, User};
use folio_core::ports::{
    BaseRepository, EditLogRepository, NotificationRepository, UserRepository,
};

use super::entity::{edit_log, login_log, publication, user};
use super::postgres_repo::{
    PostgresEditLogRepository, PostgresLoginLogRepository, PostgresNotificationRepository,
    PostgresPublicationRepository, PostgresUserRepository,
};

fn publication_model(id: i32, title: &str, status: &str) -> publication::Model {
    let now = chrono::Utc::now();
    publication::Model {
        id,
        owner_id: 3,
        title: title.to_owned(),
        abstract_text: "A study.".to_owned(),
        category_id: None,
        venue_id: Some(2),
        year: Some(2024),
        status: status.to_owned(),
        version: 1,
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn find_publication_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![publication_model(5, "Mock Study", "published")]])
        .into_connection();

    let repo = PostgresPublicationRepository::new(db);

    let result: Option<Publication> = repo.find_by_id(5).await.unwrap();

    let publication = result.unwrap();
    assert_eq!(publication.id, 5);
    assert_eq!(publication.title, "Mock Study");
    assert_eq!(publication.status, PublicationStatus::Published);
}

#[tokio::test]
async fn find_user_by_login_identifier() {
    let now = chrono::Utc::now();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user::Model {
            id: 9,
            username: "prof.smith".to_owned(),
            email: "smith@example.edu".to_owned(),
            password_hash: "$argon2id$stub".to_owned(),
            full_name: "Prof Smith".to_owned(),
            role: "PROFESSOR".to_owned(),
            avatar_url: None,
            created_at: now.into(),
            updated_at: now.into(),
        }]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);

    let result: Option<User> = repo
        .find_by_username_or_email("smith@example.edu")
        .await
        .unwrap();

    let found = result.unwrap();
    assert_eq!(found.id, 9);
    assert_eq!(found.username, "prof.smith");
    assert_eq!(found.role, folio_core::domain::Role::Professor);
}

#[tokio::test]
async fn save_inserts_when_id_is_unset() {
    let now = chrono::Utc::now();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 11,
            rows_affected: 1,
        }])
        .append_query_results(vec![vec![login_log::Model {
            id: 11,
            user_id: None,
            username: "ghost".to_owned(),
            success: false,
            ip: None,
            created_at: now.into(),
        }]])
        .into_connection();

    let repo = PostgresLoginLogRepository::new(db);

    let saved = repo
        .save(LoginLog::new(None, "ghost".to_owned(), false, None))
        .await
        .unwrap();

    assert_eq!(saved.id, 11);
    assert!(!saved.success);
}

#[tokio::test]
async fn mark_read_reports_missing_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = PostgresNotificationRepository::new(db);

    assert!(repo.mark_read(1, 42).await.unwrap());
    // Second call hits a row owned by someone else.
    assert!(!repo.mark_read(1, 43).await.unwrap());
}

#[tokio::test]
async fn edit_log_rows_map_to_domain_records() {
    let now = chrono::Utc::now();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            edit_log::Model {
                id: 1,
                publication_id: 4,
                version: 1,
                field: "title".to_owned(),
                old_value: Some("Old".to_owned()),
                new_value: Some("New".to_owned()),
                edited_by: 3,
                edited_at: now.into(),
            },
            edit_log::Model {
                id: 2,
                publication_id: 4,
                version: 2,
                field: "year".to_owned(),
                old_value: None,
                new_value: Some("2025".to_owned()),
                edited_by: 3,
                edited_at: now.into(),
            },
        ]])
        .into_connection();

    let repo = PostgresEditLogRepository::new(db);

    let records = repo.list_for_publication(4).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].field, "title");
    assert_eq!(records[1].new_value.as_deref(), Some("2025"));
}

#[tokio::test]
async fn record_edits_is_a_noop_for_empty_batches() {
    // No exec expectation appended: an issued statement would fail the mock.
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let repo = PostgresEditLogRepository::new(db);

    repo.record_edits(Vec::new()).await.unwrap();
}
