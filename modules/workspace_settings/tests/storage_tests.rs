//! End-to-end tests against the SeaORM store on a temporary SQLite database

mod common;

use common::*;
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use workspace_settings::contract::*;
use workspace_settings::domain::repository::{FindWorkspaceSetting, WorkspaceSettingsRepository};
use workspace_settings::domain::SettingKey;
use workspace_settings::infra::storage::SeaOrmWorkspaceSettingsRepository;
use workspace_settings::{Config, WorkspaceSettingsModule};

struct TestDb {
    // keeps the directory alive for the duration of the test
    _dir: tempfile::TempDir,
    url: String,
}

fn temp_db() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("workspace_settings.db").display()
    );
    TestDb { _dir: dir, url }
}

async fn module_with_db(
    db: &TestDb,
    role: Role,
) -> (WorkspaceSettingsModule, DatabaseConnection) {
    let conn = Database::connect(db.url.as_str()).await.unwrap();
    let config = Config {
        database_url: db.url.clone(),
        ..Config::default()
    };
    let module = WorkspaceSettingsModule::init(
        config,
        conn.clone(),
        Arc::new(MockCallerResolver::as_role(role)),
    )
    .await
    .unwrap();
    (module, conn)
}

#[tokio::test]
async fn test_repository_upsert_then_read() {
    let db = temp_db();
    let (_module, conn) = module_with_db(&db, Role::Host).await;
    let repo = SeaOrmWorkspaceSettingsRepository::new(Arc::new(conn));

    assert!(repo.list(&FindWorkspaceSetting::all()).await.unwrap().is_empty());

    let persisted = repo.upsert(&general_stored()).await.unwrap();
    assert_eq!(persisted, general_stored());

    repo.upsert(&memo_stored()).await.unwrap();
    let found = repo
        .find(&FindWorkspaceSetting::by_name("MEMO_RELATED"))
        .await
        .unwrap();
    assert_eq!(found, Some(memo_stored()));

    // second upsert on the same key replaces the row
    let empty_general = workspace_settings::domain::stored::StoredWorkspaceSetting {
        key: SettingKey::General,
        value: None,
    };
    repo.upsert(&empty_general).await.unwrap();
    let all = repo.list(&FindWorkspaceSetting::all()).await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.contains(&empty_general));
    assert!(all.contains(&memo_stored()));
}

#[tokio::test]
async fn test_module_service_end_to_end() {
    let db = temp_db();
    let (module, conn) = module_with_db(&db, Role::Host).await;

    SeaOrmWorkspaceSettingsRepository::new(Arc::new(conn))
        .upsert(&basic_stored())
        .await
        .unwrap();

    let client = module.client();
    let persisted = client
        .set_workspace_setting(&CallerContext::with_token("host-token"), general_wire())
        .await
        .unwrap();
    assert_eq!(persisted, general_wire());

    let listed = client.list_workspace_settings().await.unwrap();
    assert_eq!(listed, vec![general_wire()]);

    let fetched = client.get_workspace_setting("settings/GENERAL").await.unwrap();
    assert_eq!(fetched, general_wire());

    let missing = client.get_workspace_setting("settings/STORAGE").await;
    assert!(matches!(missing, Err(SettingsError::NotFound { .. })));
}

#[tokio::test]
async fn test_connect_runs_migrations_idempotently() {
    let db = temp_db();
    let config = Config {
        database_url: db.url.clone(),
        ..Config::default()
    };

    let first = WorkspaceSettingsModule::connect(
        config.clone(),
        Arc::new(MockCallerResolver::as_role(Role::Host)),
    )
    .await
    .unwrap();
    first
        .client()
        .set_workspace_setting(&CallerContext::with_token("t"), general_wire())
        .await
        .unwrap();

    let second = WorkspaceSettingsModule::connect(
        config,
        Arc::new(MockCallerResolver::as_role(Role::User)),
    )
    .await
    .unwrap();
    assert_eq!(
        second.client().list_workspace_settings().await.unwrap(),
        vec![general_wire()]
    );
}

#[tokio::test]
async fn test_serve_stops_on_cancel() {
    let db = temp_db();
    let (module, _conn) = module_with_db(&db, Role::Host).await;
    let module = Arc::new(module);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let cancel = CancellationToken::new();
    let server = tokio::spawn(module.serve_on(listener, cancel.clone()));

    cancel.cancel();
    server.await.unwrap().unwrap();
}
