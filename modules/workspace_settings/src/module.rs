//! Module declaration and lifecycle
//!
//! Wires configuration, database and caller resolution into a running
//! workspace settings service.

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::WorkspaceSettingsApi;
use crate::domain::{CallerResolver, Service, ServiceOptions};
use crate::infra::storage::{migrations::Migrator, SeaOrmWorkspaceSettingsRepository};
use anyhow::Result;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Workspace settings module
pub struct WorkspaceSettingsModule {
    config: Config,
    service: Arc<Service>,
}

impl WorkspaceSettingsModule {
    /// Connect to `config.database_url` and initialise
    pub async fn connect(config: Config, callers: Arc<dyn CallerResolver>) -> Result<Self> {
        let db = Database::connect(config.database_url.as_str()).await?;
        Self::init(config, db, callers).await
    }

    /// Run migrations on `db` and build the service
    pub async fn init(
        config: Config,
        db: DatabaseConnection,
        callers: Arc<dyn CallerResolver>,
    ) -> Result<Self> {
        Migrator::up(&db, None).await?;
        tracing::info!("Workspace settings migrations completed");

        let repo = Arc::new(SeaOrmWorkspaceSettingsRepository::new(Arc::new(db)));
        let service = Arc::new(Service::new(repo, callers, ServiceOptions::from(&config)));

        tracing::info!(mode = ?config.mode, "Workspace settings service initialized");
        Ok(Self { config, service })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// In-process client for other modules
    pub fn client(&self) -> Arc<dyn WorkspaceSettingsApi> {
        Arc::new(NativeClient::new(self.service.clone()))
    }

    /// REST routes for this module
    pub fn router(&self) -> axum::Router {
        crate::api::rest::register_routes(axum::Router::new(), self.service.clone())
    }

    /// Bind `config.bind_addr` and serve until cancelled
    pub async fn serve(self: Arc<Self>, cancel: CancellationToken) -> Result<()> {
        let listener = TcpListener::bind(self.config.bind_addr.as_str()).await?;
        self.serve_on(listener, cancel).await
    }

    /// Serve on an already bound listener until cancelled
    pub async fn serve_on(
        self: Arc<Self>,
        listener: TcpListener,
        cancel: CancellationToken,
    ) -> Result<()> {
        tracing::info!(addr = ?listener.local_addr().ok(), "Workspace settings REST API listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(async move { cancel.cancelled().await })
            .await?;

        tracing::info!("Workspace settings REST API stopped");
        Ok(())
    }
}
