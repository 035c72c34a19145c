//! Route registration and OpenAPI document

use super::{dto::*, handlers};
use crate::domain::Service;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;
use utoipa::OpenApi;

/// Register all REST routes
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route(
            "/api/v1/workspace/settings",
            get(handlers::list_workspace_settings),
        )
        .route(
            "/api/v1/workspace/settings/{key}",
            get(handlers::get_workspace_setting).patch(handlers::set_workspace_setting),
        )
        .layer(Extension(service))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_workspace_settings,
        handlers::get_workspace_setting,
        handlers::set_workspace_setting,
    ),
    components(schemas(
        WorkspaceSettingDto,
        GeneralSettingDto,
        CustomProfileDto,
        StorageTypeDto,
        StorageSettingDto,
        MemoRelatedSettingDto,
        ListWorkspaceSettingsResponse,
    )),
    tags((name = "workspace-settings", description = "Workspace-level instance settings"))
)]
struct ApiDoc;

/// OpenAPI document for the workspace settings endpoints
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
