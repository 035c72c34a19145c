//! HTTP request handlers - thin layer that delegates to domain service

use super::{dto::*, error::Problem};
use crate::contract::{CallerContext, SettingsError, WorkspaceSetting};
use crate::domain::key::RESOURCE_NAME_PREFIX;
use crate::domain::Service;
use axum::{
    extract::{FromRequestParts, Path},
    http::{header::AUTHORIZATION, request::Parts},
    Extension, Json,
};
use std::convert::Infallible;
use std::sync::Arc;

/// Caller context extracted from the `Authorization: Bearer` header
#[derive(Debug, Clone)]
pub struct Caller(pub CallerContext);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let access_token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string);

        Ok(Caller(CallerContext { access_token }))
    }
}

/// List workspace settings
#[utoipa::path(
    get,
    path = "/api/v1/workspace/settings",
    responses(
        (status = 200, description = "Visible workspace settings", body = ListWorkspaceSettingsResponse),
        (status = 500, description = "Store failure"),
    ),
    tag = "workspace-settings"
)]
pub async fn list_workspace_settings(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<ListWorkspaceSettingsResponse>, Problem> {
    let settings = service.list_workspace_settings().await?;

    Ok(Json(ListWorkspaceSettingsResponse {
        settings: settings.into_iter().map(Into::into).collect(),
    }))
}

/// Get a workspace setting
#[utoipa::path(
    get,
    path = "/api/v1/workspace/settings/{key}",
    params(("key" = String, Path, description = "Setting key, e.g. GENERAL")),
    responses(
        (status = 200, description = "The setting", body = WorkspaceSettingDto),
        (status = 400, description = "Unknown key"),
        (status = 404, description = "Nothing stored for the key"),
    ),
    tag = "workspace-settings"
)]
pub async fn get_workspace_setting(
    Extension(service): Extension<Arc<Service>>,
    Path(key): Path<String>,
) -> Result<Json<WorkspaceSettingDto>, Problem> {
    let setting = service
        .get_workspace_setting(&resource_name_for(&key))
        .await?;

    Ok(Json(setting.into()))
}

/// Replace a workspace setting (host only)
#[utoipa::path(
    patch,
    path = "/api/v1/workspace/settings/{key}",
    params(("key" = String, Path, description = "Setting key, e.g. GENERAL")),
    request_body = WorkspaceSettingDto,
    responses(
        (status = 200, description = "The persisted setting", body = WorkspaceSettingDto),
        (status = 400, description = "Malformed request or demo mode"),
        (status = 403, description = "Caller is not the host"),
    ),
    tag = "workspace-settings"
)]
pub async fn set_workspace_setting(
    Extension(service): Extension<Arc<Service>>,
    Caller(caller): Caller,
    Path(key): Path<String>,
    Json(body): Json<WorkspaceSettingDto>,
) -> Result<Json<WorkspaceSettingDto>, Problem> {
    let name = resource_name_for(&key);
    let mut setting = WorkspaceSetting::try_from(body)?;
    if setting.name.is_empty() {
        setting.name = name;
    } else if setting.name != name {
        return Err(SettingsError::invalid_argument(format!(
            "setting name '{}' does not match path '{}'",
            setting.name, name
        ))
        .into());
    }

    let persisted = service.set_workspace_setting(&caller, setting).await?;

    Ok(Json(persisted.into()))
}

fn resource_name_for(key: &str) -> String {
    format!("{}{}", RESOURCE_NAME_PREFIX, key)
}
