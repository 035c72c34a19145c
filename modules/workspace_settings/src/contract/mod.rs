//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the native client trait.

pub mod client;
pub mod error;
pub mod model;

pub use client::WorkspaceSettingsApi;
pub use error::SettingsError;
pub use model::{
    CallerContext, CurrentUser, Role, StorageType, WorkspaceCustomProfile,
    WorkspaceGeneralSetting, WorkspaceMemoRelatedSetting, WorkspaceSetting,
    WorkspaceSettingValue, WorkspaceStorageSetting,
};
