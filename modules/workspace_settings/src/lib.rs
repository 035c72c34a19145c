//! Workspace Settings Module
//!
//! Typed, workspace-level instance settings (general, storage, memo-related)
//! with list/get/set operations. Reads are open; writes are restricted to the
//! host user and disabled entirely on demo deployments.

// Public exports
pub mod contract;
pub use contract::{
    client::WorkspaceSettingsApi, error::SettingsError, CallerContext, CurrentUser, Role,
    WorkspaceSetting, WorkspaceSettingValue,
};

pub mod module;
pub use module::WorkspaceSettingsModule;

pub mod config;
pub use config::{Config, Mode};

pub mod domain;
pub use domain::{CallerResolver, SettingKey, UnmatchedKeyPolicy};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod infra;
