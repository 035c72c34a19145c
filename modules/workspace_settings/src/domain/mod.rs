//! Domain layer - business logic and services

pub mod caller;
pub mod codec;
pub mod key;
pub mod repository;
pub mod service;
pub mod stored;

pub use caller::CallerResolver;
pub use codec::UnmatchedKeyPolicy;
pub use key::SettingKey;
pub use repository::{FindWorkspaceSetting, WorkspaceSettingsRepository};
pub use service::{Service, ServiceOptions};
