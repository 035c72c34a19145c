//! Storage layer - database entities and repositories

pub mod entity;
pub mod mapper;
pub mod memory;
pub mod migrations;
pub mod repositories;

pub use memory::InMemoryWorkspaceSettingsRepository;
pub use repositories::SeaOrmWorkspaceSettingsRepository;
