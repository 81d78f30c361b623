// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod fixture_source;
pub mod memory_auth;
pub mod sqlite_user_repository;
pub mod templates;
