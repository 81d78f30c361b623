// Application layer - Use cases and collaborator traits
pub mod analytics_source;
pub mod auth;
pub mod charts;
pub mod page_service;
pub mod user_repository;
