// Presentation layer - HTTP routes, handlers and view models
pub mod app_state;
pub mod handlers;
pub mod query_state;
pub mod router;
pub mod view_model;
