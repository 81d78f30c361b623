// Domain layer - Dashboard data and interaction rules
pub mod analytics;
pub mod chat;
pub mod conversation;
pub mod dashboard_state;
pub mod filter;
pub mod session;
