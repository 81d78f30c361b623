// Application state for HTTP handlers
use crate::application::auth::AuthProvider;
use crate::application::page_service::PageService;
use crate::infrastructure::templates::PageRenderer;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub page_service: PageService,
    pub auth: Arc<dyn AuthProvider>,
    pub renderer: Arc<PageRenderer>,
}
