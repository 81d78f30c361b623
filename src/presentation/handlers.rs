// HTTP request handlers
use crate::domain::dashboard_state::DashboardState;
use crate::domain::session::Session;
use crate::infrastructure::templates::PageRenderer;
use crate::presentation::app_state::AppState;
use crate::presentation::query_state;
use crate::presentation::view_model::DashboardView;
use axum::{
    extract::{Form, Path, RawQuery, State},
    http::{header, HeaderMap, StatusCode},
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
    Json,
};
use minijinja::{context, Value};
use serde::Deserialize;
use std::sync::Arc;

pub const SESSION_COOKIE: &str = "session";
pub const THEME_COOKIE: &str = "theme";
const THEME_MAX_AGE_SECS: u32 = 60 * 60 * 24 * 365;

/// Hidden field posted by the auth and theme forms so the redirect lands on
/// the same dashboard state
#[derive(Debug, Default, Deserialize)]
pub struct ReturnTo {
    #[serde(default)]
    pub return_to: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// The dashboard page
pub async fn dashboard_page(
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let dashboard_state = query_state::decode(query.as_deref().unwrap_or_default());
    let theme = theme(&headers);

    match render_dashboard(&state, &headers, &dashboard_state, theme).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            // every failure looks the same to the client
            tracing::error!("Error loading page: {:#}", e);
            not_found_response(&state.renderer, theme)
        }
    }
}

async fn render_dashboard(
    state: &AppState,
    headers: &HeaderMap,
    dashboard_state: &DashboardState,
    theme: &str,
) -> anyhow::Result<String> {
    let token = cookie_value(headers, SESSION_COOKIE);
    let data = state.page_service.assemble(token.as_deref()).await?;

    let view = DashboardView::build(&data.snapshot, dashboard_state);
    let signed_in = data.session.as_ref().filter(|s| s.is_signed_in());

    let actions = state.renderer.render(
        "auth_control.html",
        context! {
            signed_in => signed_in.is_some(),
            user_name => signed_in.map(|s: &Session| s.user.name.clone()),
            return_to => view.return_to.clone(),
            theme => theme,
        },
    )?;

    state.renderer.render(
        "dashboard.html",
        context! {
            view => view,
            actions => Value::from_safe_string(actions),
            user_count => user_count_label(data.user_count),
            theme => theme,
        },
    )
}

/// Filtered conversations as JSON, using the dashboard query parameters
pub async fn list_conversations(
    RawQuery(query): RawQuery,
    State(state): State<Arc<AppState>>,
) -> Response {
    let dashboard_state = query_state::decode(query.as_deref().unwrap_or_default());
    match state
        .page_service
        .filtered_conversations(&dashboard_state)
        .await
    {
        Ok(conversations) => Json(conversations).into_response(),
        Err(e) => {
            tracing::error!("Error listing conversations: {:#}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn sign_in(
    Path(provider): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Form(form): Form<ReturnTo>,
) -> Response {
    match state.auth.sign_in(&provider).await {
        Ok(token) => {
            // signing in again replaces the session the browser already holds
            if let Some(previous) = cookie_value(&headers, SESSION_COOKIE) {
                state.auth.sign_out(&previous).await;
            }
            (
                AppendHeaders([(header::SET_COOKIE, session_cookie(&token))]),
                back_to(&form.return_to),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!("Sign-in failed: {}", e);
            not_found_response(&state.renderer, theme(&headers))
        }
    }
}

pub async fn sign_out(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Form(form): Form<ReturnTo>,
) -> Response {
    if let Some(token) = cookie_value(&headers, SESSION_COOKIE) {
        state.auth.sign_out(&token).await;
    }

    (
        AppendHeaders([(
            header::SET_COOKIE,
            format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0"),
        )]),
        back_to(&form.return_to),
    )
        .into_response()
}

pub async fn toggle_theme(headers: HeaderMap, Form(form): Form<ReturnTo>) -> Response {
    let next = if theme(&headers) == "dark" { "light" } else { "dark" };
    (
        AppendHeaders([(
            header::SET_COOKIE,
            format!("{THEME_COOKIE}={next}; Path=/; SameSite=Lax; Max-Age={THEME_MAX_AGE_SECS}"),
        )]),
        back_to(&form.return_to),
    )
        .into_response()
}

pub async fn page_not_found(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    not_found_response(&state.renderer, theme(&headers))
}

fn not_found_response(renderer: &PageRenderer, theme: &str) -> Response {
    match renderer.render("not_found.html", context! { theme => theme }) {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Error rendering not-found page: {:#}", e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Redirect to the dashboard state encoded in `return_to`.
/// Re-encoding keeps the target on this site.
fn back_to(return_to: &str) -> Redirect {
    Redirect::to(&query_state::href(&query_state::decode(return_to)))
}

fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

fn user_count_label(count: Option<i64>) -> String {
    count.map_or_else(|| "N/A".to_string(), |c| c.to_string())
}

fn theme(headers: &HeaderMap) -> &'static str {
    match cookie_value(headers, THEME_COOKIE).as_deref() {
        Some("dark") => "dark",
        _ => "light",
    }
}

/// Value of the first cookie called `name` across all `Cookie` headers
fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}
