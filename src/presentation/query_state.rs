// Dashboard state <-> URL query string
use crate::domain::conversation::{ConversationId, DATE_FORMAT};
use crate::domain::dashboard_state::DashboardState;
use crate::domain::filter::DateRange;
use chrono::NaiveDate;
use url::form_urlencoded;

pub const SEARCH: &str = "q";
pub const CATEGORY: &str = "cat";
pub const FROM: &str = "from";
pub const TO: &str = "to";
pub const SELECTED: &str = "sel";
pub const VIEW: &str = "view";
pub const CHAT: &str = "chat";
pub const SIDEBAR: &str = "sidebar";

/// Parse a query string leniently. Malformed ids and dates are dropped.
pub fn decode(query: &str) -> DashboardState {
    let mut state = DashboardState::default();

    for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
        state = match &*key {
            SEARCH => state.with_search_term(value),
            CATEGORY if value.is_empty() || state.categories.iter().any(|c| *c == value) => state,
            CATEGORY => state.toggle_category(&value),
            FROM => {
                let to = state.date_range.to;
                state.with_date_range(DateRange::new(parse_date(&value), to))
            }
            TO => {
                let from = state.date_range.from;
                state.with_date_range(DateRange::new(from, parse_date(&value)))
            }
            SELECTED => parse_ids(&value).into_iter().fold(state, |s, id| {
                if s.is_selected(id) { s } else { s.toggle_selection(id) }
            }),
            VIEW => match value.trim().parse() {
                Ok(id) => state.view_conversation(id),
                Err(_) => state,
            },
            CHAT => DashboardState {
                generated: Some(parse_ids(&value)),
                ..state
            },
            SIDEBAR if matches!(&*value, "1" | "true" | "on") != state.sidebar_open => {
                state.toggle_sidebar()
            }
            SIDEBAR => state,
            other => {
                tracing::debug!("Ignoring unknown dashboard parameter {}", other);
                state
            }
        };
    }

    state
}

/// Key/value pairs describing `state`; defaults are left out
pub fn pairs(state: &DashboardState) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if !state.search_term.is_empty() {
        pairs.push((SEARCH, state.search_term.clone()));
    }
    for category in &state.categories {
        pairs.push((CATEGORY, category.clone()));
    }
    if let Some(from) = state.date_range.from {
        pairs.push((FROM, from.format(DATE_FORMAT).to_string()));
    }
    if let Some(to) = state.date_range.to {
        pairs.push((TO, to.format(DATE_FORMAT).to_string()));
    }
    if !state.selected.is_empty() {
        pairs.push((SELECTED, join_ids(&state.selected)));
    }
    if let Some(id) = state.viewing {
        pairs.push((VIEW, id.to_string()));
    }
    if let Some(ids) = &state.generated {
        pairs.push((CHAT, join_ids(ids)));
    }
    if state.sidebar_open {
        pairs.push((SIDEBAR, "1".to_string()));
    }
    pairs
}

pub fn encode(state: &DashboardState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs(state) {
        serializer.append_pair(key, &value);
    }
    serializer.finish()
}

/// Dashboard URL for `state`
pub fn href(state: &DashboardState) -> String {
    let query = encode(state);
    if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?{query}")
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::debug!("Dropping malformed date {:?}: {}", value, e);
            None
        }
    }
}

fn parse_ids(value: &str) -> Vec<ConversationId> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match s.parse() {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::debug!("Dropping malformed conversation id {:?}", s);
                None
            }
        })
        .collect()
}

fn join_ids(ids: &[ConversationId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
