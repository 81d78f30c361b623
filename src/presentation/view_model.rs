// Template-ready view of the dashboard for one state
use crate::application::charts::{line_chart, pie_chart, LineChart, PieChart};
use crate::domain::analytics::AnalyticsSnapshot;
use crate::domain::conversation::{Message, DATE_FORMAT};
use crate::domain::dashboard_state::{DashboardState, DetailPanel};
use crate::domain::filter::category_universe;
use crate::presentation::query_state::{self, CATEGORY, FROM, SEARCH, TO};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HiddenField {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversationRow {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub date: String,
    pub checked: bool,
    pub active: bool,
    pub toggle_href: String,
    pub view_href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryOption {
    pub name: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailView {
    Empty,
    Conversation { title: String, messages: Vec<Message> },
    GeneratedChat { text: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub sidebar_open: bool,
    pub sidebar_toggle_href: String,
    pub search_term: String,
    pub search_hidden: Vec<HiddenField>,
    pub conversations: Vec<ConversationRow>,
    pub categories: Vec<CategoryOption>,
    pub date_from: String,
    pub date_to: String,
    pub filter_hidden: Vec<HiddenField>,
    pub generate_href: String,
    pub detail: DetailView,
    pub line_chart: LineChart,
    pub pie_chart: PieChart,
    /// Encoded state, posted back by the auth and theme forms
    pub return_to: String,
}

impl DashboardView {
    pub fn build(snapshot: &AnalyticsSnapshot, state: &DashboardState) -> Self {
        let conversations = state
            .filter()
            .apply(&snapshot.conversations)
            .into_iter()
            .map(|conv| ConversationRow {
                id: conv.id,
                title: conv.title.clone(),
                category: conv.category.clone(),
                date: conv.date.clone(),
                checked: state.is_selected(conv.id),
                active: state.viewing == Some(conv.id),
                toggle_href: query_state::href(&state.toggle_selection(conv.id)),
                view_href: query_state::href(&state.view_conversation(conv.id)),
            })
            .collect();

        let categories = category_universe(&snapshot.conversations)
            .into_iter()
            .map(|name| CategoryOption {
                checked: state.categories.contains(&name),
                name,
            })
            .collect();

        let detail = match state.detail_panel(&snapshot.conversations) {
            DetailPanel::Empty => DetailView::Empty,
            DetailPanel::Conversation(conv) => DetailView::Conversation {
                title: conv.title.clone(),
                messages: conv.messages.clone(),
            },
            DetailPanel::GeneratedChat(text) => DetailView::GeneratedChat { text },
        };

        let format_date = |date: Option<NaiveDate>| {
            date.map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default()
        };

        Self {
            sidebar_open: state.sidebar_open,
            sidebar_toggle_href: query_state::href(&state.toggle_sidebar()),
            search_term: state.search_term.clone(),
            search_hidden: hidden_fields(state, &[SEARCH]),
            conversations,
            categories,
            date_from: format_date(state.date_range.from),
            date_to: format_date(state.date_range.to),
            filter_hidden: hidden_fields(state, &[CATEGORY, FROM, TO]),
            generate_href: query_state::href(&state.generate_chat()),
            detail,
            line_chart: line_chart(&snapshot.time_series),
            pie_chart: pie_chart(&snapshot.categories),
            return_to: query_state::encode(state),
        }
    }
}

/// State carried through a GET form that edits the `owned` parameters itself
fn hidden_fields(state: &DashboardState, owned: &[&str]) -> Vec<HiddenField> {
    query_state::pairs(state)
        .into_iter()
        .filter(|(name, _)| !owned.contains(name))
        .map(|(name, value)| HiddenField { name, value })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::{CategoryCount, TimeSeriesPoint};
    use crate::domain::conversation::Conversation;

    fn snapshot() -> AnalyticsSnapshot {
        AnalyticsSnapshot::new(
            vec![TimeSeriesPoint::new("2024-07-20", 5)],
            vec![CategoryCount::new("IT Support", 10)],
            vec![
                Conversation::new(
                    1,
                    "Password Reset Issue",
                    "IT Support",
                    "2024-07-20",
                    vec![Message::new("How do I reset my password?", true)],
                ),
                Conversation::new(2, "Pricing question", "Sales", "2024-07-21", vec![]),
            ],
        )
    }

    #[test]
    fn test_rows_link_to_next_states() {
        let state = DashboardState::default().toggle_selection(2);
        let view = DashboardView::build(&snapshot(), &state);

        assert_eq!(view.conversations.len(), 2);
        let first = &view.conversations[0];
        assert!(!first.checked);
        assert_eq!(first.toggle_href, "/?sel=2%2C1");
        assert_eq!(first.view_href, "/?sel=2&view=1");
        assert!(view.conversations[1].checked);
        assert_eq!(view.generate_href, "/?sel=2&chat=2");
    }

    #[test]
    fn test_categories_come_from_full_list() {
        let state = DashboardState::default().with_search_term("pricing").toggle_category("Sales");
        let view = DashboardView::build(&snapshot(), &state);

        assert_eq!(view.conversations.len(), 1);
        let names: Vec<(&str, bool)> = view
            .categories
            .iter()
            .map(|c| (c.name.as_str(), c.checked))
            .collect();
        assert_eq!(names, vec![("IT Support", false), ("Sales", true)]);
    }

    #[test]
    fn test_forms_carry_the_rest_of_the_state() {
        let state = DashboardState::default()
            .with_search_term("reset")
            .toggle_category("IT Support")
            .toggle_selection(1)
            .toggle_sidebar();
        let view = DashboardView::build(&snapshot(), &state);

        let search: Vec<&str> = view.search_hidden.iter().map(|f| f.name).collect();
        assert_eq!(search, vec!["cat", "sel", "sidebar"]);
        let filter: Vec<&str> = view.filter_hidden.iter().map(|f| f.name).collect();
        assert_eq!(filter, vec!["q", "sel", "sidebar"]);
        assert_eq!(view.return_to, "q=reset&cat=IT+Support&sel=1&sidebar=1");
    }

    #[test]
    fn test_detail_view() {
        let view = DashboardView::build(&snapshot(), &DashboardState::default());
        assert!(matches!(view.detail, DetailView::Empty));

        let state = DashboardState::default().view_conversation(1);
        let view = DashboardView::build(&snapshot(), &state);
        match view.detail {
            DetailView::Conversation { title, messages } => {
                assert_eq!(title, "Password Reset Issue");
                assert_eq!(messages.len(), 1);
            }
            other => panic!("expected conversation, got {other:?}"),
        }
        assert!(view.conversations[0].active);

        let json = serde_json::to_value(
            DashboardView::build(&snapshot(), &state.toggle_selection(2).generate_chat()).detail,
        )
        .unwrap();
        assert_eq!(json["kind"], "generated_chat");
    }
}
