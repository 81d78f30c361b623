// Dashboard interaction state and its transitions
use super::chat::generate_chat;
use super::conversation::{find_conversation, Conversation, ConversationId};
use super::filter::{ConversationFilter, DateRange};

/// Everything the user has done on the dashboard so far.
///
/// The record is immutable: every interaction is a transition returning a new
/// state, so the page for "after the click" can be linked from the page
/// "before the click".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub search_term: String,
    pub categories: Vec<String>,
    pub date_range: DateRange,
    pub selected: Vec<ConversationId>,
    pub viewing: Option<ConversationId>,
    /// Selection snapshot taken when the chat was generated
    pub generated: Option<Vec<ConversationId>>,
    pub sidebar_open: bool,
}

/// What the detail area below the charts shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPanel<'a> {
    Empty,
    Conversation(&'a Conversation),
    GeneratedChat(String),
}

impl DashboardState {
    pub fn with_search_term(&self, term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            ..self.clone()
        }
    }

    pub fn toggle_sidebar(&self) -> Self {
        Self {
            sidebar_open: !self.sidebar_open,
            ..self.clone()
        }
    }

    pub fn toggle_category(&self, category: &str) -> Self {
        let mut categories = self.categories.clone();
        if let Some(pos) = categories.iter().position(|c| c == category) {
            categories.remove(pos);
        } else {
            categories.push(category.to_string());
        }
        Self {
            categories,
            ..self.clone()
        }
    }

    pub fn with_date_range(&self, date_range: DateRange) -> Self {
        Self {
            date_range,
            ..self.clone()
        }
    }

    /// Check or uncheck a conversation. Newly checked ids go last.
    pub fn toggle_selection(&self, id: ConversationId) -> Self {
        let mut selected = self.selected.clone();
        if let Some(pos) = selected.iter().position(|s| *s == id) {
            selected.remove(pos);
        } else {
            selected.push(id);
        }
        Self {
            selected,
            ..self.clone()
        }
    }

    pub fn is_selected(&self, id: ConversationId) -> bool {
        self.selected.contains(&id)
    }

    /// Open a conversation in the detail panel. A generated chat stays in
    /// state but is hidden while a conversation is viewed.
    pub fn view_conversation(&self, id: ConversationId) -> Self {
        Self {
            viewing: Some(id),
            ..self.clone()
        }
    }

    /// Snapshot the current selection as the generated chat and close the
    /// viewed conversation.
    pub fn generate_chat(&self) -> Self {
        Self {
            generated: Some(self.selected.clone()),
            viewing: None,
            ..self.clone()
        }
    }

    pub fn filter(&self) -> ConversationFilter<'_> {
        ConversationFilter {
            search_term: &self.search_term,
            categories: &self.categories,
            date_range: self.date_range,
        }
    }

    pub fn generated_chat(&self, conversations: &[Conversation]) -> Option<String> {
        let ids = self.generated.as_ref()?;
        Some(generate_chat(
            ids.iter().filter_map(|id| find_conversation(conversations, *id)),
        ))
    }

    pub fn detail_panel<'c>(&self, conversations: &'c [Conversation]) -> DetailPanel<'c> {
        if let Some(conv) = self
            .viewing
            .and_then(|id| find_conversation(conversations, id))
        {
            return DetailPanel::Conversation(conv);
        }
        match self.generated_chat(conversations) {
            Some(text) if !text.is_empty() => DetailPanel::GeneratedChat(text),
            _ => DetailPanel::Empty,
        }
    }
}
