// Conversation list filtering
use super::conversation::Conversation;
use chrono::NaiveDate;

/// Inclusive calendar date bounds. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Whether a conversation date falls inside the range.
    /// Unparsable dates only pass an unbounded range.
    pub fn contains(&self, date: Option<NaiveDate>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(date) = date else {
            return false;
        };
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConversationFilter<'a> {
    pub search_term: &'a str,
    pub categories: &'a [String],
    pub date_range: DateRange,
}

impl ConversationFilter<'_> {
    pub fn matches(&self, conversation: &Conversation) -> bool {
        matches_search(conversation, self.search_term)
            && (self.categories.is_empty() || self.categories.contains(&conversation.category))
            && self.date_range.contains(conversation.calendar_date())
    }

    pub fn apply<'c>(&self, conversations: &'c [Conversation]) -> Vec<&'c Conversation> {
        conversations.iter().filter(|c| self.matches(c)).collect()
    }
}

fn matches_search(conversation: &Conversation, search_term: &str) -> bool {
    let needle = search_term.to_lowercase();
    conversation.title.to_lowercase().contains(&needle)
        || conversation.category.to_lowercase().contains(&needle)
}

/// Distinct categories of the full list, in first-appearance order
pub fn category_universe(conversations: &[Conversation]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for conv in conversations {
        if !categories.contains(&conv.category) {
            categories.push(conv.category.clone());
        }
    }
    categories
}
