// Conversation domain model
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type ConversationId = i64;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    #[serde(rename = "isUser", alias = "is_user")]
    pub is_user: bool,
}

impl Message {
    pub fn new(text: impl Into<String>, is_user: bool) -> Self {
        Self {
            text: text.into(),
            is_user,
        }
    }

    /// Speaker label used in transcripts
    pub fn speaker(&self) -> &'static str {
        if self.is_user { "User" } else { "AI" }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub title: String,
    #[serde(default)]
    pub messages: Vec<Message>,
    pub category: String,
    pub date: String,
}

impl Conversation {
    pub fn new(
        id: ConversationId,
        title: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
        messages: Vec<Message>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            messages,
            category: category.into(),
            date: date.into(),
        }
    }

    /// Calendar date of the conversation, if the stored date parses
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }
}

pub fn find_conversation(
    conversations: &[Conversation],
    id: ConversationId,
) -> Option<&Conversation> {
    conversations.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_date() {
        let conv = Conversation::new(1, "Password Reset", "IT Support", "2024-07-20", vec![]);
        assert_eq!(conv.calendar_date(), NaiveDate::from_ymd_opt(2024, 7, 20));

        let conv = Conversation::new(2, "Broken", "IT Support", "yesterday", vec![]);
        assert_eq!(conv.calendar_date(), None);
    }

    #[test]
    fn test_message_serializes_camel_case() {
        let json = serde_json::to_string(&Message::new("hi", true)).unwrap();
        assert_eq!(json, r#"{"text":"hi","isUser":true}"#);

        let parsed: Message = serde_json::from_str(r#"{"text":"yo","is_user":false}"#).unwrap();
        assert_eq!(parsed, Message::new("yo", false));
        assert_eq!(parsed.speaker(), "AI");
    }
}
