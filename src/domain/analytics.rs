// Analytics data sets shown on the dashboard
use super::conversation::Conversation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: String,
    pub count: i64,
}

impl TimeSeriesPoint {
    pub fn new(date: impl Into<String>, count: i64) -> Self {
        Self {
            date: date.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub value: i64,
}

impl CategoryCount {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    #[serde(default)]
    pub time_series: Vec<TimeSeriesPoint>,
    #[serde(default)]
    pub categories: Vec<CategoryCount>,
    #[serde(default)]
    pub conversations: Vec<Conversation>,
}

impl AnalyticsSnapshot {
    pub fn new(
        time_series: Vec<TimeSeriesPoint>,
        categories: Vec<CategoryCount>,
        conversations: Vec<Conversation>,
    ) -> Self {
        Self {
            time_series,
            categories,
            conversations,
        }
    }
}
