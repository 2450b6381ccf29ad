//! News and announcements.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One news item. `date` is an ISO calendar date string; its first four
/// characters are the year key used for grouping.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommunityNewsItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub order: i64,
}

impl CommunityNewsItem {
    /// True when `date` parses as a real calendar date.
    pub fn has_valid_date(&self) -> bool {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_ok()
    }

    /// Year key: first four characters of the date string.
    pub fn year_key(&self) -> String {
        self.date.chars().take(4).collect()
    }
}

/// Community document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommunityDoc {
    #[serde(default)]
    pub items: Vec<CommunityNewsItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_date() {
        let item = CommunityNewsItem {
            date: "2024-06-10".to_string(),
            ..Default::default()
        };
        assert!(item.has_valid_date());
        assert_eq!(item.year_key(), "2024");
    }

    #[test]
    fn test_invalid_date() {
        let item = CommunityNewsItem {
            date: "2023-02-30".to_string(),
            ..Default::default()
        };
        assert!(!item.has_valid_date());
    }
}
