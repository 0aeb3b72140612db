//! Search queries and their results.

use serde::{Deserialize, Serialize};

/// Smallest number of results a query may request.
pub const MIN_LIMIT: u8 = 1;

/// Largest number of results a query may request.
pub const MAX_LIMIT: u8 = 20;

/// Result count used when the user does not pick one.
pub const DEFAULT_LIMIT: u8 = 5;

/// A snippet returned by the backend, in server relevance order.
pub type SearchResult = String;

/// A validated natural-language query.
///
/// Construction guarantees a non-blank, trimmed `text` and a `limit` inside
/// `[MIN_LIMIT, MAX_LIMIT]`, so every value of this type is safe to dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    text: String,
    limit: u8,
}

impl SearchQuery {
    /// Validates raw input into a query.
    ///
    /// Returns `None` when `text` is empty after trimming. Out-of-range limits
    /// are clamped rather than rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use ragdesk::domain::SearchQuery;
    ///
    /// assert!(SearchQuery::new("   ", 5).is_none());
    /// assert_eq!(SearchQuery::new("cats", 0).unwrap().limit(), 1);
    /// assert_eq!(SearchQuery::new("cats", 99).unwrap().limit(), 20);
    /// ```
    #[must_use]
    pub fn new(text: &str, limit: i64) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(Self {
            text: trimmed.to_string(),
            limit: clamp_limit(limit),
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn limit(&self) -> u8 {
        self.limit
    }
}

/// Clamps a requested result count into `[MIN_LIMIT, MAX_LIMIT]`.
#[must_use]
pub fn clamp_limit(limit: i64) -> u8 {
    let clamped = limit.clamp(i64::from(MIN_LIMIT), i64::from(MAX_LIMIT));
    u8::try_from(clamped).unwrap_or(DEFAULT_LIMIT)
}
