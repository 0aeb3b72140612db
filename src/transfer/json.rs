//! JSON request bodies.

use super::EncodeError;
use crate::domain::SearchQuery;
use serde::Serialize;

#[derive(Serialize)]
struct QueryBody<'a> {
    query: &'a str,
    limit: u8,
}

/// Encodes a query as `{"query": <text>, "limit": <int>}`.
///
/// # Errors
///
/// Returns [`EncodeError::Json`] if serialization fails, which cannot happen
/// for a validated [`SearchQuery`] in practice.
///
/// # Examples
///
/// ```
/// use ragdesk::domain::SearchQuery;
/// use ragdesk::transfer::encode_query;
///
/// let query = SearchQuery::new("invoice totals", 3).unwrap();
/// let body = encode_query(&query).unwrap();
/// assert_eq!(body["query"], "invoice totals");
/// assert_eq!(body["limit"], 3);
/// ```
pub fn encode_query(query: &SearchQuery) -> Result<serde_json::Value, EncodeError> {
    let body = QueryBody {
        query: query.text(),
        limit: query.limit(),
    };
    Ok(serde_json::to_value(body)?)
}
