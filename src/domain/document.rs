//! Indexed document records reported by the backend.
//!
//! The backend assembles these records from loosely typed payload metadata, so
//! numbers sometimes arrive as strings and optional fields are often missing.
//! Decoding accepts those shapes; anything that is structurally wrong (not an
//! object, a non-numeric size) still fails and marks the whole response as
//! malformed.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::fmt;

/// A snapshot of one document as reported by `GET /documents`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IndexedDocument {
    #[serde(alias = "file_name")]
    pub filename: String,
    #[serde(rename = "file_size", default, deserialize_with = "lenient_u64")]
    pub file_size_bytes: u64,
    #[serde(default)]
    pub file_type: String,
    #[serde(rename = "file_path", default)]
    pub storage_path: String,
    #[serde(default)]
    pub creation_date: String,
    #[serde(default)]
    pub last_modified_date: String,
    /// Page labels in the order the backend reported them.
    #[serde(default, deserialize_with = "page_labels")]
    pub pages: Vec<PageLabel>,
    #[serde(default)]
    pub text_chunks: Vec<TextChunk>,
}

/// A preview of indexed text, tagged with the page it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TextChunk {
    /// `None` when the backend had no page label for the chunk.
    #[serde(default, deserialize_with = "optional_page")]
    pub page: Option<PageLabel>,
    #[serde(default)]
    pub text: String,
}

/// A page as the backend labels it.
///
/// Most labels are page numbers; front matter often uses roman numerals or
/// other text, which is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLabel {
    Number(u32),
    Label(String),
}

impl fmt::Display for PageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Label(label) => f.write_str(label),
        }
    }
}

impl From<u32> for PageLabel {
    fn from(n: u32) -> Self {
        Self::Number(n)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(u64),
    Float(f64),
    Text(String),
}

impl Loose {
    fn to_u64(&self) -> Option<u64> {
        match self {
            Self::Int(n) => Some(*n),
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Self::Float(f) if f.is_finite() && *f >= 0.0 => Some(f.trunc() as u64),
            Self::Float(_) => None,
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Some(0)
                } else {
                    trimmed.parse().ok()
                }
            }
        }
    }

    /// Blank labels mean "no page"; anything else survives, as a number
    /// when it is one.
    fn to_page(&self) -> Option<PageLabel> {
        let label = match self {
            Self::Int(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Text(s) => s.trim().to_string(),
        };
        if label.is_empty() {
            return None;
        }
        Some(label.parse().map_or(PageLabel::Label(label), PageLabel::Number))
    }
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Loose>::deserialize(deserializer)? {
        None => Ok(0),
        Some(value) => value
            .to_u64()
            .ok_or_else(|| de::Error::custom("file_size is not a non-negative number")),
    }
}

fn page_labels<'de, D>(deserializer: D) -> Result<Vec<PageLabel>, D::Error>
where
    D: Deserializer<'de>,
{
    let labels = Option::<Vec<Loose>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(labels.iter().filter_map(Loose::to_page).collect())
}

fn optional_page<'de, D>(deserializer: D) -> Result<Option<PageLabel>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Loose>::deserialize(deserializer)?.and_then(|value| value.to_page()))
}
