//! Publications.

use serde::{Deserialize, Serialize};

super::labelled_enum! {
    /// Venue type of a publication.
    pub enum PublicationType ("publication type") {
        Journal => "Journal",
        Conference => "Conference",
        BookChapter => "Book Chapter",
    }
}

/// A published paper or chapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: u32,
    pub title: String,
    /// Author names in byline order.
    pub authors: Vec<String>,
    /// Venue name.
    pub journal: String,
    pub year: i32,
    #[serde(rename = "type")]
    pub kind: PublicationType,
    #[serde(
        default,
        deserialize_with = "super::lenient::count",
        skip_serializing_if = "Option::is_none"
    )]
    pub volume: Option<u32>,
    #[serde(
        default,
        deserialize_with = "super::lenient::count",
        skip_serializing_if = "Option::is_none"
    )]
    pub issue: Option<u32>,
    /// Page range, e.g. "112-130".
    #[serde(
        default,
        deserialize_with = "super::lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub pages: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub issn: Option<String>,
}
