//! News articles.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

super::labelled_enum! {
    /// Category a news article is filed under.
    pub enum NewsCategory ("news category") {
        Awards => "Awards",
        Partnerships => "Partnerships",
        ResearchImpact => "Research Impact",
        Publications => "Publications",
        Events => "Events",
        ProductLaunch => "Product Launch",
        Innovation => "Innovation",
    }
}

/// A news article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    /// Full article text.
    pub content: String,
    pub category: NewsCategory,
    /// Publication date.
    pub date: NaiveDate,
    /// Image path or URL.
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    pub author: String,
    /// External "read more" link.
    pub link: String,
}
