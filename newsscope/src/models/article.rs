use serde::{Deserialize, Serialize};

use super::AnalysisRecord;

/// Origin of an article as reported by the news provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// One news article. Provider fields are kept as received; `timestamp` and
/// `analysis` are attached during request handling and `content` is replaced
/// by its normalized form before analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub source: ArticleSource,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    /// Copy of `publishedAt`, tracked separately for freshness display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisRecord>,
}

impl Article {
    /// Body text preferred for analysis: `content`, falling back to
    /// `description` when the provider truncated the article away entirely.
    pub fn body(&self) -> &str {
        self.content
            .as_deref()
            .filter(|c| !c.is_empty())
            .or(self.description.as_deref())
            .unwrap_or("")
    }
}
