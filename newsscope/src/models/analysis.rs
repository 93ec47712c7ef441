use serde::{Deserialize, Serialize};

/// A named-entity mention: surface form plus type tag (PERSON, ORG, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMention {
    pub text: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "POSITIVE"),
            Self::Negative => write!(f, "NEGATIVE"),
            Self::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

/// Sentiment of one text. `score` is a compound value in [-1, 1]; `detail`
/// carries raw sub-scores when the scoring tier exposes them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

impl SentimentResult {
    pub fn neutral() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: u32,
}

/// Category assigned by the optional title classifier. `label` is the
/// trimmed model output, `raw` the untouched generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: String,
    pub raw: String,
}

/// Per-article analysis. Structurally complete by construction: a degraded
/// record carries defaults in the affected fields, never absent ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub summary: String,
    pub entities: Vec<EntityMention>,
    pub sentiment: SentimentResult,
    pub keywords: Vec<KeywordCount>,
    pub category: Option<ClassificationResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_label_serializes_screaming() {
        let json = serde_json::to_string(&SentimentLabel::Positive).unwrap();
        assert_eq!(json, "\"POSITIVE\"");
        let json = serde_json::to_string(&SentimentLabel::Neutral).unwrap();
        assert_eq!(json, "\"NEUTRAL\"");
    }

    #[test]
    fn test_default_record_is_fully_populated() {
        let record = AnalysisRecord::default();
        assert_eq!(record.summary, "");
        assert!(record.entities.is_empty());
        assert_eq!(record.sentiment.label, SentimentLabel::Neutral);
        assert_eq!(record.sentiment.score, 0.0);
        assert!(record.keywords.is_empty());
        assert!(record.category.is_none());
    }

    #[test]
    fn test_record_round_trips() {
        let record = AnalysisRecord {
            summary: "A summary".to_string(),
            entities: vec![EntityMention {
                text: "NASA".to_string(),
                label: "ORG".to_string(),
            }],
            sentiment: SentimentResult {
                label: SentimentLabel::Positive,
                score: 0.42,
                detail: None,
            },
            keywords: vec![KeywordCount {
                word: "launch".to_string(),
                count: 3,
            }],
            category: Some(ClassificationResult {
                label: "science".to_string(),
                raw: "science ".to_string(),
            }),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: AnalysisRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.entities[0].text, "NASA");
        assert_eq!(back.sentiment.label, SentimentLabel::Positive);
        assert_eq!(back.category.unwrap().label, "science");
    }
}
