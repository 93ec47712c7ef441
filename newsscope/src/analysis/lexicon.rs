use std::collections::HashMap;
use std::sync::OnceLock;

/// Valence-lexicon scorer for the primary sentiment tier.
///
/// Word valences are summed with negation flips and intensifier boosts,
/// then squashed into a compound score in [-1, 1] with the familiar
/// `x / sqrt(x^2 + 15)` normalization.
pub struct SentimentLexicon {
    valences: &'static HashMap<&'static str, f64>,
}

/// Raw sub-scores reported alongside the compound value.
#[derive(Debug, Clone, Copy)]
pub struct LexiconScores {
    pub compound: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

const VALENCES: &[(&str, f64)] = &[
    // positive
    ("love", 3.2),
    ("loved", 2.9),
    ("loves", 2.9),
    ("great", 3.1),
    ("good", 1.9),
    ("best", 3.2),
    ("better", 1.9),
    ("excellent", 2.7),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("wonderful", 2.7),
    ("fantastic", 2.6),
    ("happy", 2.7),
    ("glad", 2.0),
    ("win", 2.8),
    ("wins", 2.7),
    ("winner", 2.8),
    ("success", 2.7),
    ("successful", 2.6),
    ("improve", 1.9),
    ("improved", 2.1),
    ("strong", 2.3),
    ("positive", 2.3),
    ("growth", 2.4),
    ("gain", 2.4),
    ("gains", 2.4),
    ("boost", 1.9),
    ("breakthrough", 1.3),
    ("hope", 1.9),
    ("hopeful", 2.3),
    ("celebrate", 2.7),
    ("praise", 2.2),
    ("agree", 1.5),
    ("agreement", 1.5),
    ("safe", 1.9),
    ("support", 1.7),
    ("record", 0.8),
    ("popular", 2.1),
    ("like", 1.5),
    ("liked", 1.8),
    ("thank", 1.5),
    ("thanks", 1.9),
    // negative
    ("hate", -2.7),
    ("hated", -3.2),
    ("hates", -2.3),
    ("bad", -2.5),
    ("worst", -3.1),
    ("worse", -2.1),
    ("terrible", -2.1),
    ("horrible", -2.5),
    ("awful", -2.0),
    ("sad", -2.1),
    ("angry", -2.3),
    ("fear", -2.2),
    ("afraid", -2.2),
    ("crisis", -3.1),
    ("disaster", -3.1),
    ("death", -2.9),
    ("dead", -3.3),
    ("die", -2.9),
    ("died", -2.6),
    ("kill", -3.7),
    ("killed", -3.5),
    ("war", -2.9),
    ("attack", -2.1),
    ("threat", -2.4),
    ("loss", -2.5),
    ("losses", -2.3),
    ("lose", -2.4),
    ("lost", -2.4),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.6),
    ("decline", -1.6),
    ("drop", -1.2),
    ("crash", -2.6),
    ("collapse", -2.6),
    ("fraud", -2.9),
    ("scandal", -2.2),
    ("corrupt", -3.0),
    ("violence", -3.1),
    ("violent", -2.9),
    ("weak", -1.9),
    ("worry", -1.7),
    ("worried", -2.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("wrong", -2.1),
    ("damage", -2.2),
    ("injured", -2.4),
    ("warning", -1.4),
    ("risk", -1.1),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 0.293),
    ("really", 0.293),
    ("extremely", 0.293),
    ("incredibly", 0.293),
    ("absolutely", 0.293),
    ("so", 0.293),
    ("hugely", 0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
    ("barely", -0.293),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "cannot", "cant", "dont", "doesnt", "didnt",
    "wont", "wouldnt", "shouldnt", "couldnt", "isnt", "arent", "wasnt", "werent", "hardly",
    "without",
];

fn valences() -> &'static HashMap<&'static str, f64> {
    static MAP: OnceLock<HashMap<&'static str, f64>> = OnceLock::new();
    MAP.get_or_init(|| VALENCES.iter().copied().collect())
}

fn intensifiers() -> &'static HashMap<&'static str, f64> {
    static MAP: OnceLock<HashMap<&'static str, f64>> = OnceLock::new();
    MAP.get_or_init(|| INTENSIFIERS.iter().copied().collect())
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentLexicon {
    pub fn new() -> Self {
        Self {
            valences: valences(),
        }
    }

    pub fn score(&self, text: &str) -> LexiconScores {
        let tokens: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|t| !t.is_empty())
            .map(|t| t.to_lowercase().replace('\'', ""))
            .collect();

        let mut sum = 0.0;
        let mut positive = 0.0;
        let mut negative = 0.0;
        let mut hits = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = self.valences.get(token.as_str()) else {
                continue;
            };
            hits += 1;

            let mut valence = base;
            // Look back up to three tokens for negators and intensifiers.
            let window_start = i.saturating_sub(3);
            for prior in &tokens[window_start..i] {
                if NEGATIONS.contains(&prior.as_str()) {
                    valence *= -0.74;
                } else if let Some(&boost) = intensifiers().get(prior.as_str()) {
                    valence += valence.signum() * boost;
                }
            }

            sum += valence;
            if valence > 0.0 {
                positive += valence;
            } else {
                negative += valence.abs();
            }
        }

        let compound = sum / (sum * sum + 15.0).sqrt();
        let total = positive + negative;
        let (pos, neg) = if total > 0.0 {
            (positive / total, negative / total)
        } else {
            (0.0, 0.0)
        };
        let neutral = if tokens.is_empty() {
            1.0
        } else {
            1.0 - (hits as f64 / tokens.len() as f64).min(1.0)
        };

        LexiconScores {
            compound,
            positive: pos,
            negative: neg,
            neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let lexicon = SentimentLexicon::new();
        assert!(lexicon.score("I love this!").compound >= 0.05);
    }

    #[test]
    fn test_negative_text() {
        let lexicon = SentimentLexicon::new();
        assert!(lexicon.score("I hate this.").compound <= -0.05);
    }

    #[test]
    fn test_neutral_text() {
        let lexicon = SentimentLexicon::new();
        let scores = lexicon.score("It is a table.");
        assert!(scores.compound.abs() < 0.05);
        assert_eq!(scores.positive, 0.0);
        assert_eq!(scores.negative, 0.0);
    }

    #[test]
    fn test_negation_flips_valence() {
        let lexicon = SentimentLexicon::new();
        let plain = lexicon.score("This is good.").compound;
        let negated = lexicon.score("This is not good.").compound;
        assert!(plain > 0.05);
        assert!(negated < 0.0);
    }

    #[test]
    fn test_intensifier_boosts() {
        let lexicon = SentimentLexicon::new();
        let plain = lexicon.score("The results were good.").compound;
        let boosted = lexicon.score("The results were very good.").compound;
        assert!(boosted > plain);
    }

    #[test]
    fn test_compound_bounded() {
        let lexicon = SentimentLexicon::new();
        let scores = lexicon.score("love love love love love love love love love love");
        assert!(scores.compound <= 1.0);
        assert!(scores.compound > 0.9);
    }

    #[test]
    fn test_empty_text() {
        let lexicon = SentimentLexicon::new();
        let scores = lexicon.score("");
        assert_eq!(scores.compound, 0.0);
        assert_eq!(scores.neutral, 1.0);
    }
}
