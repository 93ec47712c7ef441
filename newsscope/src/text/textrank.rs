use std::collections::HashMap;

use super::stopwords::is_stopword;

const DAMPING: f64 = 0.85;
const MAX_ITERATIONS: usize = 100;
const TOLERANCE: f64 = 1e-6;

/// Extractive TextRank-style summary.
///
/// Splits on `'.'` (deliberately simplistic, not full sentence-boundary
/// detection) and keeps sentences of more than 3 words. When no more than
/// `top_n` sentences survive they are all returned joined by `". "`.
/// Otherwise sentences are ranked by PageRank over a cosine-similarity
/// graph of their TF-IDF vectors and the top `top_n` are returned joined by
/// `". "` in ranked-score order, not document order.
pub fn summarize(text: &str, top_n: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let sentences: Vec<&str> = text
        .split('.')
        .map(str::trim)
        .filter(|s| s.split_whitespace().count() > 3)
        .collect();

    if sentences.is_empty() {
        return text.to_string();
    }
    if sentences.len() <= top_n {
        return sentences.join(". ");
    }

    let vectors = tfidf_vectors(&sentences);
    let similarity = similarity_matrix(&vectors);
    let scores = pagerank(&similarity);

    let mut ranked: Vec<(f64, usize)> = scores
        .iter()
        .enumerate()
        .map(|(i, &score)| (score, i))
        .collect();
    ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    ranked
        .into_iter()
        .take(top_n)
        .map(|(_, i)| sentences[i])
        .collect::<Vec<_>>()
        .join(". ")
}

/// First `n` sentences of a text, split on `'.'`, rejoined with `". "`.
/// Last-resort snippet used when both summarization tiers fail.
pub fn leading_sentences(text: &str, n: usize) -> String {
    text.split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(n)
        .collect::<Vec<_>>()
        .join(". ")
}

fn tokenize(sentence: &str) -> Vec<String> {
    sentence
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .filter(|t| !is_stopword(t))
        .collect()
}

/// TF-IDF vectors over the shared sentence vocabulary, stopwords removed.
fn tfidf_vectors(sentences: &[&str]) -> Vec<HashMap<String, f64>> {
    let tokenized: Vec<Vec<String>> = sentences.iter().map(|s| tokenize(s)).collect();

    let mut document_frequency: HashMap<&str, usize> = HashMap::new();
    for tokens in &tokenized {
        let mut seen: Vec<&str> = Vec::new();
        for token in tokens {
            if !seen.contains(&token.as_str()) {
                seen.push(token);
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }
    }

    let n = sentences.len() as f64;
    tokenized
        .iter()
        .map(|tokens| {
            let mut tf: HashMap<String, f64> = HashMap::new();
            for token in tokens {
                *tf.entry(token.clone()).or_insert(0.0) += 1.0;
            }
            for (token, value) in tf.iter_mut() {
                let df = document_frequency[token.as_str()] as f64;
                // Smooth IDF keeps terms present in every sentence non-zero.
                *value *= (n / (1.0 + df)).ln() + 1.0;
            }
            tf
        })
        .collect()
}

fn cosine(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(token, &va)| b.get(token).map(|&vb| va * vb))
        .sum();
    let norm_a: f64 = a.values().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|v| v * v).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

fn similarity_matrix(vectors: &[HashMap<String, f64>]) -> Vec<Vec<f64>> {
    let n = vectors.len();
    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let sim = cosine(&vectors[i], &vectors[j]);
            matrix[i][j] = sim;
            matrix[j][i] = sim;
        }
    }
    matrix
}

/// Power-iteration PageRank over a similarity-weighted undirected graph.
/// Dangling sentences (no similarity to anything) distribute uniformly.
fn pagerank(weights: &[Vec<f64>]) -> Vec<f64> {
    let n = weights.len();
    if n == 0 {
        return Vec::new();
    }

    let out_weight: Vec<f64> = weights.iter().map(|row| row.iter().sum()).collect();
    let uniform = 1.0 / n as f64;
    let mut scores = vec![uniform; n];

    for _ in 0..MAX_ITERATIONS {
        let mut next = vec![(1.0 - DAMPING) * uniform; n];
        for (j, row) in weights.iter().enumerate() {
            if out_weight[j] == 0.0 {
                for value in next.iter_mut() {
                    *value += DAMPING * scores[j] * uniform;
                }
                continue;
            }
            for (i, &w) in row.iter().enumerate() {
                if w > 0.0 {
                    next[i] += DAMPING * scores[j] * w / out_weight[j];
                }
            }
        }

        let delta: f64 = next
            .iter()
            .zip(&scores)
            .map(|(a, b)| (a - b).abs())
            .sum();
        scores = next;
        if delta < TOLERANCE {
            break;
        }
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_short_text_returned_whole() {
        let text = "The quick brown fox jumps over the lazy dog. A second sentence with enough words here.";
        let summary = summarize(text, 3);
        assert_eq!(
            summary,
            "The quick brown fox jumps over the lazy dog. A second sentence with enough words here"
        );
    }

    #[test]
    fn test_no_qualifying_sentence_returns_input() {
        let text = "Too short. Tiny one. Nope.";
        assert_eq!(summarize(text, 3), text);
    }

    #[test]
    fn test_selects_top_n() {
        let text = "The space agency launched a new rocket into orbit today. \
                    The rocket carried a communications satellite for the agency. \
                    Local bakers held their annual bread festival downtown. \
                    The satellite will improve coverage for the space agency network. \
                    Weather on launch day was clear with light winds across the coast.";
        let summary = summarize(text, 2);
        let parts: Vec<&str> = summary.split(". ").collect();
        assert_eq!(parts.len(), 2);
        // Each selected part is one of the original sentences.
        for part in parts {
            assert!(text.contains(part), "unexpected sentence: {part}");
        }
    }

    #[test]
    fn test_ranked_order_is_score_order() {
        // Three near-identical sentences form a dense core; the outlier must
        // not be ranked first.
        let text = "The central bank raised interest rates this quarter again. \
                    Interest rates were raised by the central bank this quarter. \
                    The bank confirmed the quarterly interest rate increase decision. \
                    Giraffes are the tallest living terrestrial animals on earth.";
        let summary = summarize(text, 1);
        assert!(summary.to_lowercase().contains("interest"));
    }

    #[test]
    fn test_leading_sentences() {
        let text = "One here. Two here. Three here.";
        assert_eq!(leading_sentences(text, 2), "One here. Two here");
        assert_eq!(leading_sentences("", 2), "");
    }

    #[test]
    fn test_pagerank_uniform_on_empty_graph() {
        let scores = pagerank(&[vec![0.0, 0.0], vec![0.0, 0.0]]);
        assert!((scores[0] - scores[1]).abs() < 1e-9);
    }
}
