use std::collections::HashMap;

use crate::text::stopwords::is_stopword;

/// TF-IDF document vectors with English stopwords removed and the
/// vocabulary capped at `max_features` terms by corpus frequency.
/// L2-normalized so k-means distances behave like cosine distances.
pub fn vectors(texts: &[String], max_features: usize) -> Vec<Vec<f32>> {
    let tokenized: Vec<Vec<String>> = texts.iter().map(|t| tokenize(t)).collect();

    let mut corpus_frequency: HashMap<&str, usize> = HashMap::new();
    let mut document_frequency: HashMap<&str, usize> = HashMap::new();
    for tokens in &tokenized {
        let mut seen: Vec<&str> = Vec::new();
        for token in tokens {
            *corpus_frequency.entry(token).or_insert(0) += 1;
            if !seen.contains(&token.as_str()) {
                seen.push(token);
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }
    }

    let mut vocabulary: Vec<(&str, usize)> = corpus_frequency
        .iter()
        .map(|(&term, &count)| (term, count))
        .collect();
    vocabulary.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    vocabulary.truncate(max_features);
    let index: HashMap<&str, usize> = vocabulary
        .iter()
        .enumerate()
        .map(|(i, &(term, _))| (term, i))
        .collect();

    let n_docs = texts.len() as f32;
    tokenized
        .iter()
        .map(|tokens| {
            let mut vector = vec![0.0f32; index.len()];
            for token in tokens {
                if let Some(&i) = index.get(token.as_str()) {
                    vector[i] += 1.0;
                }
            }
            for (term, &i) in &index {
                if vector[i] > 0.0 {
                    let df = document_frequency[term] as f32;
                    vector[i] *= (n_docs / (1.0 + df)).ln() + 1.0;
                }
            }
            let norm: f32 = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
            if norm > 0.0 {
                for v in vector.iter_mut() {
                    *v /= norm;
                }
            }
            vector
        })
        .collect()
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .filter(|t| !is_stopword(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_shapes_match_vocabulary() {
        let texts = vec![
            "rockets launch into orbit".to_string(),
            "rockets carry satellites".to_string(),
        ];
        let vecs = vectors(&texts, 1000);
        assert_eq!(vecs.len(), 2);
        assert_eq!(vecs[0].len(), vecs[1].len());
        assert!(!vecs[0].is_empty());
    }

    #[test]
    fn test_vocabulary_cap() {
        let texts = vec!["alpha beta gamma delta epsilon zeta".to_string()];
        let vecs = vectors(&texts, 3);
        assert_eq!(vecs[0].len(), 3);
    }

    #[test]
    fn test_stopwords_excluded() {
        let texts = vec!["the and of".to_string()];
        let vecs = vectors(&texts, 1000);
        assert!(vecs[0].is_empty());
    }

    #[test]
    fn test_l2_normalized() {
        let texts = vec!["orbit orbit orbit satellite".to_string()];
        let vecs = vectors(&texts, 1000);
        let norm: f32 = vecs[0].iter().map(|v| v * v).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }
}
