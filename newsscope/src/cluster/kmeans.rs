use rand::prelude::*;
use rand::rngs::StdRng;

const MAX_ITERATIONS: usize = 100;

/// Lloyd's k-means over dense vectors with seeded centroid initialization,
/// so repeated calls on identical input give identical assignments.
/// Returns one cluster label per input vector. Callers clamp `k` to the
/// number of vectors.
pub fn kmeans(vectors: &[Vec<f32>], k: usize, seed: u64) -> Vec<usize> {
    if vectors.is_empty() || k == 0 {
        return Vec::new();
    }
    let k = k.min(vectors.len());
    let dims = vectors[0].len();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..vectors.len()).collect();
    indices.shuffle(&mut rng);
    let mut centroids: Vec<Vec<f32>> = indices[..k].iter().map(|&i| vectors[i].clone()).collect();

    let mut labels = vec![0usize; vectors.len()];

    for _ in 0..MAX_ITERATIONS {
        let mut changed = false;
        for (i, vector) in vectors.iter().enumerate() {
            let nearest = nearest_centroid(vector, &centroids);
            if labels[i] != nearest {
                labels[i] = nearest;
                changed = true;
            }
        }
        if !changed {
            break;
        }

        // Recompute centroids; an emptied cluster keeps its previous one.
        let mut sums = vec![vec![0.0f32; dims]; k];
        let mut counts = vec![0usize; k];
        for (i, vector) in vectors.iter().enumerate() {
            counts[labels[i]] += 1;
            for (d, &v) in vector.iter().enumerate() {
                sums[labels[i]][d] += v;
            }
        }
        for (c, count) in counts.iter().enumerate() {
            if *count > 0 {
                for d in 0..dims {
                    centroids[c][d] = sums[c][d] / *count as f32;
                }
            }
        }
    }

    labels
}

fn nearest_centroid(vector: &[f32], centroids: &[Vec<f32>]) -> usize {
    let mut best = 0;
    let mut best_dist = f32::MAX;
    for (c, centroid) in centroids.iter().enumerate() {
        let dist: f32 = vector
            .iter()
            .zip(centroid)
            .map(|(a, b)| (a - b) * (a - b))
            .sum();
        if dist < best_dist {
            best_dist = dist;
            best = c;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separates_obvious_clusters() {
        let vectors = vec![
            vec![0.0, 0.0],
            vec![0.1, 0.0],
            vec![0.0, 0.1],
            vec![10.0, 10.0],
            vec![10.1, 10.0],
            vec![10.0, 10.1],
        ];
        let labels = kmeans(&vectors, 2, 42);
        assert_eq!(labels.len(), 6);
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[1], labels[2]);
        assert_eq!(labels[3], labels[4]);
        assert_eq!(labels[4], labels[5]);
        assert_ne!(labels[0], labels[3]);
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let vectors: Vec<Vec<f32>> = (0..20)
            .map(|i| vec![(i % 4) as f32, (i / 4) as f32])
            .collect();
        let a = kmeans(&vectors, 3, 42);
        let b = kmeans(&vectors, 3, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_k_clamped_to_input_len() {
        let vectors = vec![vec![1.0], vec![2.0]];
        let labels = kmeans(&vectors, 8, 42);
        assert_eq!(labels.len(), 2);
        assert!(labels.iter().all(|&l| l < 2));
    }

    #[test]
    fn test_empty_input() {
        assert!(kmeans(&[], 3, 42).is_empty());
    }
}
