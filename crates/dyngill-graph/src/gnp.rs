//! Erdős–Rényi G(n, p) random graphs.

use dyngill_core::{Contact, ContactSlice};
use rand::Rng;

use crate::GraphError;

/// Edge probability giving an expected mean degree of two.
///
/// Returns `2 / (n - 1)`, or `0.0` when there are fewer than two nodes.
pub fn default_edge_probability(n: u32) -> f64 {
    if n < 2 {
        0.0
    } else {
        2.0 / (f64::from(n) - 1.0)
    }
}

/// Every unordered pair of distinct nodes, as `(v, w)` with `w < v`.
pub fn complete_graph(n: u32) -> ContactSlice {
    let m = n as usize * n.saturating_sub(1) as usize / 2;
    let mut slice = ContactSlice::with_capacity(m);
    for v in 1..n {
        for w in 0..v {
            slice.push(Contact::new(v, w));
        }
    }
    slice
}

/// Draw an undirected G(n, p) graph.
///
/// Instead of flipping a coin for each of the `n(n-1)/2` pairs, the
/// distance to the next present edge is drawn from the geometric
/// distribution, so the cost is O(n + m) for `m` edges. Pairs are
/// enumerated in the order `(1,0), (2,0), (2,1), (3,0), ...` and every
/// emitted contact is `(v, w)` with `w < v`.
///
/// `p <= 0` yields no contacts and `p >= 1` the complete graph.
///
/// # Errors
///
/// Returns `Err(GraphError::InvalidProbability)` if `p` is NaN or infinite.
///
/// # Examples
///
/// ```
/// use dyngill_graph::gnp_random_graph;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let g = gnp_random_graph(10, 0.3, &mut rng).unwrap();
/// assert!(g.iter().all(|c| c.1 < c.0 && c.0.0 < 10));
/// ```
pub fn gnp_random_graph<R: Rng + ?Sized>(
    n: u32,
    p: f64,
    rng: &mut R,
) -> Result<ContactSlice, GraphError> {
    if !p.is_finite() {
        return Err(GraphError::InvalidProbability { value: p });
    }
    if p <= 0.0 || n < 2 {
        return Ok(ContactSlice::new());
    }
    if p >= 1.0 {
        return Ok(complete_graph(n));
    }

    let expected = (p * f64::from(n) * (f64::from(n) - 1.0) / 2.0).ceil() as usize;
    let mut slice = ContactSlice::with_capacity(expected);
    let log_q = (1.0 - p).ln();
    let n = i64::from(n);

    let mut v: i64 = 1;
    let mut w: i64 = -1;
    while v < n {
        // 1 - U lies in (0, 1], so the log is finite.
        let log_r = (1.0 - rng.random::<f64>()).ln();
        let skip = (log_r / log_q) as i64;
        w = w.saturating_add(1).saturating_add(skip);
        while w >= v && v < n {
            w -= v;
            v += 1;
        }
        if v < n {
            slice.push(Contact::new(v as u32, w as u32));
        }
    }
    Ok(slice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn default_probability_gives_mean_degree_two() {
        assert_eq!(default_edge_probability(0), 0.0);
        assert_eq!(default_edge_probability(1), 0.0);
        assert!((default_edge_probability(10) - 2.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn complete_graph_edge_count() {
        assert_eq!(complete_graph(0).len(), 0);
        assert_eq!(complete_graph(1).len(), 0);
        assert_eq!(complete_graph(5).len(), 10);
    }

    #[test]
    fn probability_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(gnp_random_graph(10, 0.0, &mut rng).unwrap().is_empty());
        assert!(gnp_random_graph(10, -0.5, &mut rng).unwrap().is_empty());
        assert_eq!(gnp_random_graph(10, 1.0, &mut rng).unwrap().len(), 45);
        assert_eq!(gnp_random_graph(10, 3.0, &mut rng).unwrap().len(), 45);
    }

    #[test]
    fn rejects_non_finite_probability() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(matches!(
            gnp_random_graph(10, f64::NAN, &mut rng),
            Err(GraphError::InvalidProbability { .. })
        ));
        assert!(gnp_random_graph(10, f64::INFINITY, &mut rng).is_err());
    }

    #[test]
    fn same_seed_same_graph() {
        let a = gnp_random_graph(50, 0.1, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        let b = gnp_random_graph(50, 0.1, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn edge_density_close_to_p() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let n = 200u32;
        let p = 0.05;
        let pairs = f64::from(n) * f64::from(n - 1) / 2.0;
        let draws = 20;
        let total: usize = (0..draws)
            .map(|_| gnp_random_graph(n, p, &mut rng).unwrap().len())
            .sum();
        let density = total as f64 / (pairs * f64::from(draws));
        assert!(
            (density - p).abs() < 0.005,
            "empirical density {density} too far from {p}"
        );
    }

    proptest! {
        #[test]
        fn edges_are_simple_and_in_range(n in 0u32..60, p in 0.0f64..1.0, seed in any::<u64>()) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let g = gnp_random_graph(n, p, &mut rng).unwrap();
            let mut seen = HashSet::new();
            for c in &g {
                prop_assert!(c.0 .0 < n);
                prop_assert!(c.1 < c.0, "expected w < v, got {:?}", c);
                prop_assert!(seen.insert((c.0, c.1)), "duplicate edge {:?}", c);
            }
        }
    }
}
