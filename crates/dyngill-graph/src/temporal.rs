//! Temporal networks built from independent random slices.

use dyngill_core::TemporalNetwork;
use rand::Rng;
use tracing::debug;

use crate::{gnp_random_graph, GraphError};

/// Draw `n_slices` independent G(n, p) graphs and string them together
/// as a temporal network of `n` nodes.
///
/// # Errors
///
/// Returns `Err` if `p` is not finite or `n == 0`.
///
/// # Examples
///
/// ```
/// use dyngill_graph::random_temporal_network;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(3);
/// let net = random_temporal_network(10, 0.2, 5, &mut rng).unwrap();
/// assert_eq!(net.slice_count(), 5);
/// assert_eq!(net.node_count(), 10);
/// ```
pub fn random_temporal_network<R: Rng + ?Sized>(
    n: u32,
    p: f64,
    n_slices: usize,
    rng: &mut R,
) -> Result<TemporalNetwork, GraphError> {
    let slices = (0..n_slices)
        .map(|_| gnp_random_graph(n, p, &mut *rng))
        .collect::<Result<Vec<_>, _>>()?;
    let network = TemporalNetwork::new(n, slices)?;
    debug!(
        nodes = n,
        p,
        slices = n_slices,
        contacts = network.contact_count(),
        "generated random temporal network"
    );
    Ok(network)
}
