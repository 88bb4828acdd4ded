//! Time-sliced contact networks.
//!
//! A [`TemporalNetwork`] is a sequence of static contact graphs, each
//! active during one time interval of length `Δt`. The population size
//! is fixed for the whole sequence and every contact is checked against
//! it on construction, so downstream code can index per-node state with
//! [`NodeId::index`] without bounds surprises.

use crate::{Contact, ContactSlice, NetworkError, NodeId};

/// A population of `node_count` nodes and the contacts between them,
/// one [`ContactSlice`] per time step.
///
/// # Examples
///
/// ```
/// use dyngill_core::{ContactSlice, TemporalNetwork};
///
/// let slices = vec![
///     [(0, 1), (1, 2)].into_iter().collect::<ContactSlice>(),
///     ContactSlice::new(),
/// ];
/// let net = TemporalNetwork::new(3, slices).unwrap();
/// assert_eq!(net.slice_count(), 2);
/// assert_eq!(net.contact_count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemporalNetwork {
    node_count: u32,
    slices: Vec<ContactSlice>,
}

impl TemporalNetwork {
    /// Create a network of `node_count` nodes from its slices.
    ///
    /// Returns `Err(NetworkError::NoNodes)` if `node_count == 0`, or
    /// `Err(NetworkError::NodeOutOfRange)` for the first contact that
    /// references a node `>= node_count`.
    pub fn new(node_count: u32, slices: Vec<ContactSlice>) -> Result<Self, NetworkError> {
        if node_count == 0 {
            return Err(NetworkError::NoNodes);
        }
        for (slice, contacts) in slices.iter().enumerate() {
            check_slice(slice, contacts, node_count)?;
        }
        Ok(Self { node_count, slices })
    }

    /// Create a network sized to fit its contacts (`max id + 1`).
    ///
    /// Returns `Err(NetworkError::NoNodes)` if no slice has a contact, or
    /// `Err(NetworkError::NodeIdTooLarge)` if the largest id is `u32::MAX`.
    pub fn from_slices(slices: Vec<ContactSlice>) -> Result<Self, NetworkError> {
        let max_node = slices
            .iter()
            .filter_map(ContactSlice::max_node)
            .max()
            .ok_or(NetworkError::NoNodes)?;
        let node_count = max_node
            .0
            .checked_add(1)
            .ok_or(NetworkError::NodeIdTooLarge { node: max_node })?;
        Ok(Self { node_count, slices })
    }

    /// Create a network from plain `(i, j)` pair lists, one list per slice.
    pub fn from_pairs<S, P>(node_count: u32, slices: S) -> Result<Self, NetworkError>
    where
        S: IntoIterator<Item = P>,
        P: IntoIterator<Item = (u32, u32)>,
    {
        let slices = slices
            .into_iter()
            .map(|pairs| pairs.into_iter().collect())
            .collect();
        Self::new(node_count, slices)
    }

    /// Append one more slice at the end of the sequence.
    pub fn push_slice(&mut self, contacts: ContactSlice) -> Result<(), NetworkError> {
        check_slice(self.slices.len(), &contacts, self.node_count)?;
        self.slices.push(contacts);
        Ok(())
    }

    /// Population size `N`.
    pub fn node_count(&self) -> u32 {
        self.node_count
    }

    /// Number of time slices.
    pub fn slice_count(&self) -> usize {
        self.slices.len()
    }

    /// Returns `true` if the network has no slices at all.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Total number of contacts summed over all slices.
    pub fn contact_count(&self) -> usize {
        self.slices.iter().map(ContactSlice::len).sum()
    }

    /// The slice active during step `t`, if the network is that long.
    pub fn slice(&self, t: usize) -> Option<&ContactSlice> {
        self.slices.get(t)
    }

    /// All slices in time order.
    pub fn slices(&self) -> &[ContactSlice] {
        &self.slices
    }

    /// Iterate over the slices in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, ContactSlice> {
        self.slices.iter()
    }

    /// Consume the network, returning its slices.
    pub fn into_slices(self) -> Vec<ContactSlice> {
        self.slices
    }
}

impl<'a> IntoIterator for &'a TemporalNetwork {
    type Item = &'a ContactSlice;
    type IntoIter = std::slice::Iter<'a, ContactSlice>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.iter()
    }
}

fn check_slice(slice: usize, contacts: &ContactSlice, node_count: u32) -> Result<(), NetworkError> {
    match contacts
        .iter()
        .find(|c| c.max_node() >= NodeId(node_count))
    {
        Some(&Contact(i, j)) => Err(NetworkError::NodeOutOfRange {
            slice,
            i,
            j,
            node_count,
        }),
        None => Ok(()),
    }
}
