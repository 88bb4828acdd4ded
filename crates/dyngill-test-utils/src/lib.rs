//! Deterministic network fixtures for DynGill tests.
//!
//! Every fixture repeats one fixed contact pattern over `slices` time
//! slices, so test expectations do not depend on any RNG.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use dyngill_core::{ContactSlice, TemporalNetwork};
use dyngill_graph::complete_graph;

fn repeat(n: u32, slice: ContactSlice, slices: usize) -> TemporalNetwork {
    TemporalNetwork::new(n, vec![slice; slices]).expect("fixture contacts are in range")
}

/// `n` nodes, nobody in contact, `slices` slices.
pub fn empty_network(n: u32, slices: usize) -> TemporalNetwork {
    repeat(n, ContactSlice::new(), slices)
}

/// `n` nodes, everybody in contact with everybody in every slice.
pub fn complete_network(n: u32, slices: usize) -> TemporalNetwork {
    repeat(n, complete_graph(n), slices)
}

/// `n` nodes; the first `path_len` form a path `0-1-...-(path_len-1)`,
/// the rest are isolated.
pub fn path_network(n: u32, path_len: u32, slices: usize) -> TemporalNetwork {
    let slice = (1..path_len.min(n)).map(|v| (v - 1, v)).collect();
    repeat(n, slice, slices)
}

/// `n` nodes; node 0 is in contact with every other node.
pub fn star_network(n: u32, slices: usize) -> TemporalNetwork {
    let slice = (1..n).map(|v| (0, v)).collect();
    repeat(n, slice, slices)
}

/// Contacts alternate: slice `2k` is complete, slice `2k+1` is empty.
pub fn blinking_network(n: u32, slices: usize) -> TemporalNetwork {
    let full = complete_graph(n);
    let slices = (0..slices)
        .map(|t| if t % 2 == 0 { full.clone() } else { ContactSlice::new() })
        .collect();
    TemporalNetwork::new(n, slices).expect("fixture contacts are in range")
}
