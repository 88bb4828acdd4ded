//! Simulation output.

use crate::SimulationMetrics;

/// Event-resolved history of one run.
///
/// One record at the start of every slice and one after every event.
/// Times are in units of `Δt`: an event at fraction `f` into slice `t`
/// is stamped `t + f`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventTrajectory {
    /// Time stamps, non-decreasing.
    pub t: Vec<f64>,
    /// Infected count at each stamp.
    pub i: Vec<usize>,
    /// SI-link count at each stamp.
    pub si: Vec<usize>,
}

impl EventTrajectory {
    pub(crate) fn record(&mut self, t: f64, i: usize, si: usize) {
        self.t.push(t);
        self.i.push(i);
        self.si.push(si);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

/// Output of an SIS ensemble.
///
/// `i()` and `si()` are indexed `[run][frame]` with shape
/// `number_of_simulations × number_of_frames`. Frames after a run went
/// extinct hold zeros.
#[derive(Clone, Debug, PartialEq)]
pub struct SisResult {
    pub(crate) i: Vec<Vec<usize>>,
    pub(crate) si: Vec<Vec<usize>>,
    pub(crate) hist: Vec<usize>,
    pub(crate) trajectories: Vec<EventTrajectory>,
    pub(crate) metrics: SimulationMetrics,
    pub(crate) seed: u64,
    pub(crate) number_of_frames: usize,
}

impl SisResult {
    /// Infected count per run and frame.
    pub fn i(&self) -> &[Vec<usize>] {
        &self.i
    }

    /// SI-link count per run and frame.
    pub fn si(&self) -> &[Vec<usize>] {
        &self.si
    }

    /// Infected count at the end of each run.
    pub fn hist(&self) -> &[usize] {
        &self.hist
    }

    /// Event-resolved history of each run.
    pub fn trajectories(&self) -> &[EventTrajectory] {
        &self.trajectories
    }

    /// Counters for the whole ensemble.
    pub fn metrics(&self) -> &SimulationMetrics {
        &self.metrics
    }

    /// Seed the RNG was actually started from.
    ///
    /// Equal to the configured seed unless that was `0`.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of runs.
    pub fn number_of_runs(&self) -> usize {
        self.i.len()
    }

    /// Number of frames per run.
    pub fn number_of_frames(&self) -> usize {
        self.number_of_frames
    }

    /// Number of runs that died out before the end of the simulation.
    pub fn stopped_runs(&self) -> u64 {
        self.metrics.stopped_runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trajectory_records_in_parallel() {
        let mut tr = EventTrajectory::default();
        assert!(tr.is_empty());
        tr.record(0.0, 3, 2);
        tr.record(0.4, 4, 1);
        assert_eq!(tr.len(), 2);
        assert_eq!(tr.t, vec![0.0, 0.4]);
        assert_eq!(tr.i, vec![3, 4]);
        assert_eq!(tr.si, vec![2, 1]);
    }
}
