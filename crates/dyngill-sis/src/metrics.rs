//! Counters collected while an ensemble runs.

/// Event counts and timing for one call to
/// [`SisPoissonHomogeneous::run`](crate::SisPoissonHomogeneous::run),
/// summed over all runs of the ensemble.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimulationMetrics {
    /// Wall-clock time of the whole ensemble, in microseconds.
    pub total_us: u64,
    /// Number of S→I transitions.
    pub infection_events: u64,
    /// Number of I→S transitions.
    pub recovery_events: u64,
    /// Number of slices stepped through.
    pub slices_processed: u64,
    /// Number of runs that died out (`I = 0`) before `T_simulation`.
    pub stopped_runs: u64,
}

impl SimulationMetrics {
    /// Total number of Gillespie events.
    pub fn total_events(&self) -> u64 {
        self.infection_events + self.recovery_events
    }
}
