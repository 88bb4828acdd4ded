//! The temporal Gillespie SIS simulator.
//!
//! Each run draws a normalised waiting time `τ ~ Exp(1)` and walks the
//! slices in order. A slice with total rate `Λ = β·SI + μ·I` consumes
//! `Λ` units of `τ`. When `τ` runs out inside a slice an event fires at
//! the corresponding fraction of the slice, rates are recomputed from
//! the new state, and a fresh `τ` is drawn for the remainder. Rates are
//! constant within a slice, so this samples the exact continuous-time
//! process on the piecewise-constant network.
//!
//! The network repeats from slice 0 once exhausted, so `T_simulation`
//! may exceed its length. The first pass may start late via
//! `t_infection_start`.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use dyngill_core::{Contact, ContactSlice, NodeId, TemporalNetwork};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use crate::sampling::{uniform_index, unit_exponential};
use crate::{EventTrajectory, SimError, SimulationMetrics, SisConfig, SisResult};

/// Homogeneous, Poissonian SIS simulator on a temporal network.
///
/// Construct once per configuration, then [`run`](Self::run) it on any
/// network with a matching population.
#[derive(Clone, Debug)]
pub struct SisPoissonHomogeneous {
    config: SisConfig,
}

/// Run an SIS ensemble on `network` in one call.
///
/// Equivalent to `SisPoissonHomogeneous::new(config.clone()).run(network)`.
pub fn sis_poisson_homogeneous(
    network: &TemporalNetwork,
    config: &SisConfig,
) -> Result<SisResult, SimError> {
    SisPoissonHomogeneous::new(config.clone()).run(network)
}

impl SisPoissonHomogeneous {
    /// Create a simulator for `config`.
    pub fn new(config: SisConfig) -> Self {
        Self { config }
    }

    /// The configuration this simulator runs with.
    pub fn config(&self) -> &SisConfig {
        &self.config
    }

    /// Simulate `number_of_simulations` independent runs on `network`.
    ///
    /// All runs draw from one ChaCha8 stream, so a non-zero seed makes
    /// the whole ensemble reproducible.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the network has no slices, its population
    /// differs from the configured `node_count`, or `t_infection_start`
    /// is not a valid slice index.
    pub fn run(&self, network: &TemporalNetwork) -> Result<SisResult, SimError> {
        let cfg = &self.config;
        let slices = network.slices();

        if slices.is_empty() {
            return Err(SimError::EmptyNetwork);
        }
        if network.node_count() != cfg.node_count() {
            return Err(SimError::PopulationMismatch {
                config: cfg.node_count(),
                network: network.node_count(),
            });
        }
        if cfg.t_infection_start() >= slices.len() {
            return Err(SimError::StartSliceOutOfRange {
                start: cfg.t_infection_start(),
                slices: slices.len(),
            });
        }

        let seed = resolve_seed(cfg.seed());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let runs = cfg.number_of_simulations();
        let frames = cfg.number_of_frames(slices.len());
        let t_simulation = cfg.effective_t_simulation(slices.len());
        let resolution = cfg.output_time_resolution();
        let beta = cfg.infection_rate();
        let mu = cfg.recovery_rate();
        let verbose = cfg.verbose();

        let mut sum_i = vec![vec![0usize; frames]; runs];
        let mut sum_si = vec![vec![0usize; frames]; runs];
        let mut hist = vec![0usize; runs];
        let mut trajectories = Vec::with_capacity(runs);
        let mut metrics = SimulationMetrics::default();
        let mut state = Epidemic::new(cfg.node_count());

        let started = Instant::now();

        for q in 0..runs {
            if verbose {
                debug!(run = q, ensemble = runs, "starting run");
            }

            state.reset(cfg.initial_number_of_infected() as usize, &mut rng);
            let mut trajectory = EventTrajectory::default();
            let mut tau = unit_exponential(&mut rng);
            let mut t = 0usize;
            let mut first_slice = cfg.t_infection_start();

            'run: while state.infected_count() > 0 && t < t_simulation {
                if verbose {
                    debug!(run = q, t, infected = ?state.infected, "loading network from start");
                }

                for slice in &slices[first_slice..] {
                    if t >= t_simulation {
                        break 'run;
                    }

                    let mut si = state.collect_si(slice);
                    trajectory.record(t as f64, state.infected_count(), si);

                    let mut infection_total = beta * si as f64;
                    let mut lambda = infection_total + mu * state.infected_count() as f64;

                    if verbose {
                        debug!(
                            run = q,
                            t,
                            contacts = slice.len(),
                            si,
                            lambda,
                            tau,
                            "slice"
                        );
                    }

                    if tau >= lambda {
                        tau -= lambda;
                    } else {
                        // Fraction of the slice not yet consumed.
                        let mut xi = 1.0;
                        while tau < xi * lambda {
                            xi -= tau / lambda;
                            let r = lambda * rng.random::<f64>();

                            if r < infection_total {
                                let node = state.infect(uniform_index(&mut rng, si));
                                metrics.infection_events += 1;
                                if verbose {
                                    trace!(run = q, t, node = %node, "infection");
                                }
                            } else {
                                let node =
                                    state.recover(uniform_index(&mut rng, state.infected_count()));
                                metrics.recovery_events += 1;
                                if verbose {
                                    trace!(run = q, t, node = %node, "recovery");
                                }
                            }

                            si = state.collect_si(slice);
                            infection_total = beta * si as f64;
                            lambda = infection_total + mu * state.infected_count() as f64;
                            trajectory.record(t as f64 + 1.0 - xi, state.infected_count(), si);

                            tau = unit_exponential(&mut rng);
                        }
                        tau -= xi * lambda;
                    }
                    metrics.slices_processed += 1;

                    if state.infected_count() == 0 {
                        metrics.stopped_runs += 1;
                        break 'run;
                    }

                    if t % resolution == 0 {
                        let frame = t / resolution;
                        if frame < frames {
                            sum_i[q][frame] = state.infected_count();
                            sum_si[q][frame] = si;
                        }
                    }
                    t += 1;
                }
                first_slice = 0;
            }

            hist[q] = state.infected_count();
            trajectories.push(trajectory);
        }

        metrics.total_us = started.elapsed().as_micros() as u64;

        if verbose {
            info!(
                n = cfg.node_count(),
                beta,
                mu,
                resolution,
                elapsed_us = metrics.total_us,
                stopped = metrics.stopped_runs,
                ensemble = runs,
                "temporal Gillespie, homogeneous & Poissonian SIS finished"
            );
        } else {
            debug!(
                n = cfg.node_count(),
                beta,
                mu,
                elapsed_us = metrics.total_us,
                stopped = metrics.stopped_runs,
                ensemble = runs,
                "SIS ensemble finished"
            );
        }

        Ok(SisResult {
            i: sum_i,
            si: sum_si,
            hist,
            trajectories,
            metrics,
            seed,
            number_of_frames: frames,
        })
    }
}

/// `0` asks for a seed derived from the system clock.
fn resolve_seed(seed: u64) -> u64 {
    if seed != 0 {
        return seed;
    }
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1);
    nanos.max(1)
}

/// Per-run epidemic state, reused across runs to avoid reallocation.
struct Epidemic {
    is_infected: Vec<bool>,
    /// Currently infected nodes, unordered.
    infected: Vec<NodeId>,
    /// Susceptible endpoint of every SI contact in the current slice.
    /// A node in contact with k infected nodes appears k times.
    si_susceptibles: Vec<NodeId>,
    /// Scratch pool for choosing initial infected nodes.
    pool: Vec<NodeId>,
}

impl Epidemic {
    fn new(node_count: u32) -> Self {
        Self {
            is_infected: vec![false; node_count as usize],
            infected: Vec::new(),
            si_susceptibles: Vec::new(),
            pool: (0..node_count).map(NodeId).collect(),
        }
    }

    /// Everyone susceptible, then `initial` distinct random nodes infected.
    fn reset(&mut self, initial: usize, rng: &mut ChaCha8Rng) {
        self.is_infected.fill(false);
        self.infected.clear();
        self.si_susceptibles.clear();

        let (chosen, _) = self.pool.partial_shuffle(rng, initial);
        for &node in chosen.iter() {
            self.is_infected[node.index()] = true;
            self.infected.push(node);
        }
    }

    fn infected_count(&self) -> usize {
        self.infected.len()
    }

    /// Rebuild the SI list for `slice`; returns the number of SI links.
    fn collect_si(&mut self, slice: &ContactSlice) -> usize {
        self.si_susceptibles.clear();
        for &Contact(i, j) in slice {
            match (self.is_infected[i.index()], self.is_infected[j.index()]) {
                (true, false) => self.si_susceptibles.push(j),
                (false, true) => self.si_susceptibles.push(i),
                _ => {}
            }
        }
        self.si_susceptibles.len()
    }

    /// Infect the susceptible end of the `k`-th SI link.
    fn infect(&mut self, k: usize) -> NodeId {
        let node = self.si_susceptibles[k];
        self.is_infected[node.index()] = true;
        self.infected.push(node);
        node
    }

    /// Recover the `k`-th infected node.
    fn recover(&mut self, k: usize) -> NodeId {
        let node = self.infected.swap_remove(k);
        self.is_infected[node.index()] = false;
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dyngill_test_utils::{complete_network, empty_network, path_network};

    fn config(n: u32) -> crate::SisConfigBuilder {
        SisConfig::builder()
            .node_count(n)
            .infection_rate(1.0)
            .recovery_rate(1.0)
            .seed(7)
    }

    #[test]
    fn rejects_empty_network() {
        let net = TemporalNetwork::new(4, vec![]).unwrap();
        let sim = SisPoissonHomogeneous::new(config(4).build().unwrap());
        assert_eq!(sim.run(&net), Err(SimError::EmptyNetwork));
    }

    #[test]
    fn rejects_population_mismatch() {
        let net = complete_network(5, 3);
        let sim = SisPoissonHomogeneous::new(config(4).build().unwrap());
        assert_eq!(
            sim.run(&net),
            Err(SimError::PopulationMismatch {
                config: 4,
                network: 5
            })
        );
    }

    #[test]
    fn rejects_start_beyond_network() {
        let net = complete_network(4, 3);
        let sim = SisPoissonHomogeneous::new(config(4).t_infection_start(3).build().unwrap());
        assert_eq!(
            sim.run(&net),
            Err(SimError::StartSliceOutOfRange {
                start: 3,
                slices: 3
            })
        );
    }

    #[test]
    fn result_shape_matches_config() {
        let net = complete_network(6, 4);
        let cfg = config(6)
            .t_simulation(25)
            .output_time_resolution(2)
            .number_of_simulations(7)
            .build()
            .unwrap();
        let res = sis_poisson_homogeneous(&net, &cfg).unwrap();
        assert_eq!(res.number_of_runs(), 7);
        assert_eq!(res.number_of_frames(), 12);
        assert!(res.i().iter().all(|run| run.len() == 12));
        assert!(res.si().iter().all(|run| run.len() == 12));
        assert_eq!(res.hist().len(), 7);
        assert_eq!(res.trajectories().len(), 7);
        assert_eq!(res.seed(), 7);
    }

    #[test]
    fn zero_seed_resolves_to_clock() {
        let net = complete_network(3, 2);
        let cfg = config(3).seed(0).build().unwrap();
        let res = sis_poisson_homogeneous(&net, &cfg).unwrap();
        assert_ne!(res.seed(), 0);
    }

    #[test]
    fn no_contacts_no_recovery_keeps_initial_infected() {
        let net = empty_network(8, 5);
        let cfg = config(8)
            .recovery_rate(0.0)
            .initial_number_of_infected(3)
            .t_simulation(5)
            .number_of_simulations(3)
            .build()
            .unwrap();
        let res = sis_poisson_homogeneous(&net, &cfg).unwrap();
        for run in res.i() {
            assert_eq!(run, &vec![3; 5]);
        }
        for run in res.si() {
            assert_eq!(run, &vec![0; 5]);
        }
        assert_eq!(res.metrics().total_events(), 0);
        assert_eq!(res.stopped_runs(), 0);
        assert_eq!(res.hist(), &[3, 3, 3]);
    }

    #[test]
    fn complete_graph_without_recovery_saturates() {
        let net = complete_network(5, 10);
        let cfg = config(5)
            .infection_rate(1e6)
            .recovery_rate(0.0)
            .t_simulation(10)
            .build()
            .unwrap();
        let res = sis_poisson_homogeneous(&net, &cfg).unwrap();
        // With an overwhelming rate everyone is infected within slice 0.
        assert_eq!(res.i()[0][0], 5);
        assert_eq!(res.si()[0][0], 0);
        assert_eq!(res.metrics().infection_events, 4);
        assert_eq!(res.metrics().recovery_events, 0);
    }

    #[test]
    fn fast_recovery_without_contacts_dies_out() {
        let net = empty_network(4, 3);
        let cfg = config(4)
            .recovery_rate(1e6)
            .initial_number_of_infected(2)
            .t_simulation(30)
            .number_of_simulations(5)
            .build()
            .unwrap();
        let res = sis_poisson_homogeneous(&net, &cfg).unwrap();
        assert_eq!(res.stopped_runs(), 5);
        assert!(res.i().iter().flatten().all(|&x| x == 0));
        assert!(res.hist().iter().all(|&x| x == 0));
        assert_eq!(res.metrics().recovery_events, 10);
    }

    #[test]
    fn network_repeats_when_simulation_is_longer() {
        let net = empty_network(3, 2);
        let cfg = config(3)
            .recovery_rate(0.0)
            .t_simulation(9)
            .build()
            .unwrap();
        let res = sis_poisson_homogeneous(&net, &cfg).unwrap();
        assert_eq!(res.metrics().slices_processed, 9);
        assert_eq!(res.i()[0], vec![1; 9]);
    }

    #[test]
    fn late_start_processes_fewer_slices_on_first_pass() {
        let net = empty_network(3, 4);
        let cfg = config(3)
            .recovery_rate(0.0)
            .t_infection_start(3)
            .t_simulation(4)
            .build()
            .unwrap();
        let res = sis_poisson_homogeneous(&net, &cfg).unwrap();
        assert_eq!(res.metrics().slices_processed, 4);
        // Slice 3 first, then 0, 1, 2.
        assert_eq!(res.trajectories()[0].t, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn infection_travels_only_along_contacts() {
        // Contacts only among nodes 0..=2; nodes 3 and 4 are isolated.
        let net = path_network(5, 3, 6);
        let cfg = config(5)
            .infection_rate(1e6)
            .recovery_rate(0.0)
            .t_simulation(6)
            .number_of_simulations(40)
            .build()
            .unwrap();
        let res = sis_poisson_homogeneous(&net, &cfg).unwrap();
        assert!(res.hist().iter().all(|&h| h == 1 || h == 3), "{:?}", res.hist());
        assert!(res.hist().contains(&1));
        assert!(res.hist().contains(&3));
    }

    fn self_loop_network(n: u32, extra: &[(u32, u32)]) -> TemporalNetwork {
        let mut pairs: Vec<(u32, u32)> = (0..n).map(|v| (v, v)).collect();
        pairs.extend_from_slice(extra);
        TemporalNetwork::from_pairs(n, [pairs]).unwrap()
    }

    #[test]
    fn self_contacts_never_form_si_links() {
        // All infected, then one infected among otherwise susceptible nodes.
        for (n, initial) in [(2, 2), (3, 1)] {
            let net = self_loop_network(n, &[]);
            let cfg = config(n)
                .infection_rate(1e6)
                .recovery_rate(0.0)
                .initial_number_of_infected(initial)
                .t_simulation(4)
                .number_of_simulations(10)
                .build()
                .unwrap();
            let res = sis_poisson_homogeneous(&net, &cfg).unwrap();
            assert!(res.si().iter().flatten().all(|&si| si == 0));
            assert!(res.trajectories().iter().all(|tr| tr.si.iter().all(|&si| si == 0)));
            assert_eq!(res.metrics().infection_events, 0);
            assert!(res.hist().iter().all(|&h| h == initial as usize));
        }
    }

    #[test]
    fn only_the_real_contact_transmits_among_self_contacts() {
        let net = self_loop_network(3, &[(0, 1)]);
        let cfg = config(3)
            .infection_rate(1e6)
            .recovery_rate(0.0)
            .t_simulation(2)
            .number_of_simulations(60)
            .build()
            .unwrap();
        let res = sis_poisson_homogeneous(&net, &cfg).unwrap();
        for (tr, &h) in res.trajectories().iter().zip(res.hist()) {
            // Seeded at 0 or 1: one SI link, one infection. Seeded at 2: none.
            match h {
                2 => assert_eq!(tr.si[0], 1),
                1 => assert_eq!(tr.si[0], 0),
                other => panic!("unexpected final size {other}"),
            }
        }
        let spread = res.hist().iter().filter(|&&h| h == 2).count() as u64;
        assert_eq!(res.metrics().infection_events, spread);
        assert!(res.si().iter().flatten().all(|&si| si == 0));
        assert!(res.hist().contains(&1) && res.hist().contains(&2));
    }

    #[test]
    fn initial_infected_are_distinct() {
        // Everyone seeded on a complete graph: any duplicate pick would
        // leave a susceptible node and an SI link behind.
        let net = complete_network(7, 2);
        let cfg = config(7)
            .infection_rate(1e6)
            .recovery_rate(0.0)
            .initial_number_of_infected(7)
            .t_simulation(2)
            .number_of_simulations(20)
            .build()
            .unwrap();
        let res = sis_poisson_homogeneous(&net, &cfg).unwrap();
        assert_eq!(res.metrics().infection_events, 0);
        assert!(res.trajectories().iter().all(|tr| tr.si[0] == 0 && tr.i[0] == 7));
    }

    #[test]
    fn event_times_stay_inside_their_slice() {
        let net = complete_network(10, 5);
        let cfg = config(10)
            .infection_rate(0.5)
            .recovery_rate(0.8)
            .t_simulation(40)
            .number_of_simulations(10)
            .build()
            .unwrap();
        let res = sis_poisson_homogeneous(&net, &cfg).unwrap();
        for tr in res.trajectories() {
            assert!(tr.t.windows(2).all(|w| w[0] <= w[1]), "{:?}", tr.t);
            assert!(tr.t.iter().all(|&t| (0.0..40.0).contains(&t)));
        }
    }
}
