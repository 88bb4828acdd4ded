//! The facade exposes a complete network → ensemble → summary workflow.

use dyngill::obs::write_summary_table;
use dyngill::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn full_workflow_through_prelude() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let network = random_temporal_network(12, 0.3, 5, &mut rng).unwrap();

    let config = SisConfig::builder()
        .node_count(12)
        .infection_rate(2.0)
        .recovery_rate(0.5)
        .t_simulation(20)
        .output_time_resolution(2)
        .number_of_simulations(10)
        .initial_number_of_infected(2)
        .seed(5)
        .build()
        .unwrap();
    let result = sis_poisson_homogeneous(&network, &config).unwrap();
    assert_eq!(result.number_of_frames(), 10);

    let infected = EnsembleSummary::from_runs(result.i()).unwrap();
    let si = EnsembleSummary::from_runs(result.si()).unwrap();
    let mut table = Vec::new();
    write_summary_table(&mut table, 2, &[("I", &infected), ("SI", &si)]).unwrap();
    assert_eq!(String::from_utf8(table).unwrap().lines().count(), 11);

    let sizes = final_size_histogram(result.hist(), 12).unwrap();
    assert_eq!(sizes.iter().sum::<usize>(), 10);
}

#[test]
fn errors_are_distinguishable() {
    let net = TemporalNetwork::from_pairs(3, [vec![(0, 1)]]).unwrap();
    let config = SisConfig::builder()
        .node_count(4)
        .infection_rate(1.0)
        .recovery_rate(1.0)
        .build()
        .unwrap();
    assert!(matches!(
        sis_poisson_homogeneous(&net, &config),
        Err(SimError::PopulationMismatch { .. })
    ));
    assert!(matches!(
        TemporalNetwork::from_pairs(2, [vec![(0, 2)]]),
        Err(NetworkError::NodeOutOfRange { .. })
    ));
}
