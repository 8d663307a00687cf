//! Long-run behavioral trials for both filter families
//!
//! Seeded scenario runs checking convergence, reproducibility, and abort
//! semantics over realistic iteration counts.

use nalgebra::{DMatrix, DVector};
use rand::rngs::StdRng;
use rand::SeedableRng;

use recursive_bayes_rs::{
    DiscreteBeliefFilter, DiscreteSensorModel, DriverState, Filter, GaussianBeliefFilter,
    GaussianSensorModel, NoOpReporter, RecordingReporter, RunConfig, SequentialUpdateDriver,
};

/// Sensor that can distinguish target types, if only slightly
fn better_sensor_model() -> DiscreteSensorModel {
    DiscreteSensorModel::new(DMatrix::from_row_slice(
        3,
        3,
        &[0.5, 0.4, 0.1, 0.4, 0.5, 0.1, 0.1, 0.1, 0.8],
    ))
    .unwrap()
}

/// Sensor that detects presence well but confuses target types
fn target_detector_model() -> DiscreteSensorModel {
    DiscreteSensorModel::new(DMatrix::from_row_slice(
        3,
        3,
        &[0.45, 0.45, 0.1, 0.45, 0.45, 0.1, 0.1, 0.1, 0.8],
    ))
    .unwrap()
}

/// Sensor that discriminates target types well but detects presence poorly
fn target_discriminator_model() -> DiscreteSensorModel {
    DiscreteSensorModel::new(DMatrix::from_row_slice(
        3,
        3,
        &[0.45, 0.1, 0.45, 0.1, 0.45, 0.45, 0.45, 0.45, 0.1],
    ))
    .unwrap()
}

#[test]
fn discrete_posterior_converges_to_true_state() {
    // Diagonal-dominant sensor, fixed true state: repeated updates drive the
    // posterior mass on the true state toward 1
    let sensor = better_sensor_model();
    let mut filter = DiscreteBeliefFilter::uniform(3).unwrap();
    let mut driver = SequentialUpdateDriver::new(RunConfig::new(5000).with_seed(42));

    let posterior = driver
        .run_seeded(&mut filter, &sensor, &0, &mut NoOpReporter)
        .unwrap();

    assert_eq!(driver.state(), DriverState::Done);
    assert!(
        posterior.probability(0) > 0.99,
        "posterior on true state was {}",
        posterior.probability(0)
    );
    assert_eq!(posterior.most_probable_state(), 0);
}

#[test]
fn discrete_posterior_stays_normalized_along_trajectory() {
    let sensor = better_sensor_model();
    let mut filter = DiscreteBeliefFilter::uniform(3).unwrap();
    let mut driver = SequentialUpdateDriver::new(RunConfig::new(200).with_seed(7));
    let mut reporter = RecordingReporter::new();

    driver
        .run_seeded(&mut filter, &sensor, &1, &mut reporter)
        .unwrap();

    for (_, belief) in reporter.updates() {
        assert!((belief.probabilities().sum() - 1.0).abs() < 1e-9);
        assert!(belief.probabilities().iter().all(|&p| p >= 0.0));
    }
}

#[test]
fn interleaved_detector_and_discriminator_identify_target_type() {
    // Alternating two complementary sensors against a single filter: the
    // detector establishes that a target is present, the discriminator which
    // type it is
    let detector = target_detector_model();
    let discriminator = target_discriminator_model();

    let mut filter = DiscreteBeliefFilter::uniform(3).unwrap();
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..50 {
        filter.step(&mut rng, &detector, &0).unwrap();
        filter.step(&mut rng, &discriminator, &0).unwrap();
    }

    let belief = filter.belief();
    assert!((belief.probabilities().sum() - 1.0).abs() < 1e-9);
    assert!(
        belief.probability(0) > 0.9,
        "posterior on true state was {}",
        belief.probability(0)
    );
}

#[test]
fn gaussian_variance_follows_closed_form_over_long_run() {
    // Equal prior and measurement variance v: after n updates the posterior
    // variance is exactly v / (n + 1), independent of the drawn samples
    let v = 8.0;
    let sensor = GaussianSensorModel::scalar(3.0, v).unwrap();
    let truth = DVector::from_vec(vec![3.0]);
    let mut filter = GaussianBeliefFilter::scalar(3.0, v).unwrap();

    let iterations = 100;
    let mut driver = SequentialUpdateDriver::new(RunConfig::new(iterations).with_seed(1234));
    let posterior = driver
        .run_seeded(&mut filter, &sensor, &truth, &mut NoOpReporter)
        .unwrap();

    let expected_variance = v / (iterations as f64 + 1.0);
    assert!((posterior.variance()[0] - expected_variance).abs() < 1e-9);
    assert!(
        (posterior.mean()[0] - 3.0).abs() < 1.0,
        "estimate {} drifted from the true position",
        posterior.mean()[0]
    );
}

#[test]
fn gaussian_variance_shrinks_monotonically() {
    let sensor = GaussianSensorModel::scalar(0.0, 2.0).unwrap();
    let truth = DVector::from_vec(vec![0.0]);
    let mut filter = GaussianBeliefFilter::scalar(1.0, 5.0).unwrap();
    let mut driver = SequentialUpdateDriver::new(RunConfig::new(50).with_seed(99));
    let mut reporter = RecordingReporter::new();

    driver
        .run_seeded(&mut filter, &sensor, &truth, &mut reporter)
        .unwrap();

    let mut previous = 5.0;
    for (_, belief) in reporter.updates() {
        let variance = belief.variance()[0];
        assert!(variance > 0.0);
        assert!(variance < previous);
        previous = variance;
    }
}

#[test]
fn identical_seeds_reproduce_identical_gaussian_trajectories() {
    let sensor = GaussianSensorModel::new(
        DVector::from_vec(vec![15.0, 25.0]),
        DVector::from_vec(vec![0.1, 60.0]),
    )
    .unwrap();
    let truth = DVector::from_vec(vec![15.0, 25.0]);

    let mut runs = Vec::new();
    for _ in 0..2 {
        let mut filter = GaussianBeliefFilter::new(
            DVector::from_vec(vec![15.0, 25.0]),
            DVector::from_vec(vec![20.0, 20.0]),
        )
        .unwrap();
        let mut driver = SequentialUpdateDriver::new(RunConfig::new(40).with_seed(1234));
        let mut reporter = RecordingReporter::new();
        driver
            .run_seeded(&mut filter, &sensor, &truth, &mut reporter)
            .unwrap();
        runs.push(reporter);
    }

    assert_eq!(runs[0].updates().len(), runs[1].updates().len());
    for (a, b) in runs[0].updates().iter().zip(runs[1].updates()) {
        assert_eq!(a.1.mean(), b.1.mean());
        assert_eq!(a.1.variance(), b.1.variance());
    }
}

#[test]
fn contradictory_model_aborts_with_iteration_index() {
    // The prior is certain of state 1, but state 1 never emits the
    // measurement that state 0 (the truth) always produces
    let sensor =
        DiscreteSensorModel::new(DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0])).unwrap();
    let mut filter = DiscreteBeliefFilter::new(DVector::from_vec(vec![0.0, 1.0])).unwrap();
    let mut driver = SequentialUpdateDriver::new(RunConfig::new(10).with_seed(5));
    let mut reporter = RecordingReporter::new();

    let err = driver
        .run_seeded(&mut filter, &sensor, &0, &mut reporter)
        .unwrap_err();

    assert_eq!(err.iteration(), Some(0));
    assert_eq!(driver.state(), DriverState::Failed);
    assert_eq!(reporter.failure().unwrap().0, 0);

    // The filter keeps its last good posterior (here, the prior)
    assert!((filter.belief().probability(1) - 1.0).abs() < 1e-12);
}

#[test]
fn independent_tracks_do_not_interfere() {
    // Two targets, two filters, one shared immutable sensor model
    let sensor = better_sensor_model();
    let mut track_a = DiscreteBeliefFilter::uniform(3).unwrap();
    let mut track_b = DiscreteBeliefFilter::uniform(3).unwrap();
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..300 {
        track_a.step(&mut rng, &sensor, &0).unwrap();
        track_b.step(&mut rng, &sensor, &2).unwrap();
    }

    assert_eq!(track_a.belief().most_probable_state(), 0);
    assert_eq!(track_b.belief().most_probable_state(), 2);
}
