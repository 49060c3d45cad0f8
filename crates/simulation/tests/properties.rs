use approx::assert_abs_diff_eq;
use proptest::prelude::*;

use smoothcd_simulation::{
    MaxSpeed, Phase, Positioning, Prediction, SimulationConfig, Smoothing, run,
};

fn smoothing_strategy() -> impl Strategy<Value = Smoothing> {
    prop::sample::select(Smoothing::ALL.to_vec())
}

fn positioning_strategy() -> impl Strategy<Value = Positioning> {
    prop_oneof![Just(Positioning::Relative), Just(Positioning::Absolute)]
}

proptest! {
    #[test]
    fn identical_configs_give_identical_series(
        smoothing in smoothing_strategy(),
        positioning in positioning_strategy(),
        smooth_time in 0.0f64..3.0,
        speed in 0.5f64..20.0,
        delta_time in 0.01f64..0.05,
        positive in 0.0f64..2.0,
        neutral in 0.0f64..5.0,
        negative in 0.0f64..2.0,
        duration in 0.1f64..5.0,
    ) {
        let config = SimulationConfig::default()
            .with_smoothing(smoothing)
            .with_positioning(positioning)
            .with_smooth_time(smooth_time)
            .with_speed(speed)
            .with_delta_time(delta_time)
            .with_phases(positive, neutral, negative)
            .with_duration(duration);

        let first = run(&config).expect("valid config");
        let second = run(&config).expect("valid config");

        prop_assert_eq!(first.len(), config.steps());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn input_stays_within_unit_interval(
        positive in 0.0f64..2.0,
        neutral in 0.0f64..5.0,
        negative in 0.0f64..2.0,
        input_change_velocity in 1.0f64..100.0,
        delta_time in 0.01f64..0.05,
    ) {
        let config = SimulationConfig::default()
            .with_phases(positive, neutral, negative)
            .with_input_change_velocity(input_change_velocity)
            .with_delta_time(delta_time);

        let max_delta = input_change_velocity * delta_time;
        let mut previous = 0.0_f64;
        for value in config.waveform().cursor().take(2_000) {
            prop_assert!((-1.0..=1.0).contains(&value));
            prop_assert!((value - previous).abs() <= max_delta + 1e-12);
            previous = value;
        }
    }

    #[test]
    fn guarded_snaps_stop_the_object(
        guard in prop::sample::select(vec![Smoothing::ZeroCheck, Smoothing::MovingTarget]),
        positioning in positioning_strategy(),
        smooth_time in 0.05f64..2.0,
        speed in 0.5f64..20.0,
    ) {
        let config = SimulationConfig::default()
            .with_smoothing(guard)
            .with_positioning(positioning)
            .with_smooth_time(smooth_time)
            .with_speed(speed)
            .with_duration(6.0);

        for record in &run(&config).expect("valid config") {
            if record.overshoot.is_some_and(|overshoot| overshoot != 0.0) {
                prop_assert_eq!(record.distance, 0.0);
            }
            if record.distance == 0.0 {
                prop_assert_eq!(record.velocity, 0.0);
            }
        }
    }

    #[test]
    fn runs_never_produce_nan(
        smoothing in smoothing_strategy(),
        positioning in positioning_strategy(),
        smooth_time in -1.0f64..3.0,
        limited in proptest::bool::ANY,
    ) {
        let max_speed = if limited { MaxSpeed::Limited(3.0) } else { MaxSpeed::Unlimited };
        let config = SimulationConfig::default()
            .with_smoothing(smoothing)
            .with_positioning(positioning)
            .with_smooth_time(smooth_time)
            .with_max_speed(max_speed)
            .with_duration(4.0);

        for record in &run(&config).expect("valid config") {
            prop_assert!(record.position.is_finite());
            prop_assert!(record.velocity.is_finite());
            prop_assert!(record.target.is_finite());
        }
    }
}

#[test]
fn one_cycle_visits_plus_one_zero_minus_one_zero() {
    let config = SimulationConfig::default();
    let waveform = config.waveform();
    let mut cursor = waveform.cursor();

    let mut extremes: Vec<(Phase, f64)> = Vec::new();
    let mut previous = cursor.current();
    for _ in 0..waveform.cycle_steps() {
        cursor.advance();
        let value = cursor.current();
        let phase = cursor.phase();

        // Monotonic toward the phase target.
        if phase.target() > previous {
            assert!(value >= previous);
        } else {
            assert!(value <= previous);
        }
        previous = value;

        match extremes.last_mut() {
            Some((last, end)) if *last == phase => *end = value,
            _ => extremes.push((phase, value)),
        }
    }

    let ends: Vec<f64> = extremes.iter().map(|(_, end)| *end).collect();
    assert_eq!(ends.len(), 4);
    assert_abs_diff_eq!(ends[0], 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(ends[1], 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(ends[2], -1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(ends[3], 0.0, epsilon = 1e-9);
}

#[test]
fn zero_length_phases_hold_an_absolute_target() {
    // The input never leaves zero, so the target never moves.
    let config = SimulationConfig::default()
        .with_positioning(Positioning::Absolute)
        .with_phases(0.0, 0.0, 0.0)
        .with_smooth_time(0.4)
        .with_max_speed(f64::INFINITY)
        .with_duration(2.0);

    let series = run(&config).expect("valid config");
    assert!(series.iter().all(|record| record.target == 0.0));
    assert!(series.iter().all(|record| record.position == 0.0));
}

#[test]
fn prediction_variants_report_overshoot_every_step() {
    for prediction in [Prediction::PreAdjust, Prediction::VelocityBlend] {
        let config = SimulationConfig::default()
            .with_smoothing(Smoothing::OvershootPrediction(prediction))
            .with_duration(3.0);

        let series = run(&config).expect("valid config");
        assert!(series.iter().all(|record| record.overshoot.is_some()));
        assert!(series.peak_overshoot().is_some());
    }
}

#[test]
fn huge_but_finite_phase_lengths_run() {
    let config = SimulationConfig::default().with_phases(1.0, 1e300, 1.0);
    assert_eq!(config.validate(), Ok(()));

    let series = run(&config).expect("valid config");
    assert_eq!(series.len(), config.steps());
    assert!(series.iter().all(|record| record.input.is_finite()));
}
