use std::fmt;

use smoothcd_core::{Approach, Damping, Outcome, Smoother};

use crate::{Base, MovingTarget, PreAdjust, Prediction, SpeedClamped, VelocityBlend, ZeroCheck};

/// Fraction of a predicted overshoot corrected when none is given.
pub const DEFAULT_OVERSHOOT_CORRECTION: f64 = 0.5;

/// The closed set of smoothing functions, selectable at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Smoothing {
    /// See [`Base`].
    Base,

    /// See [`SpeedClamped`].
    #[default]
    SpeedClamped,

    /// See [`ZeroCheck`].
    ZeroCheck,

    /// See [`MovingTarget`].
    MovingTarget,

    /// See [`PreAdjust`] and [`VelocityBlend`].
    OvershootPrediction(Prediction),
}

impl Smoothing {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Base,
        Self::SpeedClamped,
        Self::ZeroCheck,
        Self::MovingTarget,
        Self::OvershootPrediction(Prediction::PreAdjust),
        Self::OvershootPrediction(Prediction::VelocityBlend),
    ];

    /// Returns `true` if this variant reports an overshoot measurement.
    #[must_use]
    pub fn measures_overshoot(self) -> bool {
        !matches!(self, Self::Base | Self::SpeedClamped)
    }

    /// Binds this variant to an overshoot correction coefficient.
    ///
    /// The coefficient is only used by [`Smoothing::OvershootPrediction`].
    #[must_use]
    pub fn engine(self, overshoot_correction: f64) -> SmoothingEngine {
        SmoothingEngine::new(self, overshoot_correction)
    }
}

impl fmt::Display for Smoothing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Base => "base",
            Self::SpeedClamped => "speed-clamped",
            Self::ZeroCheck => "zero-check",
            Self::MovingTarget => "moving-target",
            Self::OvershootPrediction(Prediction::PreAdjust) => "pre-adjust",
            Self::OvershootPrediction(Prediction::VelocityBlend) => "velocity-blend",
        };
        f.write_str(name)
    }
}

/// A [`Smoothing`] choice together with the parameters it needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingEngine {
    smoothing: Smoothing,
    overshoot_correction: f64,
}

impl SmoothingEngine {
    /// Creates an engine; `overshoot_correction` is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(smoothing: Smoothing, overshoot_correction: f64) -> Self {
        Self {
            smoothing,
            overshoot_correction: overshoot_correction.clamp(0.0, 1.0),
        }
    }

    /// The selected variant.
    #[must_use]
    pub fn smoothing(&self) -> Smoothing {
        self.smoothing
    }
}

/// Binds [`DEFAULT_OVERSHOOT_CORRECTION`].
impl From<Smoothing> for SmoothingEngine {
    fn from(smoothing: Smoothing) -> Self {
        Self::new(smoothing, DEFAULT_OVERSHOOT_CORRECTION)
    }
}

impl Smoother for SmoothingEngine {
    fn smooth(&self, approach: &Approach, damping: &Damping) -> Outcome {
        match self.smoothing {
            Smoothing::Base => Base.smooth(approach, damping),
            Smoothing::SpeedClamped => SpeedClamped.smooth(approach, damping),
            Smoothing::ZeroCheck => ZeroCheck.smooth(approach, damping),
            Smoothing::MovingTarget => MovingTarget.smooth(approach, damping),
            Smoothing::OvershootPrediction(Prediction::PreAdjust) => {
                PreAdjust::new(self.overshoot_correction).smooth(approach, damping)
            }
            Smoothing::OvershootPrediction(Prediction::VelocityBlend) => {
                VelocityBlend::new(self.overshoot_correction).smooth(approach, damping)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use smoothcd_core::{MaxSpeed, Motion};

    #[test]
    fn default_is_speed_clamped() {
        assert_eq!(Smoothing::default(), Smoothing::SpeedClamped);
    }

    #[test]
    fn names_are_distinct() {
        let mut names: Vec<String> = Smoothing::ALL.iter().map(ToString::to_string).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Smoothing::ALL.len());
    }

    #[test]
    fn dispatch_matches_direct_smoother() {
        let damping = Damping::new(0.4, MaxSpeed::Limited(2.0), 0.05);
        let approach = Approach::toward(Motion::new(0.5, 3.0), 1.0)
            .with_previous_target(0.8)
            .with_target_velocity(0.25);

        let engine = Smoothing::OvershootPrediction(Prediction::PreAdjust).engine(0.3);
        assert_eq!(
            engine.smooth(&approach, &damping),
            PreAdjust::new(0.3).smooth(&approach, &damping)
        );

        let engine = SmoothingEngine::from(Smoothing::MovingTarget);
        assert_eq!(
            engine.smooth(&approach, &damping),
            MovingTarget.smooth(&approach, &damping)
        );
    }

    #[test]
    fn conversion_uses_default_correction() {
        let damping = Damping::new(0.5, MaxSpeed::Limited(10.0), 1.0 / 30.0);
        let approach = Approach::toward(Motion::new(0.0, 7.0), 1.0);

        for prediction in [Prediction::PreAdjust, Prediction::VelocityBlend] {
            let smoothing = Smoothing::OvershootPrediction(prediction);
            let converted = SmoothingEngine::from(smoothing).smooth(&approach, &damping);

            assert_eq!(
                converted,
                smoothing
                    .engine(DEFAULT_OVERSHOOT_CORRECTION)
                    .smooth(&approach, &damping)
            );
            assert_ne!(converted, smoothing.engine(0.0).smooth(&approach, &damping));
        }
    }

    #[test]
    fn overshoot_is_reported_only_by_measuring_variants() {
        let damping = Damping::unlimited(1.0, 0.1);
        let approach = Approach::toward(Motion::at_rest(0.0), 1.0);

        for smoothing in Smoothing::ALL {
            let outcome = smoothing.engine(0.5).smooth(&approach, &damping);
            assert_eq!(
                outcome.overshoot.is_some(),
                smoothing.measures_overshoot(),
                "{smoothing}"
            );
        }
    }

    proptest! {
        #[test]
        fn no_variant_produces_nan(
            position in -1e6f64..1e6,
            velocity in -1e4f64..1e4,
            target in -1e6f64..1e6,
            previous_target in -1e6f64..1e6,
            target_velocity in -1e3f64..1e3,
            smooth_time in -1.0f64..5.0,
            dt in 0.001f64..0.1,
            limited in proptest::bool::ANY,
        ) {
            let max_speed = if limited { MaxSpeed::Limited(20.0) } else { MaxSpeed::Unlimited };
            let damping = Damping::new(smooth_time, max_speed, dt);
            let approach = Approach::toward(Motion::new(position, velocity), target)
                .with_previous_target(previous_target)
                .with_target_velocity(target_velocity);

            for smoothing in Smoothing::ALL {
                let outcome = smoothing.engine(0.5).smooth(&approach, &damping);
                prop_assert!(outcome.motion.position.is_finite(), "{smoothing}");
                prop_assert!(outcome.motion.velocity.is_finite(), "{smoothing}");
            }
        }

        #[test]
        fn speed_clamp_bounds_implied_displacement(
            position in -1e4f64..1e4,
            target in -1e4f64..1e4,
            max_speed in 0.1f64..50.0,
            smooth_time in 0.01f64..3.0,
        ) {
            let damping = Damping::new(smooth_time, MaxSpeed::Limited(max_speed), 1.0 / 30.0);
            let motion = Motion::at_rest(position);
            let limit = max_speed * smooth_time;

            // Clamping the target by hand must not change the result.
            let nearest = target.clamp(position - limit, position + limit);
            let far = SpeedClamped.smooth(&Approach::toward(motion, target), &damping);
            let near = SpeedClamped.smooth(&Approach::toward(motion, nearest), &damping);

            prop_assert!((far.motion.position - near.motion.position).abs() <= 1e-9 * (1.0 + position.abs()));
            prop_assert!((far.motion.velocity - near.motion.velocity).abs() <= 1e-9 * (1.0 + limit));
        }
    }
}
