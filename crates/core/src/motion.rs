/// Position and velocity of the smoothed object.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Motion {
    pub position: f64,
    pub velocity: f64,
}

impl Motion {
    /// Creates a motion state.
    #[must_use]
    pub fn new(position: f64, velocity: f64) -> Self {
        Self { position, velocity }
    }

    /// An object at `position` with no velocity.
    #[must_use]
    pub fn at_rest(position: f64) -> Self {
        Self::new(position, 0.0)
    }
}

/// Everything a smoother knows about the target on a single step.
///
/// `previous_target` is the target before this step's update and is only
/// consulted by the moving-target guard. `target_velocity` is the target's
/// own rate of change and is only consulted by the predictive variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Approach {
    pub motion: Motion,
    pub target: f64,
    pub previous_target: f64,
    pub target_velocity: f64,
}

impl Approach {
    /// Approaches a stationary `target`.
    ///
    /// The previous target equals the current one and the target velocity is zero.
    #[must_use]
    pub fn toward(motion: Motion, target: f64) -> Self {
        Self {
            motion,
            target,
            previous_target: target,
            target_velocity: 0.0,
        }
    }

    /// Sets the target value from before this step's update.
    #[must_use]
    pub fn with_previous_target(mut self, previous_target: f64) -> Self {
        self.previous_target = previous_target;
        self
    }

    /// Sets the target's own rate of change.
    #[must_use]
    pub fn with_target_velocity(mut self, target_velocity: f64) -> Self {
        self.target_velocity = target_velocity;
        self
    }

    /// Signed distance from the object to the target.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.target - self.motion.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stationary_approach_defaults() {
        let approach = Approach::toward(Motion::at_rest(2.0), 5.0);

        assert_eq!(approach.previous_target, 5.0);
        assert_eq!(approach.target_velocity, 0.0);
        assert_eq!(approach.distance(), 3.0);
    }

    #[test]
    fn builders_override_fields() {
        let approach = Approach::toward(Motion::new(0.0, 1.0), 1.0)
            .with_previous_target(-1.0)
            .with_target_velocity(4.0);

        assert_eq!(approach.previous_target, -1.0);
        assert_eq!(approach.target_velocity, 4.0);
        assert_eq!(approach.motion.velocity, 1.0);
    }
}
