/// Policy for turning an input value into a target position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Positioning {
    /// The target is a set-point `input * speed` ahead of the object, re-centred
    /// on the object's position every step.
    #[default]
    Relative,

    /// The target integrates `input * speed` over time, independent of the object.
    Absolute,
}

/// Current and previous target positions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TargetState {
    pub current: f64,

    /// The target before the most recent update.
    pub previous: f64,
}

/// Derives the target position from the input signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetTracker {
    pub positioning: Positioning,
    pub speed: f64,
    pub delta_time: f64,
}

impl TargetTracker {
    /// Creates a tracker.
    #[must_use]
    pub fn new(positioning: Positioning, speed: f64, delta_time: f64) -> Self {
        Self {
            positioning,
            speed,
            delta_time,
        }
    }

    /// Moves the target for this step's `input`, keeping the old value as
    /// `previous`.
    pub fn update(&self, state: &mut TargetState, input: f64, position: f64) {
        state.previous = state.current;
        state.current = match self.positioning {
            Positioning::Relative => position + input * self.speed,
            Positioning::Absolute => state.current + input * self.speed * self.delta_time,
        };
    }

    /// The target's own rate of change after an update.
    ///
    /// Relative targets move at the commanded `input * speed`. Absolute
    /// targets use their finite difference, limited to `±speed`.
    #[must_use]
    pub fn target_velocity(&self, state: &TargetState, input: f64) -> f64 {
        match self.positioning {
            Positioning::Relative => input * self.speed,
            Positioning::Absolute => {
                let limit = self.speed.abs();
                ((state.current - state.previous) / self.delta_time)
                    .min(limit)
                    .max(-limit)
            }
        }
    }
}
