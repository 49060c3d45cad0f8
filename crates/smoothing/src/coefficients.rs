use smoothcd_core::{Damping, Motion};

/// Per-step constants of the critically damped response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Natural frequency, `2 / smooth_time`.
    pub omega: f64,

    /// Rational approximation of `e^(-omega * dt)`.
    pub decay: f64,

    /// Step size.
    pub dt: f64,
}

impl Coefficients {
    /// Computes the coefficients for one step of `damping`.
    ///
    /// The smooth time is already floored by [`Damping`], so `omega` is finite.
    #[must_use]
    pub fn new(damping: &Damping) -> Self {
        let omega = 2.0 / damping.smooth_time();
        let dt = damping.delta_time;
        let x = omega * dt;
        let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

        Self { omega, decay, dt }
    }

    /// Advances `motion` one step toward `target` without any limits.
    #[must_use]
    pub fn damp(&self, motion: Motion, target: f64) -> Motion {
        let change = motion.position - target;
        let temp = (motion.velocity + self.omega * change) * self.dt;

        Motion {
            position: target + (change + temp) * self.decay,
            velocity: (motion.velocity - self.omega * temp) * self.decay,
        }
    }
}
