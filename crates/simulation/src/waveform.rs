//! The periodic input signal.

/// One segment of the input cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Rises toward `+1` for the positive duration.
    RisingToPositive,

    /// Decays toward `0` for the neutral duration.
    DecayToZeroFromPositive,

    /// Falls toward `-1` for the negative duration.
    FallingToNegative,

    /// Decays toward `0` for the neutral duration, then the cycle repeats.
    DecayToZeroFromNegative,
}

impl Phase {
    /// The value this phase moves toward.
    #[must_use]
    pub fn target(self) -> f64 {
        match self {
            Self::RisingToPositive => 1.0,
            Self::DecayToZeroFromPositive | Self::DecayToZeroFromNegative => 0.0,
            Self::FallingToNegative => -1.0,
        }
    }

    /// The phase that follows this one.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::RisingToPositive => Self::DecayToZeroFromPositive,
            Self::DecayToZeroFromPositive => Self::FallingToNegative,
            Self::FallingToNegative => Self::DecayToZeroFromNegative,
            Self::DecayToZeroFromNegative => Self::RisingToPositive,
        }
    }
}

const PHASES: [Phase; 4] = [
    Phase::RisingToPositive,
    Phase::DecayToZeroFromPositive,
    Phase::FallingToNegative,
    Phase::DecayToZeroFromNegative,
];

/// Shape of the input signal.
///
/// Each phase lasts `ceil(length / delta_time)` steps and moves the value
/// toward the phase target by at most `input_change_velocity * delta_time`
/// per step, never past it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waveform {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
    pub input_change_velocity: f64,
    pub delta_time: f64,
}

impl Waveform {
    /// Configured length of `phase`, in seconds.
    #[must_use]
    pub fn phase_length(&self, phase: Phase) -> f64 {
        match phase {
            Phase::RisingToPositive => self.positive,
            Phase::DecayToZeroFromPositive | Phase::DecayToZeroFromNegative => self.neutral,
            Phase::FallingToNegative => self.negative,
        }
    }

    /// Number of steps `phase` lasts.
    ///
    /// Ratios within a relative `1e-9` of a whole number round to it, so a
    /// length that is an exact multiple of the step is not stretched by one
    /// step through floating-point error.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn phase_steps(&self, phase: Phase) -> usize {
        let length = self.phase_length(phase);
        if length <= 0.0 || self.delta_time <= 0.0 {
            return 0;
        }

        let ratio = length / self.delta_time;
        let nearest = ratio.round();
        if (ratio - nearest).abs() <= 1e-9 * nearest.max(1.0) {
            nearest as usize
        } else {
            ratio.ceil() as usize
        }
    }

    /// Number of steps in one full cycle, saturating at `usize::MAX`.
    #[must_use]
    pub fn cycle_steps(&self) -> usize {
        PHASES
            .into_iter()
            .map(|phase| self.phase_steps(phase))
            .fold(0, usize::saturating_add)
    }

    /// Returns `true` if every phase has zero length, so the value never moves.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        PHASES.into_iter().all(|phase| self.phase_steps(phase) == 0)
    }

    /// Largest change in value per step.
    #[must_use]
    pub fn max_delta(&self) -> f64 {
        self.input_change_velocity * self.delta_time
    }

    /// A fresh cursor at value `0`, before the first phase.
    #[must_use]
    pub fn cursor(self) -> WaveformCursor {
        WaveformCursor::new(self)
    }
}

/// A pull-based, restartable cursor over the input signal.
///
/// The cursor starts at value `0` before any advance. [`current`] reads the
/// value without moving; [`advance`] computes the next one. A caller that
/// reads before advancing, as the stepper does, therefore sees `0` on its
/// first step and the signal one step behind its phase progression after that.
///
/// As an [`Iterator`], the cursor advances first and then yields, producing
/// the signal without the lag. It never ends.
///
/// A waveform whose phases all have zero length never changes value.
///
/// [`current`]: WaveformCursor::current
/// [`advance`]: WaveformCursor::advance
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformCursor {
    waveform: Waveform,
    value: f64,
    phase: Phase,
    phase_step: usize,
}

impl WaveformCursor {
    /// Creates a cursor at value `0`, at the start of the rising phase.
    #[must_use]
    pub fn new(waveform: Waveform) -> Self {
        Self {
            waveform,
            value: 0.0,
            phase: Phase::RisingToPositive,
            phase_step: 0,
        }
    }

    /// The most recently produced value.
    #[must_use]
    pub fn current(&self) -> f64 {
        self.value
    }

    /// The phase the last value was produced in (or the first phase, before
    /// any advance).
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Time spent in the current phase.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn elapsed(&self) -> f64 {
        self.phase_step as f64 * self.waveform.delta_time
    }

    /// Moves to the next value.
    pub fn advance(&mut self) {
        if self.waveform.is_flat() {
            return;
        }

        while self.phase_step >= self.waveform.phase_steps(self.phase) {
            self.phase = self.phase.next();
            self.phase_step = 0;
        }

        self.value = move_towards(self.value, self.phase.target(), self.waveform.max_delta());
        self.phase_step += 1;
    }

    /// Restarts the cursor from value `0`.
    pub fn reset(&mut self) {
        *self = Self::new(self.waveform);
    }
}

impl Iterator for WaveformCursor {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.advance();
        Some(self.value)
    }
}

/// Moves `current` toward `target` by at most `max_delta`, never past it.
fn move_towards(current: f64, target: f64, max_delta: f64) -> f64 {
    let offset = target - current;
    if offset.abs() <= max_delta {
        target
    } else {
        current + offset.signum() * max_delta
    }
}
