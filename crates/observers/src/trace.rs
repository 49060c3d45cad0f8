//! Per-channel polylines for plotting a run.
//!
//! See [`Traces`] and [`axis_marker`] for usage.

use std::fmt;

use smoothcd_core::Observer;
use smoothcd_simulation::{InspectionSnapshot, SampleRecord, SampleSeries};

use crate::traits::HasSample;

/// One plotted quantity of a [`SampleRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Distance,
    Velocity,
    Input,
    Position,
    Target,
    Overshoot,
}

impl Channel {
    /// Every channel, in drawing order.
    pub const ALL: [Self; 6] = [
        Self::Distance,
        Self::Velocity,
        Self::Input,
        Self::Position,
        Self::Target,
        Self::Overshoot,
    ];

    /// Display name of the channel.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Distance => "Distance",
            Self::Velocity => "Velocity",
            Self::Input => "Input",
            Self::Position => "Position",
            Self::Target => "Target",
            Self::Overshoot => "Overshoot",
        }
    }

    /// Conventional line color, as RGB.
    #[must_use]
    pub fn color(self) -> [u8; 3] {
        match self {
            Self::Distance => [255, 0, 0],
            Self::Velocity => [0, 255, 0],
            Self::Input => [0, 0, 255],
            Self::Position => [255, 235, 4],
            Self::Target => [255, 0, 255],
            Self::Overshoot => [255, 128, 0],
        }
    }

    /// The channel's value in `record`.
    ///
    /// Only [`Channel::Overshoot`] can be missing, for smoothing variants that
    /// do not measure it.
    #[must_use]
    pub fn value(self, record: &SampleRecord) -> Option<f64> {
        match self {
            Self::Distance => Some(record.distance),
            Self::Velocity => Some(record.velocity),
            Self::Input => Some(record.input),
            Self::Position => Some(record.position),
            Self::Target => Some(record.target),
            Self::Overshoot => record.overshoot,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Distance => 0,
            Self::Velocity => 1,
            Self::Input => 2,
            Self::Position => 3,
            Self::Target => 4,
            Self::Overshoot => 5,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered `[time, value]` polylines, one per [`Channel`].
///
/// Build from a finished run with [`Traces::from_series`], or collect while
/// the run is in progress by passing `&mut Traces` as the observer:
///
/// ```
/// use smoothcd_observers::{Channel, Traces};
/// use smoothcd_simulation::{SimulationConfig, solve};
///
/// let config = SimulationConfig::default().with_duration(2.0);
/// let mut traces = Traces::new();
///
/// let solution = solve(&config, &mut traces)?;
///
/// assert_eq!(traces, Traces::from_series(&solution.series));
/// assert_eq!(traces.points(Channel::Position).len(), config.steps());
/// # Ok::<(), smoothcd_simulation::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Traces {
    data: [Vec<[f64; 2]>; 6],
}

impl Traces {
    /// Creates empty traces.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the traces of a whole run.
    #[must_use]
    pub fn from_series(series: &SampleSeries) -> Self {
        let mut traces = Self::new();
        for record in series {
            traces.record(record);
        }
        traces
    }

    /// Appends one point per channel at `record.time`.
    ///
    /// A channel with no value for this record is skipped while the others
    /// are still recorded.
    pub fn record(&mut self, record: &SampleRecord) {
        for channel in Channel::ALL {
            if let Some(value) = channel.value(record) {
                self.data[channel.index()].push([record.time, value]);
            }
        }
    }

    /// The polyline for `channel`, in time order.
    #[must_use]
    pub fn points(&self, channel: Channel) -> &[[f64; 2]] {
        &self.data[channel.index()]
    }

    /// Iterates over every channel with its polyline.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, &[[f64; 2]])> {
        Channel::ALL
            .into_iter()
            .map(|channel| (channel, self.points(channel)))
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(Vec::is_empty)
    }
}

impl<E, A> Observer<E, A> for Traces
where
    E: HasSample,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.sample());
        None
    }
}

/// Allows `&mut Traces` to be passed to [`solve`], which takes its observer
/// by value, so the traces remain available after the run.
///
/// [`solve`]: smoothcd_simulation::solve
impl<E, A> Observer<E, A> for &mut Traces
where
    E: HasSample,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// The vertical marker drawn at the inspected step.
///
/// Returns the segment from `half_height` above the axis to `half_height`
/// below it, at the snapshot's time.
#[must_use]
pub fn axis_marker(snapshot: &InspectionSnapshot, half_height: f64) -> [[f64; 2]; 2] {
    let time = snapshot.record.time;
    [[time, half_height], [time, -half_height]]
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use smoothcd_simulation::{Positioning, SimulationConfig, Smoothing, inspect, run};

    fn record(step: usize, overshoot: Option<f64>) -> SampleRecord {
        #[allow(clippy::cast_precision_loss)]
        let time = step as f64 * 0.5;
        SampleRecord {
            step,
            time,
            input: 1.0,
            position: 2.0,
            velocity: 3.0,
            target: 4.0,
            distance: 2.0,
            overshoot,
        }
    }

    // Helper to call observe without naming the action type at each call site.
    fn feed(traces: &mut Traces, record: SampleRecord) {
        let _: Option<()> = traces.observe(&record);
    }

    #[test]
    fn records_every_channel_at_record_time() {
        let mut traces = Traces::new();
        assert!(traces.is_empty());

        feed(&mut traces, record(3, Some(-0.25)));

        assert_eq!(traces.points(Channel::Distance), &[[1.5, 2.0]]);
        assert_eq!(traces.points(Channel::Velocity), &[[1.5, 3.0]]);
        assert_eq!(traces.points(Channel::Input), &[[1.5, 1.0]]);
        assert_eq!(traces.points(Channel::Position), &[[1.5, 2.0]]);
        assert_eq!(traces.points(Channel::Target), &[[1.5, 4.0]]);
        assert_eq!(traces.points(Channel::Overshoot), &[[1.5, -0.25]]);
    }

    #[test]
    fn missing_overshoot_skips_only_that_channel() {
        let mut traces = Traces::new();
        feed(&mut traces, record(0, None));
        feed(&mut traces, record(1, Some(0.5)));

        assert_eq!(traces.points(Channel::Target).len(), 2);
        assert_eq!(traces.points(Channel::Overshoot), &[[0.5, 0.5]]);
    }

    #[test]
    fn from_series_preserves_step_order() {
        let config = SimulationConfig::default()
            .with_positioning(Positioning::Absolute)
            .with_smoothing(Smoothing::Base);
        let series = run(&config).expect("valid config");
        let traces = Traces::from_series(&series);

        let times: Vec<f64> = traces
            .points(Channel::Input)
            .iter()
            .map(|point| point[0])
            .collect();
        assert_eq!(times.len(), series.len());
        assert!(times.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(traces.points(Channel::Overshoot).is_empty());
    }

    #[test]
    fn iter_visits_channels_in_drawing_order() {
        let channels: Vec<Channel> = Traces::new().iter().map(|(channel, _)| channel).collect();
        assert_eq!(channels, Channel::ALL);
    }

    #[test]
    fn marker_sits_at_inspect_time() {
        let config = SimulationConfig::default().with_inspect_fraction(0.5);
        let snapshot = inspect(&config).expect("valid config");
        let [top, bottom] = axis_marker(&snapshot, 10.0);

        assert_relative_eq!(top[0], 15.0 / 30.0);
        assert_eq!(top[0], bottom[0]);
        assert_eq!(top[1], 10.0);
        assert_eq!(bottom[1], -10.0);
    }

    #[test]
    fn labels_display() {
        assert_eq!(Channel::Overshoot.to_string(), "Overshoot");
        assert_eq!(Channel::Distance.label(), "Distance");
    }
}
