use std::time::{Duration, Instant};

/// Clock reading taken at the top of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSample {
    /// Seconds elapsed since the clock started or was last reset.
    pub seconds: f32,
    /// How many samples have been taken since the last reset.
    pub frame_index: u64,
}

/// Where the frame clock comes from.
///
/// The controller resets its source when a sink attaches, so the animation
/// starts at t = 0 no matter how long initialization took.
pub trait TimeSource: Send {
    /// Restarts the clock from zero.
    fn reset(&mut self);
    /// Reads the clock and advances the frame counter.
    fn sample(&mut self) -> TimeSample;
}

/// Monotonic wall clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemTimeSource {
    origin: Instant,
    frame: u64,
}

impl SystemTimeSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for SystemTimeSource {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
            frame: 0,
        }
    }
}

impl TimeSource for SystemTimeSource {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn sample(&mut self) -> TimeSample {
        let frame_index = self.frame;
        self.frame = self.frame.saturating_add(1);
        TimeSample {
            seconds: self.origin.elapsed().as_secs_f32(),
            frame_index,
        }
    }
}

/// Clock pinned to a single instant.
///
/// Drives the reduced-motion still frame and deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource {
    time: f32,
}

impl FixedTimeSource {
    pub fn new(time: f32) -> Self {
        Self { time }
    }
}

impl TimeSource for FixedTimeSource {
    fn reset(&mut self) {}

    fn sample(&mut self) -> TimeSample {
        TimeSample {
            seconds: self.time,
            frame_index: 0,
        }
    }
}

pub type BoxedTimeSource = Box<dyn TimeSource + Send>;

/// Caps the frame rate of the windowed host.
///
/// With no interval every call to [`FramePacer::ready`] passes; with one,
/// `ready` passes once per interval and [`FramePacer::next_deadline`] tells
/// the event loop how long to wait.
#[derive(Debug)]
pub struct FramePacer {
    interval: Option<Duration>,
    last_rendered: Option<Instant>,
}

impl FramePacer {
    pub fn new(target_fps: Option<f32>) -> Self {
        let interval = target_fps
            .filter(|fps| *fps > 0.0)
            .map(|fps| Duration::from_secs_f32(1.0 / fps));
        Self {
            interval,
            last_rendered: None,
        }
    }

    pub fn ready(&self, now: Instant) -> bool {
        match (self.interval, self.last_rendered) {
            (Some(interval), Some(last)) => now.duration_since(last) >= interval,
            _ => true,
        }
    }

    pub fn mark_rendered(&mut self, now: Instant) {
        self.last_rendered = Some(now);
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        Some(self.last_rendered? + self.interval?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_source_counts_frames_monotonically() {
        let mut source = SystemTimeSource::new();
        let first = source.sample();
        let second = source.sample();
        assert_eq!(first.frame_index, 0);
        assert_eq!(second.frame_index, 1);
        assert!(second.seconds >= first.seconds);
    }

    #[test]
    fn fixed_source_never_advances() {
        let mut source = FixedTimeSource::new(4.5);
        for _ in 0..2 {
            let sample = source.sample();
            assert_eq!(sample.seconds, 4.5);
            assert_eq!(sample.frame_index, 0);
        }
    }

    #[test]
    fn uncapped_pacer_is_always_ready() {
        let mut pacer = FramePacer::new(None);
        let now = Instant::now();
        assert!(pacer.ready(now));
        pacer.mark_rendered(now);
        assert!(pacer.ready(now));
        assert_eq!(pacer.next_deadline(), None);
    }

    #[test]
    fn capped_pacer_waits_out_the_interval() {
        let mut pacer = FramePacer::new(Some(10.0));
        let start = Instant::now();
        assert!(pacer.ready(start));
        pacer.mark_rendered(start);

        assert!(!pacer.ready(start + Duration::from_millis(50)));
        assert!(pacer.ready(start + Duration::from_millis(100)));
        assert_eq!(
            pacer.next_deadline(),
            Some(start + Duration::from_millis(100))
        );
    }

    #[test]
    fn non_positive_fps_means_uncapped() {
        let pacer = FramePacer::new(Some(0.0));
        assert!(pacer.ready(Instant::now()));
    }
}
