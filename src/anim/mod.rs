//! Time-driven animation values for the UI.
//!
//! Each animated variable (opacity, offset, progress) is an [`Anim`]: a small
//! state machine over idle -> transitioning -> settled, advanced from the
//! 50 ms tick. Everything takes `Instant` parameters so tests can drive the
//! clock by hand.

pub mod easing;

pub use easing::{Easing, Spring};

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    Timing { duration: Duration, easing: Easing },
    Spring(Spring),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning,
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Segment {
    target: f32,
    curve: Curve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repeat {
    None,
    /// Bounce between the initial value and the target forever. Never
    /// settles and never reports completion (skeleton shimmer).
    PingPong,
}

/// One animated scalar value.
///
/// Constructed idle at its initial value; [`Anim::start`] arms the delay and
/// begins the transition. Retriggering restarts from the current value, so an
/// interrupted animation never jumps.
#[derive(Debug, Clone)]
pub struct Anim {
    value: f32,
    segment_from: f32,
    segments: Vec<Segment>,
    segment_index: usize,
    delay: Duration,
    repeat: Repeat,
    phase: Phase,
    segment_started: Option<Instant>,
    just_settled: bool,
}

impl Anim {
    pub fn new(initial: f32) -> Self {
        Self {
            value: initial,
            segment_from: initial,
            segments: Vec::new(),
            segment_index: 0,
            delay: Duration::ZERO,
            repeat: Repeat::None,
            phase: Phase::Idle,
            segment_started: None,
            just_settled: false,
        }
    }

    /// Eased interpolation toward `target` over `duration`.
    pub fn timing(initial: f32, target: f32, duration: Duration, easing: Easing) -> Self {
        Self::new(initial).then(target, Curve::Timing { duration, easing })
    }

    /// Spring toward `target`.
    pub fn spring(initial: f32, target: f32, spring: Spring) -> Self {
        Self::new(initial).then(target, Curve::Spring(spring))
    }

    /// Append a follow-up segment (e.g. splash logo 0 -> 1.2 -> 1.0).
    pub fn then(mut self, target: f32, curve: Curve) -> Self {
        self.segments.push(Segment { target, curve });
        self
    }

    /// Hold the initial value for `delay` after [`Anim::start`] before the
    /// first segment begins.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Loop forever, reversing direction each pass.
    pub fn ping_pong(mut self) -> Self {
        self.repeat = Repeat::PingPong;
        self
    }

    /// Jump straight to the final value and settle, without firing the
    /// completion edge. Used when animations are disabled in config.
    pub fn finish(&mut self) {
        if let Some(last) = self.segments.last() {
            self.value = last.target;
        }
        self.phase = Phase::Settled;
        self.segment_started = None;
        self.just_settled = false;
    }

    /// Begin (or restart) the transition at `now`.
    pub fn start(&mut self, now: Instant) {
        if self.segments.is_empty() {
            self.phase = Phase::Settled;
            return;
        }
        self.segment_from = self.value;
        self.segment_index = 0;
        self.segment_started = Some(now + self.delay);
        self.phase = Phase::Transitioning;
        self.just_settled = false;
    }

    /// Restart toward a new target from the current value, replacing any
    /// queued segments. Used when a prop-like input (progress, selection)
    /// changes mid-flight.
    pub fn retrigger(&mut self, target: f32, curve: Curve, now: Instant) {
        self.segments = vec![Segment { target, curve }];
        self.delay = Duration::ZERO;
        self.start(now);
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_settled(&self) -> bool {
        self.phase == Phase::Settled
    }

    /// One-shot completion edge: true exactly once, on the advance that
    /// settled the final segment.
    pub fn take_just_settled(&mut self) -> bool {
        std::mem::take(&mut self.just_settled)
    }

    /// Move the value forward to `now`. Returns true when the value changed,
    /// so callers can mark the frame dirty.
    pub fn advance(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Transitioning {
            return false;
        }
        let Some(started) = self.segment_started else {
            return false;
        };
        if now < started {
            // Still in the delay window.
            return false;
        }
        let elapsed = now - started;
        let segment = self.segments[self.segment_index];
        let before = self.value;

        let finished = match segment.curve {
            Curve::Timing { duration, easing } => {
                if elapsed >= duration || duration.is_zero() {
                    self.value = segment.target;
                    true
                } else {
                    let t = elapsed.as_secs_f32() / duration.as_secs_f32();
                    self.value =
                        self.segment_from + (segment.target - self.segment_from) * easing.apply(t);
                    false
                }
            }
            Curve::Spring(spring) => {
                if spring.is_settled(elapsed) {
                    self.value = segment.target;
                    true
                } else {
                    self.value = self.segment_from
                        + (segment.target - self.segment_from) * spring.progress(elapsed);
                    false
                }
            }
        };

        if finished {
            self.advance_segment(now);
        }
        (self.value - before).abs() > f32::EPSILON || finished
    }

    fn advance_segment(&mut self, now: Instant) {
        if self.segment_index + 1 < self.segments.len() {
            self.segment_from = self.value;
            self.segment_index += 1;
            self.segment_started = Some(now);
            return;
        }
        match self.repeat {
            Repeat::None => {
                self.phase = Phase::Settled;
                self.segment_started = None;
                self.just_settled = true;
            }
            Repeat::PingPong => {
                // Swap direction: animate back to where this pass started.
                let from = self.segment_from;
                self.segments[self.segment_index].target = from;
                self.segment_from = self.value;
                self.segment_started = Some(now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn idle_until_started() {
        let base = Instant::now();
        let mut anim = Anim::timing(0.0, 1.0, Duration::from_millis(600), Easing::Linear);
        assert_eq!(anim.phase(), Phase::Idle);
        assert!(!anim.advance(at(base, 1000)));
        assert_eq!(anim.value(), 0.0);
    }

    #[test]
    fn timing_reaches_target_and_settles() {
        let base = Instant::now();
        let mut anim = Anim::timing(0.0, 1.0, Duration::from_millis(600), Easing::Linear);
        anim.start(base);
        anim.advance(at(base, 300));
        assert!((anim.value() - 0.5).abs() < 0.01);
        assert_eq!(anim.phase(), Phase::Transitioning);
        anim.advance(at(base, 700));
        assert_eq!(anim.value(), 1.0);
        assert_eq!(anim.phase(), Phase::Settled);
    }

    #[test]
    fn delay_holds_initial_value() {
        let base = Instant::now();
        let mut anim = Anim::timing(0.0, 1.0, Duration::from_millis(500), Easing::Linear)
            .with_delay(Duration::from_millis(250));
        anim.start(base);
        assert!(!anim.advance(at(base, 200)));
        assert_eq!(anim.value(), 0.0);
        anim.advance(at(base, 500));
        assert!((anim.value() - 0.5).abs() < 0.01);
    }

    #[test]
    fn completion_edge_fires_at_most_once() {
        let base = Instant::now();
        let mut anim = Anim::timing(0.0, 1.0, Duration::from_millis(100), Easing::EaseOut);
        anim.start(base);
        anim.advance(at(base, 50));
        assert!(!anim.take_just_settled());
        anim.advance(at(base, 150));
        assert!(anim.take_just_settled());
        anim.advance(at(base, 300));
        assert!(!anim.take_just_settled());
    }

    #[test]
    fn spring_settles_within_bound() {
        let base = Instant::now();
        let mut anim = Anim::spring(0.8, 1.0, Spring::GENTLE);
        anim.start(base);
        anim.advance(at(base, 5000));
        assert_eq!(anim.phase(), Phase::Settled);
        assert_eq!(anim.value(), 1.0);
    }

    #[test]
    fn sequence_runs_segments_in_order() {
        let base = Instant::now();
        // Splash logo: 0 -> 1.2 over 800ms, then 1.2 -> 1.0 over 400ms.
        let mut anim = Anim::new(0.0)
            .then(1.2, Curve::Timing { duration: Duration::from_millis(800), easing: Easing::Linear })
            .then(1.0, Curve::Timing { duration: Duration::from_millis(400), easing: Easing::Linear });
        anim.start(base);
        anim.advance(at(base, 800));
        assert!((anim.value() - 1.2).abs() < 0.01);
        assert_eq!(anim.phase(), Phase::Transitioning);
        anim.advance(at(base, 1300));
        assert_eq!(anim.value(), 1.0);
        assert!(anim.is_settled());
        assert!(anim.take_just_settled());
    }

    #[test]
    fn retrigger_restarts_from_current_value() {
        let base = Instant::now();
        let mut anim = Anim::timing(0.0, 1.0, Duration::from_millis(400), Easing::Linear);
        anim.start(base);
        anim.advance(at(base, 200));
        let midway = anim.value();
        assert!(midway > 0.4 && midway < 0.6);
        anim.retrigger(0.0, Curve::Timing { duration: Duration::from_millis(100), easing: Easing::Linear }, at(base, 200));
        // No jump: value continues from where it was.
        assert!((anim.value() - midway).abs() < 0.01);
        anim.advance(at(base, 350));
        assert_eq!(anim.value(), 0.0);
        assert!(anim.is_settled());
    }

    #[test]
    fn finish_skips_to_target_without_completion_edge() {
        let base = Instant::now();
        let mut anim = Anim::timing(0.0, 1.0, Duration::from_millis(600), Easing::Linear);
        anim.start(base);
        anim.finish();
        assert_eq!(anim.value(), 1.0);
        assert!(anim.is_settled());
        assert!(!anim.take_just_settled());
        assert!(!anim.advance(at(base, 10_000)));
    }

    #[test]
    fn ping_pong_never_settles() {
        let base = Instant::now();
        let mut anim = Anim::timing(0.3, 1.0, Duration::from_millis(1000), Easing::Linear).ping_pong();
        anim.start(base);
        anim.advance(at(base, 1000));
        assert!((anim.value() - 1.0).abs() < 0.01);
        assert_eq!(anim.phase(), Phase::Transitioning);
        // Coming back down on the second pass.
        anim.advance(at(base, 1500));
        assert!(anim.value() < 1.0);
        anim.advance(at(base, 2000));
        assert!((anim.value() - 0.3).abs() < 0.01);
        assert!(!anim.take_just_settled());
    }
}
