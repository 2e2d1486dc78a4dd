//! Interpolation curves: eased timing and an underdamped spring.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] to eased progress in [0, 1].
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Spring parameters (unit mass, zero initial velocity), e.g. damping 15 /
/// stiffness 150 for card entrances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub damping: f32,
    pub stiffness: f32,
}

impl Spring {
    pub const GENTLE: Spring = Spring { damping: 15.0, stiffness: 150.0 };
    pub const BOUNCY: Spring = Spring { damping: 6.0, stiffness: 200.0 };
    pub const SNAPPY: Spring = Spring { damping: 20.0, stiffness: 300.0 };

    fn omega0(&self) -> f32 {
        self.stiffness.max(f32::EPSILON).sqrt()
    }

    fn zeta(&self) -> f32 {
        self.damping / (2.0 * self.omega0())
    }

    /// Displacement fraction at time `t`: 1.0 at rest on the target, 0.0 at
    /// the starting value. Overshoots above 1.0 when underdamped.
    pub fn progress(&self, t: Duration) -> f32 {
        let t = t.as_secs_f32();
        let omega0 = self.omega0();
        let zeta = self.zeta();
        let decay = (-zeta * omega0 * t).exp();
        if zeta < 1.0 {
            let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (omega_d * t).cos() + (zeta * omega0 / omega_d) * (omega_d * t).sin();
            1.0 - decay * envelope
        } else {
            // Critically damped (or over-), no oscillation.
            1.0 - decay * (1.0 + omega0 * t)
        }
    }

    /// True once the oscillation envelope has decayed below the rest
    /// threshold and the value can be snapped to its target.
    pub fn is_settled(&self, t: Duration) -> bool {
        let decay = (-self.zeta() * self.omega0() * t.as_secs_f32()).exp();
        decay < 0.001
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            assert!(easing.apply(0.0).abs() < 1e-6);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn easing_is_monotonic() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            let mut prev = easing.apply(0.0);
            for i in 1..=100 {
                let v = easing.apply(i as f32 / 100.0);
                assert!(v >= prev - 1e-6, "{easing:?} not monotonic at {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn spring_starts_at_zero_and_settles_at_one() {
        let spring = Spring::GENTLE;
        assert!(spring.progress(Duration::ZERO).abs() < 1e-4);
        let late = Duration::from_secs(5);
        assert!(spring.is_settled(late));
        assert!((spring.progress(late) - 1.0).abs() < 0.01);
    }

    #[test]
    fn bouncy_spring_overshoots() {
        let spring = Spring::BOUNCY;
        let mut max = 0.0f32;
        for ms in (0..2000).step_by(10) {
            max = max.max(spring.progress(Duration::from_millis(ms)));
        }
        assert!(max > 1.0, "expected overshoot, peak was {max}");
    }
}
