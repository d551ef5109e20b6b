/// A small tween driving the pull-onto-notch phase.
///
/// Time is relative: the effect accumulates `dt` into `elapsed` via [`Tween::advance`]
/// rather than sampling against a wall clock, so the tween stays a pure function of the
/// updates it has seen.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub elapsed: f64,
    pub duration: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration: duration.max(f64::EPSILON),
            easing,
        }
    }

    pub fn advance(&mut self, dt: f64) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn sample(&self) -> f64 {
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        let eased = self.easing.sample(t);
        self.from + (self.to - self.from) * eased
    }

    /// Redirects the tween toward a new target, restarting from the current sample.
    pub fn retarget(&mut self, new_to: f64, duration: f64) {
        let cur = self.sample();
        *self = Self::new(cur, new_to, duration, self.easing);
    }
}

/// Easing curves for the pull phase.
///
/// Every curve is monotonic on `[0, 1]` with `sample(0) == 0` and `sample(1) == 1`,
/// which is what keeps `|position - target|` non-increasing while pulling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    /// Decelerating cubic; the default pull curve.
    OutCubic,
    /// Slow-fast-slow circular curve, the classic picker-wheel snap feel.
    InOutCirc,
}

impl Easing {
    pub fn sample(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::OutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::InOutCirc => {
                if t < 0.5 {
                    let u = 2.0 * t;
                    (1.0 - (1.0 - u * u).max(0.0).sqrt()) / 2.0
                } else {
                    let u = -2.0 * t + 2.0;
                    ((1.0 - u * u).max(0.0).sqrt() + 1.0) / 2.0
                }
            }
        }
    }
}
