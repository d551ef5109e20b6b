use std::sync::Arc;

use crate::{ConfigError, Easing};

/// A callback fired when the effect comes to rest on a notch.
///
/// The argument is the settled notch value, i.e. `anchor + k * interval`.
pub type OnSettleCallback = Arc<dyn Fn(f64) + Send + Sync>;

/// Configuration for [`crate::RouletteScrollEffect`].
///
/// This type is cheap to clone: the only heavy field (`on_settle`) is stored in an `Arc`.
/// Defaults follow typical mobile picker feel; all tuning knobs are validated once, at
/// [`crate::RouletteScrollEffect::new`].
pub struct RouletteOptions {
    /// Spacing between successive notches. Required, must be finite and positive.
    pub interval: f64,
    /// One of the valid stopping values; origin of the notch grid.
    pub anchor: f64,
    /// Duration (seconds) of the animation that pulls the position onto a notch.
    pub pull_duration: f64,
    /// Per-second velocity retention while coasting: after `t` seconds a free-coasting
    /// velocity has decayed to `v * coasting_alpha.powf(t)`. Must be in `(0, 1]`;
    /// `1.0` disables deceleration entirely.
    pub coasting_alpha: f64,
    /// Dual-purpose speed (units/second): the velocity magnitude below which coasting
    /// commits to the *nearest* notch, and the speed at which overscrolled content is
    /// pulled back to the boundary.
    pub pull_back_velocity: f64,
    /// Hard cap on `|velocity|` at all times. May be `f64::INFINITY`.
    pub terminal_velocity: f64,
    /// Lower scrollable extent supplied by the host. `-inf` when unbounded.
    pub min_bound: f64,
    /// Upper scrollable extent supplied by the host. `+inf` when unbounded.
    pub max_bound: f64,
    /// Easing curve used by the pull-onto-notch animation.
    pub pull_easing: Easing,
    /// Optional callback fired when the roulette has stopped, "making a selection".
    pub on_settle: Option<OnSettleCallback>,
}

impl RouletteOptions {
    /// Creates options for a notch grid with the given `interval`, anchored at 0.
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            anchor: 0.0,
            pull_duration: 0.2,
            coasting_alpha: 0.05,
            pull_back_velocity: 50.0,
            terminal_velocity: 5000.0,
            min_bound: f64::NEG_INFINITY,
            max_bound: f64::INFINITY,
            pull_easing: Easing::OutCubic,
            on_settle: None,
        }
    }

    pub fn with_anchor(mut self, anchor: f64) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_pull_duration(mut self, pull_duration: f64) -> Self {
        self.pull_duration = pull_duration;
        self
    }

    pub fn with_coasting_alpha(mut self, coasting_alpha: f64) -> Self {
        self.coasting_alpha = coasting_alpha;
        self
    }

    pub fn with_pull_back_velocity(mut self, pull_back_velocity: f64) -> Self {
        self.pull_back_velocity = pull_back_velocity;
        self
    }

    pub fn with_terminal_velocity(mut self, terminal_velocity: f64) -> Self {
        self.terminal_velocity = terminal_velocity;
        self
    }

    pub fn with_bounds(mut self, min_bound: f64, max_bound: f64) -> Self {
        self.min_bound = min_bound;
        self.max_bound = max_bound;
        self
    }

    pub fn with_pull_easing(mut self, pull_easing: Easing) -> Self {
        self.pull_easing = pull_easing;
        self
    }

    pub fn with_on_settle(
        mut self,
        on_settle: Option<impl Fn(f64) + Send + Sync + 'static>,
    ) -> Self {
        self.on_settle = on_settle.map(|f| Arc::new(f) as _);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.interval.is_finite() || self.interval <= 0.0 {
            return Err(ConfigError::InvalidInterval(self.interval));
        }
        if !self.anchor.is_finite() {
            return Err(ConfigError::InvalidAnchor(self.anchor));
        }
        if !self.pull_duration.is_finite() || self.pull_duration <= 0.0 {
            return Err(ConfigError::InvalidPullDuration(self.pull_duration));
        }
        if !(self.coasting_alpha > 0.0 && self.coasting_alpha <= 1.0) {
            return Err(ConfigError::InvalidCoastingAlpha(self.coasting_alpha));
        }
        if !self.pull_back_velocity.is_finite() || self.pull_back_velocity <= 0.0 {
            return Err(ConfigError::InvalidPullBackVelocity(self.pull_back_velocity));
        }
        if self.terminal_velocity.is_nan() || self.terminal_velocity <= 0.0 {
            return Err(ConfigError::InvalidTerminalVelocity(self.terminal_velocity));
        }
        validate_bounds(self.min_bound, self.max_bound)
    }
}

pub(crate) fn validate_bounds(min: f64, max: f64) -> Result<(), ConfigError> {
    if min.is_nan() || max.is_nan() || min > max {
        return Err(ConfigError::InvertedBounds { min, max });
    }
    Ok(())
}

impl Clone for RouletteOptions {
    fn clone(&self) -> Self {
        Self {
            interval: self.interval,
            anchor: self.anchor,
            pull_duration: self.pull_duration,
            coasting_alpha: self.coasting_alpha,
            pull_back_velocity: self.pull_back_velocity,
            terminal_velocity: self.terminal_velocity,
            min_bound: self.min_bound,
            max_bound: self.max_bound,
            pull_easing: self.pull_easing,
            on_settle: self.on_settle.clone(),
        }
    }
}

impl core::fmt::Debug for RouletteOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RouletteOptions")
            .field("interval", &self.interval)
            .field("anchor", &self.anchor)
            .field("pull_duration", &self.pull_duration)
            .field("coasting_alpha", &self.coasting_alpha)
            .field("pull_back_velocity", &self.pull_back_velocity)
            .field("terminal_velocity", &self.terminal_velocity)
            .field("min_bound", &self.min_bound)
            .field("max_bound", &self.max_bound)
            .field("pull_easing", &self.pull_easing)
            .finish_non_exhaustive()
    }
}
