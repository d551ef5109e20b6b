use crate::{ConfigError, RouletteOptions, ScrollState, Tween};
use crate::options::validate_bounds;

/// Tolerance used when deciding that a position already sits on a notch.
const SETTLE_EPSILON: f64 = 1e-3;

/// Tolerance for detecting an exact halfway tie between two notches.
const TIE_EPSILON: f64 = 1e-9;

/// The scroll-effect capability a scrollable container drives.
///
/// The host invokes the drag lifecycle from its input handling and `update` once per
/// frame; any conforming implementation is substitutable. All calls are expected to be
/// serial (single-threaded host loop) -- there is nothing to lock.
pub trait ScrollEffect {
    /// A drag has started. Cancels any in-flight settle/bounce animation.
    fn on_drag_start(&mut self);
    /// The drag moved by `delta` content units since the last sample.
    fn on_drag_move(&mut self, delta: f64);
    /// The drag was released with the given measured velocity (units/second).
    fn on_drag_end(&mut self, release_velocity: f64);
    /// Advances the effect by `dt` seconds and returns the new position.
    fn update(&mut self, dt: f64) -> f64;
    /// Halts all motion immediately.
    fn stop(&mut self);
    fn position(&self) -> f64;
    fn velocity(&self) -> f64;
    fn is_moving(&self) -> bool;
}

/// Externally visible motion phase of the effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Idle,
    Dragging,
    Coasting,
    Pulling,
    BouncingBack,
}

#[derive(Clone, Copy, Debug)]
enum Motion {
    Idle,
    Dragging,
    Coasting,
    Pulling(Tween),
    BouncingBack,
}

/// A scroll effect that simulates the motion of a roulette, or a notched wheel.
///
/// Released flings coast under exponential deceleration, commit to a notch on the
/// `anchor + k * interval` grid, and are pulled onto it over
/// [`RouletteOptions::pull_duration`]. Content dragged or coasted past
/// `[min_bound, max_bound]` bounces back and settles on the nearest in-bounds notch.
///
/// The effect holds no UI objects and performs no I/O: it is a pure state machine the
/// host polls via [`ScrollEffect::update`].
#[derive(Clone, Debug)]
pub struct RouletteScrollEffect {
    options: RouletteOptions,
    position: f64,
    velocity: f64,
    motion: Motion,
}

impl RouletteScrollEffect {
    /// Creates a new effect, validating every option eagerly.
    ///
    /// The effect starts at rest on the anchor notch (clamped into bounds).
    pub fn new(options: RouletteOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        rdebug!(
            interval = options.interval,
            anchor = options.anchor,
            "RouletteScrollEffect::new"
        );
        let mut effect = Self {
            position: options.anchor,
            velocity: 0.0,
            motion: Motion::Idle,
            options,
        };
        effect.position = effect.clamp_notch(effect.options.anchor);
        Ok(effect)
    }

    pub fn options(&self) -> &RouletteOptions {
        &self.options
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn phase(&self) -> Phase {
        match self.motion {
            Motion::Idle => Phase::Idle,
            Motion::Dragging => Phase::Dragging,
            Motion::Coasting => Phase::Coasting,
            Motion::Pulling(_) => Phase::Pulling,
            Motion::BouncingBack => Phase::BouncingBack,
        }
    }

    /// Returns a lightweight snapshot of the current motion state.
    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            position: self.position,
            velocity: self.velocity,
            phase: self.phase(),
        }
    }

    /// The notch committed to while pulling, if any.
    pub fn target(&self) -> Option<f64> {
        match self.motion {
            Motion::Pulling(tween) => Some(tween.to),
            _ => None,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.motion, Motion::Idle)
    }

    pub fn is_moving(&self) -> bool {
        matches!(
            self.motion,
            Motion::Coasting | Motion::Pulling(_) | Motion::BouncingBack
        )
    }

    /// Jumps the effect to `position`, discarding any motion in progress.
    ///
    /// A jump outside the bounds starts bouncing back on the next `update`; the effect
    /// must never come to rest beyond them.
    pub fn set_position(&mut self, position: f64) {
        if !position.is_finite() {
            return;
        }
        self.position = position;
        self.velocity = 0.0;
        self.motion = if self.out_of_bounds() {
            Motion::BouncingBack
        } else {
            Motion::Idle
        };
    }

    /// Updates the scrollable extents supplied by the host.
    ///
    /// If the resting position ends up outside the new bounds, the effect starts
    /// bouncing back on the next `update` (a drag in progress keeps tracking the
    /// touch). A pull in flight whose committed notch fell outside the new bounds is
    /// retargeted onto the in-bounds grid.
    pub fn set_bounds(&mut self, min_bound: f64, max_bound: f64) -> Result<(), ConfigError> {
        validate_bounds(min_bound, max_bound)?;
        self.options.min_bound = min_bound;
        self.options.max_bound = max_bound;
        match self.motion {
            Motion::Dragging => {}
            Motion::Pulling(tween) => {
                let clamped = self.clamp_notch(tween.to);
                if clamped != tween.to {
                    self.start_pull(clamped);
                }
            }
            _ => {
                if self.out_of_bounds() {
                    self.motion = Motion::BouncingBack;
                }
            }
        }
        Ok(())
    }

    /// The notch nearest to the current position.
    ///
    /// Rounds half away from zero, except exact halfway ties: those resolve in the
    /// direction of the current velocity sign, falling back to round-half-up when the
    /// velocity is zero.
    pub fn nearest_notch(&self) -> f64 {
        self.nearest_notch_to(self.position)
    }

    /// The next notch in the direction of travel (nearest when not moving).
    pub fn next_notch(&self) -> f64 {
        let ratio = (self.position - self.options.anchor) / self.options.interval;
        let n = if self.velocity > 0.0 {
            ratio.ceil()
        } else if self.velocity < 0.0 {
            ratio.floor()
        } else {
            return self.nearest_notch();
        };
        self.options.anchor + n * self.options.interval
    }

    /// Whether the current position sits on the notch grid, within `tolerance` units.
    pub fn is_on_notch(&self, tolerance: f64) -> bool {
        let ratio = (self.position - self.options.anchor) / self.options.interval;
        (ratio - ratio.round()).abs() * self.options.interval <= tolerance
    }

    /// A drag has started: cancel any settle/pull/bounce in progress and track 1:1.
    pub fn on_drag_start(&mut self) {
        rtrace!(position = self.position, "on_drag_start");
        self.velocity = 0.0;
        self.motion = Motion::Dragging;
    }

    /// Moves the position by `delta` while dragging.
    ///
    /// Tracking is 1:1 inside the bounds. Beyond them the boundary "gives" like a
    /// rubber band with local resistance `1 / (1 + overscroll / interval)`, integrated
    /// over the delta: a delta crossing the boundary is split there, and a gesture
    /// produces the same overscroll whether it arrives as one large delta or many
    /// small ones.
    pub fn on_drag_move(&mut self, delta: f64) {
        if !matches!(self.motion, Motion::Dragging) || !delta.is_finite() {
            return;
        }
        self.drag_by(delta);
    }

    /// Releases the drag with the measured velocity (units/second).
    pub fn on_drag_end(&mut self, release_velocity: f64) {
        if !matches!(self.motion, Motion::Dragging) {
            return;
        }
        let v = if release_velocity.is_finite() {
            release_velocity
        } else {
            0.0
        };
        self.velocity = self.clamp_velocity(v);
        rtrace!(
            position = self.position,
            velocity = self.velocity,
            "on_drag_end"
        );
        if self.out_of_bounds() {
            self.motion = Motion::BouncingBack;
        } else if self.velocity.abs() <= self.options.pull_back_velocity {
            self.start_pull(self.nearest_notch());
        } else {
            self.motion = Motion::Coasting;
        }
    }

    /// Advances the effect by `dt` seconds and returns the new position.
    ///
    /// Non-positive (or NaN) `dt` is a no-op: frame-timing jitter from the host must not
    /// corrupt the velocity integration.
    pub fn update(&mut self, dt: f64) -> f64 {
        if !(dt > 0.0) {
            return self.position;
        }
        match self.motion {
            Motion::Idle | Motion::Dragging => {}
            Motion::Coasting => self.coast(dt),
            Motion::Pulling(_) => self.pull(dt),
            Motion::BouncingBack => self.bounce(dt),
        }
        self.velocity = self.clamp_velocity(self.velocity);
        self.position
    }

    /// Halts motion immediately: velocity drops to zero and the settle target is
    /// discarded. The position is left wherever it was, even off-notch.
    pub fn stop(&mut self) {
        rtrace!(position = self.position, "stop");
        self.velocity = 0.0;
        self.motion = Motion::Idle;
    }

    fn coast(&mut self, dt: f64) {
        let alpha = self.options.coasting_alpha;
        let interval = self.options.interval;

        // Integrating v(t) = v0 * alpha^t exactly over the step keeps the projected
        // stopping point position + v / -ln(alpha) invariant across frame rates.
        if alpha < 1.0 {
            let ln_alpha = alpha.ln();
            let decay = alpha.powf(dt);
            self.position += self.velocity * (decay - 1.0) / ln_alpha;
            self.velocity *= decay;
        } else {
            self.position += self.velocity * dt;
        }

        if self.out_of_bounds() {
            rdebug!(position = self.position, "coast left bounds, bouncing back");
            self.motion = Motion::BouncingBack;
            return;
        }

        // Low velocity takes precedence over the projection rule when both fire.
        if self.velocity.abs() <= self.options.pull_back_velocity {
            self.start_pull(self.nearest_notch());
        } else if alpha < 1.0 {
            let projected = self.position + self.velocity / -alpha.ln();
            if (projected - self.position).abs() <= interval {
                self.start_pull(self.nearest_notch_to(projected));
            }
        }
    }

    fn pull(&mut self, dt: f64) {
        let Motion::Pulling(mut tween) = self.motion else {
            return;
        };
        tween.advance(dt);
        let next = tween.sample();
        self.velocity = (next - self.position) / dt;
        self.position = next;
        if tween.is_done() {
            self.settle_at(tween.to);
        } else {
            self.motion = Motion::Pulling(tween);
        }
    }

    fn bounce(&mut self, dt: f64) {
        let (edge, dir) = if self.position < self.options.min_bound {
            (self.options.min_bound, 1.0)
        } else if self.position > self.options.max_bound {
            (self.options.max_bound, -1.0)
        } else {
            // Back inside already (e.g. the host widened the bounds mid-bounce).
            self.velocity = 0.0;
            self.start_pull(self.nearest_notch());
            return;
        };

        let speed = self
            .options
            .pull_back_velocity
            .min(self.options.terminal_velocity);
        self.velocity = dir * speed;
        let next = self.position + self.velocity * dt;
        if (next - edge) * dir >= 0.0 {
            self.position = edge;
            self.velocity = 0.0;
            self.start_pull(self.nearest_notch());
        } else {
            self.position = next;
        }
    }

    /// Commits to `notch` (clamped onto the in-bounds grid) and starts pulling.
    fn start_pull(&mut self, notch: f64) {
        let target = self.clamp_notch(notch);
        if (target - self.position).abs() <= SETTLE_EPSILON {
            self.settle_at(target);
            return;
        }
        rdebug!(from = self.position, to = target, "start_pull");
        self.motion = Motion::Pulling(Tween::new(
            self.position,
            target,
            self.options.pull_duration,
            self.options.pull_easing,
        ));
    }

    fn settle_at(&mut self, notch: f64) {
        rdebug!(notch, "settled");
        self.position = notch;
        self.velocity = 0.0;
        self.motion = Motion::Idle;
        if let Some(cb) = &self.options.on_settle {
            cb(notch);
        }
    }

    fn nearest_notch_to(&self, position: f64) -> f64 {
        let anchor = self.options.anchor;
        let interval = self.options.interval;
        let ratio = (position - anchor) / interval;
        let frac = ratio - ratio.floor();
        let n = if (frac - 0.5).abs() <= TIE_EPSILON {
            if self.velocity > 0.0 {
                ratio.ceil()
            } else if self.velocity < 0.0 {
                ratio.floor()
            } else {
                ratio.floor() + 1.0
            }
        } else {
            ratio.round()
        };
        anchor + n * interval
    }

    /// Clamps a notch onto the grid point nearest to it *inside* the bounds. When the
    /// bounds are narrower than one interval, the boundary itself wins over the grid.
    fn clamp_notch(&self, notch: f64) -> f64 {
        let anchor = self.options.anchor;
        let interval = self.options.interval;
        let min = self.options.min_bound;
        let max = self.options.max_bound;
        let clamped = if notch > max {
            anchor + ((max - anchor) / interval).floor() * interval
        } else if notch < min {
            anchor + ((min - anchor) / interval).ceil() * interval
        } else {
            notch
        };
        clamped.clamp(min, max)
    }

    fn drag_by(&mut self, delta: f64) {
        if delta == 0.0 {
            return;
        }
        let min = self.options.min_bound;
        let max = self.options.max_bound;
        let interval = self.options.interval;

        if self.position > max || (self.position >= max && delta > 0.0) {
            let stretch = (self.position - max).max(0.0);
            let travel = rubber_travel(stretch, interval) + delta;
            if travel <= 0.0 {
                // the delta brings us back through the boundary; the rest is free
                self.position = max;
                self.drag_by(travel);
            } else {
                self.position = max + rubber_stretch(travel, interval);
            }
            return;
        }
        if self.position < min || (self.position <= min && delta < 0.0) {
            let stretch = (min - self.position).max(0.0);
            let travel = rubber_travel(stretch, interval) - delta;
            if travel <= 0.0 {
                self.position = min;
                self.drag_by(-travel);
            } else {
                self.position = min - rubber_stretch(travel, interval);
            }
            return;
        }

        // In bounds: 1:1 up to the boundary, then hand the remainder to the
        // overscroll branches above.
        let next = self.position + delta;
        if next > max {
            self.position = max;
            self.drag_by(next - max);
        } else if next < min {
            self.position = min;
            self.drag_by(next - min);
        } else {
            self.position = next;
        }
    }

    fn out_of_bounds(&self) -> bool {
        self.position < self.options.min_bound || self.position > self.options.max_bound
    }

    fn clamp_velocity(&self, velocity: f64) -> f64 {
        let t = self.options.terminal_velocity;
        velocity.clamp(-t, t)
    }
}

/// Overscroll displacement for accumulated finger travel `x` past a boundary.
///
/// Solves `dy/dx = 1 / (1 + y/interval)` from the boundary, so the local resistance
/// matches the documented law while the result depends only on total travel.
fn rubber_stretch(x: f64, interval: f64) -> f64 {
    interval * ((1.0 + 2.0 * x / interval).sqrt() - 1.0)
}

/// Inverse of [`rubber_stretch`]: the finger travel that produces displacement `y`.
fn rubber_travel(y: f64, interval: f64) -> f64 {
    y + y * y / (2.0 * interval)
}

impl ScrollEffect for RouletteScrollEffect {
    fn on_drag_start(&mut self) {
        RouletteScrollEffect::on_drag_start(self);
    }

    fn on_drag_move(&mut self, delta: f64) {
        RouletteScrollEffect::on_drag_move(self, delta);
    }

    fn on_drag_end(&mut self, release_velocity: f64) {
        RouletteScrollEffect::on_drag_end(self, release_velocity);
    }

    fn update(&mut self, dt: f64) -> f64 {
        RouletteScrollEffect::update(self, dt)
    }

    fn stop(&mut self) {
        RouletteScrollEffect::stop(self);
    }

    fn position(&self) -> f64 {
        RouletteScrollEffect::position(self)
    }

    fn velocity(&self) -> f64 {
        RouletteScrollEffect::velocity(self)
    }

    fn is_moving(&self) -> bool {
        RouletteScrollEffect::is_moving(self)
    }
}
