use roulette_scroll::{ConfigError, RouletteOptions, RouletteScrollEffect, ScrollEffect};

use crate::VelocityTracker;

/// A framework-neutral controller that wraps a scroll effect and feeds it from raw
/// touch events.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_touch_down` / `on_touch_move` / `on_touch_up` when input events occur
/// - `tick(now_ms)` each frame/timer tick
///
/// The controller converts absolute touch positions into drag deltas, measures the
/// release velocity over a sliding window, and derives `dt` for the effect from
/// successive tick timestamps. It is generic over [`ScrollEffect`], so any conforming
/// effect implementation can be substituted.
#[derive(Clone, Debug)]
pub struct Controller<E = RouletteScrollEffect> {
    effect: E,
    tracker: VelocityTracker,
    last_touch: Option<f64>,
    last_tick_ms: Option<u64>,
}

impl Controller<RouletteScrollEffect> {
    pub fn new(options: RouletteOptions) -> Result<Self, ConfigError> {
        Ok(Self::from_effect(RouletteScrollEffect::new(options)?))
    }
}

impl<E: ScrollEffect> Controller<E> {
    pub fn from_effect(effect: E) -> Self {
        Self {
            effect,
            tracker: VelocityTracker::new(),
            last_touch: None,
            last_tick_ms: None,
        }
    }

    pub fn effect(&self) -> &E {
        &self.effect
    }

    pub fn effect_mut(&mut self) -> &mut E {
        &mut self.effect
    }

    pub fn into_effect(self) -> E {
        self.effect
    }

    pub fn position(&self) -> f64 {
        self.effect.position()
    }

    pub fn is_moving(&self) -> bool {
        self.effect.is_moving()
    }

    /// A touch landed at `position` (absolute content units).
    pub fn on_touch_down(&mut self, position: f64, now_ms: u64) {
        self.last_touch = Some(position);
        self.tracker.clear();
        self.tracker.push(now_ms, position);
        self.effect.on_drag_start();
    }

    /// The touch moved to `position`.
    ///
    /// Ignored when no touch is down.
    pub fn on_touch_move(&mut self, position: f64, now_ms: u64) {
        let Some(last) = self.last_touch else {
            return;
        };
        self.effect.on_drag_move(position - last);
        self.tracker.push(now_ms, position);
        self.last_touch = Some(position);
    }

    /// The touch lifted; the release velocity measured from recent samples seeds the
    /// fling.
    pub fn on_touch_up(&mut self, now_ms: u64) {
        if self.last_touch.take().is_none() {
            return;
        }
        let release_velocity = self.tracker.velocity(now_ms);
        self.effect.on_drag_end(release_velocity);
    }

    /// Advances the effect one frame and returns the current position.
    ///
    /// `dt` is derived from the previous tick's timestamp; the first tick (and any tick
    /// with a non-advancing clock) leaves the effect untouched.
    pub fn tick(&mut self, now_ms: u64) -> f64 {
        let dt = match self.last_tick_ms {
            Some(last) => now_ms.saturating_sub(last) as f64 / 1000.0,
            None => 0.0,
        };
        self.last_tick_ms = Some(now_ms);
        self.effect.update(dt)
    }

    /// Halts motion immediately and forgets the active touch.
    pub fn stop(&mut self) {
        self.last_touch = None;
        self.tracker.clear();
        self.effect.stop();
    }
}
