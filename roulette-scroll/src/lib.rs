//! A headless roulette (notched wheel) scroll effect.
//!
//! For adapter-level utilities (touch-sample translation, velocity tracking), see the
//! `roulette-scroll-adapter` crate.
//!
//! This crate implements the position/velocity state machine that makes a scrollable
//! container settle on fixed, evenly spaced offsets -- `anchor + k * interval` -- instead
//! of an arbitrary pixel, the way iOS/Android date pickers do. A released fling coasts
//! under exponential deceleration, commits to a notch, and is pulled onto it with an
//! easing curve; content dragged past its bounds meets progressive resistance and
//! bounces back.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - drag lifecycle calls (start / move deltas / release velocity)
//! - a per-frame `update(dt)` tick
//! - scrollable extents (`min_bound` / `max_bound`), when finite
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod effect;
mod error;
mod options;
mod state;
mod tween;


pub use effect::{Phase, RouletteScrollEffect, ScrollEffect};
pub use error::ConfigError;
pub use options::{OnSettleCallback, RouletteOptions};
pub use state::ScrollState;
pub use tween::{Easing, Tween};
