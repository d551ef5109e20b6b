//! Adapter utilities for the `roulette-scroll` crate.
//!
//! The `roulette-scroll` crate is UI-agnostic and focuses on the settling state machine.
//! This crate provides the small, framework-neutral glue a UI layer typically needs on
//! top of it:
//!
//! - [`VelocityTracker`]: measures release velocity from a sliding window of touch samples
//! - [`Controller`]: translates absolute touch positions + millisecond timestamps into
//!   the core drag lifecycle and per-frame `update(dt)` calls
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui/winit bindings).
#![forbid(unsafe_code)]

mod controller;
mod velocity;


pub use controller::Controller;
pub use velocity::VelocityTracker;
