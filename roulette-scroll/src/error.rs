/// Validation errors raised at construction/configuration time.
///
/// All parameter checks happen eagerly in [`crate::RouletteScrollEffect::new`] (and
/// `set_bounds`), never during `update`: a misconfigured notch grid should fail fast
/// rather than divide by zero mid-animation.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("interval must be finite and positive (got {0})")]
    InvalidInterval(f64),
    #[error("anchor must be finite (got {0})")]
    InvalidAnchor(f64),
    #[error("pull_duration must be finite and positive (got {0})")]
    InvalidPullDuration(f64),
    #[error("coasting_alpha must be in (0, 1] (got {0})")]
    InvalidCoastingAlpha(f64),
    #[error("pull_back_velocity must be finite and positive (got {0})")]
    InvalidPullBackVelocity(f64),
    #[error("terminal_velocity must be positive (got {0})")]
    InvalidTerminalVelocity(f64),
    #[error("bounds are inverted (min {min} > max {max})")]
    InvertedBounds { min: f64, max: f64 },
}
