use crate::Phase;

/// A lightweight snapshot of the effect's motion state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. It is
/// intended for UI layers that want to render or log the current motion without
/// reaching into the effect itself.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub position: f64,
    pub velocity: f64,
    pub phase: Phase,
}
