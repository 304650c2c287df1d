//! Small shared utilities.

/// Wall-clock accumulator driving the animation.
pub mod clock;

pub use clock::SceneClock;
