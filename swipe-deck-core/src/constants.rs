//! Deck tuning constants
//!
//! Defaults for every configurable aspect of the deck. `DeckConfig::default()`
//! is built from these, so tuning should happen here.

/// Gesture thresholds.
pub mod gesture {
    /// Fraction of the screen width a release must exceed to commit a swipe.
    pub const SWIPE_THRESHOLD_RATIO: f32 = 0.25;
    /// Screen width (logical px) used when the host does not provide one.
    pub const DEFAULT_SCREEN_WIDTH: f32 = 390.0;
}

/// Timed swipe-out animation.
pub mod swipe_out {
    /// Duration (ms) of the fly-off animation after a committed swipe.
    pub const DURATION_MS: u64 = 250;
}

/// Spring-back animation. Stiffness and damping correspond to a
/// tension/friction pair of 40/7.
pub mod spring {
    pub const STIFFNESS: f32 = 230.2;
    pub const DAMPING: f32 = 22.0;
    pub const MASS: f32 = 1.0;
    /// Distance from the target (px) under which the spring may settle.
    pub const REST_DISPLACEMENT: f32 = 0.001;
    /// Speed (px/s) under which the spring may settle.
    pub const REST_SPEED: f32 = 0.001;
}

/// Rotation tilt applied to the top card.
pub mod rotation {
    /// Rotation (degrees) reached at the edge of the input domain.
    pub const MAX_DEGREES: f32 = 120.0;
    /// Input domain half-width as a multiple of the screen width.
    pub const DOMAIN_FACTOR: f32 = 1.5;
}

/// Stack composition.
pub mod stack {
    /// Vertical offset per depth level for background cards.
    pub const DEPTH_OFFSET: f32 = 10.0;
}

/// Layout transition after the index or list changes.
pub mod layout_animation {
    pub const ENABLED: bool = true;
    pub const DURATION_MS: u64 = 700;
}
