//! Swipe Deck core
//!
//! Headless engine for a stack of swipeable cards. It tracks a single-pointer
//! drag, maps it to a card offset and tilt, decides on release whether to
//! commit a left/right swipe or spring back, animates either outcome, and
//! advances an index into the host's list as cards are consumed.
//!
//! Nothing here draws or reads a clock: hosts feed gesture events and frame
//! timestamps, and paint the [`DeckScene`] returned by [`Deck::compose`].

pub mod animation;
pub mod callbacks;
pub mod config;
pub mod constants;
pub mod deck;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod item;
pub mod layout;
pub mod pan;
pub mod position;
pub mod render;
pub mod rotation;
pub mod transition;

pub use callbacks::{SwipeCallbacks, Swiped};
pub use config::DeckConfig;
pub use deck::{Deck, DeckPhase};
pub use easing::EasingFunction;
pub use error::{DeckError, Result};
pub use geometry::Vector2;
pub use gesture::{
    GestureEvent, GestureResponse, IgnoreReason, ReleaseDecision,
    SwipeDirection,
};
pub use item::CardItem;
pub use layout::CardRole;
pub use pan::{PanTracker, PointerId};
pub use render::{CardRenderer, CardTransform, DeckScene, PlacedCard, RenderFns};
