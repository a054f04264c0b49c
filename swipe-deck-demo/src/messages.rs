use std::time::Instant;

use swipe_deck_core::{PointerId, SwipeDirection, Vector2};

/// Raw pointer input, before it is turned into a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerMessage {
    Pressed(PointerId, Option<Vector2>),
    Moved(PointerId, Vector2),
    Released(PointerId, Option<Vector2>),
    Lost(PointerId),
}

#[derive(Debug, Clone)]
pub enum Message {
    Pointer(PointerMessage),
    /// Frame-synchronized tick with timestamp from window::frames()
    Frame(Instant),
    /// New window width; the deck only depends on width.
    WindowResized { width: f32 },
    /// Keyboard shortcut for a committed swipe.
    ForceSwipe(SwipeDirection),
    /// "Get More!" on the end-of-deck panel.
    Reload,
}
