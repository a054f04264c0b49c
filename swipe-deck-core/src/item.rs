use std::fmt::Debug;
use std::hash::Hash;

/// A record the deck can show as a card.
///
/// The key must be stable and unique within a list; the layout transition
/// uses it to follow a card across re-renders.
pub trait CardItem {
    type Key: Clone + Eq + Hash + Debug;

    fn key(&self) -> Self::Key;
}
