use crate::geometry::Vector2;

/// The top card's on-screen offset.
///
/// Owned by the deck. Only the deck writes it (through [`set`](Self::set));
/// everything else reads [`value`](Self::value) and derives from it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimatedPosition {
    value: Vector2,
}

impl AnimatedPosition {
    pub fn value(&self) -> Vector2 {
        self.value
    }

    pub fn is_at_rest(&self) -> bool {
        self.value.is_zero()
    }

    pub(crate) fn set(&mut self, value: Vector2) {
        self.value = value;
    }
}
