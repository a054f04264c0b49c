//! Which cards are visible and in what order they are painted

use crate::config::StackConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRole {
    /// Card at the consumption index; follows the gesture.
    Top,
    /// Static card behind the top card.
    Background,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSlot {
    /// Position in the host's list.
    pub index: usize,
    /// 0 for the top card, 1 for the card directly behind it, ...
    pub depth: usize,
    pub role: CardRole,
    /// Resting vertical offset of the card within the stack.
    pub offset_y: f32,
}

/// Visible slots for `index` into a list of `len`, back-to-front.
///
/// Consumed cards (`i < index`) are skipped. The last element is the top
/// card, so painting in order leaves it above every deeper card. Empty when
/// the list is exhausted.
pub fn plan_stack(
    index: usize,
    len: usize,
    cfg: &StackConfig,
) -> Vec<CardSlot> {
    if index >= len {
        return Vec::new();
    }
    let remaining = len - index;
    let visible = cfg.max_rendered.map_or(remaining, |cap| remaining.min(cap));

    (0..visible)
        .rev()
        .map(|depth| CardSlot {
            index: index + depth,
            depth,
            role: if depth == 0 {
                CardRole::Top
            } else {
                CardRole::Background
            },
            offset_y: cfg.depth_offset * depth as f32,
        })
        .collect()
}
