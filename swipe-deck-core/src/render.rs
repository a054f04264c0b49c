//! Host-facing scene description
//!
//! The deck does not draw anything. [`Deck::compose`](crate::Deck::compose)
//! asks a [`CardRenderer`] for each visible card's content and returns it
//! together with the transform the host should apply.

use crate::geometry::Vector2;
use crate::layout::CardRole;

/// Produces the host's visual for a card and for the exhausted state.
pub trait CardRenderer<T> {
    type Output;

    fn render_card(&self, item: &T) -> Self::Output;

    fn render_no_more_cards(&self) -> Self::Output;
}

/// Adapts a pair of closures into a [`CardRenderer`].
pub struct RenderFns<C, N> {
    card: C,
    no_more_cards: N,
}

impl<C, N> RenderFns<C, N> {
    pub fn new(card: C, no_more_cards: N) -> Self {
        Self {
            card,
            no_more_cards,
        }
    }
}

impl<C, N> std::fmt::Debug for RenderFns<C, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderFns").finish_non_exhaustive()
    }
}

impl<T, O, C, N> CardRenderer<T> for RenderFns<C, N>
where
    C: Fn(&T) -> O,
    N: Fn() -> O,
{
    type Output = O;

    fn render_card(&self, item: &T) -> O {
        (self.card)(item)
    }

    fn render_no_more_cards(&self) -> O {
        (self.no_more_cards)()
    }
}

/// Transform to apply when painting a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    /// Translation from the deck origin.
    pub offset: Vector2,
    /// Clockwise rotation around the card centre.
    pub rotation_deg: f32,
    pub opacity: f32,
}

impl CardTransform {
    pub fn rotation_rad(&self) -> f32 {
        self.rotation_deg.to_radians()
    }
}

#[derive(Debug, Clone)]
pub struct PlacedCard<O> {
    /// Position in the host's list.
    pub index: usize,
    pub depth: usize,
    pub role: CardRole,
    pub transform: CardTransform,
    /// Only the top card receives gesture input.
    pub interactive: bool,
    pub content: O,
}

#[derive(Debug, Clone)]
pub enum DeckScene<O> {
    /// Every card has been consumed.
    Exhausted(O),
    /// Visible cards in paint order, back-to-front. The last card is the top
    /// card.
    Stack(Vec<PlacedCard<O>>),
}

impl<O> DeckScene<O> {
    pub fn top(&self) -> Option<&PlacedCard<O>> {
        match self {
            DeckScene::Exhausted(_) => None,
            DeckScene::Stack(cards) => cards.last(),
        }
    }
}
