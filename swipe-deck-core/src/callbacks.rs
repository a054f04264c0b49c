use crate::gesture::SwipeDirection;

/// A committed swipe, reported to the host before the index advances.
#[derive(Debug, Clone, Copy)]
pub struct Swiped<'a, T> {
    pub item: &'a T,
    pub direction: SwipeDirection,
    /// Index of `item`; the deck's index still has this value.
    pub index: usize,
    /// Cards left including `item`.
    pub remaining: usize,
}

pub type SwipeHandler<T> = Box<dyn FnMut(Swiped<'_, T>)>;

/// Host callbacks for committed swipes.
///
/// Both default to a no-op.
pub struct SwipeCallbacks<T> {
    pub on_swipe_right: SwipeHandler<T>,
    pub on_swipe_left: SwipeHandler<T>,
}

impl<T> Default for SwipeCallbacks<T> {
    fn default() -> Self {
        Self {
            on_swipe_right: Box::new(|_| {}),
            on_swipe_left: Box::new(|_| {}),
        }
    }
}

impl<T> SwipeCallbacks<T> {
    pub(crate) fn dispatch(&mut self, swiped: Swiped<'_, T>) {
        match swiped.direction {
            SwipeDirection::Right => (self.on_swipe_right)(swiped),
            SwipeDirection::Left => (self.on_swipe_left)(swiped),
        }
    }
}

impl<T> std::fmt::Debug for SwipeCallbacks<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeCallbacks").finish_non_exhaustive()
    }
}
