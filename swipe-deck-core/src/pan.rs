//! Pointer samples to gesture events
//!
//! Hosts usually receive absolute pointer positions; the deck wants
//! displacement since touch-down. `PanTracker` bridges the two for a single
//! pointer. A mouse press carries no position, so the tracker remembers the
//! last cursor position it saw.

use crate::gesture::GestureEvent;
use crate::geometry::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerId {
    Mouse,
    Finger(u64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActivePan {
    pointer: PointerId,
    origin: Vector2,
    last: Vector2,
}

impl ActivePan {
    fn displacement(&self) -> Vector2 {
        self.last - self.origin
    }
}

#[derive(Debug, Clone, Default)]
pub struct PanTracker {
    cursor: Option<Vector2>,
    active: Option<ActivePan>,
}

impl PanTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_panning(&self) -> bool {
        self.active.is_some()
    }

    /// Displacement of the active pan, if any.
    pub fn displacement(&self) -> Option<Vector2> {
        self.active.map(|pan| pan.displacement())
    }

    /// Pointer went down at `position`, or at the last known cursor position
    /// when the platform does not report one.
    pub fn press(
        &mut self,
        pointer: PointerId,
        position: Option<Vector2>,
    ) -> Option<GestureEvent> {
        if self.active.is_some() {
            // Single pointer only; a second finger does not restart the pan.
            return None;
        }
        let origin = position.or(self.cursor)?;
        self.cursor = Some(origin);
        self.active = Some(ActivePan {
            pointer,
            origin,
            last: origin,
        });
        Some(GestureEvent::Down)
    }

    pub fn moved(
        &mut self,
        pointer: PointerId,
        position: Vector2,
    ) -> Option<GestureEvent> {
        if pointer == PointerId::Mouse {
            self.cursor = Some(position);
        }
        let pan = self.active.as_mut().filter(|pan| pan.pointer == pointer)?;
        pan.last = position;
        if pointer != PointerId::Mouse {
            self.cursor = Some(position);
        }
        let d = pan.displacement();
        Some(GestureEvent::Move { dx: d.x, dy: d.y })
    }

    pub fn release(
        &mut self,
        pointer: PointerId,
        position: Option<Vector2>,
    ) -> Option<GestureEvent> {
        let mut pan = self.active.filter(|pan| pan.pointer == pointer)?;
        if let Some(position) = position {
            pan.last = position;
        }
        self.active = None;
        let d = pan.displacement();
        Some(GestureEvent::Release { dx: d.x, dy: d.y })
    }

    pub fn lost(&mut self, pointer: PointerId) -> Option<GestureEvent> {
        self.active.filter(|pan| pan.pointer == pointer)?;
        self.active = None;
        Some(GestureEvent::Cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_press_uses_last_cursor() {
        let mut pan = PanTracker::new();
        assert_eq!(pan.press(PointerId::Mouse, None), None);

        let cursor = Vector2::new(100.0, 50.0);
        assert_eq!(pan.moved(PointerId::Mouse, cursor), None);
        assert_eq!(pan.press(PointerId::Mouse, None), Some(GestureEvent::Down));

        assert_eq!(
            pan.moved(PointerId::Mouse, Vector2::new(160.0, 40.0)),
            Some(GestureEvent::Move { dx: 60.0, dy: -10.0 })
        );
        assert_eq!(
            pan.release(PointerId::Mouse, None),
            Some(GestureEvent::Release { dx: 60.0, dy: -10.0 })
        );
        assert!(!pan.is_panning());
    }

    #[test]
    fn second_finger_is_ignored() {
        let mut pan = PanTracker::new();
        let first = PointerId::Finger(1);
        let second = PointerId::Finger(2);

        assert_eq!(
            pan.press(first, Some(Vector2::new(10.0, 10.0))),
            Some(GestureEvent::Down)
        );
        assert_eq!(pan.press(second, Some(Vector2::new(300.0, 300.0))), None);
        assert_eq!(pan.moved(second, Vector2::new(320.0, 300.0)), None);
        assert_eq!(pan.release(second, None), None);

        assert_eq!(
            pan.release(first, Some(Vector2::new(-40.0, 15.0))),
            Some(GestureEvent::Release { dx: -50.0, dy: 5.0 })
        );
    }

    #[test]
    fn lost_pointer_cancels() {
        let mut pan = PanTracker::new();
        pan.press(PointerId::Finger(7), Some(Vector2::ZERO));
        assert_eq!(pan.lost(PointerId::Finger(3)), None);
        assert_eq!(pan.lost(PointerId::Finger(7)), Some(GestureEvent::Cancel));
        assert_eq!(pan.displacement(), None);
    }
}
