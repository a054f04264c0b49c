use std::collections::HashSet;
use std::time::{Duration, Instant};

use iced::{Point, Rectangle, Size};
use swipe_deck_core::{DeckPhase, DeckScene, PointerId, SwipeDirection, Vector2};
use swipe_deck_demo::app::AppConfig;
use swipe_deck_demo::cards::DemoRenderer;
use swipe_deck_demo::data::{DATA, demo_cards};
use swipe_deck_demo::deck_canvas::DeckCanvas;
use swipe_deck_demo::messages::{Message, PointerMessage};
use swipe_deck_demo::state::{State, SwipeTally};
use swipe_deck_demo::update::update;

fn boot() -> State {
    State::new(&AppConfig::default())
}

/// Canvas placed below a 40px header in the default 390x720 window.
fn canvas_bounds() -> Rectangle {
    Rectangle::new(Point::new(0.0, 40.0), Size::new(390.0, 680.0))
}

fn canvas(state: &State) -> DeckCanvas {
    match state.deck.as_ref().unwrap().compose(&DemoRenderer) {
        DeckScene::Stack(cards) => DeckCanvas::new(cards),
        DeckScene::Exhausted(_) => DeckCanvas::new(Vec::new()),
    }
}

fn pointer(state: &mut State, message: PointerMessage) {
    let _ = update(state, Message::Pointer(message));
}

/// Mouse press at `at` as the canvas sees it; returns whether it was taken.
fn press(state: &mut State, at: Point) -> bool {
    pointer(
        state,
        PointerMessage::Moved(PointerId::Mouse, Vector2::new(at.x, at.y)),
    );
    let message = canvas(state).press(canvas_bounds(), PointerId::Mouse, at);
    let taken = message.is_some();
    if let Some(message) = message {
        let _ = update(state, message);
    }
    taken
}

/// Mouse drag by `dx` starting from `at`.
fn drag_from(state: &mut State, at: Point, dx: f32) -> bool {
    let taken = press(state, at);
    pointer(
        state,
        PointerMessage::Moved(
            PointerId::Mouse,
            Vector2::new(at.x + dx, at.y + 4.0),
        ),
    );
    pointer(state, PointerMessage::Released(PointerId::Mouse, None));
    taken
}

/// Mouse drag by `dx` starting on the top card.
fn drag(state: &mut State, dx: f32) {
    assert!(drag_from(state, Point::new(195.0, 300.0), dx));
}

fn run_frames(state: &mut State, start: Instant, frames: u32) {
    for i in 0..=frames {
        let now = start + Duration::from_millis(16 * u64::from(i));
        let _ = update(state, Message::Frame(now));
    }
}

#[test]
fn demo_data_has_eight_unique_cards() {
    let ids: HashSet<u32> = DATA.iter().map(|card| card.id).collect();
    assert_eq!(ids.len(), 8);
    assert_eq!(demo_cards().len(), 8);
}

#[test]
fn long_mouse_drag_likes_the_top_card() {
    let mut state = boot();
    // Default window is 390 wide: threshold 97.5.
    drag(&mut state, 140.0);

    let deck = state.deck.as_ref().unwrap();
    assert!(matches!(
        deck.phase(),
        DeckPhase::SwipingOut {
            direction: SwipeDirection::Right,
            ..
        }
    ));
    assert!(state.is_animating());

    run_frames(&mut state, Instant::now(), 30);

    let deck = state.deck.as_ref().unwrap();
    assert_eq!(deck.index(), 1);
    assert_eq!(state.tally.borrow().liked, vec![1]);
    assert!(state.tally.borrow().passed.is_empty());
}

#[test]
fn press_outside_the_card_does_not_drag_it() {
    let mut state = boot();
    // Empty canvas below the 380px card.
    assert!(!drag_from(&mut state, Point::new(20.0, 700.0), 180.0));
    // Header above the canvas.
    assert!(!drag_from(&mut state, Point::new(195.0, 20.0), 180.0));

    let deck = state.deck.as_ref().unwrap();
    assert!(matches!(deck.phase(), DeckPhase::Idle));
    assert!(deck.position().is_zero());
    assert_eq!(deck.index(), 0);
    assert_eq!(*state.tally.borrow(), SwipeTally::default());
}

#[test]
fn only_the_interactive_card_is_hit() {
    let state = boot();
    let canvas = canvas(&state);
    let size = canvas_bounds().size();

    assert_eq!(canvas.cards.iter().filter(|c| c.interactive).count(), 1);
    assert!(canvas.hits_interactive_card(size, Point::new(195.0, 205.0)));
    assert!(!canvas.hits_interactive_card(size, Point::new(195.0, 600.0)));
    assert!(!canvas.hits_interactive_card(size, Point::new(5.0, 205.0)));

    let empty = DeckCanvas::new(Vec::new());
    assert!(!empty.hits_interactive_card(size, Point::new(195.0, 205.0)));
}

#[test]
fn hit_test_follows_the_dragged_card() {
    let mut state = boot();
    press(&mut state, Point::new(195.0, 300.0));
    pointer(
        &mut state,
        PointerMessage::Moved(PointerId::Mouse, Vector2::new(255.0, 300.0)),
    );

    let canvas = canvas(&state);
    let size = canvas_bounds().size();
    // Card centre has moved 60px right.
    assert!(canvas.hits_interactive_card(size, Point::new(255.0, 205.0)));
    assert!(!canvas.hits_interactive_card(size, Point::new(10.0, 30.0)));
}

#[test]
fn short_drag_springs_back_without_a_swipe() {
    let mut state = boot();
    drag(&mut state, -60.0);

    let deck = state.deck.as_ref().unwrap();
    assert!(matches!(deck.phase(), DeckPhase::SpringingBack(_)));

    run_frames(&mut state, Instant::now(), 200);

    let deck = state.deck.as_ref().unwrap();
    assert_eq!(deck.index(), 0);
    assert!(matches!(deck.phase(), DeckPhase::Idle));
    assert!(deck.position().is_zero());
    assert_eq!(*state.tally.borrow(), SwipeTally::default());
}

#[test]
fn cursor_leaving_the_window_cancels_the_drag() {
    let mut state = boot();
    assert!(press(&mut state, Point::new(100.0, 100.0)));
    pointer(
        &mut state,
        PointerMessage::Moved(PointerId::Mouse, Vector2::new(390.0, 100.0)),
    );
    pointer(&mut state, PointerMessage::Lost(PointerId::Mouse));

    let deck = state.deck.as_ref().unwrap();
    assert!(matches!(deck.phase(), DeckPhase::SpringingBack(_)));
    assert!(!state.pan.is_panning());
}

#[test]
fn narrower_window_lowers_the_threshold() {
    let mut state = boot();
    let _ = update(
        &mut state,
        Message::WindowResized { width: 200.0 },
    );
    assert_eq!(state.deck.as_ref().unwrap().swipe_threshold(), 50.0);

    drag(&mut state, -70.0);
    assert!(matches!(
        state.deck.as_ref().unwrap().phase(),
        DeckPhase::SwipingOut {
            direction: SwipeDirection::Left,
            ..
        }
    ));
}

#[test]
fn zero_width_resize_keeps_the_previous_width() {
    let mut state = boot();
    let _ = update(
        &mut state,
        Message::WindowResized { width: 0.0 },
    );
    assert_eq!(state.deck.as_ref().unwrap().config().screen_width, 390.0);
}

#[test]
fn keyboard_swipes_through_to_the_end_and_reload_starts_over() {
    let mut state = boot();
    let mut now = Instant::now();

    for _ in 0..8 {
        let _ = update(&mut state, Message::ForceSwipe(SwipeDirection::Left));
        run_frames(&mut state, now, 30);
        now += Duration::from_secs(1);
    }

    let deck = state.deck.as_ref().unwrap();
    assert!(deck.is_exhausted());
    assert_eq!(state.tally.borrow().passed, vec![1, 2, 3, 4, 5, 6, 7, 8]);

    // Nothing left to swipe.
    let _ = update(&mut state, Message::ForceSwipe(SwipeDirection::Right));
    assert!(matches!(state.deck.as_ref().unwrap().phase(), DeckPhase::Idle));

    let _ = update(&mut state, Message::Reload);
    let deck = state.deck.as_ref().unwrap();
    assert_eq!(deck.index(), 0);
    assert_eq!(deck.remaining(), 8);
}
