//! Static records shown by the demo

use std::sync::Arc;

use swipe_deck_core::CardItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    pub id: u32,
    pub text: &'static str,
    pub uri: &'static str,
}

impl CardItem for CardRecord {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}

pub const DATA: [CardRecord; 8] = [
    CardRecord {
        id: 1,
        text: "Card #1",
        uri: "http://imgs.abduzeedo.com/files/paul0v2/unsplash/unsplash-04.jpg",
    },
    CardRecord {
        id: 2,
        text: "Card #2",
        uri: "http://www.fluxdigital.co/wp-content/uploads/2015/04/Unsplash.jpg",
    },
    CardRecord {
        id: 3,
        text: "Card #3",
        uri: "http://imgs.abduzeedo.com/files/paul0v2/unsplash/unsplash-09.jpg",
    },
    CardRecord {
        id: 4,
        text: "Card #4",
        uri: "http://imgs.abduzeedo.com/files/paul0v2/unsplash/unsplash-01.jpg",
    },
    CardRecord {
        id: 5,
        text: "Card #5",
        uri: "http://imgs.abduzeedo.com/files/paul0v2/unsplash/unsplash-04.jpg",
    },
    CardRecord {
        id: 6,
        text: "Card #6",
        uri: "http://www.fluxdigital.co/wp-content/uploads/2015/04/Unsplash.jpg",
    },
    CardRecord {
        id: 7,
        text: "Card #7",
        uri: "http://imgs.abduzeedo.com/files/paul0v2/unsplash/unsplash-09.jpg",
    },
    CardRecord {
        id: 8,
        text: "Card #8",
        uri: "http://imgs.abduzeedo.com/files/paul0v2/unsplash/unsplash-01.jpg",
    },
];

/// A fresh list of the demo records. Every call allocates a new list, so
/// handing it to the deck starts over from the first card.
pub fn demo_cards() -> Arc<[CardRecord]> {
    Arc::from(DATA.as_slice())
}
