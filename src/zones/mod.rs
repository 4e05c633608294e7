//! Card zones: the deck, the draw pile and the discard pile.
//!
//! Hands live on `Player` and melds on `GameState`; this module owns
//! building, shuffling and dealing the deck and moving cards between piles.

pub mod deck;

pub use deck::{
    create_deck, deal, discard_one, draw_one, recycle_discard_into_draw, shuffle,
    take_discard_top, Deal,
};
