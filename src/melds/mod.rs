//! Melds: the public BOOK/RUN sets and their validation.
//!
//! ## Key Types
//!
//! - `MeldType`: BOOK or RUN
//! - `Meld`: a meld on the table (owner, cards, round)
//! - `MeldError`: why a composition is illegal
//!
//! `validate_meld` and `validate_layoff` are pure; they never look at the
//! game state beyond the round rule they are given.

pub mod meld;
pub mod validator;

pub use meld::{Meld, MeldId};
pub use validator::{
    validate_layoff, validate_layoff_with, validate_meld, validate_meld_with, MeldError, MeldType,
    MIN_MELD_SIZE,
};
