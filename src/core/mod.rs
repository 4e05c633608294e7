//! Core engine types: cards, players, state, actions, RNG, configuration.
//!
//! This module contains the plain data every other module works on.
//! Variants configure these via `GameConfig` rather than modifying the core.

pub mod action;
pub mod card;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionKind, Selection};
pub use card::{Card, CardId, Suit, JOKER_RANK, MAX_RANK, MIN_RANK};
pub use config::{DeckConfig, GameConfig, MeldPolicy, ScoringConfig};
pub use error::{ActionError, EngineError, RuleViolation};
pub use player::{Player, PlayerId};
pub use rng::{FnSource, Mulberry32, RandomSource};
pub use state::{CardCensus, GameState, GameStatus, PublicPlayer, PublicView, TurnPhase};
