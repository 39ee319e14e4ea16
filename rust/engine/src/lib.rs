//! # blackjack-engine: Heads-up Blackjack Core
//!
//! A deterministic blackjack table for one human against the house, built on
//! a small set of hand-written containers. Every round is reproducible from
//! the engine seed.
//!
//! ## Core Modules
//!
//! - [`containers`] - Linked sequence, stack, queue and chained hash map
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`hand`] - Hand scoring with soft and hard aces
//! - [`rules`] - The draw-below-17 decision rule
//! - [`dealer`] - The dealer's automatic turn
//! - [`player`] - Participants, their hands, wins and card history
//! - [`directory`] - Name lookup for participants
//! - [`turns`] - Round-robin turn order
//! - [`game`] - Settlement rules and session standings
//! - [`session`] - Play-by-play record of a round
//! - [`engine`] - Round orchestration
//! - [`logger`] - RoundRecord serialization to JSONL
//! - [`errors`] - Error types for container and game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_engine::hand::Hand;
//!
//! let mut hand = Hand::new();
//! hand.append(Card::new(Rank::Ace, Suit::Spades));
//! hand.append(Card::new(Rank::King, Suit::Hearts));
//! assert_eq!(hand.total(), 21);
//! assert!(hand.is_natural());
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use blackjack_engine::engine::Engine;
//!
//! let mut a = Engine::new("Ana", Some(42)).unwrap();
//! let mut b = Engine::new("Ana", Some(42)).unwrap();
//! assert_eq!(a.autoplay_round().unwrap(), b.autoplay_round().unwrap());
//! ```

pub mod cards;
pub mod containers;
pub mod dealer;
pub mod deck;
pub mod directory;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
pub mod session;
pub mod turns;
