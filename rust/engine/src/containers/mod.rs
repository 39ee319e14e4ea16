//! Hand-written generic containers the game state is built on.
//!
//! - [`Sequence`] - singly linked list (hands, deck)
//! - [`Stack`] - LIFO chain (card and play history)
//! - [`Queue`] - FIFO with O(1) ends (turn order)
//! - [`ChainedMap`] - separate-chaining hash map (participant directory)
//!
//! Every container reports `len()` equal to its live node count, and empty
//! results are `None` rather than errors.

mod hash_map;
mod queue;
mod sequence;
mod stack;

pub use hash_map::{ChainedMap, INITIAL_CAPACITY, LOAD_FACTOR};
pub use queue::Queue;
pub use sequence::Sequence;
pub use stack::Stack;
