//! Combinators that compose validators.

mod chain;
mod each;

pub use chain::{Chain, ChainLink};
pub use each::Each;
