//! Core types: the [`Validate`] trait and [`ValidationError`].

mod error;
mod traits;

pub use error::ValidationError;
pub use traits::Validate;
