//! Shared types for spellgram.
//!
//! - [`suggestion`] -- ranked suggestion values and their ordering
//! - [`text`] -- word and query normalization

pub mod suggestion;
pub mod text;

pub use suggestion::{Suggestion, WordSuggestions};
