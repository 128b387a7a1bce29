//! Entity to model mappers
//!
//! Conversions from database rows to domain entities (social-core).
//! Columns holding enum discriminants go through `TryFrom`, since a
//! stray value in storage must surface as an error rather than a panic.

mod comment;
mod post;
mod reaction;
mod report;
mod user;

pub use comment::attach_reactions;
