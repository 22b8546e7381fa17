//! Narrative utilities
//!
//! Static dictionaries, threshold ladders and text helpers shared by the
//! section generators.

pub mod classify;
pub mod lookup_tables;
pub mod text;
