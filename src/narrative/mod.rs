//! Narrative synthesis
//!
//! Renders ordered class records as paragraph text:
//! - generator: orchestration and the `Description` result
//! - sections: one paragraph generator per layer
//! - diversity: area/diversity remark that opens the description
//! - gradient: elevation-temperature sentence
//! - summary: per-layer share digests
//! - utils: dictionaries, threshold ladders, text helpers

pub mod diversity;
pub mod generator;
pub mod gradient;
pub mod sections;
pub mod summary;
pub mod utils;

pub use generator::{Description, NarrativeSynthesizer, PARAGRAPH_BREAK, TOO_SMALL_SENTENCE};
pub use sections::SynthesisState;
