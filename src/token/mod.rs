//! SubRip line tokens
//!
//! A cue block is made of an index line, a timing line and one or more text
//! lines, closed by a blank line:
//!
//! ```text
//! 1
//! 00:01:43,438 --> 00:01:47,150
//! Something is coming.
//! Something hungry for blood.
//!
//! ```
mod index;
mod timings;

pub use index::Index;
pub use timings::Timings;

/// True for lines which close a cue block
pub fn is_blank<S: AsRef<str>>(line: S) -> bool {
    line.as_ref().trim().is_empty()
}
