//! This crate computes the Levenshtein alignment of two sequences.  Next to
//! the edit distance it reports how many elements matched and, if asked, the
//! edit script as a list of opcodes.  Ties between equally good edits are
//! broken by a configurable [`Policy`].
//!
//! ```rust
//! use edit_distance::{SequenceMatcher, Policy};
//!
//! let old = ["hi", "my", "name", "is", "andy"];
//! let new = ["hi", "i'm", "my", "name's", "sandy"];
//! let mut matcher = SequenceMatcher::new(&old, &new).with_policy(Policy::HighestMatch);
//! assert_eq!(matcher.distance(), Ok(4));
//! assert_eq!(matcher.matches(), Ok(2));
//! ```
//!
//! The crate is split into three levels:
//!
//! * [`algorithms`]: the alignment engine.  It works on anything that can be
//!   indexed by `usize` and provides a distance-only mode as well as a mode
//!   that reports the edit script to an [`AlignHook`](algorithms::AlignHook).
//! * [`SequenceMatcher`]: a `difflib` style facade over two slices that
//!   caches distance, match count and opcodes.
//! * [`text`]: tokenizes texts into words, characters or graphemes and aligns
//!   the tokens.
//!
//! # Features
//!
//! * `text`: enables the text module (default).
//! * `unicode`: enables unicode word and grapheme segmentation.
//! * `serde`: derives `Serialize` and `Deserialize` for the public data types.
pub mod algorithms;
mod common;
mod error;
mod matcher;
pub mod text;
mod types;

pub use self::algorithms::Policy;
pub use self::common::*;
pub use self::error::AlignError;
pub use self::matcher::SequenceMatcher;
pub use self::types::*;
