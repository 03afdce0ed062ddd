//! The alignment engine.
//!
//! The engine fills the classic `O(N * M)` Levenshtein table over two
//! indexable sequences.  At every cell the action selector ([`Policy::select`]) picks
//! one of insert, delete or substitute according to a [`Policy`], which
//! decides how ties are broken and whether edits are minimized or matches
//! are maximized.
//!
//! There are two modes:
//!
//! * [`rolling`]: computes only the distance and the match count.  It keeps
//!   two rows of the table alive and runs in `O(M)` space.
//! * [`backpointer`]: keeps a full table with a backpointer per cell and
//!   walks it back from the bottom right corner to recover the edit script.
//!   The steps are reported to an [`AlignHook`], [`Capture`] collects them as
//!   [`Opcode`](crate::Opcode)s.
//!
//! Both modes accept an arbitrary equality predicate (see the `_by`
//! functions), the other functions compare elements with [`PartialEq`].
//! Given the same policy both modes always agree on distance and match count.

// general traits and utilities
mod capture;
mod hook;
mod select;
mod utils;

use std::fmt;
use std::ops::{Index, Range};

pub use capture::*;
pub use hook::*;
pub use select::*;

// the two table walkers
pub mod backpointer;
pub mod rolling;

use crate::error::AlignError;
use crate::types::Opcode;

/// The tie-breaking policy of the action selector.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Policy {
    /// Minimize the number of edits, break ties by match count.
    LowestCost,
    /// Maximize the number of matches, break ties by cost.
    HighestMatch,
}

impl Default for Policy {
    /// Returns the default policy ([`Policy::LowestCost`]).
    fn default() -> Policy {
        Policy::LowestCost
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Policy::LowestCost => "lowest cost",
            Policy::HighestMatch => "highest match",
        })
    }
}

/// Computes distance and match count of `old` and `new` within the given ranges.
pub fn compute_distance<Old, New>(
    policy: Policy,
    old: &Old,
    old_range: Range<usize>,
    new: &New,
    new_range: Range<usize>,
) -> Result<(usize, usize), AlignError>
where
    Old: Index<usize> + ?Sized,
    New: Index<usize> + ?Sized,
    New::Output: PartialEq<Old::Output>,
{
    rolling::distance(policy, old, old_range, new, new_range, |a, b| b == a)
}

/// Like [`compute_distance`] but compares elements with `eq`.
pub fn compute_distance_by<Old, New, F>(
    policy: Policy,
    old: &Old,
    old_range: Range<usize>,
    new: &New,
    new_range: Range<usize>,
    eq: F,
) -> Result<(usize, usize), AlignError>
where
    Old: Index<usize> + ?Sized,
    New: Index<usize> + ?Sized,
    F: FnMut(&Old::Output, &New::Output) -> bool,
{
    rolling::distance(policy, old, old_range, new, new_range, eq)
}

/// Shortcut for computing the distance of two slices.
pub fn compute_distance_slices<Old, New>(
    policy: Policy,
    old: &[Old],
    new: &[New],
) -> Result<(usize, usize), AlignError>
where
    New: PartialEq<Old>,
{
    compute_distance(policy, old, 0..old.len(), new, 0..new.len())
}

/// Aligns `old` and `new` and reports the edit script to the hook.
///
/// Returns distance and match count.
pub fn align<Old, New, D>(
    policy: Policy,
    d: &mut D,
    old: &Old,
    old_range: Range<usize>,
    new: &New,
    new_range: Range<usize>,
) -> Result<(usize, usize), D::Error>
where
    Old: Index<usize> + ?Sized,
    New: Index<usize> + ?Sized,
    D: AlignHook,
    D::Error: From<AlignError>,
    New::Output: PartialEq<Old::Output>,
{
    backpointer::align(d, policy, old, old_range, new, new_range, |a, b| b == a)
}

/// Like [`align`] but compares elements with `eq`.
pub fn align_by<Old, New, D, F>(
    policy: Policy,
    d: &mut D,
    old: &Old,
    old_range: Range<usize>,
    new: &New,
    new_range: Range<usize>,
    eq: F,
) -> Result<(usize, usize), D::Error>
where
    Old: Index<usize> + ?Sized,
    New: Index<usize> + ?Sized,
    D: AlignHook,
    D::Error: From<AlignError>,
    F: FnMut(&Old::Output, &New::Output) -> bool,
{
    backpointer::align(d, policy, old, old_range, new, new_range, eq)
}

/// Computes distance, match count and the captured opcodes.
///
/// This is like [`align`] but instead of using an arbitrary hook this will
/// always use [`Capture`] and return the captured [`Opcode`]s.
pub fn compute_alignment<Old, New>(
    policy: Policy,
    old: &Old,
    old_range: Range<usize>,
    new: &New,
    new_range: Range<usize>,
) -> Result<(usize, usize, Vec<Opcode>), AlignError>
where
    Old: Index<usize> + ?Sized,
    New: Index<usize> + ?Sized,
    New::Output: PartialEq<Old::Output>,
{
    compute_alignment_by(policy, old, old_range, new, new_range, |a, b| b == a)
}

/// Like [`compute_alignment`] but compares elements with `eq`.
pub fn compute_alignment_by<Old, New, F>(
    policy: Policy,
    old: &Old,
    old_range: Range<usize>,
    new: &New,
    new_range: Range<usize>,
    eq: F,
) -> Result<(usize, usize, Vec<Opcode>), AlignError>
where
    Old: Index<usize> + ?Sized,
    New: Index<usize> + ?Sized,
    F: FnMut(&Old::Output, &New::Output) -> bool,
{
    let mut d = Capture::new();
    let (distance, matches) =
        backpointer::align(&mut d, policy, old, old_range, new, new_range, eq)?;
    Ok((distance, matches, d.into_vec()))
}

/// Shortcut for aligning two slices.
pub fn compute_alignment_slices<Old, New>(
    policy: Policy,
    old: &[Old],
    new: &[New],
) -> Result<(usize, usize, Vec<Opcode>), AlignError>
where
    New: PartialEq<Old>,
{
    compute_alignment(policy, old, 0..old.len(), new, 0..new.len())
}

#[test]
fn test_sub_ranges() {
    let old = ["x", "a", "b", "x"];
    let new = ["y", "y", "a", "c"];
    let (distance, matches, ops) =
        compute_alignment(Policy::LowestCost, &old[..], 1..3, &new[..], 2..4).unwrap();
    assert_eq!((distance, matches), (1, 1));
    assert_eq!(
        ops.iter().map(|op| op.to_string()).collect::<Vec<_>>(),
        vec!["equal(1,2,2,3)", "replace(2,3,3,4)"]
    );
    assert_eq!(
        compute_distance(Policy::LowestCost, &old[..], 1..3, &new[..], 2..4),
        Ok((1, 1))
    );
}

#[test]
fn test_custom_equality() {
    let old = ["Hello", "World"];
    let new = ["hello", "world", "!"];
    let eq = |a: &&str, b: &&str| a.eq_ignore_ascii_case(b);
    assert_eq!(
        compute_distance_by(Policy::LowestCost, &old[..], 0..2, &new[..], 0..3, eq),
        Ok((1, 2))
    );
    let (_, _, ops) =
        compute_alignment_by(Policy::LowestCost, &old[..], 0..2, &new[..], 0..3, eq).unwrap();
    insta::assert_snapshot!(
        ops.iter().map(|op| op.to_string()).collect::<Vec<_>>().join("\n"),
        @r###"
    equal(0,1,0,1)
    equal(1,2,1,2)
    insert(2,2,2,3)
    "###
    );
}

#[test]
fn test_heterogeneous_elements() {
    let old = vec![String::from("a"), String::from("b")];
    let new = ["a", "c"];
    assert_eq!(
        compute_distance_slices(Policy::LowestCost, &old, &new[..]),
        Ok((1, 1))
    );
}
