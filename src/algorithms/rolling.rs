//! Distance-only alignment.
//!
//! * time: `O(NM)`
//! * space: `O(M)`
//!
//! Only two rows of costs and match counts are kept, so no edit script can
//! be recovered.  Use [`backpointer`](crate::algorithms::backpointer) for that.
use std::mem;
use std::ops::{Index, Range};

use crate::algorithms::select::{step, Score};
use crate::algorithms::utils::is_identical;
use crate::algorithms::Policy;
use crate::error::AlignError;

/// Computes distance and match count of `old` and `new`.
///
/// Aligns `old` between indices `old_range` and `new` between indices
/// `new_range`, comparing elements with `eq`.  Identical and empty inputs
/// are answered without consulting the action selector.
pub fn distance<Old, New, F>(
    policy: Policy,
    old: &Old,
    old_range: Range<usize>,
    new: &New,
    new_range: Range<usize>,
    mut eq: F,
) -> Result<(usize, usize), AlignError>
where
    Old: Index<usize> + ?Sized,
    New: Index<usize> + ?Sized,
    F: FnMut(&Old::Output, &New::Output) -> bool,
{
    let new_len = new_range.len();
    if is_identical(old, old_range.clone(), new, new_range.clone(), &mut eq) {
        return Ok((0, new_len));
    } else if old_range.is_empty() {
        return Ok((new_len, 0));
    } else if new_range.is_empty() {
        return Ok((old_range.len(), 0));
    }

    // row 0 is the cost of inserting every prefix of new
    let mut prev = (0..=new_len)
        .map(|cost| Score { cost, matches: 0 })
        .collect::<Vec<_>>();
    let mut cur = vec![Score::default(); new_len + 1];

    for (row, old_idx) in old_range.enumerate() {
        cur[0] = Score {
            cost: row + 1,
            matches: 0,
        };
        for (col, new_idx) in new_range.clone().enumerate() {
            let equal = eq(&old[old_idx], &new[new_idx]);
            let (_, score) = step(policy, cur[col], prev[col + 1], prev[col], equal)?;
            cur[col + 1] = score;
        }
        mem::swap(&mut prev, &mut cur);
    }

    let last = prev[new_len];
    Ok((last.cost, last.matches))
}

/// Shortcut for slices.
pub fn distance_slices<T: PartialEq>(
    policy: Policy,
    old: &[T],
    new: &[T],
) -> Result<(usize, usize), AlignError> {
    distance(policy, old, 0..old.len(), new, 0..new.len(), |a, b| a == b)
}

#[test]
fn test_words() {
    let a = ["a", "b"];
    let b = ["a", "c", "d", "a", "b"];
    assert_eq!(distance_slices(Policy::LowestCost, &a, &b), Ok((3, 2)));

    let a = ["hi", "my", "name", "is", "andy"];
    let b = ["hi", "i'm", "my", "name's", "sandy"];
    assert_eq!(distance_slices(Policy::LowestCost, &a, &b), Ok((4, 1)));
    assert_eq!(distance_slices(Policy::HighestMatch, &a, &b), Ok((4, 2)));
}

#[test]
fn test_fast_paths() {
    let empty: [&str; 0] = [];
    assert_eq!(distance_slices(Policy::LowestCost, &empty, &["a", "c"]), Ok((2, 0)));
    assert_eq!(distance_slices(Policy::LowestCost, &["a", "c"], &empty), Ok((2, 0)));
    assert_eq!(distance_slices(Policy::LowestCost, &empty, &empty), Ok((0, 0)));
    assert_eq!(
        distance_slices(Policy::HighestMatch, &["a", "c"], &["a", "c"]),
        Ok((0, 2))
    );
}

#[test]
fn test_chars() {
    let a = "kitten".chars().collect::<Vec<_>>();
    let b = "sitting".chars().collect::<Vec<_>>();
    assert_eq!(distance_slices(Policy::LowestCost, &a, &b), Ok((3, 4)));
    let a = "flaw".as_bytes();
    let b = "lawn".as_bytes();
    assert_eq!(distance_slices(Policy::LowestCost, a, b), Ok((2, 3)));
}
