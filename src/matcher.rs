//! A cached alignment of two sequences.
//!
//! [`SequenceMatcher`] mirrors the interface of Python's `difflib` matcher
//! but is backed by the edit distance engine.  Distance, match count and
//! opcodes are computed lazily and cached until one of the sequences is
//! replaced.
//!
//! ```rust
//! use edit_distance::SequenceMatcher;
//!
//! let mut matcher = SequenceMatcher::new(&["a", "b"], &["a", "b", "d", "c"]);
//! assert_eq!(matcher.distance(), Ok(2));
//! assert_eq!(matcher.matching_blocks(), Ok(vec![(0, 0, 1), (1, 1, 1)]));
//! ```
use std::ops::Range;

use crate::algorithms::{compute_alignment_by, rolling, Policy};
use crate::common::{get_match_ratio, matching_blocks};
use crate::error::AlignError;
use crate::types::Opcode;

#[derive(Debug, Default)]
struct Cache {
    distance: Option<usize>,
    matches: Option<usize>,
    opcodes: Option<Vec<Opcode>>,
}

impl Cache {
    fn invalidate(&mut self) {
        *self = Cache::default();
    }

    /// Stores freshly computed values after checking them against the cache.
    fn store(&mut self, distance: usize, matches: usize) -> Result<(), AlignError> {
        check("distance", self.distance, distance)?;
        check("matches", self.matches, matches)?;
        self.distance = Some(distance);
        self.matches = Some(matches);
        Ok(())
    }
}

fn check(field: &'static str, cached: Option<usize>, computed: usize) -> Result<(), AlignError> {
    match cached {
        Some(cached) if cached != computed => {
            tracing::warn!(field, cached, computed, "cached value disagrees with recomputation");
            Err(AlignError::CacheMismatch {
                field,
                cached,
                computed,
            })
        }
        _ => Ok(()),
    }
}

fn default_eq<Old, New: PartialEq<Old>>(old: &Old, new: &New) -> bool {
    new == old
}

/// Aligns two sequences and caches the results.
pub struct SequenceMatcher<'old, 'new, Old, New = Old, E = fn(&Old, &New) -> bool> {
    old: &'old [Old],
    new: &'new [New],
    eq: E,
    policy: Policy,
    cache: Cache,
}

impl<'old, 'new, Old, New> SequenceMatcher<'old, 'new, Old, New>
where
    New: PartialEq<Old>,
{
    /// Creates a matcher that compares elements with [`PartialEq`].
    pub fn new(old: &'old [Old], new: &'new [New]) -> Self {
        SequenceMatcher::with_equality(old, new, default_eq as fn(&Old, &New) -> bool)
    }
}

impl<'old, 'new, Old, New, E> SequenceMatcher<'old, 'new, Old, New, E>
where
    E: Fn(&Old, &New) -> bool,
{
    /// Creates a matcher that compares elements with `eq`.
    pub fn with_equality(old: &'old [Old], new: &'new [New], eq: E) -> Self {
        SequenceMatcher {
            old,
            new,
            eq,
            policy: Policy::default(),
            cache: Cache::default(),
        }
    }

    /// Changes the policy.
    ///
    /// The default policy is [`Policy::LowestCost`].
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self.cache.invalidate();
        self
    }

    /// Returns the active policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Returns the old sequence.
    pub fn old_seq(&self) -> &'old [Old] {
        self.old
    }

    /// Returns the new sequence.
    pub fn new_seq(&self) -> &'new [New] {
        self.new
    }

    /// Replaces the old sequence and drops all cached values.
    pub fn set_old(&mut self, old: &'old [Old]) {
        self.cache.invalidate();
        self.old = old;
    }

    /// Replaces the new sequence and drops all cached values.
    pub fn set_new(&mut self, new: &'new [New]) {
        self.cache.invalidate();
        self.new = new;
    }

    /// Replaces both sequences and drops all cached values.
    pub fn set_seqs(&mut self, old: &'old [Old], new: &'new [New]) {
        self.set_old(old);
        self.set_new(new);
    }

    /// Runs the distance-only alignment and caches distance and match count.
    ///
    /// If either value is already cached it has to agree with the new
    /// result, otherwise [`AlignError::CacheMismatch`] is returned.
    pub fn recompute(&mut self) -> Result<(usize, usize), AlignError> {
        tracing::trace!(
            old_len = self.old.len(),
            new_len = self.new.len(),
            "computing distance"
        );
        let eq = &self.eq;
        let (distance, matches) = rolling::distance(
            self.policy,
            self.old,
            0..self.old.len(),
            self.new,
            0..self.new.len(),
            |a, b| eq(a, b),
        )?;
        self.cache.store(distance, matches)?;
        Ok((distance, matches))
    }

    /// Returns the edit distance of the two sequences.
    ///
    /// This is cheaper than going through [`SequenceMatcher::opcodes`] as
    /// it only keeps two rows of the table around.
    pub fn distance(&mut self) -> Result<usize, AlignError> {
        match self.cache.distance {
            Some(distance) => Ok(distance),
            None => Ok(self.recompute()?.0),
        }
    }

    /// Returns the number of matching elements in the alignment.
    pub fn matches(&mut self) -> Result<usize, AlignError> {
        match self.cache.matches {
            Some(matches) => Ok(matches),
            None => Ok(self.recompute()?.1),
        }
    }

    /// Returns the opcodes of the alignment.
    pub fn opcodes(&mut self) -> Result<&[Opcode], AlignError> {
        if self.cache.opcodes.is_none() {
            tracing::trace!(
                old_len = self.old.len(),
                new_len = self.new.len(),
                "computing opcodes"
            );
            let eq = &self.eq;
            let (distance, matches, ops) = compute_alignment_by(
                self.policy,
                self.old,
                0..self.old.len(),
                self.new,
                0..self.new.len(),
                |a, b| eq(a, b),
            )?;
            self.cache.store(distance, matches)?;
            self.cache.opcodes = Some(ops);
        }
        Ok(self.cache.opcodes.as_deref().unwrap_or_default())
    }

    /// Returns the equal opcodes as `(old_index, new_index, len)` triples.
    pub fn matching_blocks(&mut self) -> Result<Vec<(usize, usize, usize)>, AlignError> {
        Ok(matching_blocks(self.opcodes()?))
    }

    /// Return a measure of the sequences' similarity in the range `0..=1`.
    ///
    /// This is `2 * matches / (old_len + new_len)`.  Two empty sequences
    /// have a ratio of `1.0`.
    pub fn ratio(&mut self) -> Result<f32, AlignError> {
        let matches = self.matches()?;
        Ok(get_match_ratio(matches, self.old.len(), self.new.len()))
    }

    /// Same as [`SequenceMatcher::ratio`].
    pub fn quick_ratio(&mut self) -> Result<f32, AlignError> {
        self.ratio()
    }

    /// Same as [`SequenceMatcher::ratio`].
    pub fn real_quick_ratio(&mut self) -> Result<f32, AlignError> {
        self.ratio()
    }

    /// Not implemented, always fails with [`AlignError::NotImplemented`].
    pub fn find_longest_match(
        &self,
        old_range: Range<usize>,
        new_range: Range<usize>,
    ) -> Result<(usize, usize, usize), AlignError> {
        let _ = old_range;
        let _ = new_range;
        Err(AlignError::NotImplemented("find_longest_match"))
    }

    /// Not implemented, always fails with [`AlignError::NotImplemented`].
    pub fn grouped_opcodes(&self, n: usize) -> Result<Vec<Vec<Opcode>>, AlignError> {
        let _ = n;
        Err(AlignError::NotImplemented("grouped_opcodes"))
    }
}

#[cfg(test)]
use crate::types::Action;

#[test]
fn test_matcher() {
    let a = ["a", "b"];
    let b = ["a", "b", "d", "c"];
    let mut matcher = SequenceMatcher::new(&a, &b);
    assert_eq!(matcher.distance(), Ok(2));
    assert_eq!(matcher.ratio(), Ok(2.0 / 3.0));
    assert_eq!(matcher.quick_ratio(), Ok(2.0 / 3.0));
    assert_eq!(matcher.real_quick_ratio(), Ok(2.0 / 3.0));
    assert_eq!(matcher.distance(), Ok(2));
    assert_eq!(
        matcher.opcodes().unwrap(),
        &[
            Opcode::new(Action::Equal, 0, 0),
            Opcode::new(Action::Equal, 1, 1),
            Opcode::new(Action::Insert, 2, 2),
            Opcode::new(Action::Insert, 2, 3),
        ][..]
    );
    assert_eq!(matcher.matching_blocks(), Ok(vec![(0, 0, 1), (1, 1, 1)]));
}

#[test]
fn test_cache_hits() {
    use std::cell::Cell;

    let calls = Cell::new(0);
    let eq = |a: &&str, b: &&str| {
        calls.set(calls.get() + 1);
        a == b
    };
    let a = ["a", "b"];
    let b = ["a", "b", "d", "c"];
    let mut matcher = SequenceMatcher::with_equality(&a, &b, eq);
    assert_eq!(matcher.distance(), Ok(2));
    let after_first = calls.get();
    assert_eq!(after_first, 8);
    assert_eq!(matcher.distance(), Ok(2));
    assert_eq!(matcher.matches(), Ok(2));
    assert_eq!(calls.get(), after_first);

    // the opcodes need the full table but must agree with the cache
    assert_eq!(matcher.opcodes().map(|ops| ops.len()), Ok(4));
    assert_eq!(calls.get(), 2 * after_first);
    assert_eq!(matcher.opcodes().map(|ops| ops.len()), Ok(4));
    assert_eq!(calls.get(), 2 * after_first);
}

#[test]
fn test_zero_distance_is_cached() {
    use std::cell::Cell;

    let calls = Cell::new(0);
    let eq = |a: &char, b: &char| {
        calls.set(calls.get() + 1);
        a == b
    };
    let a = ['x', 'y'];
    let mut matcher = SequenceMatcher::with_equality(&a, &a, eq);
    assert_eq!(matcher.distance(), Ok(0));
    assert_eq!(calls.get(), 2);
    assert_eq!(matcher.distance(), Ok(0));
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_setters_invalidate() {
    let a = ["a", "b"];
    let b = ["a", "b", "d", "c"];
    let c = ["a", "b"];
    let mut matcher = SequenceMatcher::new(&a[..], &b[..]);
    assert_eq!(matcher.distance(), Ok(2));
    matcher.set_new(&c);
    assert_eq!(matcher.distance(), Ok(0));
    assert_eq!(matcher.matches(), Ok(2));
    matcher.set_old(&b);
    assert_eq!(matcher.distance(), Ok(2));
    matcher.set_seqs(&b, &a);
    assert_eq!(matcher.distance(), Ok(2));
    assert_eq!(matcher.old_seq(), &b[..]);
    assert_eq!(matcher.new_seq(), &a[..]);
}

#[test]
fn test_cache_mismatch() {
    use std::cell::Cell;

    let inverted = Cell::new(false);
    let eq = |a: &u8, b: &u8| (a == b) != inverted.get();
    let a = [1, 2, 3];
    let b = [1, 2, 4];
    let mut matcher = SequenceMatcher::with_equality(&a, &b, eq);
    assert_eq!(matcher.distance(), Ok(1));
    inverted.set(true);
    assert_eq!(
        matcher.recompute(),
        Err(AlignError::CacheMismatch {
            field: "distance",
            cached: 1,
            computed: 2,
        })
    );
}

#[test]
fn test_policy() {
    let a = ["hi", "my", "name", "is", "andy"];
    let b = ["hi", "i'm", "my", "name's", "sandy"];
    let mut matcher = SequenceMatcher::new(&a, &b).with_policy(Policy::HighestMatch);
    assert_eq!(matcher.policy(), Policy::HighestMatch);
    assert_eq!(matcher.distance(), Ok(4));
    assert_eq!(matcher.matches(), Ok(2));
    assert_eq!(matcher.ratio(), Ok(0.4));
}

#[test]
fn test_empty_ratio() {
    let empty: [u32; 0] = [];
    let mut matcher = SequenceMatcher::new(&empty, &empty);
    assert_eq!(matcher.ratio(), Ok(1.0));
    assert_eq!(matcher.opcodes().map(|ops| ops.len()), Ok(0));
}

#[test]
fn test_unsupported() {
    let a = ["a", "b"];
    let b = ["a", "b", "d", "c"];
    let matcher = SequenceMatcher::new(&a, &b);
    assert!(matcher
        .find_longest_match(1..2, 3..4)
        .unwrap_err()
        .is_not_implemented());
    assert!(matcher.grouped_opcodes(3).unwrap_err().is_not_implemented());
}
