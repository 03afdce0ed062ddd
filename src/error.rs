use thiserror::Error;

use crate::algorithms::{Candidates, Policy};

/// Errors produced while aligning two sequences.
///
/// None of these are recoverable: [`AlignError::NoAction`] and
/// [`AlignError::CacheMismatch`] indicate a broken invariant in the
/// recurrence or in the matcher cache, [`AlignError::NotImplemented`] marks
/// a capability that does not exist.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// The action selector found no action that satisfies its policy.
    #[error("no action satisfies the {policy} policy for {candidates:?}")]
    NoAction {
        /// The policy that was applied.
        policy: Policy,
        /// The candidate values of the cell.
        candidates: Candidates,
    },
    /// A freshly computed value disagrees with the cached one.
    #[error("cached {field} is {cached} but recomputation produced {computed}")]
    CacheMismatch {
        /// Name of the cached field.
        field: &'static str,
        /// The value that was in the cache.
        cached: usize,
        /// The value that was just computed.
        computed: usize,
    },
    /// The requested operation is intentionally not provided.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

impl AlignError {
    /// Returns `true` if this error marks a missing capability rather than
    /// a failure.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, AlignError::NotImplemented(_))
    }
}

#[test]
fn test_messages() {
    let err = AlignError::CacheMismatch {
        field: "distance",
        cached: 2,
        computed: 3,
    };
    assert_eq!(
        err.to_string(),
        "cached distance is 2 but recomputation produced 3"
    );
    assert!(!err.is_not_implemented());

    let err = AlignError::NotImplemented("grouped_opcodes");
    assert_eq!(err.to_string(), "grouped_opcodes is not implemented");
    assert!(err.is_not_implemented());
}
