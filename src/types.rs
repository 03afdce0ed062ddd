use std::fmt;
use std::ops::Range;

/// The edit action taken at a single alignment step.
///
/// This is both what the action selector picks for a DP cell and the kind
/// of an [`Opcode`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Ord, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Action {
    /// The two elements are equal.
    Equal,
    /// The old element is substituted by the new one.
    Replace,
    /// A new element is inserted.
    Insert,
    /// An old element is deleted.
    Delete,
}

impl Action {
    /// Returns the lowercase name of the action.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Equal => "equal",
            Action::Replace => "replace",
            Action::Insert => "insert",
            Action::Delete => "delete",
        }
    }

    /// Returns `true` if the action consumes one element of both sequences.
    pub fn is_diagonal(self) -> bool {
        matches!(self, Action::Equal | Action::Replace)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single edit operation of an alignment.
///
/// Opcodes cover half-open ranges of the old and new sequence.  Equal and
/// replace opcodes cover exactly one element on both sides, inserts cover
/// an empty old range and deletes an empty new range.  The opcodes of an
/// alignment partition both sequences in increasing index order.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Opcode {
    action: Action,
    old_start: usize,
    old_end: usize,
    new_start: usize,
    new_end: usize,
}

impl Opcode {
    /// Creates the unit opcode for `action` positioned at the given indexes.
    ///
    /// For inserts `old_index` is the position in the old sequence the new
    /// element goes in front of, for deletes `new_index` is the matching
    /// position in the new sequence.
    pub fn new(action: Action, old_index: usize, new_index: usize) -> Opcode {
        let (old_len, new_len) = match action {
            Action::Equal | Action::Replace => (1, 1),
            Action::Insert => (0, 1),
            Action::Delete => (1, 0),
        };
        Opcode {
            action,
            old_start: old_index,
            old_end: old_index + old_len,
            new_start: new_index,
            new_end: new_index + new_len,
        }
    }

    /// Returns the action of the opcode.
    pub fn action(&self) -> Action {
        self.action
    }

    /// Returns the covered range in the old sequence.
    pub fn old_range(&self) -> Range<usize> {
        self.old_start..self.old_end
    }

    /// Returns the covered range in the new sequence.
    pub fn new_range(&self) -> Range<usize> {
        self.new_start..self.new_end
    }

    /// Returns the opcode as a tuple of action, old range and new range.
    pub fn as_tuple(&self) -> (Action, Range<usize>, Range<usize>) {
        (self.action, self.old_range(), self.new_range())
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({},{},{},{})",
            self.action, self.old_start, self.old_end, self.new_start, self.new_end
        )
    }
}

#[test]
fn test_unit_ranges() {
    assert_eq!(
        Opcode::new(Action::Equal, 3, 4).as_tuple(),
        (Action::Equal, 3..4, 4..5)
    );
    assert_eq!(
        Opcode::new(Action::Insert, 2, 0).as_tuple(),
        (Action::Insert, 2..2, 0..1)
    );
    assert_eq!(
        Opcode::new(Action::Delete, 2, 1).as_tuple(),
        (Action::Delete, 2..3, 1..1)
    );
}

#[test]
fn test_display() {
    assert_eq!(Opcode::new(Action::Replace, 1, 2).to_string(), "replace(1,2,2,3)");
    assert_eq!(Action::Insert.to_string(), "insert");
}
