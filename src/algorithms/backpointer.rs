//! Alignment with backpointers.
//!
//! * time: `O(NM)`
//! * space: `O(NM)`
//!
//! Every cell of the table remembers the action that produced its score.
//! Once the table is filled the backpointers are followed from the bottom
//! right corner to the origin, which yields the edit script in reverse.
use std::ops::{Index, IndexMut, Range};

use crate::algorithms::select::{step, Score};
use crate::algorithms::{AlignHook, Policy};
use crate::error::AlignError;
use crate::types::Action;

#[derive(Debug, Clone, Copy)]
struct Cell {
    score: Score,
    action: Action,
}

/// The DP table as a flat arena indexed by `row * width + col`.
struct Table {
    width: usize,
    cells: Vec<Cell>,
}

impl Table {
    /// Creates a table with the border already filled in.
    ///
    /// Row 0 is a chain of insertions, column 0 a chain of deletions.  The
    /// backpointer of the origin is never followed.
    fn new(rows: usize, cols: usize) -> Table {
        let width = cols + 1;
        let mut table = Table {
            width,
            cells: vec![
                Cell {
                    score: Score::default(),
                    action: Action::Equal,
                };
                (rows + 1) * width
            ],
        };
        for col in 1..=cols {
            table[(0, col)] = Cell {
                score: Score {
                    cost: col,
                    matches: 0,
                },
                action: Action::Insert,
            };
        }
        for row in 1..=rows {
            table[(row, 0)] = Cell {
                score: Score {
                    cost: row,
                    matches: 0,
                },
                action: Action::Delete,
            };
        }
        table
    }
}

impl Index<(usize, usize)> for Table {
    type Output = Cell;

    fn index(&self, (row, col): (usize, usize)) -> &Cell {
        &self.cells[row * self.width + col]
    }
}

impl IndexMut<(usize, usize)> for Table {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Cell {
        &mut self.cells[row * self.width + col]
    }
}

/// Aligns `old` and `new` and reports the edit script to the hook.
///
/// Aligns `old` between indices `old_range` and `new` between indices
/// `new_range`, comparing elements with `eq`.  Returns distance and match
/// count; the indexes passed to the hook are absolute.
pub fn align<Old, New, D, F>(
    d: &mut D,
    policy: Policy,
    old: &Old,
    old_range: Range<usize>,
    new: &New,
    new_range: Range<usize>,
    mut eq: F,
) -> Result<(usize, usize), D::Error>
where
    Old: Index<usize> + ?Sized,
    New: Index<usize> + ?Sized,
    D: AlignHook,
    D::Error: From<AlignError>,
    F: FnMut(&Old::Output, &New::Output) -> bool,
{
    let rows = old_range.len();
    let cols = new_range.len();
    tracing::debug!(rows, cols, "allocating backpointer table");
    let mut table = Table::new(rows, cols);

    for (row, old_idx) in old_range.clone().enumerate().map(|(i, x)| (i + 1, x)) {
        for (col, new_idx) in new_range.clone().enumerate().map(|(j, x)| (j + 1, x)) {
            let equal = eq(&old[old_idx], &new[new_idx]);
            let (action, score) = step(
                policy,
                table[(row, col - 1)].score,
                table[(row - 1, col)].score,
                table[(row - 1, col - 1)].score,
                equal,
            )?;
            table[(row, col)] = Cell { score, action };
        }
    }

    let mut path = Vec::with_capacity(rows + cols);
    let (mut row, mut col) = (rows, cols);
    while row > 0 || col > 0 {
        let action = table[(row, col)].action;
        path.push((action, row, col));
        match action {
            Action::Equal | Action::Replace => {
                row -= 1;
                col -= 1;
            }
            Action::Insert => col -= 1,
            Action::Delete => row -= 1,
        }
    }

    for (action, row, col) in path.into_iter().rev() {
        let old_index = old_range.start + row;
        let new_index = new_range.start + col;
        match action {
            Action::Equal => d.equal(old_index - 1, new_index - 1)?,
            Action::Replace => d.replace(old_index - 1, new_index - 1)?,
            Action::Insert => d.insert(old_index, new_index - 1)?,
            Action::Delete => d.delete(old_index - 1, new_index)?,
        }
    }
    d.finish()?;

    let last = table[(rows, cols)].score;
    Ok((last.cost, last.matches))
}

/// Shortcut for aligning slices.
pub fn align_slices<D, T>(
    d: &mut D,
    policy: Policy,
    old: &[T],
    new: &[T],
) -> Result<(usize, usize), D::Error>
where
    D: AlignHook,
    D::Error: From<AlignError>,
    T: PartialEq,
{
    align(d, policy, old, 0..old.len(), new, 0..new.len(), |a, b| a == b)
}

#[cfg(test)]
fn render(policy: Policy, old: &[&str], new: &[&str]) -> String {
    let mut d = crate::algorithms::Capture::new();
    let (distance, matches) = align_slices(&mut d, policy, old, new).unwrap();
    let mut rv = format!("distance={} matches={}", distance, matches);
    for op in d.ops() {
        rv.push('\n');
        rv.push_str(&op.to_string());
    }
    rv
}

#[test]
fn test_leading_inserts() {
    insta::assert_snapshot!(render(Policy::LowestCost, &["a", "b"], &["a", "c", "d", "a", "b"]), @r###"
    distance=3 matches=2
    insert(0,0,0,1)
    insert(0,0,1,2)
    insert(0,0,2,3)
    equal(0,1,3,4)
    equal(1,2,4,5)
    "###);
}

#[test]
fn test_replacements() {
    let a = ["hi", "my", "name", "is", "andy"];
    let b = ["hi", "i'm", "my", "name's", "sandy"];
    insta::assert_snapshot!(render(Policy::LowestCost, &a, &b), @r###"
    distance=4 matches=1
    equal(0,1,0,1)
    replace(1,2,1,2)
    replace(2,3,2,3)
    replace(3,4,3,4)
    replace(4,5,4,5)
    "###);
    insta::assert_snapshot!(render(Policy::HighestMatch, &a, &b), @r###"
    distance=4 matches=2
    equal(0,1,0,1)
    insert(1,1,1,2)
    equal(1,2,2,3)
    delete(2,3,3,3)
    replace(3,4,3,4)
    replace(4,5,4,5)
    "###);
}

#[test]
fn test_leading_delete() {
    let a = ["are", "you", "at", "work", "now"];
    let b = ["i", "feel", "are", "saying"];
    insta::assert_snapshot!(render(Policy::LowestCost, &a, &b), @r###"
    distance=5 matches=0
    delete(0,1,0,0)
    replace(1,2,0,1)
    replace(2,3,1,2)
    replace(3,4,2,3)
    replace(4,5,3,4)
    "###);
}

#[test]
fn test_interleaved() {
    let a = ["that", "continuous", "sanction", ":=", "("];
    let b = ["continuous", ":=", "(", "sanction", "^"];
    insta::assert_snapshot!(render(Policy::LowestCost, &a, &b), @r###"
    distance=4 matches=3
    delete(0,1,0,0)
    equal(1,2,0,1)
    delete(2,3,1,1)
    equal(3,4,1,2)
    equal(4,5,2,3)
    insert(5,5,3,4)
    insert(5,5,4,5)
    "###);
}

#[test]
fn test_empty() {
    insta::assert_snapshot!(render(Policy::LowestCost, &[], &["a", "c"]), @r###"
    distance=2 matches=0
    insert(0,0,0,1)
    insert(0,0,1,2)
    "###);
    insta::assert_snapshot!(render(Policy::LowestCost, &["a", "c"], &[]), @r###"
    distance=2 matches=0
    delete(0,1,0,0)
    delete(1,2,0,0)
    "###);
    assert_eq!(render(Policy::LowestCost, &[], &[]), "distance=0 matches=0");
}

#[test]
fn test_hook_order() {
    struct D(Vec<(usize, usize)>, bool);

    impl AlignHook for D {
        type Error = AlignError;

        fn equal(&mut self, old_index: usize, new_index: usize) -> Result<(), AlignError> {
            assert!(!self.1, "step after finish");
            self.0.push((old_index, new_index));
            Ok(())
        }

        fn finish(&mut self) -> Result<(), AlignError> {
            self.1 = true;
            Ok(())
        }
    }

    let mut d = D(Vec::new(), false);
    let a = [1, 2, 3, 4];
    let b = [0, 2, 3, 4, 5];
    assert_eq!(align_slices(&mut d, Policy::LowestCost, &a, &b), Ok((2, 3)));
    assert!(d.1);
    assert_eq!(d.0, vec![(1, 1), (2, 2), (3, 3)]);
}
