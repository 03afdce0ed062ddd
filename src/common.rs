use crate::types::{Action, Opcode};

/// Return a measure of similarity in the range `0..=1`.
///
/// The ratio is twice the number of matches divided by the combined length
/// of both sequences.  A ratio of `1.0` means the two sequences are a
/// complete match, a ratio of `0.0` would indicate completely distinct
/// sequences.  Two empty sequences are considered a complete match.
pub fn get_match_ratio(matches: usize, old_len: usize, new_len: usize) -> f32 {
    let len = old_len + new_len;
    if len == 0 {
        1.0
    } else {
        2.0 * matches as f32 / len as f32
    }
}

/// Returns the equal opcodes as `(old_index, new_index, len)` triples.
pub fn matching_blocks(ops: &[Opcode]) -> Vec<(usize, usize, usize)> {
    ops.iter()
        .filter(|op| op.action() == Action::Equal)
        .map(|op| {
            let old = op.old_range();
            (old.start, op.new_range().start, old.len())
        })
        .collect()
}

#[test]
fn test_ratio() {
    assert_eq!(get_match_ratio(2, 2, 4), 2.0 / 3.0);
    assert_eq!(get_match_ratio(0, 3, 1), 0.0);
    assert_eq!(get_match_ratio(3, 3, 3), 1.0);
    assert_eq!(get_match_ratio(0, 0, 0), 1.0);
}

#[test]
fn test_matching_blocks() {
    let ops = [
        Opcode::new(Action::Equal, 0, 0),
        Opcode::new(Action::Delete, 1, 1),
        Opcode::new(Action::Equal, 2, 1),
        Opcode::new(Action::Insert, 3, 2),
    ];
    assert_eq!(matching_blocks(&ops), vec![(0, 0, 1), (2, 1, 1)]);
}
