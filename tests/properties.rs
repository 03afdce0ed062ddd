use edit_distance::algorithms::{compute_alignment_slices, compute_distance_slices};
use edit_distance::{Action, Policy, SequenceMatcher};
use proptest::prelude::*;

const POLICIES: [Policy; 2] = [Policy::LowestCost, Policy::HighestMatch];

fn seq() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..12)
}

fn levenshtein(a: &[u8], b: &[u8]) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    for (i, x) in a.iter().enumerate() {
        let mut cur = vec![i + 1; b.len() + 1];
        for (j, y) in b.iter().enumerate() {
            cur[j + 1] = (prev[j] + usize::from(x != y))
                .min(prev[j + 1] + 1)
                .min(cur[j] + 1);
        }
        prev = cur;
    }
    prev[b.len()]
}

proptest! {
    #[test]
    fn identical_sequences(a in seq()) {
        for policy in POLICIES {
            prop_assert_eq!(compute_distance_slices(policy, &a, &a), Ok((0, a.len())));
        }
    }

    #[test]
    fn empty_sequences(a in seq()) {
        let empty: Vec<u8> = Vec::new();
        for policy in POLICIES {
            prop_assert_eq!(compute_distance_slices(policy, &a, &empty), Ok((a.len(), 0)));
            prop_assert_eq!(compute_distance_slices(policy, &empty, &a), Ok((a.len(), 0)));
        }
    }

    #[test]
    fn lowest_cost_is_levenshtein(a in seq(), b in seq()) {
        let (distance, _) = compute_distance_slices(Policy::LowestCost, &a, &b).unwrap();
        prop_assert_eq!(distance, levenshtein(&a, &b));
        let (reverse, _) = compute_distance_slices(Policy::LowestCost, &b, &a).unwrap();
        prop_assert_eq!(distance, reverse);
    }

    #[test]
    fn modes_agree(a in seq(), b in seq()) {
        for policy in POLICIES {
            let (distance, matches, _) = compute_alignment_slices(policy, &a, &b).unwrap();
            prop_assert_eq!(compute_distance_slices(policy, &a, &b), Ok((distance, matches)));
            prop_assert!(matches <= a.len().min(b.len()));
        }
    }

    #[test]
    fn opcodes_partition_both_sequences(a in seq(), b in seq()) {
        for policy in POLICIES {
            let (distance, matches, ops) = compute_alignment_slices(policy, &a, &b).unwrap();
            let (mut old_pos, mut new_pos) = (0, 0);
            for op in &ops {
                prop_assert_eq!(op.old_range().start, old_pos);
                prop_assert_eq!(op.new_range().start, new_pos);
                if op.action() == Action::Equal {
                    prop_assert_eq!(a[old_pos], b[new_pos]);
                }
                old_pos = op.old_range().end;
                new_pos = op.new_range().end;
            }
            prop_assert_eq!((old_pos, new_pos), (a.len(), b.len()));
            let equal = ops.iter().filter(|op| op.action() == Action::Equal).count();
            prop_assert_eq!(equal, matches);
            prop_assert_eq!(ops.len() - equal, distance);
        }
    }

    #[test]
    fn matcher_ratio(a in seq(), b in seq()) {
        prop_assume!(!a.is_empty() || !b.is_empty());
        let mut matcher = SequenceMatcher::new(&a, &b);
        let matches = matcher.matches().unwrap();
        let expected = 2.0 * matches as f32 / (a.len() + b.len()) as f32;
        prop_assert_eq!(matcher.ratio(), Ok(expected));
        prop_assert_eq!(
            matcher.distance(),
            Ok(compute_distance_slices(Policy::LowestCost, &a, &b).unwrap().0)
        );
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() {
    let (_, _, ops) = compute_alignment_slices(Policy::LowestCost, &["a", "b"], &["a", "c"]).unwrap();
    let json = serde_json::to_string(&ops).unwrap();
    insta::assert_snapshot!(&json, @r###"[{"action":"equal","old_start":0,"old_end":1,"new_start":0,"new_end":1},{"action":"replace","old_start":1,"old_end":2,"new_start":1,"new_end":2}]"###);
    let ops2: Vec<edit_distance::Opcode> = serde_json::from_str(&json).unwrap();
    assert_eq!(ops, ops2);
    assert_eq!(
        serde_json::to_string(&Policy::HighestMatch).unwrap(),
        "\"highest_match\""
    );
}
