//! The action selector.
//!
//! At every cell of the DP table three actions compete: inserting the new
//! element (coming from the cell to the left), deleting the old element
//! (coming from the cell above) or substituting one for the other (coming
//! from the diagonal).  Costs and match counts are cumulative, so the
//! selection has to be deterministic for the whole table to produce stable
//! alignments.
use crate::algorithms::Policy;
use crate::error::AlignError;
use crate::types::Action;

/// Cumulative cost and match count of a DP cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    /// Number of edits on the best path into the cell.
    pub cost: usize,
    /// Number of equal pairs on the best path into the cell.
    pub matches: usize,
}

/// The values of the three actions competing for a single cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidates {
    pub insert_cost: usize,
    pub delete_cost: usize,
    pub substitute_cost: usize,
    pub insert_matches: usize,
    pub delete_matches: usize,
    pub substitute_matches: usize,
    /// `true` if the old and new element of the cell differ.
    pub mismatch: bool,
}

impl Candidates {
    /// Derives the candidates from the three neighbouring cells.
    pub fn from_neighbors(left: Score, up: Score, diagonal: Score, equal: bool) -> Candidates {
        Candidates {
            insert_cost: left.cost + 1,
            delete_cost: up.cost + 1,
            substitute_cost: diagonal.cost + usize::from(!equal),
            insert_matches: left.matches,
            delete_matches: up.matches,
            substitute_matches: diagonal.matches + usize::from(equal),
            mismatch: !equal,
        }
    }

    /// The substitution action, reported as equal when the elements match.
    pub fn substitution(&self) -> Action {
        if self.mismatch {
            Action::Replace
        } else {
            Action::Equal
        }
    }

    /// Returns the resulting score if `action` is taken.
    pub fn score(&self, action: Action) -> Score {
        match action {
            Action::Equal | Action::Replace => Score {
                cost: self.substitute_cost,
                matches: self.substitute_matches,
            },
            Action::Insert => Score {
                cost: self.insert_cost,
                matches: self.insert_matches,
            },
            Action::Delete => Score {
                cost: self.delete_cost,
                matches: self.delete_matches,
            },
        }
    }
}

/// Picks the action with the lowest cost.
///
/// Substitution wins every tie it is part of.  If insertion and deletion
/// tie, the one with more matches wins and insertion breaks a further tie.
pub fn lowest_cost_action(c: &Candidates) -> Option<Action> {
    let min_cost = c.insert_cost.min(c.delete_cost).min(c.substitute_cost);
    if c.substitute_cost == min_cost {
        Some(c.substitution())
    } else if c.insert_cost == min_cost && c.delete_cost == min_cost {
        if c.delete_matches > c.insert_matches {
            Some(Action::Delete)
        } else {
            Some(Action::Insert)
        }
    } else if c.insert_cost == min_cost {
        Some(Action::Insert)
    } else if c.delete_cost == min_cost {
        Some(Action::Delete)
    } else {
        None
    }
}

/// Picks the action with the highest match count.
///
/// Substitution wins every tie it is part of.  If insertion and deletion
/// tie, the cheaper one wins and insertion breaks a further tie.
pub fn highest_match_action(c: &Candidates) -> Option<Action> {
    let max_matches = c
        .insert_matches
        .max(c.delete_matches)
        .max(c.substitute_matches);
    if c.substitute_matches == max_matches {
        Some(c.substitution())
    } else if c.insert_matches == max_matches && c.delete_matches == max_matches {
        if c.delete_cost < c.insert_cost {
            Some(Action::Delete)
        } else {
            Some(Action::Insert)
        }
    } else if c.insert_matches == max_matches {
        Some(Action::Insert)
    } else if c.delete_matches == max_matches {
        Some(Action::Delete)
    } else {
        None
    }
}

impl Policy {
    /// Selects the action for a cell under this policy.
    ///
    /// Fails with [`AlignError::NoAction`] instead of guessing if the policy
    /// cannot decide.
    pub fn select(self, candidates: &Candidates) -> Result<Action, AlignError> {
        let action = match self {
            Policy::LowestCost => lowest_cost_action(candidates),
            Policy::HighestMatch => highest_match_action(candidates),
        };
        action.ok_or(AlignError::NoAction {
            policy: self,
            candidates: *candidates,
        })
    }
}

/// Computes the action and resulting score of one cell.
pub(crate) fn step(
    policy: Policy,
    left: Score,
    up: Score,
    diagonal: Score,
    equal: bool,
) -> Result<(Action, Score), AlignError> {
    let candidates = Candidates::from_neighbors(left, up, diagonal, equal);
    let action = policy.select(&candidates)?;
    Ok((action, candidates.score(action)))
}

#[cfg(test)]
fn candidates(costs: [usize; 3], matches: [usize; 3], mismatch: bool) -> Candidates {
    Candidates {
        insert_cost: costs[0],
        delete_cost: costs[1],
        substitute_cost: costs[2],
        insert_matches: matches[0],
        delete_matches: matches[1],
        substitute_matches: matches[2],
        mismatch,
    }
}

#[test]
fn test_lowest_cost_prefers_substitution() {
    let c = candidates([2, 2, 2], [5, 5, 0], false);
    assert_eq!(lowest_cost_action(&c), Some(Action::Equal));
    let c = candidates([2, 3, 2], [5, 0, 0], true);
    assert_eq!(lowest_cost_action(&c), Some(Action::Replace));
}

#[test]
fn test_lowest_cost_insert_delete_tie() {
    let c = candidates([1, 1, 2], [0, 1, 0], true);
    assert_eq!(lowest_cost_action(&c), Some(Action::Delete));
    let c = candidates([1, 1, 2], [1, 1, 0], true);
    assert_eq!(lowest_cost_action(&c), Some(Action::Insert));
    let c = candidates([3, 1, 2], [9, 0, 0], true);
    assert_eq!(lowest_cost_action(&c), Some(Action::Delete));
    let c = candidates([1, 3, 2], [0, 9, 0], true);
    assert_eq!(lowest_cost_action(&c), Some(Action::Insert));
}

#[test]
fn test_highest_match() {
    let c = candidates([1, 1, 5], [2, 2, 2], true);
    assert_eq!(highest_match_action(&c), Some(Action::Replace));
    let c = candidates([4, 3, 1], [2, 2, 1], true);
    assert_eq!(highest_match_action(&c), Some(Action::Delete));
    let c = candidates([3, 3, 1], [2, 2, 1], true);
    assert_eq!(highest_match_action(&c), Some(Action::Insert));
    let c = candidates([9, 1, 1], [3, 2, 1], false);
    assert_eq!(highest_match_action(&c), Some(Action::Insert));
    let c = candidates([1, 9, 1], [2, 3, 1], false);
    assert_eq!(highest_match_action(&c), Some(Action::Delete));
}

#[test]
fn test_policies_disagree() {
    // cheap substitution against an insertion that keeps more matches
    let c = candidates([3, 4, 2], [2, 0, 1], true);
    assert_eq!(Policy::LowestCost.select(&c), Ok(Action::Replace));
    assert_eq!(Policy::HighestMatch.select(&c), Ok(Action::Insert));
}

#[test]
fn test_step() {
    let left = Score { cost: 1, matches: 0 };
    let up = Score { cost: 1, matches: 0 };
    let diagonal = Score { cost: 0, matches: 0 };
    assert_eq!(
        step(Policy::LowestCost, left, up, diagonal, true),
        Ok((Action::Equal, Score { cost: 0, matches: 1 }))
    );
    assert_eq!(
        step(Policy::LowestCost, left, up, diagonal, false),
        Ok((Action::Replace, Score { cost: 1, matches: 0 }))
    );
}
