use std::ops::{Index, Range};

/// Checks if both ranges hold the same elements according to `eq`.
pub fn is_identical<Old, New, F>(
    old: &Old,
    old_range: Range<usize>,
    new: &New,
    new_range: Range<usize>,
    eq: &mut F,
) -> bool
where
    Old: Index<usize> + ?Sized,
    New: Index<usize> + ?Sized,
    F: FnMut(&Old::Output, &New::Output) -> bool,
{
    old_range.len() == new_range.len()
        && old_range.zip(new_range).all(
            #[inline(always)]
            |(i, j)| eq(&old[i], &new[j]),
        )
}

#[test]
fn test_is_identical() {
    let mut eq = |a: &u8, b: &u8| a == b;
    assert!(is_identical("".as_bytes(), 0..0, "".as_bytes(), 0..0, &mut eq));
    assert!(is_identical("foo".as_bytes(), 0..3, "foo".as_bytes(), 0..3, &mut eq));
    assert!(is_identical("xfoo".as_bytes(), 1..4, "foo".as_bytes(), 0..3, &mut eq));
    assert!(!is_identical("foo".as_bytes(), 0..3, "fob".as_bytes(), 0..3, &mut eq));
    assert!(!is_identical("foo".as_bytes(), 0..3, "foo".as_bytes(), 0..2, &mut eq));
}
