//! Text alignment utilities.
//!
//! This aligns texts by first splitting them into tokens and then running
//! the edit distance engine over the token sequences.  The main type you
//! want to work with is [`TextAlignment`].
//!
//! Text alignment is available by default but can be disabled by turning off
//! the default features.  The feature to enable to get it back is `text`.
//!
//! # Examples
//!
//! ```rust
//! # use edit_distance::text::TextAlignment;
//! let alignment = TextAlignment::from_words("the cat sat", "the bat sat down").unwrap();
//! assert_eq!(alignment.distance(), 2);
//! for change in alignment.iter_changes() {
//!     println!("{}", change);
//! }
//! ```
//!
//! # Tokens
//!
//! [`TextAlignment::from_words`] splits on whitespace and drops it, so
//! `"a  b"` and `"a b"` align perfectly.  [`TextAlignment::from_chars`]
//! aligns unicode scalar values.  With the `unicode` feature there are also
//! [`TextAlignConfig::align_unicode_words`] and
//! [`TextAlignConfig::align_graphemes`] which segment according to the
//! unicode rules.
#![cfg(feature = "text")]
use std::fmt;
use std::ops::Range;

use crate::algorithms::{compute_alignment_slices, Policy};
use crate::common::get_match_ratio;
use crate::error::AlignError;
use crate::types::{Action, Opcode};

/// A builder type config for more complex uses of [`TextAlignment`].
#[derive(Clone, Debug, Default)]
pub struct TextAlignConfig {
    policy: Policy,
}

impl TextAlignConfig {
    /// Changes the policy.
    ///
    /// The default policy is [`Policy::LowestCost`].
    pub fn policy(&mut self, policy: Policy) -> &mut Self {
        self.policy = policy;
        self
    }

    /// Aligns the whitespace separated words of two texts.
    pub fn align_words<'old, 'new>(
        &self,
        old: &'old str,
        new: &'new str,
    ) -> Result<TextAlignment<'old, 'new>, AlignError> {
        self.align(
            old.split_whitespace().collect(),
            new.split_whitespace().collect(),
        )
    }

    /// Aligns the characters of two texts.
    pub fn align_chars<'old, 'new>(
        &self,
        old: &'old str,
        new: &'new str,
    ) -> Result<TextAlignment<'old, 'new>, AlignError> {
        self.align(split_chars(old), split_chars(new))
    }

    /// Aligns the unicode words of two texts.
    ///
    /// Punctuation and whitespace are not part of the tokens.
    ///
    /// This requires the `unicode` feature.
    #[cfg(feature = "unicode")]
    pub fn align_unicode_words<'old, 'new>(
        &self,
        old: &'old str,
        new: &'new str,
    ) -> Result<TextAlignment<'old, 'new>, AlignError> {
        use unicode_segmentation::UnicodeSegmentation;
        self.align(old.unicode_words().collect(), new.unicode_words().collect())
    }

    /// Aligns the graphemes of two texts.
    ///
    /// This requires the `unicode` feature.
    #[cfg(feature = "unicode")]
    pub fn align_graphemes<'old, 'new>(
        &self,
        old: &'old str,
        new: &'new str,
    ) -> Result<TextAlignment<'old, 'new>, AlignError> {
        use unicode_segmentation::UnicodeSegmentation;
        self.align(
            old.graphemes(true).collect(),
            new.graphemes(true).collect(),
        )
    }

    /// Aligns already tokenized texts.
    pub fn align_slices<'old, 'new>(
        &self,
        old: &[&'old str],
        new: &[&'new str],
    ) -> Result<TextAlignment<'old, 'new>, AlignError> {
        self.align(old.to_vec(), new.to_vec())
    }

    /// Aligns the whitespace separated words of every pair of lines.
    ///
    /// Lines are paired up by position, the lines beyond the end of the
    /// shorter text are ignored.
    pub fn align_lines<'old, 'new>(
        &self,
        old: &'old str,
        new: &'new str,
    ) -> Result<Vec<LineAlignment<'old, 'new>>, AlignError> {
        old.lines()
            .zip(new.lines())
            .enumerate()
            .map(|(line, (old_line, new_line))| {
                let old_line = old_line.trim();
                let new_line = new_line.trim();
                Ok(LineAlignment {
                    line,
                    old_line,
                    new_line,
                    alignment: self.align_words(old_line, new_line)?,
                })
            })
            .collect()
    }

    fn align<'old, 'new>(
        &self,
        old: Vec<&'old str>,
        new: Vec<&'new str>,
    ) -> Result<TextAlignment<'old, 'new>, AlignError> {
        let (distance, matches, ops) = compute_alignment_slices(self.policy, &old, &new)?;
        Ok(TextAlignment {
            old,
            new,
            distance,
            matches,
            ops,
            policy: self.policy,
        })
    }
}

fn split_chars(s: &str) -> Vec<&str> {
    s.char_indices()
        .map(|(idx, c)| &s[idx..idx + c.len_utf8()])
        .collect()
}

/// Captures the alignment of two tokenized texts.
pub struct TextAlignment<'old, 'new> {
    old: Vec<&'old str>,
    new: Vec<&'new str>,
    distance: usize,
    matches: usize,
    ops: Vec<Opcode>,
    policy: Policy,
}

impl<'old, 'new> TextAlignment<'old, 'new> {
    /// Configures a text alignment before aligning.
    pub fn configure() -> TextAlignConfig {
        TextAlignConfig::default()
    }

    /// Aligns the whitespace separated words of two texts.
    ///
    /// Equivalent to `TextAlignment::configure().align_words(old, new)`.
    pub fn from_words(
        old: &'old str,
        new: &'new str,
    ) -> Result<TextAlignment<'old, 'new>, AlignError> {
        TextAlignment::configure().align_words(old, new)
    }

    /// Aligns the characters of two texts.
    ///
    /// Equivalent to `TextAlignment::configure().align_chars(old, new)`.
    pub fn from_chars(
        old: &'old str,
        new: &'new str,
    ) -> Result<TextAlignment<'old, 'new>, AlignError> {
        TextAlignment::configure().align_chars(old, new)
    }

    /// The policy that was used for the alignment.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Returns the old tokens.
    pub fn old_tokens(&self) -> &[&'old str] {
        &self.old
    }

    /// Returns the new tokens.
    pub fn new_tokens(&self) -> &[&'new str] {
        &self.new
    }

    /// Returns the edit distance.
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Returns the number of matching tokens.
    pub fn matches(&self) -> usize {
        self.matches
    }

    /// Returns the opcodes of the alignment.
    pub fn opcodes(&self) -> &[Opcode] {
        &self.ops
    }

    /// Return a measure of similarity in the range `0..=1`.
    pub fn ratio(&self) -> f32 {
        get_match_ratio(self.matches, self.old.len(), self.new.len())
    }

    /// Iterates over the opcodes together with the tokens they cover.
    pub fn iter_changes(&self) -> impl Iterator<Item = Change<'old, 'new>> + '_ {
        self.ops.iter().map(move |op| Change {
            action: op.action(),
            old_value: token(&self.old, op.old_range()),
            new_value: token(&self.new, op.new_range()),
        })
    }
}

fn token<'s>(tokens: &[&'s str], range: Range<usize>) -> Option<&'s str> {
    tokens.get(range)?.first().copied()
}

/// A single step of a [`TextAlignment`] with the tokens it covers.
///
/// Inserts have no old value, deletes no new value.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Change<'old, 'new> {
    action: Action,
    old_value: Option<&'old str>,
    new_value: Option<&'new str>,
}

impl<'old, 'new> Change<'old, 'new> {
    /// Returns the action.
    pub fn action(&self) -> Action {
        self.action
    }

    /// Returns the old token if there is one.
    pub fn old_value(&self) -> Option<&'old str> {
        self.old_value
    }

    /// Returns the new token if there is one.
    pub fn new_value(&self) -> Option<&'new str> {
        self.new_value
    }
}

impl<'old, 'new> fmt::Display for Change<'old, 'new> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let old = self.old_value.unwrap_or("");
        let new = self.new_value.unwrap_or("");
        match self.action {
            Action::Equal => write!(f, "= {}", old),
            Action::Replace => write!(f, "~ {} -> {}", old, new),
            Action::Insert => write!(f, "+ {}", new),
            Action::Delete => write!(f, "- {}", old),
        }
    }
}

/// The word alignment of one pair of lines.
///
/// Returned from [`align_lines`].
pub struct LineAlignment<'old, 'new> {
    line: usize,
    old_line: &'old str,
    new_line: &'new str,
    alignment: TextAlignment<'old, 'new>,
}

impl<'old, 'new> LineAlignment<'old, 'new> {
    /// The zero based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The trimmed old line.
    pub fn old_line(&self) -> &'old str {
        self.old_line
    }

    /// The trimmed new line.
    pub fn new_line(&self) -> &'new str {
        self.new_line
    }

    /// The word alignment of the two lines.
    pub fn alignment(&self) -> &TextAlignment<'old, 'new> {
        &self.alignment
    }
}

/// Aligns the words of every pair of lines with the default policy.
///
/// Shortcut for [`TextAlignConfig::align_lines`].
pub fn align_lines<'old, 'new>(
    old: &'old str,
    new: &'new str,
) -> Result<Vec<LineAlignment<'old, 'new>>, AlignError> {
    TextAlignment::configure().align_lines(old, new)
}

#[test]
fn test_words() {
    let alignment = TextAlignment::from_words("the cat  sat", "the bat sat down").unwrap();
    assert_eq!(alignment.old_tokens(), &["the", "cat", "sat"]);
    assert_eq!(alignment.distance(), 2);
    assert_eq!(alignment.matches(), 2);
    assert_eq!(alignment.ratio(), 4.0 / 7.0);
    insta::assert_snapshot!(
        alignment.iter_changes().map(|c| c.to_string()).collect::<Vec<_>>().join("\n"),
        @r###"
    = the
    ~ cat -> bat
    = sat
    + down
    "###
    );
}

#[test]
fn test_chars() {
    let alignment = TextAlignment::from_chars("kitten", "sitting").unwrap();
    assert_eq!((alignment.distance(), alignment.matches()), (3, 4));
    let changes = alignment.iter_changes().collect::<Vec<_>>();
    assert_eq!(changes.len(), 7);
    assert_eq!(changes[0].action(), Action::Replace);
    assert_eq!(changes[0].old_value(), Some("k"));
    assert_eq!(changes[0].new_value(), Some("s"));
    assert_eq!(changes[6].action(), Action::Insert);
    assert_eq!(changes[6].old_value(), None);
    assert_eq!(changes[6].new_value(), Some("g"));

    let alignment = TextAlignment::from_chars("né", "ne").unwrap();
    assert_eq!(alignment.old_tokens(), &["n", "é"]);
    assert_eq!(alignment.distance(), 1);
}

#[test]
fn test_policy() {
    let alignment = TextAlignment::configure()
        .policy(Policy::HighestMatch)
        .align_words("hi my name is andy", "hi i'm my name's sandy")
        .unwrap();
    assert_eq!(alignment.policy(), Policy::HighestMatch);
    assert_eq!((alignment.distance(), alignment.matches()), (4, 2));
    insta::assert_snapshot!(
        alignment.opcodes().iter().map(|op| op.to_string()).collect::<Vec<_>>().join("\n"),
        @r###"
    equal(0,1,0,1)
    insert(1,1,1,2)
    equal(1,2,2,3)
    delete(2,3,3,3)
    replace(3,4,3,4)
    replace(4,5,4,5)
    "###
    );
}

#[test]
fn test_align_lines() {
    let old = "a b c\n  x y  \nonly old\n";
    let new = "a c\nx y\n";
    let lines = align_lines(old, new).unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].line(), 0);
    assert_eq!(lines[0].alignment().distance(), 1);
    assert_eq!(lines[0].alignment().matches(), 2);
    assert_eq!(
        lines[0]
            .alignment()
            .iter_changes()
            .map(|c| c.action())
            .collect::<Vec<_>>(),
        vec![Action::Equal, Action::Delete, Action::Equal]
    );
    assert_eq!(lines[1].old_line(), "x y");
    assert_eq!(lines[1].new_line(), "x y");
    assert_eq!(lines[1].alignment().distance(), 0);
}

#[test]
fn test_empty() {
    let alignment = TextAlignment::from_words("", "   ").unwrap();
    assert_eq!(alignment.distance(), 0);
    assert_eq!(alignment.ratio(), 1.0);
    assert_eq!(alignment.iter_changes().count(), 0);
}

#[test]
#[cfg(feature = "unicode")]
fn test_unicode() {
    let alignment = TextAlignConfig::default()
        .align_unicode_words("Hello, world!", "Hello world")
        .unwrap();
    assert_eq!(alignment.old_tokens(), &["Hello", "world"]);
    assert_eq!(alignment.distance(), 0);

    let alignment = TextAlignConfig::default()
        .align_graphemes("e\u{301}a", "ea")
        .unwrap();
    assert_eq!(alignment.old_tokens(), &["e\u{301}", "a"]);
    assert_eq!((alignment.distance(), alignment.matches()), (1, 1));
}
