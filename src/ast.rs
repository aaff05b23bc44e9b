use std::fmt;

/// A single compiled match instruction.
///
/// Every variant except [`PatternItem::StartOfLine`] consumes exactly one
/// input byte when it matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternItem {
    Literal(u8),
    Digit,
    WordChar,
    CharSet(Vec<u8>),
    NegatedCharSet(Vec<u8>),
    StartOfLine,
}

impl PatternItem {
    /// Zero-width items never consume input.
    pub fn is_anchor(&self) -> bool {
        matches!(self, PatternItem::StartOfLine)
    }

    /// Test whether `byte` satisfies this item.
    ///
    /// Examples:
    /// - `Literal(b'a')` matches `a` only (case-sensitive)
    /// - `Digit` matches `0`..=`9`
    /// - `WordChar` matches `[a-zA-Z0-9_]`
    /// - `CharSet(b"abc")` matches `a`, `b` or `c`
    /// - `NegatedCharSet(b"abc")` matches anything else
    pub fn matches_byte(&self, byte: u8) -> bool {
        match self {
            PatternItem::Literal(b) => *b == byte,
            PatternItem::Digit => byte.is_ascii_digit(),
            PatternItem::WordChar => byte.is_ascii_alphanumeric() || byte == b'_',
            PatternItem::CharSet(set) => set.contains(&byte),
            PatternItem::NegatedCharSet(set) => !set.contains(&byte),
            PatternItem::StartOfLine => false,
        }
    }
}

impl fmt::Display for PatternItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternItem::Literal(b) => write!(f, "literal {:?}", char::from(*b)),
            PatternItem::Digit => write!(f, "digit"),
            PatternItem::WordChar => write!(f, "word"),
            PatternItem::CharSet(set) => write!(f, "set [{}]", String::from_utf8_lossy(set)),
            PatternItem::NegatedCharSet(set) => {
                write!(f, "not-set [^{}]", String::from_utf8_lossy(set))
            }
            PatternItem::StartOfLine => write!(f, "start-of-line"),
        }
    }
}

/// An ordered, immutable sequence of [`PatternItem`]s produced by
/// [`crate::compile`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    items: Vec<PatternItem>,
}

impl Pattern {
    pub(crate) fn new(items: Vec<PatternItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[PatternItem] {
        &self.items
    }

    /// True when the pattern starts with `^`.
    pub fn is_anchored(&self) -> bool {
        self.items.first().is_some_and(PatternItem::is_anchor)
    }

    /// Minimum number of input bytes a successful match consumes.
    pub fn min_len(&self) -> usize {
        self.items.iter().filter(|item| !item.is_anchor()).count()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, item) in self.items.iter().enumerate() {
            writeln!(f, "{n:>04}: {item}")?;
        }
        Ok(())
    }
}
