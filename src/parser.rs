use log::{debug, warn};

use crate::ast::{Pattern, PatternItem};
use crate::error::CompileError;

/// Compiler from pattern text to a flat [`Pattern`].
///
/// The pattern is scanned left to right one byte at a time; only escapes and
/// character classes look further ahead than the current byte.
pub struct Parser<'a> {
    pub pattern: &'a str,
    pub pos: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given pattern.
    pub fn new(pattern: &'a str) -> Self {
        Self { pattern, pos: 0 }
    }

    /// Peek at the next byte in the pattern without advancing.
    fn peek(&self) -> Option<u8> {
        self.pattern.as_bytes().get(self.pos).copied()
    }

    /// Advance the parser by one byte and return it.
    fn advance(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Entry point: compile the whole pattern.
    ///
    /// Example:
    /// - Pattern: `^a\d` → [StartOfLine, Literal('a'), Digit]
    pub fn parse(&mut self) -> Result<Pattern, CompileError> {
        let mut items = Vec::new();
        if self.peek() == Some(b'^') {
            self.advance();
            items.push(PatternItem::StartOfLine);
        }
        while self.peek().is_some() {
            if let Some(item) = self.parse_item()? {
                items.push(item);
            }
        }
        let pattern = Pattern::new(items);
        debug!("compiled {:?} into {} item(s)", self.pattern, pattern.items().len());
        Ok(pattern)
    }

    /// Parse one item: escape, character class, or literal.
    ///
    /// Examples:
    /// - Pattern: `\d`    → Digit
    /// - Pattern: `\w`    → WordChar
    /// - Pattern: `\\`    → Literal('\\')
    /// - Pattern: `[abc]` → CharSet("abc")
    /// - Pattern: `a`     → Literal('a')
    ///
    /// Returns `None` for a lone backslash at the end of the pattern.
    fn parse_item(&mut self) -> Result<Option<PatternItem>, CompileError> {
        match self.peek() {
            Some(b'\\') => {
                self.advance();
                self.parse_escape()
            }
            Some(b'[') => self.parse_char_class().map(Some),
            Some(b) => {
                self.advance();
                Ok(Some(PatternItem::Literal(b)))
            }
            None => Ok(None),
        }
    }

    /// Parse the byte after a `\`.
    fn parse_escape(&mut self) -> Result<Option<PatternItem>, CompileError> {
        let item = match self.peek() {
            Some(b'd') => PatternItem::Digit,
            Some(b'w') => PatternItem::WordChar,
            Some(b'\\') => PatternItem::Literal(b'\\'),
            Some(_) => {
                // `\` is ASCII, so `pos` sits on a char boundary here.
                let c = self.pattern[self.pos..].chars().next().unwrap_or('\u{fffd}');
                return Err(CompileError::UnsupportedEscape(c));
            }
            None => {
                warn!("trailing backslash in {:?} ignored", self.pattern);
                return Ok(None);
            }
        };
        self.advance();
        Ok(Some(item))
    }

    /// Parse a character class, e.g. `[abc]` or `[^abc]`.
    ///
    /// Members are taken verbatim up to the first `]`; there are no ranges.
    fn parse_char_class(&mut self) -> Result<PatternItem, CompileError> {
        self.advance(); // consume '['
        let negated = if self.peek() == Some(b'^') {
            self.advance();
            true
        } else {
            false
        };
        let start = self.pos;
        let len = self.pattern.as_bytes()[start..]
            .iter()
            .position(|&b| b == b']')
            .ok_or(CompileError::UnclosedCharacterClass)?;
        let set = self.pattern.as_bytes()[start..start + len].to_vec();
        self.pos = start + len + 1;
        Ok(if negated {
            PatternItem::NegatedCharSet(set)
        } else {
            PatternItem::CharSet(set)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PatternItem::*;

    fn parse(pattern: &str) -> Result<Vec<PatternItem>, CompileError> {
        Parser::new(pattern).parse().map(|p| p.items().to_vec())
    }

    #[test]
    fn test_parse_items() {
        assert_eq!(parse("").unwrap(), vec![]);
        assert_eq!(parse("ab").unwrap(), vec![Literal(b'a'), Literal(b'b')]);
        assert_eq!(parse(r"\d\w\\").unwrap(), vec![Digit, WordChar, Literal(b'\\')]);
        assert_eq!(
            parse("^x[ab][^cd]").unwrap(),
            vec![
                StartOfLine,
                Literal(b'x'),
                CharSet(b"ab".to_vec()),
                NegatedCharSet(b"cd".to_vec()),
            ]
        );
    }

    #[test]
    fn test_anchor_only_at_start() {
        assert_eq!(parse("a^").unwrap(), vec![Literal(b'a'), Literal(b'^')]);
        assert_eq!(parse("^^").unwrap(), vec![StartOfLine, Literal(b'^')]);
        assert_eq!(parse("a$").unwrap(), vec![Literal(b'a'), Literal(b'$')]);
    }

    #[test]
    fn test_char_class_verbatim() {
        assert_eq!(parse("[]").unwrap(), vec![CharSet(vec![])]);
        assert_eq!(parse("[^]").unwrap(), vec![NegatedCharSet(vec![])]);
        assert_eq!(parse(r"[a-\[]").unwrap(), vec![CharSet(br"a-\[".to_vec())]);
        assert_eq!(parse("[a^]").unwrap(), vec![CharSet(b"a^".to_vec())]);
    }

    #[test]
    fn test_multibyte_literal() {
        assert_eq!(parse("é").unwrap(), vec![Literal(0xc3), Literal(0xa9)]);
    }

    #[test]
    fn test_trailing_backslash() {
        assert_eq!(parse("a\\").unwrap(), vec![Literal(b'a')]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse(r"\q"), Err(CompileError::UnsupportedEscape('q')));
        assert_eq!(parse(r"a\é"), Err(CompileError::UnsupportedEscape('é')));
        assert_eq!(parse("[abc"), Err(CompileError::UnclosedCharacterClass));
        assert_eq!(parse("[^"), Err(CompileError::UnclosedCharacterClass));
        assert_eq!(parse(r"[ab]\x"), Err(CompileError::UnsupportedEscape('x')));
    }
}
