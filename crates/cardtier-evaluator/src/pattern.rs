//! Declarative text patterns for ability-text matching.
//!
//! Rule tables describe what they look for with a handful of [`Token`]s
//! instead of ad-hoc string code, so each table stays plain data:
//!
//! ```
//! use cardtier_evaluator::pattern::{SearchText, TextPattern, Token::*};
//!
//! // "deal <n> damage"
//! const DEAL_DAMAGE: TextPattern = TextPattern::phrase(&[Lit("deal "), Number, Lit(" damage")]);
//! // a whole word
//! const WARD: TextPattern = TextPattern::word(&[Lit("ward")]);
//!
//! let text = SearchText::new("Fanfare: Deal 3 damage to an enemy. Gain <b>Ward</b>.");
//! assert!(DEAL_DAMAGE.is_match(&text));
//! assert!(WARD.is_match(&text));
//! assert!(!WARD.is_match(&SearchText::new("Wardrobe")));
//! ```
//!
//! Matching is case-insensitive: the haystack is lowercased once by
//! [`SearchText`] and literals are written in lowercase. Word boundaries use
//! ASCII word characters (`[A-Za-z0-9_]`), so markup such as `<b>Ward</b>`
//! still matches a whole-word pattern.

use std::fmt;

/// One element of a [`TextPattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Literal text, written in lowercase.
    Lit(&'static str),
    /// Literal text that may be absent.
    Opt(&'static str),
    /// One or more ASCII digits.
    Number,
    /// Any one of the alternative token sequences.
    Alt(&'static [&'static [Token]]),
}

/// A sequence of [`Token`]s with optional word boundaries at either end.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TextPattern {
    tokens: &'static [Token],
    word_start: bool,
    word_end: bool,
}

impl TextPattern {
    /// Matches anywhere, with no boundary requirements.
    #[must_use]
    pub const fn phrase(tokens: &'static [Token]) -> Self {
        Self {
            tokens,
            word_start: false,
            word_end: false,
        }
    }

    /// Matches only when starting at a word boundary (`ward` matches "Wards").
    #[must_use]
    pub const fn prefix(tokens: &'static [Token]) -> Self {
        Self {
            tokens,
            word_start: true,
            word_end: false,
        }
    }

    /// Matches only as a whole word (`ward` does not match "Wards").
    #[must_use]
    pub const fn word(tokens: &'static [Token]) -> Self {
        Self {
            tokens,
            word_start: true,
            word_end: true,
        }
    }

    /// Returns `true` if the pattern occurs anywhere in `text`.
    #[must_use]
    pub fn is_match(&self, text: &SearchText) -> bool {
        let haystack = text.as_str();
        haystack
            .char_indices()
            .map(|(pos, _)| pos)
            .chain([haystack.len()])
            .filter(|&pos| !self.word_start || is_word_boundary(haystack, pos))
            .any(|pos| self.match_at(haystack, pos))
    }

    fn match_at(&self, haystack: &str, pos: usize) -> bool {
        let matcher = Matcher {
            haystack,
            word_end: self.word_end,
        };
        matcher.match_tokens(pos, self.tokens, None)
    }
}

impl fmt::Debug for TextPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("/")?;
        if self.word_start {
            f.write_str("\\b")?;
        }
        write_tokens(f, self.tokens)?;
        if self.word_end {
            f.write_str("\\b")?;
        }
        f.write_str("/i")
    }
}

fn write_tokens(f: &mut fmt::Formatter<'_>, tokens: &[Token]) -> fmt::Result {
    for token in tokens {
        match token {
            Token::Lit(lit) => f.write_str(lit)?,
            Token::Opt(lit) => write!(f, "({lit})?")?,
            Token::Number => f.write_str("\\d+")?,
            Token::Alt(alts) => {
                f.write_str("(")?;
                for (i, alt) in alts.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    write_tokens(f, alt)?;
                }
                f.write_str(")")?;
            }
        }
    }
    Ok(())
}

/// Ability text prepared for matching. Only ASCII letters are case-folded,
/// so compatibility characters such as the Kelvin sign never stand in for
/// a Latin letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchText(String);

impl SearchText {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self(text.to_ascii_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Tokens still to be matched after the current sequence finishes.
struct Continuation<'a> {
    tokens: &'a [Token],
    next: Option<&'a Continuation<'a>>,
}

struct Matcher<'h> {
    haystack: &'h str,
    word_end: bool,
}

impl Matcher<'_> {
    fn match_tokens<'a>(
        &self,
        pos: usize,
        tokens: &'a [Token],
        cont: Option<&'a Continuation<'a>>,
    ) -> bool {
        let Some((token, rest)) = tokens.split_first() else {
            return match cont {
                Some(cont) => self.match_tokens(pos, cont.tokens, cont.next),
                None => !self.word_end || is_word_boundary(self.haystack, pos),
            };
        };

        let remaining = &self.haystack[pos..];
        match token {
            Token::Lit(lit) => {
                remaining.starts_with(lit) && self.match_tokens(pos + lit.len(), rest, cont)
            }
            Token::Opt(lit) => {
                (remaining.starts_with(lit) && self.match_tokens(pos + lit.len(), rest, cont))
                    || self.match_tokens(pos, rest, cont)
            }
            Token::Number => {
                let digits = remaining.bytes().take_while(u8::is_ascii_digit).count();
                (1..=digits)
                    .rev()
                    .any(|len| self.match_tokens(pos + len, rest, cont))
            }
            Token::Alt(alts) => {
                let after = Continuation { tokens: rest, next: cont };
                alts.iter()
                    .any(|alt| self.match_tokens(pos, alt, Some(&after)))
            }
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `true` when exactly one side of `pos` is a word character.
fn is_word_boundary(haystack: &str, pos: usize) -> bool {
    let before = haystack[..pos].chars().next_back().is_some_and(is_word_char);
    let after = haystack[pos..].chars().next().is_some_and(is_word_char);
    before != after
}
