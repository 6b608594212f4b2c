use std::collections::HashSet;
use std::fmt;

use log::debug;
use once_cell::sync::Lazy;
use regex::{Match, Regex};

use crate::Span;

pub use token::*;

#[cfg(test)]
mod test;
mod token;

/// `0b`, `0o` or `0x` followed by the digits. Digits invalid for the radix are matched too, so
/// they can be reported as a malformed literal instead of as stray text.
const RADIX_PATTERN: &str = r"0[box][0-9a-z]*";
/// `##[.[##]]` or `.##`, each optionally followed by `e[+|-]##`
const DECIMAL_PATTERN: &str = r"(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:e[+\-]?[0-9]+)?";

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    let symbols = validate_vocabulary(vocabulary())
        .expect("operators and brackets have to be distinguishable by their symbols");
    Regex::new(&token_pattern(symbols)).expect("the token pattern is valid")
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VocabularyError {
    DuplicateSymbol(String),
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSymbol(s) => write!(f, "the symbol '{s}' is used more than once"),
        }
    }
}

impl std::error::Error for VocabularyError {}

/// Every symbol of the fixed operator and bracket vocabulary.
pub fn vocabulary() -> Vec<String> {
    let ops = OpT::members().iter().map(OpT::to_string);
    let pars = ParT::members().iter().map(ParT::to_string);
    ops.chain(pars).collect()
}

/// Checks that no two members of the vocabulary share a symbol.
pub fn validate_vocabulary(
    symbols: impl IntoIterator<Item = String>,
) -> Result<Vec<String>, VocabularyError> {
    let mut symbols: Vec<String> = symbols.into_iter().collect();
    {
        let mut seen = HashSet::new();
        for s in symbols.iter() {
            if !seen.insert(s.as_str()) {
                return Err(VocabularyError::DuplicateSymbol(s.clone()));
            }
        }
    }

    // multi-character symbols have to be tried before their single character prefixes
    symbols.sort_by(|a, b| b.len().cmp(&a.len()));
    Ok(symbols)
}

fn token_pattern(symbols: Vec<String>) -> String {
    let mut pattern = format!("(?i-u){RADIX_PATTERN}|{DECIMAL_PATTERN}");
    for s in symbols {
        pattern.push('|');
        pattern.push_str(&regex::escape(&s));
    }
    pattern
}

struct Lexer<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    /// byte index of the end of the last match
    byte_pos: usize,
    /// character index of the end of the last match
    char_pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            tokens: Vec::new(),
            byte_pos: 0,
            char_pos: 0,
        }
    }

    /// Moves the cursor to `byte_end`, only whitespace may be skipped on the way.
    fn skip_gap(&mut self, byte_end: usize) -> crate::Result<()> {
        let gap = &self.input[self.byte_pos..byte_end];
        let mut count = 0;
        for c in gap.chars() {
            if !c.is_whitespace() {
                let span = Span::pos(self.char_pos + count);
                return Err(crate::Error::UnexpectedChar(c, span));
            }
            count += 1;
        }

        self.byte_pos = byte_end;
        self.char_pos += count;
        Ok(())
    }

    fn push_match(&mut self, m: Match<'_>) -> crate::Result<()> {
        self.skip_gap(m.start())?;

        let text = m.as_str();
        let start = self.char_pos;
        let span = Span::of(start, start + text.chars().count());

        let token = if text.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            Token::val(parse_num(text, span)?, span)
        } else if let Ok(o) = text.parse::<OpT>() {
            Token::op(o, span)
        } else if let Ok(p) = text.parse::<ParT>() {
            Token::par(p, span)
        } else {
            let c = text.chars().next().unwrap_or_default();
            return Err(crate::Error::UnexpectedChar(c, Span::pos(start)));
        };

        self.tokens.push(token);
        self.byte_pos = m.end();
        self.char_pos = span.end;
        Ok(())
    }
}

/// Scans `input` into a flat sequence of tokens.
pub fn lex(input: &str) -> crate::Result<Vec<Token>> {
    let mut lexer = Lexer::new(input);

    for m in TOKEN_RE.find_iter(input) {
        lexer.push_match(m)?;
    }
    lexer.skip_gap(input.len())?;

    debug!("lexed {} tokens", lexer.tokens.len());
    Ok(lexer.tokens)
}

fn parse_num(literal: &str, span: Span) -> crate::Result<Val> {
    let bytes = literal.as_bytes();
    let radix = match bytes {
        [b'0', p, ..] => match p.to_ascii_lowercase() {
            b'b' => Some(2),
            b'o' => Some(8),
            b'x' => Some(16),
            _ => None,
        },
        _ => None,
    };

    match radix {
        Some(radix) => i128::from_str_radix(&literal[2..], radix)
            .map(Val::Int)
            .map_err(|_| crate::Error::InvalidRadixLiteral { radix, span }),
        // every literal the decimal pattern matches is a valid float
        None => match literal.parse::<f64>() {
            Ok(f) => Ok(Val::Float(f).maybe_int()),
            Err(_) => {
                let c = literal.chars().next().unwrap_or_default();
                Err(crate::Error::UnexpectedChar(c, Span::pos(span.start)))
            }
        },
    }
}
