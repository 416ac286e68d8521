use std::fmt;

use crate::ParseError;

/// A lexical token and the 1-based column where it starts.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) column: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Number(f64),
    Name(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {value}"),
            Self::Name(name) => write!(f, "name '{name}'"),
            Self::Plus => f.write_str("'+'"),
            Self::Minus => f.write_str("'-'"),
            Self::Star => f.write_str("'*'"),
            Self::Slash => f.write_str("'/'"),
            Self::Caret => f.write_str("'^'"),
            Self::LParen => f.write_str("'('"),
            Self::RParen => f.write_str("')'"),
        }
    }
}

/// Splits the source text into tokens.
///
/// `**` is folded into the same power token as `^`, and a number's exponent
/// part is only taken when an `e`/`E` is followed by digits, so `2*e` keeps
/// Euler's number as a separate name.
///
/// # Errors
///
/// Returns an error on characters outside the expression alphabet and on
/// numeric literals that do not parse as `f64`.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let column = i + 1;

        if ch.is_whitespace() {
            i += 1;
            continue;
        }

        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '/' => TokenKind::Slash,
            '^' => TokenKind::Caret,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '*' if chars.get(i + 1) == Some(&'*') => {
                i += 1;
                TokenKind::Caret
            }
            '*' => TokenKind::Star,
            c if c.is_ascii_digit() || (c == '.' && next_is_digit(&chars, i + 1)) => {
                let end = number_end(&chars, i);
                let text: String = chars[i..end].iter().collect();
                let value = text
                    .parse::<f64>()
                    .map_err(|_| ParseError::InvalidNumber { text, column })?;
                tokens.push(Token {
                    kind: TokenKind::Number(value),
                    column,
                });
                i = end;
                continue;
            }
            c if c.is_alphabetic() || c == '_' => {
                let end = chars[i..]
                    .iter()
                    .position(|c| !(c.is_alphanumeric() || *c == '_'))
                    .map_or(chars.len(), |offset| i + offset);
                tokens.push(Token {
                    kind: TokenKind::Name(chars[i..end].iter().collect()),
                    column,
                });
                i = end;
                continue;
            }
            c => return Err(ParseError::UnexpectedChar { ch: c, column }),
        };

        tokens.push(Token { kind, column });
        i += 1;
    }

    Ok(tokens)
}

fn next_is_digit(chars: &[char], i: usize) -> bool {
    chars.get(i).is_some_and(char::is_ascii_digit)
}

/// Returns the index one past the numeric literal starting at `start`.
fn number_end(chars: &[char], start: usize) -> usize {
    let mut i = start;
    while next_is_digit(chars, i) {
        i += 1;
    }
    if chars.get(i) == Some(&'.') {
        i += 1;
        while next_is_digit(chars, i) {
            i += 1;
        }
    }
    if matches!(chars.get(i), Some('e' | 'E')) {
        let sign = usize::from(matches!(chars.get(i + 1), Some('+' | '-')));
        if next_is_digit(chars, i + 1 + sign) {
            i += 1 + sign;
            while next_is_digit(chars, i) {
                i += 1;
            }
        }
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .expect("should tokenize")
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn splits_operators_and_names() {
        assert_eq!(
            kinds("sin(x) - 4*e"),
            [
                TokenKind::Name("sin".into()),
                TokenKind::LParen,
                TokenKind::Name("x".into()),
                TokenKind::RParen,
                TokenKind::Minus,
                TokenKind::Number(4.0),
                TokenKind::Star,
                TokenKind::Name("e".into()),
            ]
        );
    }

    #[test]
    fn double_star_is_power() {
        assert_eq!(
            kinds("x**2"),
            [
                TokenKind::Name("x".into()),
                TokenKind::Caret,
                TokenKind::Number(2.0),
            ]
        );
    }

    #[test]
    fn scientific_notation_needs_exponent_digits() {
        assert_eq!(kinds("1.5e-3"), [TokenKind::Number(1.5e-3)]);
        assert_eq!(kinds(".25"), [TokenKind::Number(0.25)]);
        assert_eq!(
            kinds("2e"),
            [TokenKind::Number(2.0), TokenKind::Name("e".into())]
        );
        assert_eq!(
            kinds("2exp"),
            [TokenKind::Number(2.0), TokenKind::Name("exp".into())]
        );
    }

    #[test]
    fn records_columns() {
        let tokens = tokenize("  x +1").expect("should tokenize");
        let columns: Vec<_> = tokens.iter().map(|t| t.column).collect();
        assert_eq!(columns, [3, 5, 6]);
    }

    #[test]
    fn rejects_unknown_characters() {
        assert_eq!(
            tokenize("x % 2"),
            Err(ParseError::UnexpectedChar { ch: '%', column: 3 })
        );
    }
}
