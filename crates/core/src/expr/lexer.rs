use super::ExprError;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Identifier: variable, constant or function name
    Ident(String),
    /// Numeric literal, kept as written
    Number(String),
    // Punctuation
    LParen,
    RParen,
    Comma,
    // Arithmetic operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    // End of input
    Eof,
}

#[derive(Debug, Clone)]
pub struct Spanned {
    pub token: Token,
    /// Byte offset of the first character of the token.
    pub offset: usize,
}

pub fn lex(src: &str) -> Result<Vec<Spanned>, ExprError> {
    let mut tokens = Vec::new();
    let chars: Vec<(usize, char)> = src.char_indices().collect();
    let mut pos = 0usize;

    while pos < chars.len() {
        let (offset, c) = chars[pos];

        if c.is_whitespace() {
            pos += 1;
            continue;
        }

        // Number: 12, 3.5, .5, 1e-3
        if c.is_ascii_digit()
            || (c == '.' && pos + 1 < chars.len() && chars[pos + 1].1.is_ascii_digit())
        {
            let start = pos;
            while pos < chars.len() && chars[pos].1.is_ascii_digit() {
                pos += 1;
            }
            if pos < chars.len() && chars[pos].1 == '.' {
                pos += 1;
                while pos < chars.len() && chars[pos].1.is_ascii_digit() {
                    pos += 1;
                }
            }
            if pos < chars.len() && matches!(chars[pos].1, 'e' | 'E') {
                let mut look = pos + 1;
                if look < chars.len() && matches!(chars[look].1, '+' | '-') {
                    look += 1;
                }
                if look < chars.len() && chars[look].1.is_ascii_digit() {
                    pos = look;
                    while pos < chars.len() && chars[pos].1.is_ascii_digit() {
                        pos += 1;
                    }
                }
            }
            let s: String = chars[start..pos].iter().map(|&(_, c)| c).collect();
            tokens.push(Spanned {
                token: Token::Number(s),
                offset,
            });
            continue;
        }

        // Identifier: a letter or `_`, then letters, digits, `_` and `.`
        if c.is_alphabetic() || c == '_' {
            let start = pos;
            while pos < chars.len() && is_ident_continue(chars[pos].1) {
                pos += 1;
            }
            let word: String = chars[start..pos].iter().map(|&(_, c)| c).collect();
            tokens.push(Spanned {
                token: Token::Ident(word),
                offset,
            });
            continue;
        }

        let token = match c {
            '(' => Token::LParen,
            ')' => Token::RParen,
            ',' => Token::Comma,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '^' => Token::Caret,
            other => return Err(ExprError::UnexpectedChar { ch: other, offset }),
        };
        tokens.push(Spanned { token, offset });
        pos += 1;
    }

    tokens.push(Spanned {
        token: Token::Eof,
        offset: src.len(),
    });
    Ok(tokens)
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<Token> {
        lex(src).unwrap().into_iter().map(|s| s.token).collect()
    }

    #[test]
    fn lexes_operators_and_identifiers() {
        assert_eq!(
            kinds("t0*(1+a^2)"),
            vec![
                Token::Ident("t0".into()),
                Token::Star,
                Token::LParen,
                Token::Number("1".into()),
                Token::Plus,
                Token::Ident("a".into()),
                Token::Caret,
                Token::Number("2".into()),
                Token::RParen,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn lexes_decimal_and_exponent_numbers() {
        assert_eq!(
            kinds("0.15 .5 1e-3 2E4"),
            vec![
                Token::Number("0.15".into()),
                Token::Number(".5".into()),
                Token::Number("1e-3".into()),
                Token::Number("2E4".into()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn exponent_without_digits_is_left_for_the_identifier() {
        // "2e" is the number 2 followed by the identifier e
        assert_eq!(
            kinds("2e"),
            vec![Token::Number("2".into()), Token::Ident("e".into()), Token::Eof]
        );
    }

    #[test]
    fn identifiers_may_contain_dots_and_unicode_letters() {
        assert_eq!(
            kinds("t.0*x"),
            vec![
                Token::Ident("t.0".into()),
                Token::Star,
                Token::Ident("x".into()),
                Token::Eof,
            ]
        );
        assert_eq!(
            kinds("débit/capacité"),
            vec![
                Token::Ident("débit".into()),
                Token::Slash,
                Token::Ident("capacité".into()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn leading_dot_still_starts_a_number() {
        assert_eq!(
            kinds("a*.5"),
            vec![
                Token::Ident("a".into()),
                Token::Star,
                Token::Number(".5".into()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn rejects_unknown_character_with_offset() {
        let err = lex("x + $y").unwrap_err();
        assert_eq!(err, ExprError::UnexpectedChar { ch: '$', offset: 4 });
    }
}
