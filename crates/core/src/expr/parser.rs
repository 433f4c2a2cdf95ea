use super::lexer::{Spanned, Token};
use super::ExprError;
use std::collections::BTreeSet;

/// Functions a formula may call. Their names are never terms.
pub const BUILTIN_FUNCTIONS: &[&str] = &[
    "sin", "cos", "tan", "asin", "acos", "atan", "sqrt", "log", "abs", "ceil", "floor", "round",
    "exp", "random", "fac", "min", "max", "pyt", "pow", "atan2",
];

/// Named constants. Their names are never terms.
pub const BUILTIN_CONSTANTS: &[&str] = &["E", "PI"];

/// Deepest nesting of parentheses, calls and unary signs a formula may use.
pub const MAX_DEPTH: usize = 256;

/// Grammar check over the token stream. Nothing is evaluated and no tree is
/// built; identifiers are collected into `terms` as they are accepted.
struct Parser<'a> {
    tokens: &'a [Spanned],
    pos: usize,
    depth: usize,
    terms: BTreeSet<String>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Spanned]) -> Self {
        Parser {
            tokens,
            pos: 0,
            depth: 0,
            terms: BTreeSet::new(),
        }
    }

    // `tokens` always ends with Eof (checked in `parse`).
    fn cur(&self) -> &Spanned {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn peek(&self) -> &Token {
        &self.cur().token
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
    }

    fn err(&self) -> ExprError {
        let s = self.cur();
        match &s.token {
            Token::Eof => ExprError::UnexpectedEnd,
            other => ExprError::UnexpectedToken {
                found: describe(other),
                offset: s.offset,
            },
        }
    }

    fn expect(&mut self, expected: &Token) -> Result<(), ExprError> {
        if self.peek() == expected {
            self.advance();
            Ok(())
        } else {
            Err(self.err())
        }
    }

    fn parse_formula(&mut self) -> Result<(), ExprError> {
        self.parse_additive()?;
        if self.peek() != &Token::Eof {
            return Err(self.err());
        }
        Ok(())
    }

    fn parse_additive(&mut self) -> Result<(), ExprError> {
        self.parse_multiplicative()?;
        while matches!(self.peek(), Token::Plus | Token::Minus) {
            self.advance();
            self.parse_multiplicative()?;
        }
        Ok(())
    }

    fn parse_multiplicative(&mut self) -> Result<(), ExprError> {
        self.parse_unary()?;
        while matches!(self.peek(), Token::Star | Token::Slash | Token::Percent) {
            self.advance();
            self.parse_unary()?;
        }
        Ok(())
    }

    // Every nesting level (parenthesis, call argument, exponent, sign)
    // passes through here, so this is where depth is bounded.
    fn parse_unary(&mut self) -> Result<(), ExprError> {
        if self.depth >= MAX_DEPTH {
            return Err(ExprError::TooDeep {
                offset: self.cur().offset,
            });
        }
        self.depth += 1;
        let result = if matches!(self.peek(), Token::Plus | Token::Minus) {
            self.advance();
            self.parse_unary()
        } else {
            self.parse_power()
        };
        self.depth -= 1;
        result
    }

    // `^` binds tighter than unary minus and associates to the right.
    fn parse_power(&mut self) -> Result<(), ExprError> {
        self.parse_atom()?;
        if self.peek() == &Token::Caret {
            self.advance();
            self.parse_unary()?;
        }
        Ok(())
    }

    fn parse_atom(&mut self) -> Result<(), ExprError> {
        match self.peek().clone() {
            Token::Number(_) => {
                self.advance();
                Ok(())
            }
            Token::Ident(name) => {
                let offset = self.cur().offset;
                self.advance();
                if self.peek() != &Token::LParen {
                    if !BUILTIN_CONSTANTS.contains(&name.as_str()) {
                        self.terms.insert(name);
                    }
                    return Ok(());
                }
                if !BUILTIN_FUNCTIONS.contains(&name.as_str()) {
                    return Err(ExprError::UnknownFunction { name, offset });
                }
                self.advance();
                if self.peek() != &Token::RParen {
                    self.parse_additive()?;
                    while self.peek() == &Token::Comma {
                        self.advance();
                        self.parse_additive()?;
                    }
                }
                self.expect(&Token::RParen)
            }
            Token::LParen => {
                self.advance();
                self.parse_additive()?;
                self.expect(&Token::RParen)
            }
            _ => Err(self.err()),
        }
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Ident(w) => format!("'{}'", w),
        Token::Number(n) => format!("'{}'", n),
        Token::LParen => "'('".to_owned(),
        Token::RParen => "')'".to_owned(),
        Token::Comma => "','".to_owned(),
        Token::Plus => "'+'".to_owned(),
        Token::Minus => "'-'".to_owned(),
        Token::Star => "'*'".to_owned(),
        Token::Slash => "'/'".to_owned(),
        Token::Percent => "'%'".to_owned(),
        Token::Caret => "'^'".to_owned(),
        Token::Eof => "end of formula".to_owned(),
    }
}

/// Check `tokens` against the formula grammar and return the term names:
/// every identifier except built-in constants and called function names.
pub fn parse(tokens: &[Spanned]) -> Result<BTreeSet<String>, ExprError> {
    if !matches!(tokens.last(), Some(Spanned { token: Token::Eof, .. })) {
        return Err(ExprError::UnexpectedEnd);
    }
    let mut parser = Parser::new(tokens);
    parser.parse_formula()?;
    Ok(parser.terms)
}
