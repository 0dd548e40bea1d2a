use super::{token::*, Error};
use crate::error;
use log::trace;

type Result<T> = std::result::Result<T, Error>;

/// Pull-based source of tokens for the parser.
///
/// Once the input is exhausted, every call returns an `Eof` token.
pub trait TokenSource {
    fn next_token(&mut self) -> Result<Token>;
}

/// Tokenizes all of `s`. The final token is always `Eof`.
pub fn lex(s: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(s);
    let mut tokens = vec![];
    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(s: &'a str) -> Lexer<'a> {
        Lexer {
            chars: s.chars().peekable(),
            line: 1,
            col: 0,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn token(&self, kind: TokenKind, text: &str, start: usize) -> Token {
        Token::new(kind, text, self.line, start..self.col)
    }

    fn illegal(&self, start: usize, message: String) -> Error {
        error!(IllegalCharacter, self.line, ..&(start..self.col.max(start + 1)); "{}", message)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&pk) = self.chars.peek() {
            if is_basic_whitespace(pk) {
                self.bump();
            } else if pk == '#' {
                while let Some(&pk) = self.chars.peek() {
                    if pk == '\n' {
                        break;
                    }
                    self.bump();
                }
            } else {
                break;
            }
        }
    }

    fn number(&mut self) -> Result<Token> {
        let start = self.col;
        let mut s = String::new();
        while let Some(&pk) = self.chars.peek() {
            if !is_basic_digit(pk) {
                break;
            }
            s.extend(self.bump());
        }
        if let Some('.') = self.chars.peek() {
            s.extend(self.bump());
            if !matches!(self.chars.peek(), Some(pk) if is_basic_digit(*pk)) {
                return Err(self.illegal(start, format!("ILLEGAL CHARACTER IN NUMBER {}", s)));
            }
            while let Some(&pk) = self.chars.peek() {
                if !is_basic_digit(pk) {
                    break;
                }
                s.extend(self.bump());
            }
        }
        Ok(self.token(TokenKind::Number, &s, start))
    }

    fn string(&mut self) -> Result<Token> {
        let start = self.col;
        self.bump();
        let mut s = String::new();
        loop {
            match self.chars.peek().copied() {
                Some('"') => {
                    self.bump();
                    return Ok(self.token(TokenKind::String, &s, start));
                }
                Some(ch @ ('\r' | '\n' | '\t' | '\\' | '%')) => {
                    return Err(self.illegal(
                        start,
                        format!("ILLEGAL CHARACTER IN STRING {:?}", ch),
                    ));
                }
                Some(_) => s.extend(self.bump()),
                None => return Err(self.illegal(start, "UNTERMINATED STRING".to_string())),
            }
        }
    }

    fn alphabetic(&mut self) -> Token {
        let start = self.col;
        let mut s = String::new();
        while let Some(&pk) = self.chars.peek() {
            if !is_basic_alphabetic(pk) && !is_basic_digit(pk) {
                break;
            }
            s.extend(self.bump());
        }
        match TokenKind::keyword(&s) {
            Some(kind) => self.token(kind, &s, start),
            None => self.token(TokenKind::Ident, &s, start),
        }
    }

    fn minutia(&mut self) -> Result<Token> {
        use TokenKind::*;
        let start = self.col;
        let ch = match self.bump() {
            Some(ch) => ch,
            None => return Ok(Token::eof(self.line, self.col)),
        };
        let followed_by_eq = self.chars.peek() == Some(&'=');
        let (kind, text) = match ch {
            '+' => (Plus, "+"),
            '-' => (Minus, "-"),
            '*' => (Asterisk, "*"),
            '/' => (Slash, "/"),
            '=' if followed_by_eq => (EqEq, "=="),
            '=' => (Eq, "="),
            '>' if followed_by_eq => (GtEq, ">="),
            '>' => (Gt, ">"),
            '<' if followed_by_eq => (LtEq, "<="),
            '<' => (Lt, "<"),
            '!' if followed_by_eq => (NotEq, "!="),
            '!' => return Err(self.illegal(start, "EXPECTED !=, GOT !".to_string())),
            _ => return Err(self.illegal(start, format!("UNKNOWN TOKEN {:?}", ch))),
        };
        if text.len() == 2 {
            self.bump();
        }
        Ok(self.token(kind, text, start))
    }
}

impl<'a> TokenSource for Lexer<'a> {
    fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();
        let token = match self.chars.peek().copied() {
            None => Token::eof(self.line, self.col),
            Some('\n') => {
                let (line, col) = (self.line, self.col);
                self.bump();
                Token::new(TokenKind::Newline, "\n", line, col..col + 1)
            }
            Some(pk) if is_basic_digit(pk) => self.number()?,
            Some(pk) if is_basic_alphabetic(pk) => self.alphabetic(),
            Some('"') => self.string()?,
            Some(_) => self.minutia()?,
        };
        trace!("{:?} {:?}", token.kind, token.text);
        Ok(token)
    }
}

impl TokenSource for std::vec::IntoIter<Token> {
    fn next_token(&mut self) -> Result<Token> {
        Ok(self.next().unwrap_or_else(|| Token::eof(0, 0)))
    }
}
