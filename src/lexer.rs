use crate::token;
use crate::token::{Token, TokenKind};

/// Single-pass scanner over the source bytes. Never fails: anything it does
/// not recognise comes back as an `Illegal` token for the parser to report.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Lexer<'a> {
        Lexer { input, position: 0 }
    }

    fn read_char(&mut self) -> Option<u8> {
        let ch = self.peek_char()?;
        self.position += 1;
        Some(ch)
    }

    fn peek_char(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    fn peek_if<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(u8) -> bool,
    {
        match self.peek_char() {
            Some(ch) => predicate(ch),
            None => false,
        }
    }

    /// Consumes bytes while `predicate` holds and returns the run, starting at `start`.
    fn read_while<F>(&mut self, start: usize, predicate: F) -> &'a str
    where
        F: Fn(u8) -> bool,
    {
        while self.peek_if(&predicate) {
            self.position += 1;
        }

        let input = self.input;
        &input[start..self.position]
    }

    fn skip_whitespace(&mut self) {
        while self.peek_if(|c| matches!(c, b' ' | b'\t' | b'\n' | b'\r')) {
            self.position += 1;
        }
    }

    /// Pairs a one-byte operator with its `=`-suffixed form, e.g. `!` and `!=`.
    fn either_or_eq(&mut self, single: TokenKind, double: TokenKind, literal: &str) -> Token {
        if let Some(b'=') = self.peek_char() {
            self.read_char();
            Token::new(double, format!("{}=", literal))
        } else {
            Token::new(single, literal)
        }
    }

    fn read_illegal(&mut self, start: usize) -> Token {
        // Step over the whole character so non-ASCII input never splits a code point.
        let ch = self.input[start..].chars().next().unwrap_or('\u{FFFD}');
        self.position = start + ch.len_utf8();
        tracing::trace!(offset = start, character = %ch, "illegal character");

        Token::new(TokenKind::Illegal, ch.to_string())
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let ch = match self.read_char() {
            Some(ch) => ch,
            None => return Token::eof(),
        };

        match ch {
            b'=' => self.either_or_eq(TokenKind::Assign, TokenKind::Eq, "="),
            b'!' => self.either_or_eq(TokenKind::Bang, TokenKind::NotEq, "!"),
            b'+' => Token::new(TokenKind::Plus, "+"),
            b'-' => Token::new(TokenKind::Minus, "-"),
            b'*' => Token::new(TokenKind::Asterisk, "*"),
            b'/' => Token::new(TokenKind::Slash, "/"),
            b'<' => Token::new(TokenKind::Lt, "<"),
            b'>' => Token::new(TokenKind::Gt, ">"),
            b'(' => Token::new(TokenKind::OpenParen, "("),
            b')' => Token::new(TokenKind::CloseParen, ")"),
            b'{' => Token::new(TokenKind::OpenBrace, "{"),
            b'}' => Token::new(TokenKind::CloseBrace, "}"),
            b',' => Token::new(TokenKind::Comma, ","),
            b';' => Token::new(TokenKind::SemiColon, ";"),
            c if is_letter(c) => {
                let ident = self.read_while(start, is_letter);
                Token::new(token::lookup_ident(ident), ident)
            }
            c if is_number_part(c) => {
                let number = self.read_while(start, is_number_part);
                Token::new(token::lookup_number(number), number)
            }
            _ => self.read_illegal(start),
        }
    }
}

/// Yields tokens lazily and stops before `Eof`.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();

        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}

fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_number_part(c: u8) -> bool {
    c.is_ascii_digit() || c == b'.'
}
