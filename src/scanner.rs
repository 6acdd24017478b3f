use crate::error::Diagnostics;
use crate::keywords;
use crate::token::{Literal, Token, TokenKind};

/// Cursor over an immutable source buffer. `start` marks the beginning of the
/// lexeme being scanned, `current` the next unread character; the invariant
/// `start <= current <= chars.len()` holds throughout a scan.
pub struct Scanner {
    chars: Vec<char>,
    start: usize,
    current: usize,
    line: usize,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scans the whole source and returns the token sequence, always
    /// terminated by exactly one `Eof` token with an empty lexeme. Malformed
    /// input is reported through `diags` and scanning continues, so one bad
    /// construct never hides the tokens after it.
    pub fn scan_tokens(&mut self, diags: &mut Diagnostics) -> Vec<Token> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            debug_assert!(self.start <= self.current && self.current <= self.chars.len());
            self.start = self.current;
            self.scan_token(&mut tokens, diags);
        }

        tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            literal: None,
            line: self.line,
        });
        tokens
    }

    fn scan_token(&mut self, tokens: &mut Vec<Token>, diags: &mut Diagnostics) {
        let c = self.advance();

        match c {
            '(' => self.add_token(tokens, TokenKind::LeftParen),
            ')' => self.add_token(tokens, TokenKind::RightParen),
            '{' => self.add_token(tokens, TokenKind::LeftBrace),
            '}' => self.add_token(tokens, TokenKind::RightBrace),
            ',' => self.add_token(tokens, TokenKind::Comma),
            '.' => self.add_token(tokens, TokenKind::Dot),
            '-' => self.add_token(tokens, TokenKind::Minus),
            '+' => self.add_token(tokens, TokenKind::Plus),
            ';' => self.add_token(tokens, TokenKind::Semicolon),
            '*' => self.add_token(tokens, TokenKind::Star),

            '!' => {
                let kind = if self.match_next('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(tokens, kind);
            }
            '=' => {
                let kind = if self.match_next('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(tokens, kind);
            }
            '<' => {
                let kind = if self.match_next('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(tokens, kind);
            }
            '>' => {
                let kind = if self.match_next('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(tokens, kind);
            }

            '/' => {
                if self.match_next('/') {
                    // A comment runs to the end of the physical line.
                    while self.peek() != Some('\n') && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(tokens, TokenKind::Slash);
                }
            }

            ' ' | '\r' | '\t' => {}

            '\n' => self.line += 1,

            '"' => self.string(tokens, diags),

            c if c.is_ascii_digit() => self.number(tokens),

            c if c.is_ascii_alphabetic() => self.identifier(tokens),

            _ => diags.error(self.line, "Unexpected character."),
        }
    }

    fn string(&mut self, tokens: &mut Vec<Token>, diags: &mut Diagnostics) {
        while self.peek() != Some('"') && !self.is_at_end() {
            // Multi-line strings are legal; no escape sequences.
            if self.peek() == Some('\n') {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            diags.error(self.line, "Unterminated string.");
            return;
        }

        // The closing quote.
        self.advance();

        // Trim the surrounding quotes for the literal; the lexeme keeps them.
        let value: String = self.chars[self.start + 1..self.current - 1].iter().collect();
        self.add_literal_token(tokens, TokenKind::String, Literal::String(value));
    }

    fn number(&mut self, tokens: &mut Vec<Token>) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // A fractional part needs a digit after the dot; a trailing dot is
        // left for the next lexeme.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        // The grammar guarantees a well-formed float here.
        let value: f64 = self.lexeme().parse().unwrap();
        self.add_literal_token(tokens, TokenKind::Number, Literal::Number(value));
    }

    fn identifier(&mut self, tokens: &mut Vec<Token>) {
        // Only ASCII alphanumerics continue an identifier; in particular an
        // underscore terminates the lexeme.
        while self.peek().is_some_and(|c| c.is_ascii_alphanumeric()) {
            self.advance();
        }

        let kind = keywords::lookup(&self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(tokens, kind);
    }

    fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        c
    }

    /// Consumes the next character only if it equals `expected`.
    fn match_next(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.current + 1).copied()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    fn lexeme(&self) -> String {
        self.chars[self.start..self.current].iter().collect()
    }

    fn add_token(&mut self, tokens: &mut Vec<Token>, kind: TokenKind) {
        tokens.push(Token {
            kind,
            lexeme: self.lexeme(),
            literal: None,
            line: self.line,
        });
    }

    fn add_literal_token(&mut self, tokens: &mut Vec<Token>, kind: TokenKind, literal: Literal) {
        tokens.push(Token {
            kind,
            lexeme: self.lexeme(),
            literal: Some(literal),
            line: self.line,
        });
    }
}
