use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    // End of input marker
    Eof,
}

/// Decoded literal payload of a token. `Bool` and `Nil` are reserved for the
/// parser, which builds them from `true`/`false`/`nil` keyword tokens; the
/// scanner only ever produces `Number` and `String`.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    String(String),
    Bool(bool),
    Nil,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => write!(f, "{}", s),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Nil => write!(f, "nil"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source substring this token was scanned from. A string
    /// token's lexeme keeps its surrounding quotes; only `literal` is
    /// stripped.
    pub lexeme: String,
    /// `Some` only for `String` and `Number` tokens.
    pub literal: Option<Literal>,
    /// 1-based source line the token ends on.
    pub line: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{:?} {} {}", self.kind, self.lexeme, literal),
            None => write!(f, "{:?} {} nil", self.kind, self.lexeme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_lexeme_and_literal() {
        let token = Token {
            kind: TokenKind::Number,
            lexeme: "12.5".to_string(),
            literal: Some(Literal::Number(12.5)),
            line: 1,
        };
        assert_eq!(token.to_string(), "Number 12.5 12.5");
    }

    #[test]
    fn display_renders_absent_literal_as_nil() {
        let token = Token {
            kind: TokenKind::Var,
            lexeme: "var".to_string(),
            literal: None,
            line: 3,
        };
        assert_eq!(token.to_string(), "Var var nil");
    }

    #[test]
    fn string_literal_is_stripped_but_lexeme_is_not() {
        let token = Token {
            kind: TokenKind::String,
            lexeme: "\"hi\"".to_string(),
            literal: Some(Literal::String("hi".to_string())),
            line: 1,
        };
        assert_eq!(token.to_string(), "String \"hi\" hi");
    }
}
