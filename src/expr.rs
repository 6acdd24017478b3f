use crate::token::{Literal, Token};

/// Expression tree the parser will build from the token stream. The set of
/// variants is closed: a new node variant extends every `match` over `Expr`
/// at compile time, so consumers can never silently miss one.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    Grouping {
        expression: Box<Expr>,
    },
    Literal {
        value: Literal,
    },
    Unary {
        operator: Token,
        right: Box<Expr>,
    },
}

impl Expr {
    /// Renders the tree in fully parenthesized prefix form, e.g.
    /// `(* (- 123) (group 45.67))`. Debugging aid for the parser; no
    /// evaluation happens at this layer.
    pub fn describe(&self) -> String {
        match self {
            Expr::Binary {
                left,
                operator,
                right,
            } => format!("({} {} {})", operator.lexeme, left.describe(), right.describe()),
            Expr::Grouping { expression } => format!("(group {})", expression.describe()),
            Expr::Literal { value } => value.to_string(),
            Expr::Unary { operator, right } => {
                format!("({} {})", operator.lexeme, right.describe())
            }
        }
    }
}
