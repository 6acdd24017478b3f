//! Front end for the Lox scripting language: lexical scanner, typed token
//! model, and the expression-tree types a parser will build on top of them.

pub mod config;
pub mod error;
pub mod expr;
pub mod keywords;
pub mod scanner;
pub mod token;
