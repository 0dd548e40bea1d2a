/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of Tiny BASIC.
Parsing and C generation happen in the same pass; there is no syntax tree.

*/

pub type LineNumber = Option<usize>;
pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod lex;
pub mod parse;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::Lexer;
pub use lex::TokenSource;
pub use token::Token;
pub use token::TokenKind;
