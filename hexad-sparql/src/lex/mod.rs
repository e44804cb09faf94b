//! Lexical analysis: query text to spanned tokens.

mod chars;
mod lexer;
mod token;

pub use lexer::tokenize;
pub use token::{keyword_from_str, Token, TokenKind};
