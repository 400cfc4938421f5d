//! A minimal interpreter for a parenthesized prefix-notation Lisp
//! dialect.
//!
//! The pipeline is text → [`lexer::tokenize`] → [`parser::parse`] →
//! [`interpreter::eval`] against an [`environment::Environment`].
//! Hosts embed the interpreter through `parse` and `eval`; everything
//! else (the REPL, value printing) is driver glue.

pub mod environment;
pub mod errors;
pub mod expression;
pub mod interpreter;
pub mod io;
pub mod lexer;
pub mod parser;
pub mod symbol;
pub mod value;

#[cfg(test)]
mod tests;

pub use crate::environment::{default_env, Environment};
pub use crate::errors::{Error, ErrorKind, Result};
pub use crate::expression::Expression;
pub use crate::interpreter::eval;
pub use crate::parser::{parse, parse_sequence};
pub use crate::symbol::Symbol;
pub use crate::value::Value;
