use crate::errors::*;
use crate::expression::Expression;
use crate::lexer::{tokenize, Token};
use std::collections::VecDeque;

/// Nesting deeper than this aborts the read instead of overflowing
/// the stack on hostile input.
pub const MAX_NESTING_DEPTH: usize = 512;

/// Read one expression from program text.
///
/// Tokens left over after a complete expression are silently ignored;
/// only one top-level form is read per call.
pub fn parse(text: &str) -> Result<Expression> {
    let mut tokens: VecDeque<Token> = tokenize(text).into();
    read_from_tokens(&mut tokens, 0)
}

/// Read expressions until the token queue is exhausted.
///
/// Used for script files, where a program is a sequence of top-level
/// forms.
pub fn parse_sequence(text: &str) -> Result<Vec<Expression>> {
    let mut tokens: VecDeque<Token> = tokenize(text).into();
    let mut output = vec![];
    while !tokens.is_empty() {
        output.push(read_from_tokens(&mut tokens, 0)?);
    }
    Ok(output)
}

/// Assemble a nested expression, consuming tokens destructively from
/// the front of the queue.
pub fn read_from_tokens(tokens: &mut VecDeque<Token>, depth: usize) -> Result<Expression> {
    if depth > MAX_NESTING_DEPTH {
        return Err(ErrorKind::RecursionDepth.into());
    }
    match tokens.pop_front() {
        None => Err(ErrorKind::UnexpectedEof.into()),
        Some(Token::ListClose) => Err(ErrorKind::UnexpectedCloseParen.into()),
        Some(Token::ListOpen) => {
            let mut form = vec![];
            loop {
                match tokens.front() {
                    None => return Err(ErrorKind::UnexpectedEof.into()),
                    Some(Token::ListClose) => {
                        tokens.pop_front();
                        return Ok(Expression::Combination(form));
                    }
                    Some(_) => form.push(read_from_tokens(tokens, depth + 1)?),
                }
            }
        }
        Some(Token::Atom(s)) => Ok(Expression::from_literal(s)),
    }
}
