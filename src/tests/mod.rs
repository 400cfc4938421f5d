mod reader;

use crate::environment::{default_env, Environment};
use crate::errors::Result;
use crate::interpreter::eval;
use crate::parser::parse;
use crate::value::Value;

fn run<T: AsRef<str>>(src: T) -> Result<Value> {
    let mut env = default_env();
    run_in_env(src, &mut env)
}

fn run_in_env<T: AsRef<str>>(src: T, env: &mut Environment) -> Result<Value> {
    eval(&parse(src.as_ref())?, env)
}
