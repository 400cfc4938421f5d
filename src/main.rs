use clap::{App, Arg};
use log::debug;
use minilisp::errors::{ErrorKind, Result};
use minilisp::io::{LineReader, ReplInput};
use minilisp::lexer::{is_balanced, tokenize};
use minilisp::{default_env, eval, parse, parse_sequence, Environment, Error, Value};
use rustyline::error::ReadlineError;
use std::fs;

fn main() {
    env_logger::init();

    let matches = App::new("minilisp")
        .about("An interpreter for a minimal prefix-notation Lisp dialect")
        .arg(
            Arg::new("script")
                .value_name("FILE")
                .help("Script file to run instead of starting the REPL"),
        )
        .arg(
            Arg::new("eval")
                .short('e')
                .long("eval")
                .value_name("EXPR")
                .takes_value(true)
                .help("Evaluate a single expression and exit"),
        )
        .get_matches();

    let mut env = default_env();

    if let Some(expr) = matches.value_of("eval") {
        if let Err(e) = run_source(expr, &mut env) {
            report_error(&e);
            std::process::exit(1);
        }
        return;
    }

    if let Some(path) = matches.value_of("script") {
        if let Err(e) = run_file(path, &mut env) {
            report_error(&e);
            std::process::exit(1);
        }
        return;
    }

    let mut input = ReplInput::new();
    loop {
        match repl(&mut input, &mut env) {
            Ok(_) => {}
            Err(e) => match e.kind() {
                ErrorKind::ReadlineError(ReadlineError::Interrupted)
                | ErrorKind::ReadlineError(ReadlineError::Eof) => break,
                _ => report_error(&e),
            },
        }
    }
}

/// One read-eval-print cycle. Keeps reading continuation lines until
/// all opened lists are closed.
fn repl(input: &mut ReplInput, env: &mut Environment) -> Result<()> {
    let mut source = input.read_line(">> ")?;
    while !is_balanced(&tokenize(&source)) {
        source.push(' ');
        source.push_str(&input.read_line(".. ")?);
    }

    let expr = parse(&source)?;
    debug!("parsed: {}", expr);
    print_value(eval(&expr, env)?);
    Ok(())
}

/// Evaluate every top-level form of a script in order, printing the
/// printable results.
fn run_file(path: &str, env: &mut Environment) -> Result<()> {
    let source = fs::read_to_string(path)
        .map_err(|_| ErrorKind::FileNotFound(path.to_string()))?;
    run_source(&source, env)
}

fn run_source(source: &str, env: &mut Environment) -> Result<()> {
    for expr in parse_sequence(source)? {
        debug!("parsed: {}", expr);
        print_value(eval(&expr, env)?);
    }
    Ok(())
}

fn print_value(value: Value) {
    // a define produces no printable result
    if let Value::Undefined = value {
        return;
    }
    println!("{}", value);
}

fn report_error(e: &Error) {
    match e.kind() {
        ErrorKind::UnexpectedEof | ErrorKind::UnexpectedCloseParen => {
            eprintln!("Syntax error: {}", e)
        }
        ErrorKind::DivisionByZero => eprintln!("Zero division error"),
        _ => eprintln!("Error: {}", e),
    }
}
