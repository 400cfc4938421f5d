use crate::errors::*;
use crate::symbol::Symbol;
use crate::value::{NativeFn, Value};
use std::collections::HashMap;

/// A mutable mapping from symbol name to value.
///
/// Bindings resolve against this map first and fall back to the
/// parent, so tests can layer a scratch scope over a shared one. The
/// interpreter itself only ever creates a single flat scope.
///
/// There is no internal locking; concurrent evaluation against the
/// same environment requires external synchronization.
#[derive(Debug, Default)]
pub struct Environment {
    map: HashMap<Symbol, Value>,
    parent: Option<Box<Environment>>,
}

impl Environment {
    pub fn new() -> Environment {
        Environment {
            map: Default::default(),
            parent: None,
        }
    }

    pub fn with_parent(parent: Environment) -> Environment {
        Environment {
            map: Default::default(),
            parent: Some(Box::new(parent)),
        }
    }

    pub fn lookup(&self, key: &Symbol) -> Option<Value> {
        match self.map.get(key) {
            Some(value) => Some(value.clone()),
            None => self.parent.as_ref().and_then(|p| p.lookup(key)),
        }
    }

    /// Inserts or overwrites the binding unconditionally.
    pub fn insert<K: Into<Symbol>>(&mut self, key: K, value: Value) {
        self.map.insert(key.into(), value);
    }

    pub fn insert_native(&mut self, key: &str, func: NativeFn) {
        self.insert(key, Value::Native(func));
    }
}

/// The global environment with the primitive procedure table
/// pre-loaded.
pub fn default_env() -> Environment {
    let mut env = Environment::new();

    // numerical operations
    env.insert_native("+", |args| native_binary("+", args, |a, b| a + b));
    env.insert_native("-", |args| native_binary("-", args, |a, b| a - b));
    env.insert_native("*", |args| native_binary("*", args, |a, b| a * b));
    env.insert_native("/", |args| native_binary("/", args, |a, b| a / b));

    // comparison
    env.insert_native("eq", |args| {
        native_binary("eq", args, |a, b| Ok((a == b).into()))
    });
    env.insert_native("<", |args| native_compare("<", args, |a, b| a < b));
    env.insert_native(">", |args| native_compare(">", args, |a, b| a > b));

    // sequencing
    env.insert_native("begin", native_begin);

    // pair operations
    env.insert_native("cons", |args| {
        native_binary("cons", args, |head, tail| {
            let mut list = vec![head];
            match tail {
                Value::List(rest) => list.extend(rest),
                single => list.push(single),
            }
            Ok(Value::List(list))
        })
    });
    env.insert_native("car", native_car);
    env.insert_native("cdr", native_cdr);

    // predicates
    env.insert_native("atom", |args| {
        let value = native_unary("atom", args)?;
        Ok(value.is_atom().into())
    });

    env
}

fn expect_arity(name: &'static str, expected: &'static str, ok: bool, got: usize) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(ErrorKind::PrimitiveArityMismatch {
            name,
            expected,
            got,
        }
        .into())
    }
}

fn native_unary(name: &'static str, mut args: Vec<Value>) -> Result<Value> {
    expect_arity(name, "1", args.len() == 1, args.len())?;
    Ok(args.pop().expect("arity checked"))
}

/// apply a bivariate function to exactly two arguments
fn native_binary<F>(name: &'static str, mut args: Vec<Value>, op: F) -> Result<Value>
where
    F: Fn(Value, Value) -> Result<Value>,
{
    expect_arity(name, "2", args.len() == 2, args.len())?;
    let b = args.pop().expect("arity checked");
    let a = args.pop().expect("arity checked");
    op(a, b)
}

/// apply a bivariate numeric comparison to exactly two arguments
fn native_compare<F>(name: &'static str, args: Vec<Value>, pred: F) -> Result<Value>
where
    F: Fn(f64, f64) -> bool,
{
    native_binary(name, args, |a, b| {
        match (a.try_as_f64(), b.try_as_f64()) {
            (Some(x), Some(y)) => Ok(pred(x, y).into()),
            _ => {
                let culprit = if a.is_number() { &b } else { &a };
                Err(ErrorKind::PrimitiveTypeMismatch {
                    name,
                    message: format!("not a number: {}", culprit),
                }
                .into())
            }
        }
    })
}

fn native_begin(mut args: Vec<Value>) -> Result<Value> {
    expect_arity("begin", "at least 1", !args.is_empty(), args.len())?;
    Ok(args.pop().expect("arity checked"))
}

fn native_car(args: Vec<Value>) -> Result<Value> {
    match native_unary("car", args)? {
        Value::List(items) => items.into_iter().next().ok_or_else(|| {
            ErrorKind::PrimitiveTypeMismatch {
                name: "car",
                message: "the sequence is empty".to_string(),
            }
            .into()
        }),
        other => Err(ErrorKind::PrimitiveTypeMismatch {
            name: "car",
            message: format!("not a sequence: {}", other),
        }
        .into()),
    }
}

fn native_cdr(args: Vec<Value>) -> Result<Value> {
    match native_unary("cdr", args)? {
        Value::List(items) => Ok(Value::List(items.into_iter().skip(1).collect())),
        other => Err(ErrorKind::PrimitiveTypeMismatch {
            name: "cdr",
            message: format!("not a sequence: {}", other),
        }
        .into()),
    }
}
