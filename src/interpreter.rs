use crate::environment::Environment;
use crate::errors::*;
use crate::expression::Expression;
use crate::parser::MAX_NESTING_DEPTH;
use crate::value::Value;

/// Evaluate an expression against a binding environment.
///
/// Dispatch order: symbol lookup, self-evaluating numbers, the `if`
/// and `define` special forms, then ordinary procedure application.
pub fn eval(expr: &Expression, env: &mut Environment) -> Result<Value> {
    eval_at_depth(expr, env, 0)
}

fn eval_at_depth(expr: &Expression, env: &mut Environment, depth: usize) -> Result<Value> {
    if depth > MAX_NESTING_DEPTH {
        return Err(ErrorKind::RecursionDepth.into());
    }
    match expr {
        Expression::Symbol(s) => env
            .lookup(s)
            .ok_or_else(|| ErrorKind::Unbound(s.clone()).into()),
        Expression::Integer(i) => Ok(Value::Integer(*i)),
        Expression::Float(f) => Ok(Value::Float(*f)),
        Expression::Combination(items) => {
            let result = match items.first() {
                None => Err(ErrorKind::EmptyCombination.into()),
                Some(head) if head.is_named_symbol("if") => if_form(items, env, depth),
                Some(head) if head.is_named_symbol("define") => define(items, env, depth),
                Some(_) => apply(items, env, depth),
            };
            result.map_err(|e| e.with_context(expr.clone()))
        }
    }
}

/// `(if condition consequent alternative)` — only the selected branch
/// is evaluated.
fn if_form(items: &[Expression], env: &mut Environment, depth: usize) -> Result<Value> {
    match items {
        [_, condition, consequent, alternative] => {
            let branch = if eval_at_depth(condition, env, depth + 1)?.is_true() {
                consequent
            } else {
                alternative
            };
            eval_at_depth(branch, env, depth + 1)
        }
        _ => Err(ErrorKind::MalformedSpecialForm(format!(
            "if takes (condition consequent alternative), got {} operand(s)",
            items.len() - 1
        ))
        .into()),
    }
}

/// `(define name expression)` — binds and yields no printable value.
fn define(items: &[Expression], env: &mut Environment, depth: usize) -> Result<Value> {
    match items {
        [_, signature, body] => {
            let name = signature.try_as_symbol().ok_or_else(|| {
                ErrorKind::MalformedSpecialForm(format!("cannot define {}", signature))
            })?;
            let value = eval_at_depth(body, env, depth + 1)?;
            env.insert(name.clone(), value);
            Ok(Value::Undefined)
        }
        _ => Err(ErrorKind::MalformedSpecialForm(format!(
            "define takes (name expression), got {} operand(s)",
            items.len() - 1
        ))
        .into()),
    }
}

fn apply(items: &[Expression], env: &mut Environment, depth: usize) -> Result<Value> {
    let mut items = items.iter();
    let proc = eval_at_depth(items.next().expect("non-empty combination"), env, depth + 1)?;
    let args: Vec<Value> = items
        .map(|arg| eval_at_depth(arg, env, depth + 1))
        .collect::<Result<_>>()?;
    match proc {
        Value::Native(func) => func(args),
        other => Err(ErrorKind::NotCallable(other.to_string()).into()),
    }
}
