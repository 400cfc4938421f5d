use crate::symbol::Symbol;
use crate::value::fmt_float;

/// A parsed form, before evaluation.
///
/// The numeric type of a literal is decided once, at parse time, and
/// never reconsidered.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Integer(i64),
    Float(f64),
    Symbol(Symbol),
    Combination(Vec<Expression>),
}

impl Expression {
    /// Classify a raw token: integer grammar strictly before float
    /// grammar, anything else is a symbol.
    pub fn from_literal<T: AsRef<str> + ToString>(s: T) -> Self {
        if let Ok(i) = s.as_ref().parse() {
            return Expression::Integer(i);
        }

        if let Ok(f) = s.as_ref().parse() {
            return Expression::Float(f);
        }

        Expression::Symbol(Symbol::new(s))
    }

    pub fn is_named_symbol<T: AsRef<str>>(&self, name: T) -> bool {
        match self {
            Expression::Symbol(s) => s.name() == name.as_ref(),
            _ => false,
        }
    }

    pub fn try_as_symbol(&self) -> Option<&Symbol> {
        match self {
            Expression::Symbol(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Expression::Integer(i) => write!(f, "{}", i),
            Expression::Float(x) => fmt_float(f, *x),
            Expression::Symbol(s) => write!(f, "{}", s),
            Expression::Combination(items) => {
                let tmp: Vec<_> = items.iter().map(|item| format!("{}", item)).collect();
                write!(f, "({})", tmp.join(" "))
            }
        }
    }
}
