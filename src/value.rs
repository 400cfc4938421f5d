use crate::errors::*;

pub type NativeFn = fn(Vec<Value>) -> Result<Value>;

/// The result of evaluating an expression.
///
/// `Undefined` is the "no value" result of a `define`; the driver
/// checks for it and skips printing. `Native` carries the invocation
/// contract for procedures, so constructed procedures can be added as
/// another variant later without touching the callers.
#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Float(f64),
    True,
    False,
    List(Vec<Value>),
    Native(NativeFn),
    Undefined,
}

impl Value {
    /// Falsiness rule: `#f`, integer zero and float zero are false,
    /// everything else is true.
    pub fn is_true(&self) -> bool {
        match self {
            Value::False => false,
            Value::Integer(0) => false,
            Value::Float(f) if *f == 0.0 => false,
            _ => true,
        }
    }

    pub fn is_number(&self) -> bool {
        match self {
            Value::Integer(_) | Value::Float(_) => true,
            _ => false,
        }
    }

    /// An atom is anything that is not a constructed sequence or a
    /// procedure. Booleans count as atoms, like the numbers they
    /// compare against.
    pub fn is_atom(&self) -> bool {
        match self {
            Value::Integer(_) | Value::Float(_) | Value::True | Value::False => true,
            Value::List(_) | Value::Native(_) | Value::Undefined => false,
        }
    }

    pub fn try_as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b {
            Value::True
        } else {
            Value::False
        }
    }
}

/// Numbers compare by numeric value, so an exact 10 equals 10.0.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;
        match (self, other) {
            (Integer(a), Integer(b)) => a == b,
            (Float(a), Float(b)) => a == b,
            (Integer(a), Float(b)) | (Float(b), Integer(a)) => *a as f64 == *b,
            (True, True) => true,
            (False, False) => true,
            (List(a), List(b)) => a == b,
            (Native(a), Native(b)) => std::ptr::eq(*a as *const (), *b as *const ()),
            (Undefined, Undefined) => true,
            _ => false,
        }
    }
}

impl std::ops::Add for Value {
    type Output = Result<Value>;
    fn add(self, other: Self) -> Self::Output {
        use Value::*;
        match (self, other) {
            (Integer(a), Integer(b)) => {
                a.checked_add(b).map(Integer).ok_or_else(|| overflow("+"))
            }
            (Integer(a), Float(b)) => Ok(Float(a as f64 + b)),
            (Float(a), Integer(b)) => Ok(Float(a + b as f64)),
            (Float(a), Float(b)) => Ok(Float(a + b)),
            (a, b) => Err(type_error("+", &a, &b)),
        }
    }
}

impl std::ops::Sub for Value {
    type Output = Result<Value>;
    fn sub(self, other: Self) -> Self::Output {
        use Value::*;
        match (self, other) {
            (Integer(a), Integer(b)) => {
                a.checked_sub(b).map(Integer).ok_or_else(|| overflow("-"))
            }
            (Integer(a), Float(b)) => Ok(Float(a as f64 - b)),
            (Float(a), Integer(b)) => Ok(Float(a - b as f64)),
            (Float(a), Float(b)) => Ok(Float(a - b)),
            (a, b) => Err(type_error("-", &a, &b)),
        }
    }
}

impl std::ops::Mul for Value {
    type Output = Result<Value>;
    fn mul(self, other: Self) -> Self::Output {
        use Value::*;
        match (self, other) {
            (Integer(a), Integer(b)) => {
                a.checked_mul(b).map(Integer).ok_or_else(|| overflow("*"))
            }
            (Integer(a), Float(b)) => Ok(Float(a as f64 * b)),
            (Float(a), Integer(b)) => Ok(Float(a * b as f64)),
            (Float(a), Float(b)) => Ok(Float(a * b)),
            (a, b) => Err(type_error("*", &a, &b)),
        }
    }
}

impl std::ops::Div for Value {
    type Output = Result<Value>;

    /// A zero denominator is its own failure kind, because the outer
    /// caller reports it specially. Integer division stays exact when
    /// it divides evenly and falls back to a float otherwise.
    fn div(self, other: Self) -> Self::Output {
        use Value::*;
        match (self, other) {
            (_, Integer(0)) => Err(ErrorKind::DivisionByZero.into()),
            (_, Float(f)) if f == 0.0 => Err(ErrorKind::DivisionByZero.into()),
            // checked_rem also catches i64::MIN / -1, whose quotient
            // does not fit an i64
            (Integer(a), Integer(b)) => match a.checked_rem(b) {
                Some(0) => Ok(Integer(a / b)),
                Some(_) => Ok(Float(a as f64 / b as f64)),
                None => Err(overflow("/")),
            },
            (Integer(a), Float(b)) => Ok(Float(a as f64 / b)),
            (Float(a), Integer(b)) => Ok(Float(a / b as f64)),
            (Float(a), Float(b)) => Ok(Float(a / b)),
            (a, b) => Err(type_error("/", &a, &b)),
        }
    }
}

fn type_error(name: &'static str, a: &Value, b: &Value) -> Error {
    ErrorKind::PrimitiveTypeMismatch {
        name,
        message: format!("cannot combine {} and {}", a, b),
    }
    .into()
}

fn overflow(name: &'static str) -> Error {
    ErrorKind::PrimitiveTypeMismatch {
        name,
        message: "integer overflow".to_string(),
    }
    .into()
}

/// Floats always show a fractional part, so `10.0` stays
/// distinguishable from the exact integer `10`.
pub(crate) fn fmt_float(f: &mut std::fmt::Formatter, x: f64) -> std::fmt::Result {
    if x.is_finite() && x.fract() == 0.0 {
        write!(f, "{:.1}", x)
    } else {
        write!(f, "{}", x)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => fmt_float(f, *x),
            Value::True => write!(f, "#t"),
            Value::False => write!(f, "#f"),
            Value::List(items) => {
                let tmp: Vec<_> = items.iter().map(|item| format!("{}", item)).collect();
                write!(f, "({})", tmp.join(" "))
            }
            Value::Native(_) => write!(f, "<native>"),
            Value::Undefined => write!(f, "<undefined>"),
        }
    }
}
