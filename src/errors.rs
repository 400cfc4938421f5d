use crate::expression::Expression;
use crate::symbol::Symbol;
use rustyline::error::ReadlineError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum ErrorKind {
    DivisionByZero,
    EmptyCombination,
    FileNotFound(String),
    MalformedSpecialForm(String),
    NotCallable(String),
    PrimitiveArityMismatch {
        name: &'static str,
        expected: &'static str,
        got: usize,
    },
    PrimitiveTypeMismatch {
        name: &'static str,
        message: String,
    },
    RecursionDepth,
    Unbound(Symbol),
    UnexpectedCloseParen,
    UnexpectedEof,

    IoError(std::io::Error),
    ReadlineError(ReadlineError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorKind::*;
        match self {
            DivisionByZero => write!(f, "Division by zero"),
            EmptyCombination => write!(f, "Cannot evaluate an empty combination: ()"),
            FileNotFound(file) => write!(f, "File not found: {}", file),
            MalformedSpecialForm(msg) => write!(f, "Malformed special form: {}", msg),
            NotCallable(repr) => write!(f, "Not callable: {}", repr),
            PrimitiveArityMismatch {
                name,
                expected,
                got,
            } => write!(
                f,
                "{} expects {} argument(s), got {}",
                name, expected, got
            ),
            PrimitiveTypeMismatch { name, message } => write!(f, "{}: {}", name, message),
            RecursionDepth => write!(f, "Maximum nesting depth exceeded"),
            Unbound(symbol) => write!(f, "Unbound symbol: {}", symbol),
            UnexpectedCloseParen => write!(f, "Unexpected )"),
            UnexpectedEof => write!(f, "Unexpected end of input"),
            IoError(e) => write!(f, "IO Error: {}", e),
            ReadlineError(e) => write!(f, "Readline Error: {}", e),
        }
    }
}

// here we can add some context to the error
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    context: Vec<Expression>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Error {
            kind,
            context: vec![],
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn with_context(mut self, expr: Expression) -> Self {
        self.context.push(expr);
        self
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if !self.context.is_empty() {
            writeln!(f, "Context:")?;
        }
        for x in self.context.iter().rev() {
            let mut repr = x.to_string();
            if repr.len() > 75 {
                // cut on a char boundary, not a byte offset
                let mut cut = 70;
                while !repr.is_char_boundary(cut) {
                    cut -= 1;
                }
                repr.truncate(cut);
                repr.push_str(" ...");
            }
            writeln!(f, "    {}", repr)?;
        }
        write!(f, "{}", self.kind)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::new(kind)
    }
}

impl From<std::io::Error> for Error {
    fn from(ioe: std::io::Error) -> Self {
        Error::new(ErrorKind::IoError(ioe))
    }
}

impl From<ReadlineError> for Error {
    fn from(rle: ReadlineError) -> Self {
        Error::new(ErrorKind::ReadlineError(rle))
    }
}
