#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    ListOpen,
    ListClose,
    Atom(String),
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        match token {
            Token::ListOpen => "(".to_string(),
            Token::ListClose => ")".to_string(),
            Token::Atom(s) => s,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::ListOpen => write!(f, "("),
            Token::ListClose => write!(f, ")"),
            Token::Atom(s) => write!(f, "{}", s),
        }
    }
}

/// Split program text into parentheses and atom candidates.
///
/// Parentheses are padded with spaces so they always form their own
/// token, no matter what characters they touch. Everything between
/// runs of whitespace becomes a single atom token. There are no
/// string literals, comments, or escapes.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.replace('(', " ( ")
        .replace(')', " ) ")
        .split_whitespace()
        .map(|fragment| match fragment {
            "(" => Token::ListOpen,
            ")" => Token::ListClose,
            atom => Token::Atom(atom.to_string()),
        })
        .collect()
}

/// True when every opened list is closed again.
///
/// The REPL uses this to decide whether to keep reading continuation
/// lines. A surplus of closing parens counts as balanced; the reader
/// reports those as errors.
pub fn is_balanced(tokens: &[Token]) -> bool {
    let mut level: isize = 0;
    for token in tokens {
        match token {
            Token::ListOpen => level += 1,
            Token::ListClose => level -= 1,
            Token::Atom(_) => {}
        }
    }
    level <= 0
}
