use logos::Logos;

use crate::error::ParseError;

/// Distinguishes recoverable from fatal scanner failures.
///
/// Characters with no token rule are skipped silently, while a malformed
/// numeric literal aborts the whole run.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character no rule matches. The tokenizer drops it and continues.
    #[default]
    UnknownCharacter,
    /// A numeric literal with more than one decimal point, or one too large
    /// for a 64-bit scan.
    MalformedNumber,
}

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language. Statement
/// terminators come from explicit `;` characters and from the newline rule
/// applied by [`tokenize`]; block delimiters have both a keyword spelling
/// (`do`/`end`) and a brace spelling (`{`/`}`).
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// `let`
    #[token("let")]
    Let,
    /// `const`
    #[token("const")]
    Const,
    /// `return`
    #[token("return")]
    Return,
    /// `if` (reserved; the statement grammar rejects it)
    #[token("if")]
    If,
    /// `else` (reserved)
    #[token("else")]
    Else,
    /// `while` (reserved)
    #[token("while")]
    While,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// Block opener, spelled `do` or `{`.
    #[token("do")]
    #[token("{")]
    LBrace,
    /// Block closer, spelled `end` or `}`.
    #[token("end")]
    #[token("}")]
    RBrace,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `:=`
    #[token(":=")]
    Assign,
    /// `->`
    #[token("->")]
    Arrow,
    /// `=>`
    #[token("=>")]
    FatArrow,
    /// `:`
    #[token(":")]
    Colon,
    /// Statement terminator, spelled `;` or synthesized from a newline.
    #[token(";")]
    Terminator,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Eq,
    /// `!=`
    #[token("!=")]
    Neq,
    /// `<=`
    #[token("<=")]
    Lte,
    /// `>=`
    #[token(">=")]
    Gte,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// Identifier tokens; variable, type, or parameter names such as `x`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Float literal tokens such as `3.14` or `1.`.
    ///
    /// The rule deliberately also matches runs with several decimal points so
    /// that `1..2` is reported as one malformed literal instead of decaying
    /// into stray tokens.
    #[regex(r"[0-9]+\.[0-9.]*", parse_float)]
    Float(f32),
    /// Integer literal tokens such as `42`, scanned as 64-bit decimals.
    #[regex(r"[0-9]+", parse_int)]
    Int(i64),
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip)]
    Comment,
    /// A raw newline. [`tokenize`] replaces it with a [`Token::Terminator`]
    /// or drops it; it never survives into the final stream.
    #[token("\n")]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lexeme = match self {
            Self::Let => "let",
            Self::Const => "const",
            Self::Return => "return",
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::True => "true",
            Self::False => "false",
            Self::LBrace => "do",
            Self::RBrace => "end",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Comma => ",",
            Self::Assign => ":=",
            Self::Arrow => "->",
            Self::FatArrow => "=>",
            Self::Colon => ":",
            Self::Terminator => ";",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Eq => "=",
            Self::Neq => "!=",
            Self::Lte => "<=",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Identifier(name) => return write!(f, "{name}"),
            Self::Float(value) => return write!(f, "{value}"),
            Self::Int(value) => return write!(f, "{value}"),
            Self::Comment => "//",
            Self::NewLine | Self::Ignored => " ",
        };
        write!(f, "{lexeme}")
    }
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f32)`: The parsed value.
/// - `Err(LexErrorKind::MalformedNumber)`: If the slice holds more than one
///   decimal point or does not parse as a float.
fn parse_float(lex: &logos::Lexer<Token>) -> Result<f32, LexErrorKind> {
    let slice = lex.slice();
    if slice.bytes().filter(|&b| b == b'.').count() > 1 {
        return Err(LexErrorKind::MalformedNumber);
    }
    slice.parse().map_err(|_| LexErrorKind::MalformedNumber)
}
/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(i64)`: The parsed 64-bit value.
/// - `Err(LexErrorKind::MalformedNumber)`: If the literal exceeds 64 bits.
fn parse_int(lex: &logos::Lexer<Token>) -> Result<i64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::MalformedNumber)
}

/// Returns `true` when a token at the end of a line suppresses the synthetic
/// statement terminator.
///
/// The continuation set holds every infix operator, the comparison operators,
/// `:=`, `:`, `,`, `->`, `=>`, and the block opener `do`. A line ending in
/// one of these is syntactically unfinished, so the statement continues on
/// the next line.
#[must_use]
pub const fn continues_line(token: &Token) -> bool {
    matches!(token,
             Token::Assign
             | Token::Arrow
             | Token::FatArrow
             | Token::Colon
             | Token::Comma
             | Token::Plus
             | Token::Minus
             | Token::Star
             | Token::Slash
             | Token::Eq
             | Token::Neq
             | Token::Lt
             | Token::Lte
             | Token::Gt
             | Token::Gte
             | Token::LBrace)
}

/// Tokenizes a source string into `(token, byte offset)` pairs.
///
/// This is the single entry point of the lexer. On top of the raw scanner it
/// applies the statement-termination rule:
///
/// - a newline inside any depth of parentheses never terminates a statement,
/// - a newline after a token in the continuation set is discarded,
/// - any other newline becomes a synthetic [`Token::Terminator`],
/// - a final [`Token::Terminator`] is appended when the stream does not
///   already end in one.
///
/// Parenthesis and brace depth are tracked across the whole input; either
/// going negative is fatal.
///
/// # Parameters
/// - `source`: The raw program text.
///
/// # Returns
/// The token stream, each token paired with its 0-based byte offset.
///
/// # Errors
/// Returns a `ParseError` if:
/// - a numeric literal is malformed (e.g. `1..2`),
/// - a `)` or `end` appears without a matching opener.
///
/// # Example
/// ```
/// use fog::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("let x : int := 1").unwrap();
/// assert_eq!(tokens.first(), Some(&(Token::Let, 0)));
/// assert_eq!(tokens.last(), Some(&(Token::Terminator, 16)));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens: Vec<(Token, usize)> = Vec::new();
    let mut paren_depth = 0_i32;
    let mut brace_depth = 0_i32;

    for (result, span) in Token::lexer(source).spanned() {
        match result {
            Ok(Token::NewLine) => {
                if paren_depth > 0 {
                    continue;
                }
                match tokens.last() {
                    None => {},
                    Some((last, _)) if continues_line(last) => {},
                    Some(_) => tokens.push((Token::Terminator, span.start)),
                }
            },
            Ok(token) => {
                match token {
                    Token::LParen => paren_depth += 1,
                    Token::RParen => {
                        paren_depth -= 1;
                        if paren_depth < 0 {
                            return Err(ParseError::UnbalancedDelimiters { delimiter: ')',
                                                                          offset:    span.start, });
                        }
                    },
                    Token::LBrace => brace_depth += 1,
                    Token::RBrace => {
                        brace_depth -= 1;
                        if brace_depth < 0 {
                            return Err(ParseError::UnbalancedDelimiters { delimiter: '}',
                                                                          offset:    span.start, });
                        }
                    },
                    _ => {},
                }
                tokens.push((token, span.start));
            },
            Err(LexErrorKind::UnknownCharacter) => {},
            Err(LexErrorKind::MalformedNumber) => {
                return Err(ParseError::MalformedNumber { lexeme: source[span.clone()].to_string(),
                                                         offset: span.start, });
            },
        }
    }

    if !matches!(tokens.last(), Some((Token::Terminator, _))) {
        tokens.push((Token::Terminator, source.len()));
    }

    Ok(tokens)
}
