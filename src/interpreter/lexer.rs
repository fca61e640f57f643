use logos::Logos;

/// Identifies the lexical class of a token.
///
/// The lexer produces one `TokenKind` per recognized unit of text. Operator
/// kinds are disambiguated by longest match, so `<<=` never splits into `<<`
/// and `=`, and keyword kinds take precedence over the identifier rule for
/// the exact keyword spelling.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    /// An identifier such as `x` or `new_adder`. Digits are not permitted.
    #[regex(r"[A-Za-z_]+")]
    Ident,
    /// An integer literal such as `42`. The numeric conversion happens in the
    /// parser; the lexer only captures the text.
    #[regex(r"[0-9]+")]
    Int,
    /// A string literal. No escape sequences are interpreted; the literal is
    /// exactly the text between the quotes. An unterminated literal runs to
    /// the end of the input.
    #[regex(r#""[^"]*""#, priority = 3)]
    #[regex(r#""[^"]*"#, priority = 2)]
    Str,

    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `!`
    #[token("!")]
    Bang,
    /// `++`
    #[token("++")]
    Inc,
    /// `--`
    #[token("--")]
    Dec,
    /// `+`
    #[token("+")]
    Plus,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-`
    #[token("-")]
    Minus,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `*=`
    #[token("*=")]
    AsteriskAssign,
    /// `/`
    #[token("/")]
    Slash,
    /// `/=`
    #[token("/=")]
    SlashAssign,
    /// `%`
    #[token("%")]
    Percent,
    /// `%=`
    #[token("%=")]
    PercentAssign,
    /// `<`
    #[token("<")]
    Lt,
    /// `<=`
    #[token("<=")]
    Le,
    /// `>`
    #[token(">")]
    Gt,
    /// `>=`
    #[token(">=")]
    Ge,
    /// `&&`
    #[token("&&")]
    And,
    /// `||`
    #[token("||")]
    Or,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `&=`
    #[token("&=")]
    AmpersandAssign,
    /// `|`
    #[token("|")]
    Pipe,
    /// `|=`
    #[token("|=")]
    PipeAssign,
    /// `^`
    #[token("^")]
    Caret,
    /// `^=`
    #[token("^=")]
    CaretAssign,
    /// `~`
    #[token("~")]
    Tilde,
    /// `<<`
    #[token("<<")]
    Shl,
    /// `<<=`
    #[token("<<=")]
    ShlAssign,
    /// `>>`
    #[token(">>")]
    Shr,
    /// `>>=`
    #[token(">>=")]
    ShrAssign,

    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `for`
    #[token("for")]
    For,

    /// A character the lexer does not recognize. The parser rejects it.
    ///
    /// The catch-all sits below every other rule, so it only fires when
    /// nothing else matches the character.
    #[regex(r".", priority = 1)]
    Illegal,
    /// End of input. Synthesized by the lexer once the source is exhausted;
    /// a literal NUL byte in the source marks the end as well.
    #[token("\0")]
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Str => "STRING",
            Self::Assign => "=",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Bang => "!",
            Self::Inc => "++",
            Self::Dec => "--",
            Self::Plus => "+",
            Self::PlusAssign => "+=",
            Self::Minus => "-",
            Self::MinusAssign => "-=",
            Self::Asterisk => "*",
            Self::AsteriskAssign => "*=",
            Self::Slash => "/",
            Self::SlashAssign => "/=",
            Self::Percent => "%",
            Self::PercentAssign => "%=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::And => "&&",
            Self::Or => "||",
            Self::Ampersand => "&",
            Self::AmpersandAssign => "&=",
            Self::Pipe => "|",
            Self::PipeAssign => "|=",
            Self::Caret => "^",
            Self::CaretAssign => "^=",
            Self::Tilde => "~",
            Self::Shl => "<<",
            Self::ShlAssign => "<<=",
            Self::Shr => ">>",
            Self::ShrAssign => ">>=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::For => "FOR",
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
        };

        write!(f, "{name}")
    }
}

/// A lexical token: a kind plus the literal text it was read from.
///
/// For string tokens the literal is the text between the quotes; for all
/// other kinds it is the matched slice verbatim. The `Eof` token carries an
/// empty literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lexical class of the token.
    pub kind:    TokenKind,
    /// The source text backing the token.
    pub literal: String,
}

impl Token {
    /// Creates a token from a kind and its literal text.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self { kind,
               literal: literal.into() }
    }
}

/// A single-pass tokenizer over a source string.
///
/// Tokens are produced on demand through [`next_token`](Lexer::next_token).
/// The lexer never fails: unrecognized characters surface as
/// [`TokenKind::Illegal`] tokens, and once the input is exhausted every
/// further call yields [`TokenKind::Eof`].
///
/// # Example
/// ```
/// use brook::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("let x = 5;");
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Let);
/// assert_eq!(lexer.next_token().literal, "x");
/// assert_eq!(lexer.next_token().kind, TokenKind::Assign);
/// assert_eq!(lexer.next_token().kind, TokenKind::Int);
/// assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over the given source text.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { inner: TokenKind::lexer(input) }
    }

    /// Reads the next token from the input.
    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            None => Token::new(TokenKind::Eof, ""),
            Some(Err(())) => Token::new(TokenKind::Illegal, self.inner.slice()),
            Some(Ok(TokenKind::Str)) => {
                Token::new(TokenKind::Str, strip_quotes(self.inner.slice()))
            },
            Some(Ok(kind)) => Token::new(kind, self.inner.slice()),
        }
    }
}

/// Removes the delimiting quotes from a matched string literal.
///
/// The opening quote is always present. The closing quote is missing when
/// the literal was unterminated, in which case the value is everything up to
/// the end of the input.
fn strip_quotes(slice: &str) -> &str {
    let body = &slice[1..];
    body.strip_suffix('"').unwrap_or(body)
}
