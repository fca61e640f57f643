use crate::{
    ast::{Expression, Program},
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

/// Result type used by all parsing functions.
pub type ParseResult<T> = Result<T, ParseError>;

/// Binding power of an operator token. Higher binds tighter.
///
/// The ladder matches the language's grammar from assignment (and the comma
/// used as a tuple separator) at the bottom up to call and index operators
/// at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Anything that is not an operator.
    Lowest,
    /// `=`, the compound assignments, and `,` as a tuple separator.
    Assign,
    /// `||`
    LogicalOr,
    /// `&&`
    LogicalAnd,
    /// `|`
    BitwiseOr,
    /// `^`
    BitwiseXor,
    /// `&`
    BitwiseAnd,
    /// `==` and `!=`
    Equals,
    /// `<`, `<=`, `>` and `>=`
    LessGreater,
    /// `<<` and `>>`
    Shift,
    /// `+` and `-`
    Sum,
    /// `*`, `/` and `%`
    Product,
    /// Unary `-`, `!`, `~`, `++` and `--`
    Prefix,
    /// The call operator `(`
    Call,
    /// The index operator `[`
    Index,
}

/// A top-down operator precedence parser over a token stream.
///
/// The parser keeps the current and the next token in view, dispatches each
/// token kind to a prefix handler (no left operand) or an infix handler
/// (takes the expression parsed so far) and collects errors instead of
/// stopping, resynchronizing at statement boundaries.
pub struct Parser<'a> {
    lexer:                  Lexer<'a>,
    pub(super) cur_token:   Token,
    pub(super) peek_token:  Token,
    pub(super) errors:      Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Creates a parser and primes the current/next token pair.
    #[must_use]
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut parser = Self { lexer,
                                cur_token: Token::new(TokenKind::Eof, ""),
                                peek_token: Token::new(TokenKind::Eof, ""),
                                errors: Vec::new(), };

        parser.next_token();
        parser.next_token();

        parser
    }

    /// Parses the whole token stream into a [`Program`].
    ///
    /// Statements are parsed until `EOF`. When a statement fails, its error
    /// is recorded and parsing resumes at the next statement boundary so a
    /// single run can report several errors.
    ///
    /// # Errors
    /// Returns every collected [`ParseError`] when at least one statement
    /// failed to parse.
    pub fn parse_program(mut self) -> Result<Program, Vec<ParseError>> {
        let mut program = Program::default();

        while !self.cur_token_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(statement) => program.statements.push(statement),
                Err(error) => {
                    self.errors.push(error);
                    self.synchronize();
                },
            }

            self.next_token();
        }

        if self.errors.is_empty() {
            Ok(program)
        } else {
            Err(self.errors)
        }
    }

    /// Parses one expression with the given minimum binding power.
    ///
    /// The loop at the heart of the Pratt algorithm: run the prefix handler
    /// for the current token, then, while the next token binds tighter than
    /// `precedence` (and is not a statement-ending `;`), fold it into the
    /// expression through its infix handler.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        let mut left = self.parse_prefix()?;

        while !self.peek_token_is(TokenKind::Semicolon)
              && precedence < Self::precedence_of(self.peek_token.kind)
        {
            left = match self.peek_token.kind {
                TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::Percent
                | TokenKind::Ampersand
                | TokenKind::Pipe
                | TokenKind::Caret
                | TokenKind::Shl
                | TokenKind::Shr
                | TokenKind::Eq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::Le
                | TokenKind::Gt
                | TokenKind::Ge => {
                    self.next_token();
                    self.parse_infix_expression(left)?
                },
                TokenKind::And | TokenKind::Or => {
                    self.next_token();
                    self.parse_short_circuit(left)?
                },
                TokenKind::Assign => {
                    self.next_token();
                    self.parse_assignment(left)?
                },
                TokenKind::PlusAssign
                | TokenKind::MinusAssign
                | TokenKind::AsteriskAssign
                | TokenKind::SlashAssign
                | TokenKind::PercentAssign
                | TokenKind::AmpersandAssign
                | TokenKind::PipeAssign
                | TokenKind::CaretAssign
                | TokenKind::ShlAssign
                | TokenKind::ShrAssign => {
                    self.next_token();
                    self.parse_compound_assignment(left)?
                },
                TokenKind::Comma => {
                    self.next_token();
                    self.parse_comma_expression(left)?
                },
                TokenKind::LParen => {
                    self.next_token();
                    self.parse_call(left)?
                },
                TokenKind::LBracket => {
                    self.next_token();
                    self.parse_index(left)?
                },
                _ => break,
            };
        }

        Ok(left)
    }

    /// Maps a token kind to its binding power. Non-operators sit at
    /// [`Precedence::Lowest`], which ends the expression loop.
    #[must_use]
    pub const fn precedence_of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::Assign
            | TokenKind::PlusAssign
            | TokenKind::MinusAssign
            | TokenKind::AsteriskAssign
            | TokenKind::SlashAssign
            | TokenKind::PercentAssign
            | TokenKind::AmpersandAssign
            | TokenKind::PipeAssign
            | TokenKind::CaretAssign
            | TokenKind::ShlAssign
            | TokenKind::ShrAssign
            | TokenKind::Comma => Precedence::Assign,
            TokenKind::Or => Precedence::LogicalOr,
            TokenKind::And => Precedence::LogicalAnd,
            TokenKind::Pipe => Precedence::BitwiseOr,
            TokenKind::Caret => Precedence::BitwiseXor,
            TokenKind::Ampersand => Precedence::BitwiseAnd,
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Le | TokenKind::Gt | TokenKind::Ge => {
                Precedence::LessGreater
            },
            TokenKind::Shl | TokenKind::Shr => Precedence::Shift,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash | TokenKind::Percent => Precedence::Product,
            TokenKind::LParen => Precedence::Call,
            TokenKind::LBracket => Precedence::Index,
            _ => Precedence::Lowest,
        }
    }

    /// Advances the token window by one.
    pub(super) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
    }

    /// Reports whether the current token has the given kind.
    pub(super) fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    /// Reports whether the next token has the given kind.
    pub(super) fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advances past the next token when it has the required kind.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] naming the required and the
    /// found kind otherwise.
    pub(super) fn expect_peek(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.peek_token_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken { expected: kind,
                                              got:      self.peek_token.kind, })
        }
    }

    /// Skips ahead to the next statement boundary after a parse error.
    fn synchronize(&mut self) {
        while !self.cur_token_is(TokenKind::Semicolon) && !self.cur_token_is(TokenKind::Eof) {
            self.next_token();
        }
    }
}
