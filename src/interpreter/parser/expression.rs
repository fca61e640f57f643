use crate::{
    ast::Expression,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Dispatches the current token to its prefix handler.
    ///
    /// # Errors
    /// Returns [`ParseError::NoPrefixParseFn`] when no expression can start
    /// with the current token. `ILLEGAL` tokens from the lexer are rejected
    /// here as well.
    pub(super) fn parse_prefix(&mut self) -> ParseResult<Expression> {
        match self.cur_token.kind {
            TokenKind::Ident => Ok(self.parse_identifier()),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::Str => Ok(self.parse_string_literal()),
            TokenKind::True | TokenKind::False => Ok(self.parse_boolean_literal()),
            TokenKind::Bang | TokenKind::Minus | TokenKind::Tilde => {
                self.parse_prefix_expression()
            },
            TokenKind::Inc | TokenKind::Dec => self.parse_prefix_inc_dec(),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::LBracket => self.parse_array_literal(),
            kind => Err(ParseError::NoPrefixParseFn { kind }),
        }
    }

    fn parse_identifier(&self) -> Expression {
        Expression::Identifier { token: self.cur_token.clone(),
                                 name:  self.cur_token.literal.clone(), }
    }

    fn parse_integer_literal(&self) -> ParseResult<Expression> {
        let token = self.cur_token.clone();
        let value = token.literal
                         .parse()
                         .map_err(|_| ParseError::BadIntegerLiteral { literal:
                                                                          token.literal.clone() })?;

        Ok(Expression::IntegerLiteral { token, value })
    }

    fn parse_string_literal(&self) -> Expression {
        Expression::StringLiteral { token: self.cur_token.clone(),
                                    value: self.cur_token.literal.clone(), }
    }

    fn parse_boolean_literal(&self) -> Expression {
        Expression::BooleanLiteral { token: self.cur_token.clone(),
                                     value: self.cur_token_is(TokenKind::True), }
    }

    /// Parses `-x`, `!x` or `~x`. The operand binds at prefix strength, so
    /// `-a * b` reads as `(-a) * b`.
    fn parse_prefix_expression(&mut self) -> ParseResult<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();

        self.next_token();
        let right = Box::new(self.parse_expression(Precedence::Prefix)?);

        Ok(Expression::Prefix { token, operator, right })
    }

    /// Parses `++x` and `--x` as sugar for `x = x + 1` and `x = x - 1`.
    ///
    /// The node is a plain [`Expression::Assignment`] wrapping the rewritten
    /// arithmetic, so the evaluator needs no special case.
    fn parse_prefix_inc_dec(&mut self) -> ParseResult<Expression> {
        let (kind, operator) = if self.cur_token_is(TokenKind::Inc) {
            (TokenKind::Plus, "+")
        } else {
            (TokenKind::Minus, "-")
        };

        self.next_token();
        let operand = self.parse_expression(Precedence::Prefix)?;

        let one = Expression::IntegerLiteral { token: Token::new(TokenKind::Int, "1"),
                                               value: 1, };
        let stepped = Expression::Infix { token:    Token::new(kind, operator),
                                          operator: operator.to_string(),
                                          left:     Box::new(operand.clone()),
                                          right:    Box::new(one), };

        Ok(Expression::Assignment { token: Token::new(TokenKind::Assign, "="),
                                    left:  Box::new(operand),
                                    right: Box::new(stepped), })
    }

    /// Parses `( expression )` and returns the inner expression unchanged.
    fn parse_grouped_expression(&mut self) -> ParseResult<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        Ok(expression)
    }

    /// Parses `if (cond) { ... }` with an optional `else { ... }`.
    fn parse_if_expression(&mut self) -> ParseResult<Expression> {
        let token = self.cur_token.clone();

        self.expect_peek(TokenKind::LParen)?;
        let condition = Box::new(self.parse_grouped_expression()?);

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = Box::new(self.parse_block_statement()?);

        let alternative = if self.peek_token_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;

            Some(Box::new(self.parse_block_statement()?))
        } else {
            None
        };

        Ok(Expression::If { token,
                            condition,
                            consequence,
                            alternative })
    }

    /// Parses `fn(a, b) { ... }`.
    fn parse_function_literal(&mut self) -> ParseResult<Expression> {
        let token = self.cur_token.clone();

        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = Box::new(self.parse_block_statement()?);

        Ok(Expression::FunctionLiteral { token, parameters, body })
    }

    /// Parses the comma-separated identifier list of a function literal.
    fn parse_function_parameters(&mut self) -> ParseResult<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            return Ok(parameters);
        }

        self.expect_peek(TokenKind::Ident)?;
        parameters.push(self.cur_token.literal.clone());

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(self.cur_token.literal.clone());
        }

        self.expect_peek(TokenKind::RParen)?;

        Ok(parameters)
    }

    /// Parses `[e1, e2, ...]`.
    fn parse_array_literal(&mut self) -> ParseResult<Expression> {
        let token = self.cur_token.clone();
        let elements = self.parse_expression_list(TokenKind::RBracket)?;

        Ok(Expression::ArrayLiteral { token, elements })
    }

    /// Parses a left-associative binary operator. The right operand binds at
    /// the operator's own strength, so `a - b - c` reads as `(a - b) - c`.
    pub(super) fn parse_infix_expression(&mut self, left: Expression) -> ParseResult<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();
        let precedence = Self::precedence_of(token.kind);

        self.next_token();
        let right = Box::new(self.parse_expression(precedence)?);

        Ok(Expression::Infix { token,
                               operator,
                               left: Box::new(left),
                               right })
    }

    /// Parses `&&` and `||` into [`Expression::ShortCircuit`] nodes so the
    /// evaluator can defer the right operand.
    pub(super) fn parse_short_circuit(&mut self, left: Expression) -> ParseResult<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();
        let precedence = Self::precedence_of(token.kind);

        self.next_token();
        let right = Box::new(self.parse_expression(precedence)?);

        Ok(Expression::ShortCircuit { token,
                                      operator,
                                      left: Box::new(left),
                                      right })
    }

    /// Parses `=` right-associatively: the right side restarts below
    /// `ASSIGN`, so `a = b = c` reads as `a = (b = c)`.
    pub(super) fn parse_assignment(&mut self, left: Expression) -> ParseResult<Expression> {
        let token = self.cur_token.clone();

        self.next_token();
        let right = Box::new(self.parse_expression(Precedence::Lowest)?);

        Ok(Expression::Assignment { token,
                                    left: Box::new(left),
                                    right })
    }

    /// Parses `x op= e` as sugar for `x = x op e`, the same rewrite the
    /// prefix `++`/`--` forms use.
    pub(super) fn parse_compound_assignment(&mut self, left: Expression)
                                            -> ParseResult<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal
                            .strip_suffix('=')
                            .unwrap_or(&token.literal)
                            .to_string();
        let base_kind = Self::base_operator_kind(token.kind);

        self.next_token();
        let right = self.parse_expression(Precedence::Lowest)?;

        let combined = Expression::Infix { token:    Token::new(base_kind, operator.clone()),
                                           operator,
                                           left:     Box::new(left.clone()),
                                           right:    Box::new(right), };

        Ok(Expression::Assignment { token: Token::new(TokenKind::Assign, "="),
                                    left:  Box::new(left),
                                    right: Box::new(combined), })
    }

    /// Maps a compound-assignment token to the kind of its base operator.
    const fn base_operator_kind(kind: TokenKind) -> TokenKind {
        match kind {
            TokenKind::MinusAssign => TokenKind::Minus,
            TokenKind::AsteriskAssign => TokenKind::Asterisk,
            TokenKind::SlashAssign => TokenKind::Slash,
            TokenKind::PercentAssign => TokenKind::Percent,
            TokenKind::AmpersandAssign => TokenKind::Ampersand,
            TokenKind::PipeAssign => TokenKind::Pipe,
            TokenKind::CaretAssign => TokenKind::Caret,
            TokenKind::ShlAssign => TokenKind::Shl,
            TokenKind::ShrAssign => TokenKind::Shr,
            _ => TokenKind::Plus,
        }
    }

    /// Folds an adjacent `,`-separated expression into a flat
    /// [`Expression::ExprList`]. Elements bind at `ASSIGN` strength so they
    /// do not absorb the separating commas themselves.
    pub(super) fn parse_comma_expression(&mut self, left: Expression) -> ParseResult<Expression> {
        let token = self.cur_token.clone();

        self.next_token();
        let element = self.parse_expression(Precedence::Assign)?;

        Ok(match left {
            Expression::ExprList { token, mut elements } => {
                elements.push(element);
                Expression::ExprList { token, elements }
            },
            first => Expression::ExprList { token,
                                            elements: vec![first, element], },
        })
    }

    /// Parses `callee(arg, ...)`.
    pub(super) fn parse_call(&mut self, callee: Expression) -> ParseResult<Expression> {
        let token = self.cur_token.clone();
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Ok(Expression::Call { token,
                              callee: Box::new(callee),
                              arguments })
    }

    /// Parses `left[index]`.
    pub(super) fn parse_index(&mut self, left: Expression) -> ParseResult<Expression> {
        let token = self.cur_token.clone();

        self.next_token();
        let index = Box::new(self.parse_expression(Precedence::Lowest)?);

        self.expect_peek(TokenKind::RBracket)?;

        Ok(Expression::Index { token,
                               left: Box::new(left),
                               index })
    }

    /// Parses a comma-separated expression list up to `end`.
    ///
    /// Each element binds at `ASSIGN` strength, which keeps the separating
    /// commas from being swallowed as tuple constructors.
    fn parse_expression_list(&mut self, end: TokenKind) -> ParseResult<Vec<Expression>> {
        let mut list = Vec::new();

        if self.peek_token_is(end) {
            self.next_token();
            return Ok(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Assign)?);

        while !self.peek_token_is(end) {
            self.expect_peek(TokenKind::Comma)?;
            self.next_token();
            list.push(self.parse_expression(Precedence::Assign)?);
        }

        self.next_token();

        Ok(list)
    }
}
