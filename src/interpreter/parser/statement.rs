use crate::{
    ast::Statement,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a single statement, dispatching on the current token.
    ///
    /// `let`, `return` and `for` introduce their dedicated forms; everything
    /// else parses as an expression statement.
    pub(super) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::For => self.parse_for_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <target>;`.
    ///
    /// The target is an ordinary expression: a bare identifier declares a
    /// `null` binding, an identifier list declares several, and an
    /// assignment declares with an initializer. Which shapes are legal is
    /// checked at evaluation time, where the scope is known.
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        let token = self.cur_token.clone();

        self.next_token();
        let target = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Ok(Statement::Let { token, target })
    }

    /// Parses `return;` or `return <expr>;`.
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        let token = self.cur_token.clone();

        let value = if self.peek_token_is(TokenKind::Semicolon)
                       || self.peek_token_is(TokenKind::RBrace)
                       || self.peek_token_is(TokenKind::Eof)
        {
            None
        } else {
            self.next_token();
            Some(self.parse_expression(Precedence::Lowest)?)
        };

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Ok(Statement::Return { token, value })
    }

    /// Parses a bare expression used as a statement. The trailing semicolon
    /// is optional at the end of the input and before `}`.
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let token = self.cur_token.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Ok(Statement::Expression { token, expression })
    }

    /// Parses a brace-delimited statement sequence.
    ///
    /// The current token must already be `{`. The block ends at the matching
    /// `}` or at the end of the input.
    pub(super) fn parse_block_statement(&mut self) -> ParseResult<Statement> {
        let token = self.cur_token.clone();
        let mut statements = Vec::new();

        self.next_token();

        while !self.cur_token_is(TokenKind::RBrace) && !self.cur_token_is(TokenKind::Eof) {
            statements.push(self.parse_statement()?);
            self.next_token();
        }

        Ok(Statement::Block { token, statements })
    }

    /// Parses `for ([init]; [condition]; [update]) { body }`.
    ///
    /// All three header clauses are optional. The initializer is a full
    /// statement (commonly a `let`), the condition and update are
    /// expressions.
    fn parse_for_statement(&mut self) -> ParseResult<Statement> {
        let token = self.cur_token.clone();

        self.expect_peek(TokenKind::LParen)?;
        self.next_token();

        let init = if self.cur_token_is(TokenKind::Semicolon) {
            None
        } else {
            let statement = self.parse_statement()?;

            // Statement parsing absorbs an optional trailing semicolon; the
            // header makes it mandatory.
            if !self.cur_token_is(TokenKind::Semicolon) {
                self.expect_peek(TokenKind::Semicolon)?;
            }

            Some(Box::new(statement))
        };

        self.next_token();

        let condition = if self.cur_token_is(TokenKind::Semicolon) {
            None
        } else {
            let expression = self.parse_expression(Precedence::Lowest)?;
            self.expect_peek(TokenKind::Semicolon)?;

            Some(expression)
        };

        self.next_token();

        let update = if self.cur_token_is(TokenKind::RParen) {
            None
        } else {
            let expression = self.parse_expression(Precedence::Lowest)?;
            self.expect_peek(TokenKind::RParen)?;

            Some(expression)
        };

        self.expect_peek(TokenKind::LBrace)?;
        let body = Box::new(self.parse_block_statement()?);

        Ok(Statement::ForLoop { token,
                                init,
                                condition,
                                update,
                                body })
    }
}
