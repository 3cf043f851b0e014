// Copyright (C) 2019-2025 The Gobstones Team.
// This file is part of the Gobstones language front end.

// The Gobstones front end is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Gobstones front end is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Gobstones front end. If not, see <https://www.gnu.org/licenses/>.

use super::*;

impl ParserContext {
    /// Returns a [`Statement`] AST node if the next tokens represent a
    /// statement.
    pub(crate) fn parse_statement(&mut self) -> Result<Statement> {
        match &self.token.token {
            Token::Return => Ok(Statement::Return(self.parse_return_statement()?)),
            Token::If => Ok(Statement::If(self.parse_if_statement()?)),
            Token::Repeat => Ok(Statement::Repeat(self.parse_repeat_statement()?)),
            Token::Foreach => Ok(Statement::Foreach(self.parse_foreach_statement()?)),
            Token::While => Ok(Statement::While(self.parse_while_statement()?)),
            Token::Switch => Ok(Statement::Switch(self.parse_switch_statement()?)),
            Token::Let => self.parse_let_statement(),
            Token::LeftCurly => Ok(Statement::Block(self.parse_block()?)),
            Token::LowerId(_) => Ok(Statement::AssignVariable(self.parse_assign_statement()?)),
            Token::UpperId(_) => Ok(Statement::ProcedureCall(self.parse_call_statement()?)),
            _ => self.unexpected("statement"),
        }
    }

    /// Returns a [`Block`] AST node if the next tokens represent a brace-
    /// delimited sequence of statements. After any statement one `;` may
    /// follow before the next statement or the closing brace.
    pub(super) fn parse_block(&mut self) -> Result<Block> {
        let open = self.expect(&Token::LeftCurly)?;
        let mut statements = Vec::new();
        while self.has_next() && !self.check(&Token::RightCurly) {
            statements.push(self.parse_statement()?);
            self.eat(&Token::Semicolon);
        }
        let close_start = self.token.span.start;
        self.expect(&Token::RightCurly)?;
        Ok(Block { statements, span: Span::new(open.start, close_start) })
    }

    /// Returns a [`ReturnStatement`]: `return ( e1, ..., en )`, where the
    /// parenthesized list follows the tuple conventions.
    fn parse_return_statement(&mut self) -> Result<ReturnStatement> {
        let start = self.expect(&Token::Return)?;
        let expression = self.parse_expression_tuple()?;
        let end = self.token.span.start;
        Ok(ReturnStatement { expression, span: Span::new(start.start, end) })
    }

    /// Returns an [`IfStatement`]: `if ( cond ) [then] block [else block]`.
    fn parse_if_statement(&mut self) -> Result<IfStatement> {
        let start = self.expect(&Token::If)?;
        self.expect(&Token::LeftParen)?;
        let condition = self.parse_expression()?;
        self.expect(&Token::RightParen)?;
        // The `then` keyword is optional.
        self.eat(&Token::Then);
        let then_block = self.parse_block()?;
        let else_block = if self.eat(&Token::Else) { Some(self.parse_block()?) } else { None };

        let end = else_block.as_ref().unwrap_or(&then_block).span.end;
        Ok(IfStatement { span: Span::new(start.start, end), condition, then_block, else_block })
    }

    /// Returns a [`RepeatStatement`]: `repeat ( times ) block`.
    fn parse_repeat_statement(&mut self) -> Result<RepeatStatement> {
        let start = self.expect(&Token::Repeat)?;
        self.expect(&Token::LeftParen)?;
        let times = self.parse_expression()?;
        self.expect(&Token::RightParen)?;
        let body = self.parse_block()?;
        Ok(RepeatStatement { span: Span::new(start.start, body.span.end), times, body })
    }

    /// Returns a [`ForeachStatement`]: `foreach index in iterable block`.
    fn parse_foreach_statement(&mut self) -> Result<ForeachStatement> {
        let start = self.expect(&Token::Foreach)?;
        let index = self.expect_lower_identifier()?;
        self.expect(&Token::In)?;
        let iterable = self.parse_expression()?;
        let body = self.parse_block()?;
        Ok(ForeachStatement { span: Span::new(start.start, body.span.end), index, iterable, body })
    }

    /// Returns a [`WhileStatement`]: `while ( cond ) block`.
    fn parse_while_statement(&mut self) -> Result<WhileStatement> {
        let start = self.expect(&Token::While)?;
        self.expect(&Token::LeftParen)?;
        let condition = self.parse_expression()?;
        self.expect(&Token::RightParen)?;
        let body = self.parse_block()?;
        Ok(WhileStatement { span: Span::new(start.start, body.span.end), condition, body })
    }

    /// Returns a [`SwitchStatement`]: `switch ( subject ) [to] { branch* }`
    /// where each branch is `pattern -> block`.
    fn parse_switch_statement(&mut self) -> Result<SwitchStatement> {
        let start = self.expect(&Token::Switch)?;
        self.expect(&Token::LeftParen)?;
        let subject = self.parse_expression()?;
        self.expect(&Token::RightParen)?;
        // The `to` keyword is optional.
        self.eat(&Token::To);

        self.expect(&Token::LeftCurly)?;
        let mut branches = Vec::new();
        while self.has_next() && !self.check(&Token::RightCurly) {
            branches.push(self.parse_switch_branch()?);
        }
        let end = self.token.span.start;
        self.expect(&Token::RightCurly)?;
        Ok(SwitchStatement { span: Span::new(start.start, end), subject, branches })
    }

    fn parse_switch_branch(&mut self) -> Result<SwitchBranch> {
        let pattern = self.parse_pattern()?;
        self.expect(&Token::Arrow)?;
        let body = self.parse_block()?;
        let span = Span::new(pattern.span().start, body.span.end);
        Ok(SwitchBranch { pattern, body, span })
    }

    /// Returns the statement after a `let`: either a variable assignment
    /// `let x := e` or a tuple assignment `let (x1, ..., xn) := e` with
    /// `n >= 2`.
    fn parse_let_statement(&mut self) -> Result<Statement> {
        let start = self.expect(&Token::Let)?;
        match &self.token.token {
            Token::LowerId(_) => {
                let name = self.expect_lower_identifier()?;
                self.expect(&Token::Assign)?;
                let value = self.parse_expression()?;
                let end = self.token.span.start;
                Ok(Statement::AssignVariable(AssignVariableStatement {
                    span: Span::new(start.start, end),
                    name,
                    value,
                }))
            }
            Token::LeftParen => {
                let open = self.expect(&Token::LeftParen)?;
                let mut names = vec![self.expect_lower_identifier()?];
                while self.eat(&Token::Comma) {
                    names.push(self.expect_lower_identifier()?);
                }
                self.expect(&Token::RightParen)?;
                if names.len() == 1 {
                    return Err(SyntaxError::assignment_tuple_cannot_be_singleton(
                        open.start,
                        self.token.span.start,
                    )
                    .into());
                }
                self.expect(&Token::Assign)?;
                let value = self.parse_expression()?;
                let end = self.token.span.start;
                Ok(Statement::AssignTuple(AssignTupleStatement {
                    span: Span::new(start.start, end),
                    names,
                    value,
                }))
            }
            _ => {
                Err(SyntaxError::expected_one_of(
                    &["T_LOWERID", "T_LPAREN"],
                    self.token.token.tag_name(),
                    self.token.span.start,
                )
                .into())
            }
        }
    }

    /// Returns an [`AssignVariableStatement`]: `x := e`.
    fn parse_assign_statement(&mut self) -> Result<AssignVariableStatement> {
        let name = self.expect_lower_identifier()?;
        self.expect(&Token::Assign)?;
        let value = self.parse_expression()?;
        let end = self.token.span.start;
        Ok(AssignVariableStatement { span: Span::new(name.span.start, end), name, value })
    }

    /// Returns a [`ProcedureCallStatement`]: `P(e1, ..., en)`.
    fn parse_call_statement(&mut self) -> Result<ProcedureCallStatement> {
        let name = self.expect_upper_identifier()?;
        let (arguments, list_span) = self.parse_paren_comma_list(|p| p.parse_expression())?;
        Ok(ProcedureCallStatement {
            span: Span::new(name.span.start, list_span.end),
            name,
            arguments,
        })
    }
}
