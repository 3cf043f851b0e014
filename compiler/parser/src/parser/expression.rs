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

use gobstones_span::{sym, Symbol};

impl ParserContext {
    /// Returns an [`Expression`] AST node if the next tokens represent an
    /// expression. Entry point of the precedence ladder, lowest level
    /// first: `||`, `&&`, `not`, relational, `++`, additive,
    /// multiplicative, `div`/`mod`, `^`, unary minus, atoms.
    ///
    /// `&&` and `||` keep dedicated nodes (they short-circuit); every
    /// other operator desugars to a call named after its symbol.
    pub(crate) fn parse_expression(&mut self) -> Result<Expression> {
        self.parse_disjunction()
    }

    /// `||`, right-associative.
    fn parse_disjunction(&mut self) -> Result<Expression> {
        let left = self.parse_conjunction()?;
        if self.eat(&Token::Or) {
            let right = self.parse_disjunction()?;
            let span = Span::new(left.span().start, right.span().end);
            return Ok(Expression::Or(OrExpression {
                left: Box::new(left),
                right: Box::new(right),
                span,
            }));
        }
        Ok(left)
    }

    /// `&&`, right-associative.
    fn parse_conjunction(&mut self) -> Result<Expression> {
        let left = self.parse_negation()?;
        if self.eat(&Token::And) {
            let right = self.parse_conjunction()?;
            let span = Span::new(left.span().start, right.span().end);
            return Ok(Expression::And(AndExpression {
                left: Box::new(left),
                right: Box::new(right),
                span,
            }));
        }
        Ok(left)
    }

    /// Prefix `not`.
    fn parse_negation(&mut self) -> Result<Expression> {
        if self.check(&Token::Not) {
            let operator = Identifier::new(sym::not, self.token.span);
            self.bump();
            let operand = self.parse_negation()?;
            return Ok(Self::operator_call(operator, vec![operand]));
        }
        self.parse_relation()
    }

    /// `== /= <= >= < >`, non-associative: at most one per level.
    fn parse_relation(&mut self) -> Result<Expression> {
        let left = self.parse_concatenation()?;
        if let Some(operator) =
            self.eat_operator(&[Token::Eq, Token::Ne, Token::Le, Token::Ge, Token::Lt, Token::Gt])
        {
            let right = self.parse_concatenation()?;
            return Ok(Self::operator_call(operator, vec![left, right]));
        }
        Ok(left)
    }

    /// `++`, left-associative.
    fn parse_concatenation(&mut self) -> Result<Expression> {
        self.parse_left_associative(&[Token::Concat], Self::parse_additive)
    }

    /// Binary `+` and `-`, left-associative.
    fn parse_additive(&mut self) -> Result<Expression> {
        self.parse_left_associative(&[Token::Plus, Token::Minus], Self::parse_multiplicative)
    }

    /// `*`, left-associative.
    fn parse_multiplicative(&mut self) -> Result<Expression> {
        self.parse_left_associative(&[Token::Times], Self::parse_division)
    }

    /// `div` and `mod`, left-associative.
    fn parse_division(&mut self) -> Result<Expression> {
        self.parse_left_associative(&[Token::Div, Token::Mod], Self::parse_power)
    }

    /// `^`, right-associative.
    fn parse_power(&mut self) -> Result<Expression> {
        let left = self.parse_unary_minus()?;
        if let Some(operator) = self.eat_operator(&[Token::Pow]) {
            let right = self.parse_power()?;
            return Ok(Self::operator_call(operator, vec![left, right]));
        }
        Ok(left)
    }

    /// Prefix `-`, desugared to the reserved name `-(unary)`.
    fn parse_unary_minus(&mut self) -> Result<Expression> {
        if self.check(&Token::Minus) {
            let operator = Identifier::new(sym::unary_minus, self.token.span);
            self.bump();
            let operand = self.parse_unary_minus()?;
            return Ok(Self::operator_call(operator, vec![operand]));
        }
        self.parse_atom()
    }

    /// Parses a left-associative level `<left> token <right>` using `f`
    /// for both sides.
    fn parse_left_associative(
        &mut self,
        tokens: &[Token],
        mut f: impl FnMut(&mut Self) -> Result<Expression>,
    ) -> Result<Expression> {
        let mut expression = f(self)?;
        while let Some(operator) = self.eat_operator(tokens) {
            let right = f(self)?;
            expression = Self::operator_call(operator, vec![expression, right]);
        }
        Ok(expression)
    }

    /// Eats one of the operators in `tokens`, returning it as the
    /// identifier naming the desugared call.
    fn eat_operator(&mut self, tokens: &[Token]) -> Option<Identifier> {
        self.eat_any(tokens)
            .then(|| Identifier::new(Self::operator_symbol(&self.prev_token.token), self.prev_token.span))
    }

    /// The function name a binary or prefix operator desugars to.
    fn operator_symbol(token: &Token) -> Symbol {
        match token {
            Token::Eq => sym::eq,
            Token::Ne => sym::ne,
            Token::Le => sym::le,
            Token::Ge => sym::ge,
            Token::Lt => sym::lt,
            Token::Gt => sym::gt,
            Token::Concat => sym::concat,
            Token::Plus => sym::plus,
            Token::Minus => sym::minus,
            Token::Times => sym::times,
            Token::Div => sym::div,
            Token::Mod => sym::modulus,
            Token::Pow => sym::pow,
            Token::Not => sym::not,
            _ => unreachable!("`operator_symbol` only sees operator tokens"),
        }
    }

    /// Constructs the call expression an operator application desugars to.
    fn operator_call(operator: Identifier, arguments: Vec<Expression>) -> Expression {
        let span = match arguments.as_slice() {
            // Binary: from the left operand to the right one.
            [left, .., right] => Span::new(left.span().start, right.span().end),
            // Prefix: from the operator to its operand.
            [operand] => Span::new(operator.span.start, operand.span().end),
            [] => operator.span,
        };
        Expression::Call(CallExpression { function: operator, arguments, span })
    }

    /// Returns an [`Expression`] AST node if the next token starts an
    /// atom: a literal, a variable or function call, a constructor form,
    /// a parenthesized expression or tuple, or a list or range.
    fn parse_atom(&mut self) -> Result<Expression> {
        match &self.token.token {
            Token::LeftParen => return self.parse_expression_tuple(),
            Token::LeftSquare => return self.parse_list_expression(),
            Token::UpperId(_) => return self.parse_constructor_expression(),
            _ => {}
        }

        let SpannedToken { token, span } = self.token.clone();
        match token {
            Token::LowerId(name) => {
                let identifier = Identifier::new(name, span);
                self.bump();
                if self.check(&Token::LeftParen) {
                    let (arguments, list_span) = self.parse_paren_comma_list(|p| p.parse_expression())?;
                    return Ok(Expression::Call(CallExpression {
                        span: Span::new(identifier.span.start, list_span.end),
                        function: identifier,
                        arguments,
                    }));
                }
                Ok(Expression::Variable(identifier))
            }
            Token::Num(value) => {
                self.bump();
                Ok(Expression::ConstantNumber(NumberLiteral { value, span }))
            }
            Token::StringLit(value) => {
                self.bump();
                Ok(Expression::ConstantString(StringLiteral { value, span }))
            }
            _ => self.unexpected("expression"),
        }
    }

    /// Parses `( e1, ..., en )`: an empty pair of parens is the 0-tuple, a
    /// single expression is returned unwrapped, and two or more make a
    /// tuple. Shared by atoms and `return`.
    pub(super) fn parse_expression_tuple(&mut self) -> Result<Expression> {
        let (mut elements, span) = self.parse_paren_comma_list(|p| p.parse_expression())?;
        if elements.len() == 1 {
            Ok(elements.swap_remove(0))
        } else {
            Ok(Expression::Tuple(TupleExpression { elements, span }))
        }
    }

    /// Disambiguates the constructor family after an uppercase name.
    ///
    /// One token of lookahead cannot tell `Ctor(x <- 1)` from
    /// `Ctor(original | ...)`, so after the `(` a full expression is
    /// parsed first and the commitment happens on the token after it.
    fn parse_constructor_expression(&mut self) -> Result<Expression> {
        let constructor = self.expect_upper_identifier()?;

        // A bare uppercase name is a nullary constructor.
        if !self.check(&Token::LeftParen) {
            return Ok(Expression::Constructor(ConstructorExpression {
                span: constructor.span,
                constructor,
                fields: Vec::new(),
            }));
        }
        self.bump();

        // `Ctor()` is also nullary.
        if self.check(&Token::RightParen) {
            let end = self.token.span.start;
            self.bump();
            return Ok(Expression::Constructor(ConstructorExpression {
                span: Span::new(constructor.span.start, end),
                constructor,
                fields: Vec::new(),
            }));
        }

        let subject = self.parse_expression()?;
        match &self.token.token {
            // `Ctor(x <- e, ...)`: field initializers. The expression
            // before the `<-` must have been a plain field name.
            Token::Gets => {
                let Expression::Variable(first_name) = subject else {
                    return Err(SyntaxError::expected_but_found(
                        "T_PIPE",
                        "T_GETS",
                        self.token.span.start,
                    )
                    .into());
                };
                self.bump();
                let value = self.parse_expression()?;
                let field_end = self.token.span.start;
                let mut fields = vec![FieldValue {
                    span: Span::new(first_name.span.start, field_end),
                    name: first_name,
                    value,
                }];
                while self.eat(&Token::Comma) {
                    fields.push(self.parse_field_value()?);
                }
                let end = self.token.span.start;
                self.expect(&Token::RightParen)?;
                Ok(Expression::Constructor(ConstructorExpression {
                    span: Span::new(constructor.span.start, end),
                    constructor,
                    fields,
                }))
            }
            // `Ctor(original | ...)`: record update over `subject`.
            Token::Pipe => {
                self.bump();
                let mut fields = Vec::new();
                if !self.check(&Token::RightParen) {
                    fields.push(self.parse_field_value()?);
                    while self.eat(&Token::Comma) {
                        fields.push(self.parse_field_value()?);
                    }
                }
                let end = self.token.span.start;
                self.expect(&Token::RightParen)?;
                Ok(Expression::ConstructorUpdate(ConstructorUpdateExpression {
                    span: Span::new(constructor.span.start, end),
                    constructor,
                    original: Box::new(subject),
                    fields,
                }))
            }
            // `Ctor(e)` / `Ctor(e, ...)`: a procedure call misused in
            // expression position. Anchored at the constructor name.
            Token::Comma | Token::RightParen => Err(SyntaxError::expected_but_found(
                "expression",
                "procedure call",
                constructor.span.start,
            )
            .into()),
            _ => {
                let expected: &[&str] = if matches!(subject, Expression::Variable(_)) {
                    &["T_GETS", "T_PIPE"]
                } else {
                    &["T_PIPE"]
                };
                Err(SyntaxError::expected_one_of(
                    expected,
                    self.token.token.tag_name(),
                    constructor.span.start,
                )
                .into())
            }
        }
    }

    /// Parses one `field <- value` binding.
    fn parse_field_value(&mut self) -> Result<FieldValue> {
        let name = self.expect_lower_identifier()?;
        self.expect(&Token::Gets)?;
        let value = self.parse_expression()?;
        let end = self.token.span.start;
        Ok(FieldValue { span: Span::new(name.span.start, end), name, value })
    }

    /// Parses the bracket forms after `[`: the empty list, a non-empty
    /// list, or a range with an optional second element fixing the step.
    fn parse_list_expression(&mut self) -> Result<Expression> {
        let open = self.expect(&Token::LeftSquare)?;

        if self.check(&Token::RightSquare) {
            let end = self.token.span.start;
            self.bump();
            return Ok(Expression::List(ListExpression {
                elements: Vec::new(),
                span: Span::new(open.start, end),
            }));
        }

        let first = self.parse_expression()?;
        match &self.token.token {
            Token::RightSquare => {
                let end = self.token.span.start;
                self.bump();
                Ok(Expression::List(ListExpression {
                    elements: vec![first],
                    span: Span::new(open.start, end),
                }))
            }
            Token::Range => {
                self.bump();
                let last = self.parse_expression()?;
                let end = self.token.span.start;
                self.expect(&Token::RightSquare)?;
                Ok(Expression::Range(RangeExpression {
                    span: Span::new(open.start, end),
                    first: Box::new(first),
                    second: None,
                    last: Box::new(last),
                }))
            }
            Token::Comma => {
                self.bump();
                let second = self.parse_expression()?;
                match &self.token.token {
                    Token::Range => {
                        self.bump();
                        let last = self.parse_expression()?;
                        let end = self.token.span.start;
                        self.expect(&Token::RightSquare)?;
                        Ok(Expression::Range(RangeExpression {
                            span: Span::new(open.start, end),
                            first: Box::new(first),
                            second: Some(Box::new(second)),
                            last: Box::new(last),
                        }))
                    }
                    Token::Comma | Token::RightSquare => {
                        let mut elements = vec![first, second];
                        while self.eat(&Token::Comma) {
                            elements.push(self.parse_expression()?);
                        }
                        let end = self.token.span.start;
                        self.expect(&Token::RightSquare)?;
                        Ok(Expression::List(ListExpression {
                            elements,
                            span: Span::new(open.start, end),
                        }))
                    }
                    _ => self.unexpected_in_bracket_form(),
                }
            }
            _ => self.unexpected_in_bracket_form(),
        }
    }

    fn unexpected_in_bracket_form<T>(&self) -> Result<T> {
        Err(SyntaxError::expected_one_of(
            &["T_COMMA", "T_RANGE", "T_RBRACK"],
            self.token.token.tag_name(),
            self.token.span.start,
        )
        .into())
    }
}
