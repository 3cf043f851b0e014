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

use crate::tokenizer::{SpannedToken, Token};

use gobstones_ast::Identifier;
use gobstones_errors::{Result, SyntaxError};
use gobstones_span::Span;

use std::mem;

/// Stores a program in tokenized format plus a one-token cursor.
/// May be converted into a list of definitions by parsing all tokens.
pub struct ParserContext {
    /// All un-bumped tokens, in reverse order so that advancing is a pop.
    tokens: Vec<SpannedToken>,
    /// The current token, i.e., if `p.tokens = ['3', '*', '4']`,
    /// then after a `p.bump()`, we'll have `p.token = '3'`.
    pub(crate) token: SpannedToken,
    /// The previous token, i.e., if `p.tokens = ['3', '*', '4']`,
    /// then after two `p.bump()`s, we'll have `p.token = '*'` and `p.prev_token = '3'`.
    pub(crate) prev_token: SpannedToken,
}

impl ParserContext {
    /// Returns a new [`ParserContext`] type given a vector of tokens.
    pub fn new(mut tokens: Vec<SpannedToken>) -> Self {
        // For performance we reverse so that we get cheap `.pop()`s.
        tokens.reverse();
        let token = SpannedToken::dummy();
        let mut context = ParserContext { prev_token: token.clone(), token, tokens };
        context.bump();
        context
    }

    /// Advances the parser cursor by one token.
    pub fn bump(&mut self) {
        // Bumping after the terminal EOF would loop forever.
        if let Token::Eof = self.prev_token.token {
            panic!("attempted to bump the parser past EOF (may be stuck in a loop)");
        }

        // The token stream ends in an EOF token, but re-synthesize one at
        // the last known span if a caller drains past it.
        let next_token = self
            .tokens
            .pop()
            .unwrap_or_else(|| SpannedToken { token: Token::Eof, span: self.token.span });

        self.prev_token = mem::replace(&mut self.token, next_token);
    }

    /// Checks whether the current token is `token`.
    pub fn check(&self, token: &Token) -> bool {
        &self.token.token == token
    }

    /// Eats the next token if it is `token`, returning whether it was.
    pub fn eat(&mut self, token: &Token) -> bool {
        self.check(token).then(|| self.bump()).is_some()
    }

    /// Eats any of the given `tokens`, returning `true` if one was eaten.
    pub fn eat_any(&mut self, tokens: &[Token]) -> bool {
        tokens.iter().any(|token| self.check(token)).then(|| self.bump()).is_some()
    }

    /// Returns true if the current token is not the terminal EOF.
    pub fn has_next(&self) -> bool {
        !matches!(self.token.token, Token::Eof)
    }

    /// Returns an expected-but-found error at the current token.
    pub(crate) fn unexpected<T>(&self, expected: &str) -> Result<T> {
        Err(SyntaxError::expected_but_found(
            expected,
            self.token.token.tag_name(),
            self.token.span.start,
        )
        .into())
    }

    /// Eats the expected `token`, or errors.
    pub fn expect(&mut self, token: &Token) -> Result<Span> {
        if self.eat(token) {
            Ok(self.prev_token.span)
        } else {
            self.unexpected(token.tag_name())
        }
    }

    /// Eats a lowercase identifier and returns it, or errors.
    pub fn expect_lower_identifier(&mut self) -> Result<Identifier> {
        match self.token.token {
            Token::LowerId(name) => {
                let span = self.token.span;
                self.bump();
                Ok(Identifier::new(name, span))
            }
            _ => self.unexpected("T_LOWERID"),
        }
    }

    /// Eats an uppercase identifier and returns it, or errors.
    pub fn expect_upper_identifier(&mut self) -> Result<Identifier> {
        match self.token.token {
            Token::UpperId(name) => {
                let span = self.token.span;
                self.bump();
                Ok(Identifier::new(name, span))
            }
            _ => self.unexpected("T_UPPERID"),
        }
    }

    /// Parses a list of `T`s using `inner`, delimited by `open`/`close`
    /// and separated by `sep`. Separators never trail: after each one
    /// another element is required.
    ///
    /// The returned span runs from `open`'s start to `close`'s start, which
    /// is what delimiter-closed nodes carry as their extent.
    pub(super) fn parse_list<T>(
        &mut self,
        open: Token,
        close: Token,
        sep: Token,
        mut inner: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<(Vec<T>, Span)> {
        let open_span = self.expect(&open)?;

        let mut list = Vec::new();
        if !self.check(&close) {
            list.push(inner(self)?);
            while self.eat(&sep) {
                list.push(inner(self)?);
            }
        }

        let close_start = self.token.span.start;
        self.expect(&close)?;
        Ok((list, Span::new(open_span.start, close_start)))
    }

    /// Parses a list separated by `,` and delimited by parens.
    pub(super) fn parse_paren_comma_list<T>(
        &mut self,
        inner: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<(Vec<T>, Span)> {
        self.parse_list(Token::LeftParen, Token::RightParen, Token::Comma, inner)
    }
}
