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
    /// Returns a [`Pattern`] AST node if the next tokens represent one of
    /// the three pattern forms: wildcard, constructor, or tuple.
    ///
    /// A bare variable is not a pattern; it reports what the grammar
    /// wanted rather than silently binding.
    pub(super) fn parse_pattern(&mut self) -> Result<Pattern> {
        match &self.token.token {
            Token::Underscore => {
                let span = self.token.span;
                self.bump();
                Ok(Pattern::Wildcard(WildcardPattern { span }))
            }
            Token::UpperId(_) => {
                let constructor = self.expect_upper_identifier()?;
                let (params, span) = if self.check(&Token::LeftParen) {
                    let (params, list_span) = self.parse_paren_comma_list(Self::expect_lower_identifier)?;
                    (params, Span::new(constructor.span.start, list_span.end))
                } else {
                    (Vec::new(), constructor.span)
                };
                Ok(Pattern::Constructor(ConstructorPattern { constructor, params, span }))
            }
            Token::LeftParen => {
                // Components are plain names: a nested `(` trips the
                // lowercase-identifier expectation inside the list.
                let start = self.token.span.start;
                let (params, list_span) = self.parse_paren_comma_list(Self::expect_lower_identifier)?;
                if params.len() == 1 {
                    return Err(SyntaxError::pattern_tuple_cannot_be_singleton(start).into());
                }
                Ok(Pattern::Tuple(TuplePattern { params, span: list_span }))
            }
            _ => self.unexpected("pattern"),
        }
    }
}
