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

use crate::{Identifier, Node};
use gobstones_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

mod call;
pub use call::*;

mod constructor;
pub use constructor::*;

mod list;
pub use list::*;

mod literal;
pub use literal::*;

mod logical;
pub use logical::*;

mod tuple;
pub use tuple::*;

/// An expression that evaluates to a value.
///
/// Operator applications other than `&&` and `||` are represented as
/// [`CallExpression`]s whose function name is the operator symbol
/// (unary minus uses the name `-(unary)`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression {
    /// A variable, e.g. `x`.
    Variable(Identifier),
    /// A numeric literal, e.g. `42`.
    ConstantNumber(NumberLiteral),
    /// A string literal, e.g. `"hola"`.
    ConstantString(StringLiteral),
    /// A list, e.g. `[1, 2, 3]`.
    List(ListExpression),
    /// An enumerated range, e.g. `[1 .. 10]` or `[1, 3 .. 10]`.
    Range(RangeExpression),
    /// A tuple, e.g. `()` or `(x, y)`.
    Tuple(TupleExpression),
    /// A constructor application, e.g. `Coord(x <- 1, y <- 2)`.
    Constructor(ConstructorExpression),
    /// A record update, e.g. `Coord(c | x <- 1)`.
    ConstructorUpdate(ConstructorUpdateExpression),
    /// Short-circuit conjunction `a && b`.
    And(AndExpression),
    /// Short-circuit disjunction `a || b`.
    Or(OrExpression),
    /// A function call, e.g. `f(x)`; also every desugared operator.
    Call(CallExpression),
}

impl Node for Expression {
    fn span(&self) -> Span {
        use Expression::*;
        match self {
            Variable(n) => n.span(),
            ConstantNumber(n) => n.span(),
            ConstantString(n) => n.span(),
            List(n) => n.span(),
            Range(n) => n.span(),
            Tuple(n) => n.span(),
            Constructor(n) => n.span(),
            ConstructorUpdate(n) => n.span(),
            And(n) => n.span(),
            Or(n) => n.span(),
            Call(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        use Expression::*;
        match self {
            Variable(n) => n.set_span(span),
            ConstantNumber(n) => n.set_span(span),
            ConstantString(n) => n.set_span(span),
            List(n) => n.set_span(span),
            Range(n) => n.set_span(span),
            Tuple(n) => n.set_span(span),
            Constructor(n) => n.set_span(span),
            ConstructorUpdate(n) => n.set_span(span),
            And(n) => n.set_span(span),
            Or(n) => n.set_span(span),
            Call(n) => n.set_span(span),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Expression::*;
        match self {
            Variable(n) => n.fmt(f),
            ConstantNumber(n) => n.fmt(f),
            ConstantString(n) => n.fmt(f),
            List(n) => n.fmt(f),
            Range(n) => n.fmt(f),
            Tuple(n) => n.fmt(f),
            Constructor(n) => n.fmt(f),
            ConstructorUpdate(n) => n.fmt(f),
            And(n) => n.fmt(f),
            Or(n) => n.fmt(f),
            Call(n) => n.fmt(f),
        }
    }
}
