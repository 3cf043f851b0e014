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

use crate::{simple_node_impl, Expression, Node};
use gobstones_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Short-circuit conjunction `left && right`. Kept as its own node
/// (rather than a desugared call) because evaluation must short-circuit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub span: Span,
}

simple_node_impl!(AndExpression);

impl fmt::Display for AndExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} && {})", self.left, self.right)
    }
}

/// Short-circuit disjunction `left || right`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrExpression {
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub span: Span,
}

simple_node_impl!(OrExpression);

impl fmt::Display for OrExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} || {})", self.left, self.right)
    }
}
