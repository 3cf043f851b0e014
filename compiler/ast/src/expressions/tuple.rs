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

/// A tuple `(e1, ..., en)`. A parenthesized single expression is not a
/// tuple: the parser returns it unwrapped, so `elements` is never 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TupleExpression {
    pub elements: Vec<Expression>,
    pub span: Span,
}

simple_node_impl!(TupleExpression);

impl fmt::Display for TupleExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let elements: Vec<String> = self.elements.iter().map(|e| e.to_string()).collect();
        write!(f, "({})", elements.join(", "))
    }
}
