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

use crate::{simple_node_impl, Expression, Identifier, Node};
use gobstones_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A variable assignment `x := e`, with or without a leading `let`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignVariableStatement {
    pub name: Identifier,
    pub value: Expression,
    pub span: Span,
}

simple_node_impl!(AssignVariableStatement);

impl fmt::Display for AssignVariableStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} := {}", self.name, self.value)
    }
}

/// A tuple assignment `let (x1, ..., xn) := e` with `n >= 2`; each name
/// binds the corresponding component of the tuple `e` evaluates to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignTupleStatement {
    pub names: Vec<Identifier>,
    pub value: Expression,
    pub span: Span,
}

simple_node_impl!(AssignTupleStatement);

impl fmt::Display for AssignTupleStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<String> = self.names.iter().map(|n| n.to_string()).collect();
        write!(f, "let ({}) := {}", names.join(", "), self.value)
    }
}
