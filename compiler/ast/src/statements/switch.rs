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

use crate::{simple_node_impl, Block, Expression, Node, Pattern};
use gobstones_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `switch (subject) [to] { branch* }` statement.
/// `match` is accepted as a synonym of `switch`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchStatement {
    pub subject: Expression,
    pub branches: Vec<SwitchBranch>,
    pub span: Span,
}

simple_node_impl!(SwitchStatement);

impl fmt::Display for SwitchStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "switch ({}) {{", self.subject)?;
        for branch in &self.branches {
            writeln!(f, "  {branch}")?;
        }
        write!(f, "}}")
    }
}

/// One `pattern -> { ... }` branch of a switch.
/// The pattern is never a bare variable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchBranch {
    pub pattern: Pattern,
    pub body: Block,
    pub span: Span,
}

simple_node_impl!(SwitchBranch);

impl fmt::Display for SwitchBranch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.pattern, self.body)
    }
}
