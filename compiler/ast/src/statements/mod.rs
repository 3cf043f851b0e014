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

use crate::Node;
use gobstones_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

mod assign;
pub use assign::*;

mod block;
pub use block::*;

mod call;
pub use call::*;

mod conditional;
pub use conditional::*;

mod foreach;
pub use foreach::*;

mod repeat;
pub use repeat::*;

mod return_;
pub use return_::*;

mod switch;
pub use switch::*;

mod while_;
pub use while_::*;

/// A statement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    /// A nested `{ ... }` block.
    Block(Block),
    /// A `return (...)` statement.
    Return(ReturnStatement),
    /// An `if (...) [then] { ... } [else { ... }]` statement.
    If(IfStatement),
    /// A `repeat (...) { ... }` statement.
    Repeat(RepeatStatement),
    /// A `foreach i in ... { ... }` statement.
    Foreach(ForeachStatement),
    /// A `while (...) { ... }` statement.
    While(WhileStatement),
    /// A `switch (...) { pattern -> { ... } ... }` statement.
    Switch(SwitchStatement),
    /// A variable assignment `x := ...`.
    AssignVariable(AssignVariableStatement),
    /// A tuple assignment `let (x, y) := ...`.
    AssignTuple(AssignTupleStatement),
    /// A procedure call `P(...)`.
    ProcedureCall(ProcedureCallStatement),
}

impl Node for Statement {
    fn span(&self) -> Span {
        use Statement::*;
        match self {
            Block(n) => n.span(),
            Return(n) => n.span(),
            If(n) => n.span(),
            Repeat(n) => n.span(),
            Foreach(n) => n.span(),
            While(n) => n.span(),
            Switch(n) => n.span(),
            AssignVariable(n) => n.span(),
            AssignTuple(n) => n.span(),
            ProcedureCall(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        use Statement::*;
        match self {
            Block(n) => n.set_span(span),
            Return(n) => n.set_span(span),
            If(n) => n.set_span(span),
            Repeat(n) => n.set_span(span),
            Foreach(n) => n.set_span(span),
            While(n) => n.set_span(span),
            Switch(n) => n.set_span(span),
            AssignVariable(n) => n.set_span(span),
            AssignTuple(n) => n.set_span(span),
            ProcedureCall(n) => n.set_span(span),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Statement::*;
        match self {
            Block(n) => n.fmt(f),
            Return(n) => n.fmt(f),
            If(n) => n.fmt(f),
            Repeat(n) => n.fmt(f),
            Foreach(n) => n.fmt(f),
            While(n) => n.fmt(f),
            Switch(n) => n.fmt(f),
            AssignVariable(n) => n.fmt(f),
            AssignTuple(n) => n.fmt(f),
            ProcedureCall(n) => n.fmt(f),
        }
    }
}
