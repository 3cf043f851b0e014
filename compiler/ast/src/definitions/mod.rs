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

mod program;
pub use program::*;

mod procedure;
pub use procedure::*;

mod function;
pub use function::*;

/// A top-level definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Definition {
    /// The `program { ... }` entry point.
    Program(ProgramDefinition),
    /// A `procedure P(...) { ... }` definition.
    Procedure(ProcedureDefinition),
    /// A `function f(...) { ... }` definition.
    Function(FunctionDefinition),
}

impl Node for Definition {
    fn span(&self) -> Span {
        use Definition::*;
        match self {
            Program(n) => n.span(),
            Procedure(n) => n.span(),
            Function(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        use Definition::*;
        match self {
            Program(n) => n.set_span(span),
            Procedure(n) => n.set_span(span),
            Function(n) => n.set_span(span),
        }
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Definition::*;
        match self {
            Program(n) => n.fmt(f),
            Procedure(n) => n.fmt(f),
            Function(n) => n.fmt(f),
        }
    }
}
