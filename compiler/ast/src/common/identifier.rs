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

use crate::{simple_node_impl, Node};
use gobstones_span::{Span, Symbol};

use serde::{Deserialize, Serialize};
use std::fmt;

/// A name appearing in a program: a variable, a parameter, a procedure or
/// function name, a constructor, or a record field.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    /// The symbol the user wrote, e.g. `x` or `Coord`.
    pub name: Symbol,
    /// Where the identifier occurred in the source.
    pub span: Span,
}

simple_node_impl!(Identifier);

impl Identifier {
    pub fn new(name: Symbol, span: Span) -> Self {
        Identifier { name, span }
    }

    /// Whether this identifier names the same thing as `other`,
    /// regardless of where either occurred.
    pub fn matches(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
