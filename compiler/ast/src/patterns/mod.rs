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

use crate::{simple_node_impl, Identifier, Node};
use gobstones_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pattern at the head of a switch branch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pattern {
    /// The `_` pattern, matching anything.
    Wildcard(WildcardPattern),
    /// A constructor pattern `Ctor` or `Ctor(x1, ..., xn)`.
    Constructor(ConstructorPattern),
    /// A tuple pattern `()` or `(x1, ..., xn)` with `n >= 2`.
    Tuple(TuplePattern),
}

impl Node for Pattern {
    fn span(&self) -> Span {
        use Pattern::*;
        match self {
            Wildcard(n) => n.span(),
            Constructor(n) => n.span(),
            Tuple(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        use Pattern::*;
        match self {
            Wildcard(n) => n.set_span(span),
            Constructor(n) => n.set_span(span),
            Tuple(n) => n.set_span(span),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Pattern::*;
        match self {
            Wildcard(n) => n.fmt(f),
            Constructor(n) => n.fmt(f),
            Tuple(n) => n.fmt(f),
        }
    }
}

/// The `_` wildcard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WildcardPattern {
    pub span: Span,
}

simple_node_impl!(WildcardPattern);

impl fmt::Display for WildcardPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "_")
    }
}

/// A constructor pattern. `params` bind the constructor's fields in
/// declaration order; the list may be empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorPattern {
    pub constructor: Identifier,
    pub params: Vec<Identifier>,
    pub span: Span,
}

simple_node_impl!(ConstructorPattern);

impl fmt::Display for ConstructorPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.constructor)?;
        if !self.params.is_empty() {
            let params: Vec<String> = self.params.iter().map(|p| p.to_string()).collect();
            write!(f, "({})", params.join(", "))?;
        }
        Ok(())
    }
}

/// A tuple pattern. Never has exactly one component; nesting is not
/// allowed, so components are plain names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuplePattern {
    pub params: Vec<Identifier>,
    pub span: Span,
}

simple_node_impl!(TuplePattern);

impl fmt::Display for TuplePattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let params: Vec<String> = self.params.iter().map(|p| p.to_string()).collect();
        write!(f, "({})", params.join(", "))
    }
}
