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

use crate::{sym, Symbol};

use serde::{Deserialize, Serialize};
use std::{fmt, ops::Add};

/// A point in some source file.
///
/// `region` defaults to the enclosing file's identifier and is overridden
/// while a `BEGIN_REGION` pragma is in effect. Lines and columns are
/// 1-based; `offset` is the byte offset within the file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Identifier of the file this position lies in.
    pub file: Symbol,
    /// Logical region label in effect when the position was created.
    pub region: Symbol,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number. Tabs count as one column.
    pub col: u32,
    /// Byte offset within the file.
    pub offset: u32,
}

impl Position {
    pub fn new(file: Symbol, region: Symbol, line: u32, col: u32, offset: u32) -> Self {
        Position { file, region, line, col, offset }
    }

    /// The sentinel position carried by synthesized tokens.
    pub const fn unknown() -> Self {
        Position { file: sym::unknown, region: sym::unknown, line: 0, col: 0, offset: 0 }
    }

    pub fn is_unknown(&self) -> bool {
        self.line == 0
    }

    /// Whether `self` comes no later than `other` in reading order.
    /// Positions in different files compare by file identity only insofar
    /// as equal files are ordered by line and column.
    pub fn precedes(&self, other: &Position) -> bool {
        self.file != other.file || (self.line, self.col) <= (other.line, other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            return write!(f, "(?)");
        }
        write!(f, "{}:{}:{}", self.file, self.line, self.col)?;
        if self.region != self.file {
            write!(f, " ({})", self.region)?;
        }
        Ok(())
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::unknown()
    }
}

/// The textual extent of a token or an AST node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// A span whose both ends are the unknown sentinel.
    pub const fn dummy() -> Self {
        Span { start: Position::unknown(), end: Position::unknown() }
    }

    pub fn is_dummy(&self) -> bool {
        self.start.is_unknown() && self.end.is_unknown()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.file == self.end.file && self.start.line == self.end.line {
            write!(f, "{}-{}", self.start, self.end.col)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// `a + b` is the hull from `a`'s start to `b`'s end.
impl Add for Span {
    type Output = Span;

    fn add(self, other: Span) -> Span {
        if self.is_dummy() {
            other
        } else if other.is_dummy() {
            self
        } else {
            Span::new(self.start, other.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_session_if_not_set_then;

    #[test]
    fn span_addition_takes_the_hull() {
        create_session_if_not_set_then(|_| {
            let file = Symbol::intern("a.gbs");
            let p = |line, col| Position::new(file, file, line, col, 0);
            let a = Span::new(p(1, 1), p(1, 4));
            let b = Span::new(p(2, 1), p(2, 9));
            let hull = a + b;
            assert_eq!(hull.start, p(1, 1));
            assert_eq!(hull.end, p(2, 9));
            assert_eq!(a + Span::dummy(), a);
            assert_eq!(Span::dummy() + b, b);
        });
    }

    #[test]
    fn unknown_position_displays_as_placeholder() {
        create_session_if_not_set_then(|_| {
            assert_eq!(Position::unknown().to_string(), "(?)");
        });
    }
}
