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

use crate::catalog::{English, MessageCatalog};

use gobstones_span::Position;

use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-fatal diagnostic. Warnings accumulate on the [`crate::Handler`]
/// and never abort tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    EmptyPragma,
    UnknownPragma { name: String },
}

impl WarningKind {
    /// The stable key of this warning, as consumed by message catalogs.
    pub fn key(&self) -> &'static str {
        match self {
            WarningKind::EmptyPragma => "warning:empty-pragma",
            WarningKind::UnknownPragma { .. } => "warning:unknown-pragma",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub start: Position,
    pub kind: WarningKind,
}

impl Warning {
    pub fn empty_pragma(start: Position) -> Self {
        Warning { start, kind: WarningKind::EmptyPragma }
    }

    pub fn unknown_pragma(name: impl Into<String>, start: Position) -> Self {
        Warning { start, kind: WarningKind::UnknownPragma { name: name.into() } }
    }

    /// Renders the message through `catalog`.
    pub fn message(&self, catalog: &dyn MessageCatalog) -> String {
        catalog.warning_message(&self.kind)
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", "warning:".bold().yellow(), self.message(&English))?;
        write!(f, "\n  --> {}", self.start)
    }
}
