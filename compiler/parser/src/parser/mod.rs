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

//! The parser to convert Gobstones token streams into definitions.
//!
//! This module contains the [`parse()`] and [`parse_files()`] methods which
//! call the underlying [`tokenize()`](crate::tokenize) method to build the
//! AST of a program.

use crate::tokenizer::*;

use gobstones_ast::*;
use gobstones_errors::{Handler, Result, SyntaxError};
use gobstones_span::{MultifileReader, Span};

use indexmap::IndexMap;
use tracing::trace;

mod context;
pub use context::*;

pub mod expression;
pub mod file;
pub mod pattern;
pub mod statement;

/// Parses a single anonymous source into its list of definitions.
pub fn parse(handler: &Handler, source: &str) -> Result<Vec<Definition>> {
    trace!("parsing a single source of {} byte(s)", source.len());
    let tokens = crate::tokenize(handler, MultifileReader::from_string(source))?;
    ParserContext::new(tokens).parse_program()
}

/// Parses named sources, concatenated in the map's iteration order, into
/// one list of definitions.
pub fn parse_files(handler: &Handler, files: IndexMap<String, String>) -> Result<Vec<Definition>> {
    trace!("parsing {} file(s)", files.len());
    let tokens = crate::tokenize(handler, MultifileReader::from_files(files))?;
    ParserContext::new(tokens).parse_program()
}
