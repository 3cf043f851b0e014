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

//! The parser to convert Gobstones code text into a list of definitions.
//!
//! This crate contains the [`tokenize()`] method which turns source text
//! into [`SpannedToken`]s, and the [`parse()`] / [`parse_files()`] methods
//! which build the AST on top of it.

#![forbid(unsafe_code)]

pub mod tokenizer;
pub use tokenizer::{tokenize, Lexer, SpannedToken, Token};

pub mod parser;
pub use parser::*;

#[cfg(test)]
mod test;
