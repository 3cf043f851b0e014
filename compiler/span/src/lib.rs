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

//! Source positions for the Gobstones front end.
//!
//! This crate owns everything the rest of the compiler needs to talk about
//! *where* a piece of syntax came from: interned [`Symbol`]s for names, file
//! identifiers and region labels, [`Position`]s and [`Span`]s carrying
//! file/line/column/region, and the pure-value [`SourceReader`] /
//! [`MultifileReader`] cursors the tokenizer consumes.

#![forbid(unsafe_code)]

pub mod symbol;
pub use symbol::{create_session_if_not_set_then, sym, with_session_globals, Symbol};

pub mod span;
pub use span::{Position, Span};

pub mod reader;
pub use reader::{MultifileReader, RegionStack, SourceReader};
