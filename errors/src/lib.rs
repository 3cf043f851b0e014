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

//! Diagnostics of the Gobstones front end.
//!
//! Errors and warnings carry positions and a structured kind; the text a
//! user sees is produced lazily through a [`MessageCatalog`], so embedders
//! pick the language of the diagnostics, not the compiler.

#![forbid(unsafe_code)]

pub mod catalog;
pub use catalog::{English, MessageCatalog};

pub mod emitter;
pub use emitter::Handler;

pub mod syntax_error;
pub use syntax_error::{SyntaxError, SyntaxErrorKind};

pub mod warning;
pub use warning::{Warning, WarningKind};

use thiserror::Error;

/// The umbrella error of the front end.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GobstonesError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl GobstonesError {
    /// The stable `errmsg:*` key of the underlying diagnostic.
    pub fn key(&self) -> &'static str {
        match self {
            GobstonesError::Syntax(e) => e.kind.key(),
        }
    }
}

/// A `Result` defaulting to [`GobstonesError`].
pub type Result<T, E = GobstonesError> = core::result::Result<T, E>;
