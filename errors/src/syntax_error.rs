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

/// What went wrong, structurally. `expected`/`found` items are vocabulary
/// keys: `T_*` token tags or grammar words such as `"expression"`; the
/// catalog localizes them at rendering time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyntaxErrorKind {
    EmptySource,
    ExpectedButFound { expected: Vec<String>, found: String },
    NumericConstantLeadingZeroes,
    IdentifierMustStartWithAlphabeticCharacter,
    UnclosedStringConstant,
    UnclosedMultilineComment,
    UnknownToken { lexeme: String },
    ObsoleteTupleAssignment,
    PatternTupleCannotBeSingleton,
    AssignmentTupleCannotBeSingleton,
    DefinitionNotYetSupported { keyword: String },
}

impl SyntaxErrorKind {
    /// The stable key of this diagnostic, as consumed by message catalogs.
    pub fn key(&self) -> &'static str {
        use SyntaxErrorKind::*;
        match self {
            EmptySource => "errmsg:empty-source",
            ExpectedButFound { .. } => "errmsg:expected-but-found",
            NumericConstantLeadingZeroes => "errmsg:numeric-constant-should-not-have-leading-zeroes",
            IdentifierMustStartWithAlphabeticCharacter => {
                "errmsg:identifier-must-start-with-alphabetic-character"
            }
            UnclosedStringConstant => "errmsg:unclosed-string-constant",
            UnclosedMultilineComment => "errmsg:unclosed-multiline-comment",
            UnknownToken { .. } => "errmsg:unknown-token",
            ObsoleteTupleAssignment => "errmsg:obsolete-tuple-assignment",
            PatternTupleCannotBeSingleton => "errmsg:pattern-tuple-cannot-be-singleton",
            AssignmentTupleCannotBeSingleton => "errmsg:assignment-tuple-cannot-be-singleton",
            DefinitionNotYetSupported { .. } => "errmsg:definition-not-yet-supported",
        }
    }
}

/// A fatal syntax error. The first one raised aborts the parse.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxError {
    /// Where the offending text starts.
    pub start: Position,
    /// Where it ends, when a meaningful extent is known.
    pub end: Option<Position>,
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    pub fn new(start: Position, kind: SyntaxErrorKind) -> Self {
        SyntaxError { start, end: None, kind }
    }

    pub fn with_end(start: Position, end: Position, kind: SyntaxErrorKind) -> Self {
        SyntaxError { start, end: Some(end), kind }
    }

    pub fn empty_source(start: Position) -> Self {
        SyntaxError::new(start, SyntaxErrorKind::EmptySource)
    }

    /// `expected` and `found` are single vocabulary keys.
    pub fn expected_but_found(expected: impl Into<String>, found: impl Into<String>, start: Position) -> Self {
        SyntaxError::new(start, SyntaxErrorKind::ExpectedButFound {
            expected: vec![expected.into()],
            found: found.into(),
        })
    }

    /// An expected-set rendered as an `<alternative>` list.
    pub fn expected_one_of(expected: &[&str], found: impl Into<String>, start: Position) -> Self {
        SyntaxError::new(start, SyntaxErrorKind::ExpectedButFound {
            expected: expected.iter().map(|word| (*word).to_string()).collect(),
            found: found.into(),
        })
    }

    pub fn numeric_constant_leading_zeroes(start: Position) -> Self {
        SyntaxError::new(start, SyntaxErrorKind::NumericConstantLeadingZeroes)
    }

    pub fn identifier_must_start_with_alphabetic_character(start: Position) -> Self {
        SyntaxError::new(start, SyntaxErrorKind::IdentifierMustStartWithAlphabeticCharacter)
    }

    /// Anchored at the opening quote.
    pub fn unclosed_string_constant(start: Position) -> Self {
        SyntaxError::new(start, SyntaxErrorKind::UnclosedStringConstant)
    }

    /// Anchored at the opening delimiter.
    pub fn unclosed_multiline_comment(start: Position) -> Self {
        SyntaxError::new(start, SyntaxErrorKind::UnclosedMultilineComment)
    }

    pub fn unknown_token(lexeme: impl Into<String>, start: Position) -> Self {
        SyntaxError::new(start, SyntaxErrorKind::UnknownToken { lexeme: lexeme.into() })
    }

    /// Anchored at the `:=` of a tuple assignment missing its `let`.
    pub fn obsolete_tuple_assignment(start: Position) -> Self {
        SyntaxError::new(start, SyntaxErrorKind::ObsoleteTupleAssignment)
    }

    pub fn pattern_tuple_cannot_be_singleton(start: Position) -> Self {
        SyntaxError::new(start, SyntaxErrorKind::PatternTupleCannotBeSingleton)
    }

    pub fn assignment_tuple_cannot_be_singleton(start: Position, end: Position) -> Self {
        SyntaxError::with_end(start, end, SyntaxErrorKind::AssignmentTupleCannotBeSingleton)
    }

    pub fn definition_not_yet_supported(keyword: impl Into<String>, start: Position) -> Self {
        SyntaxError::new(start, SyntaxErrorKind::DefinitionNotYetSupported { keyword: keyword.into() })
    }

    /// Renders the message through `catalog`.
    pub fn message(&self, catalog: &dyn MessageCatalog) -> String {
        catalog.syntax_error_message(&self.kind)
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", "error:".bold().red(), self.message(&English))?;
        write!(f, "\n  --> {}", self.start)?;
        if let Some(end) = &self.end {
            write!(f, "..{end}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}
