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

//! Localization of diagnostics.
//!
//! The front end never bakes user-facing text into its errors: it stores
//! structured kinds and vocabulary keys, and a [`MessageCatalog`] turns
//! them into prose. [`English`] is the catalog used by `Display`; tools
//! embedding the front end provide their own for other languages.

use crate::{SyntaxErrorKind, WarningKind};

/// A localized message catalog.
pub trait MessageCatalog {
    /// Localizes one vocabulary item: a `T_*` token tag or a grammar word
    /// such as `"expression"` or `"procedure call"`.
    fn word(&self, key: &str) -> String;

    /// Renders a set of acceptable alternatives.
    fn alternatives(&self, words: &[String]) -> String {
        let localized: Vec<String> = words.iter().map(|word| self.word(word)).collect();
        match localized.split_last() {
            None => String::new(),
            Some((only, [])) => only.clone(),
            Some((last, init)) => format!("{} or {}", init.join(", "), last),
        }
    }

    /// Renders the message of a syntax error.
    fn syntax_error_message(&self, kind: &SyntaxErrorKind) -> String;

    /// Renders the message of a warning.
    fn warning_message(&self, kind: &WarningKind) -> String;
}

/// The catalog the front end ships with.
pub struct English;

impl MessageCatalog for English {
    fn word(&self, key: &str) -> String {
        let description = match key {
            "T_EOF" => "the end of the input",
            "T_NUM" => "a number",
            "T_STRING" => "a string",
            "T_LOWERID" => "a lowercase identifier",
            "T_UPPERID" => "an uppercase identifier",

            "T_PROGRAM" => "the keyword \"program\"",
            "T_INTERACTIVE" => "the keyword \"interactive\"",
            "T_PROCEDURE" => "the keyword \"procedure\"",
            "T_FUNCTION" => "the keyword \"function\"",
            "T_RETURN" => "the keyword \"return\"",
            "T_IF" => "the keyword \"if\"",
            "T_THEN" => "the keyword \"then\"",
            "T_ELSE" => "the keyword \"else\"",
            "T_REPEAT" => "the keyword \"repeat\"",
            "T_FOREACH" => "the keyword \"foreach\"",
            "T_IN" => "the keyword \"in\"",
            "T_WHILE" => "the keyword \"while\"",
            "T_SWITCH" => "the keyword \"switch\"",
            "T_TO" => "the keyword \"to\"",
            "T_LET" => "the keyword \"let\"",
            "T_NOT" => "the keyword \"not\"",
            "T_DIV" => "the keyword \"div\"",
            "T_MOD" => "the keyword \"mod\"",
            "T_TYPE" => "the keyword \"type\"",
            "T_IS" => "the keyword \"is\"",
            "T_RECORD" => "the keyword \"record\"",
            "T_VARIANT" => "the keyword \"variant\"",
            "T_CASE" => "the keyword \"case\"",
            "T_FIELD" => "the keyword \"field\"",
            "T_UNDERSCORE" => "the wildcard \"_\"",

            "T_LPAREN" => "\"(\"",
            "T_RPAREN" => "\")\"",
            "T_LBRACE" => "\"{\"",
            "T_RBRACE" => "\"}\"",
            "T_LBRACK" => "\"[\"",
            "T_RBRACK" => "\"]\"",
            "T_COMMA" => "\",\"",
            "T_SEMICOLON" => "\";\"",
            "T_RANGE" => "\"..\"",
            "T_GETS" => "\"<-\"",
            "T_PIPE" => "\"|\"",
            "T_ARROW" => "\"->\"",
            "T_ASSIGN" => "\":=\"",
            "T_EQ" => "\"==\"",
            "T_NE" => "\"/=\"",
            "T_LE" => "\"<=\"",
            "T_GE" => "\">=\"",
            "T_LT" => "\"<\"",
            "T_GT" => "\">\"",
            "T_AND" => "\"&&\"",
            "T_OR" => "\"||\"",
            "T_CONCAT" => "\"++\"",
            "T_PLUS" => "\"+\"",
            "T_MINUS" => "\"-\"",
            "T_TIMES" => "\"*\"",
            "T_POW" => "\"^\"",

            "definition" => "a definition",
            "statement" => "a statement",
            "expression" => "an expression",
            "pattern" => "a pattern",
            "procedure call" => "a procedure call",

            other => other,
        };
        description.to_string()
    }

    fn syntax_error_message(&self, kind: &SyntaxErrorKind) -> String {
        use SyntaxErrorKind::*;
        match kind {
            EmptySource => "the program is empty".to_string(),
            ExpectedButFound { expected, found } => {
                let expected = if expected.len() == 1 {
                    self.word(&expected[0])
                } else {
                    format!("one of {}", self.alternatives(expected))
                };
                format!("expected {} but found {}", expected, self.word(found))
            }
            NumericConstantLeadingZeroes => {
                "numeric constants should not start with leading zeroes".to_string()
            }
            IdentifierMustStartWithAlphabeticCharacter => {
                "identifiers must start with an alphabetic character".to_string()
            }
            UnclosedStringConstant => "the string constant is never closed".to_string(),
            UnclosedMultilineComment => "the multi-line comment is never closed".to_string(),
            UnknownToken { lexeme } => format!("unknown token \"{lexeme}\""),
            ObsoleteTupleAssignment => {
                "obsolete tuple assignment: write \"let (x1, ..., xn) := expression\"".to_string()
            }
            PatternTupleCannotBeSingleton => {
                "a tuple pattern cannot have exactly one component".to_string()
            }
            AssignmentTupleCannotBeSingleton => {
                "a tuple assignment cannot have exactly one component".to_string()
            }
            DefinitionNotYetSupported { keyword } => {
                format!("\"{keyword}\" definitions are reserved and not yet supported")
            }
        }
    }

    fn warning_message(&self, kind: &WarningKind) -> String {
        match kind {
            WarningKind::EmptyPragma => "ignoring empty pragma".to_string(),
            WarningKind::UnknownPragma { name } => format!("ignoring unknown pragma \"{name}\""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternatives_render_as_a_list() {
        let words = ["T_COMMA", "T_RANGE", "T_RBRACK"].map(String::from);
        assert_eq!(English.alternatives(&words), "\",\", \"..\" or \"]\"");
        assert_eq!(English.alternatives(&words[..1]), "\",\"");
    }

    #[test]
    fn expected_but_found_messages() {
        let kind = SyntaxErrorKind::ExpectedButFound {
            expected: vec!["T_LOWERID".to_string()],
            found: "T_RPAREN".to_string(),
        };
        assert_eq!(
            English.syntax_error_message(&kind),
            "expected a lowercase identifier but found \")\""
        );
    }
}
