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

//! The tokenizer to convert Gobstones code text into tokens.
//!
//! This module contains the [`tokenize()`] method which breaks down source
//! text into [`SpannedToken`]s, and the incremental [`Lexer`] behind it.

pub mod token;
pub use self::token::*;

pub mod lexer;
pub use self::lexer::*;

use gobstones_errors::{Handler, Result};
use gobstones_span::MultifileReader;

use tracing::trace;

/// Creates a new vector of spanned tokens from the given sources.
/// The terminal EOF token is included.
pub fn tokenize(handler: &Handler, files: MultifileReader) -> Result<Vec<SpannedToken>> {
    let mut lexer = Lexer::new(handler, files);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = matches!(token.token, Token::Eof);
        tokens.push(token);
        if done {
            trace!("tokenized {} token(s)", tokens.len());
            return Ok(tokens);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gobstones_errors::{GobstonesError, SyntaxErrorKind, WarningKind};
    use gobstones_span::{create_session_if_not_set_then, Symbol};
    use indexmap::IndexMap;

    fn tokens_of(source: &str) -> Vec<SpannedToken> {
        let handler = Handler::new();
        tokenize(&handler, MultifileReader::from_string(source)).unwrap()
    }

    fn error_of(source: &str) -> GobstonesError {
        let handler = Handler::new();
        tokenize(&handler, MultifileReader::from_string(source)).unwrap_err()
    }

    fn tags_of(source: &str) -> Vec<&'static str> {
        tokens_of(source).iter().map(|t| t.token.tag_name()).collect()
    }

    #[test]
    fn tokenizes_a_representative_source() {
        create_session_if_not_set_then(|_| {
            let raw = r#"program { x := f(12, "ab") Poner(Rojo) }"#;
            assert_eq!(tags_of(raw), vec![
                "T_PROGRAM", "T_LBRACE", "T_LOWERID", "T_ASSIGN", "T_LOWERID", "T_LPAREN",
                "T_NUM", "T_COMMA", "T_STRING", "T_RPAREN", "T_UPPERID", "T_LPAREN",
                "T_UPPERID", "T_RPAREN", "T_RBRACE", "T_EOF",
            ]);
        });
    }

    #[test]
    fn symbols_munch_maximally() {
        create_session_if_not_set_then(|_| {
            use Token::*;
            let raw = ".. := && || <- | -> == /= <= >= < > ++ + - * ^";
            let expected = vec![
                Range, Assign, And, Or, Gets, Pipe, Arrow, Eq, Ne, Le, Ge, Lt, Gt, Concat,
                Plus, Minus, Times, Pow, Eof,
            ];
            let actual: Vec<Token> = tokens_of(raw).into_iter().map(|t| t.token).collect();
            assert_eq!(actual, expected);
            // Unseparated runs still split on longest-first.
            assert_eq!(tags_of("<=<-<"), vec!["T_LE", "T_GETS", "T_LT", "T_EOF"]);
            assert_eq!(tags_of("a<-b"), vec!["T_LOWERID", "T_GETS", "T_LOWERID", "T_EOF"]);
        });
    }

    #[test]
    fn keywords_and_identifiers() {
        create_session_if_not_set_then(|_| {
            assert_eq!(tags_of("program xs Rojo x' foo_bar"), vec![
                "T_PROGRAM", "T_LOWERID", "T_UPPERID", "T_LOWERID", "T_LOWERID", "T_EOF",
            ]);
            // `switch` and `match` lex to the same tag; `_` is reserved.
            assert_eq!(tags_of("switch match _"), vec!["T_SWITCH", "T_SWITCH", "T_UNDERSCORE", "T_EOF"]);

            let tokens = tokens_of("foo Foo");
            assert_eq!(tokens[0].token, Token::LowerId(Symbol::intern("foo")));
            assert_eq!(tokens[1].token, Token::UpperId(Symbol::intern("Foo")));
        });
    }

    #[test]
    fn identifiers_must_start_alphabetic() {
        create_session_if_not_set_then(|_| {
            for source in ["_x", "'a"] {
                let err = error_of(source);
                assert_eq!(err.key(), "errmsg:identifier-must-start-with-alphabetic-character");
            }
        });
    }

    #[test]
    fn numbers_reject_leading_zeroes() {
        create_session_if_not_set_then(|_| {
            assert_eq!(tokens_of("0")[0].token, Token::Num("0".to_string()));
            assert_eq!(tokens_of("1007")[0].token, Token::Num("1007".to_string()));
            assert_eq!(
                error_of("007").key(),
                "errmsg:numeric-constant-should-not-have-leading-zeroes"
            );
        });
    }

    #[test]
    fn string_escapes_resolve() {
        create_session_if_not_set_then(|_| {
            let tokens = tokens_of(r#""a\tb\nc\"d\\e\qf""#);
            assert_eq!(tokens[0].token, Token::StringLit("a\tb\nc\"d\\eqf".to_string()));
            // Literal newlines are allowed inside strings.
            let tokens = tokens_of("\"a\nb\"");
            assert_eq!(tokens[0].token, Token::StringLit("a\nb".to_string()));
        });
    }

    #[test]
    fn strings_are_opaque_to_comment_syntax() {
        create_session_if_not_set_then(|_| {
            let tokens = tokens_of(r#""/* not a comment */""#);
            assert_eq!(tokens[0].token, Token::StringLit("/* not a comment */".to_string()));
        });
    }

    #[test]
    fn unclosed_string_is_anchored_at_the_opening_quote() {
        create_session_if_not_set_then(|_| {
            let err = error_of("x := \"abc");
            assert_eq!(err.key(), "errmsg:unclosed-string-constant");
            let GobstonesError::Syntax(err) = err;
            assert_eq!((err.start.line, err.start.col), (1, 6));
        });
    }

    #[test]
    fn comments_of_every_form_are_skipped() {
        create_session_if_not_set_then(|_| {
            let raw = "-- dashes\n// slashes\n# hash\n/* block */ {- haskell -} 42";
            assert_eq!(tags_of(raw), vec!["T_NUM", "T_EOF"]);
        });
    }

    #[test]
    fn block_comments_nest_per_delimiter() {
        create_session_if_not_set_then(|_| {
            assert_eq!(tags_of("/* outer /* inner */ still */ 1"), vec!["T_NUM", "T_EOF"]);
            assert_eq!(tags_of("{- outer {- inner -} still -} 1"), vec!["T_NUM", "T_EOF"]);
            let err = error_of("/* never closed /* */");
            assert_eq!(err.key(), "errmsg:unclosed-multiline-comment");
            let GobstonesError::Syntax(err) = err;
            assert_eq!((err.start.line, err.start.col), (1, 1));
        });
    }

    #[test]
    fn unknown_characters_are_rejected() {
        create_session_if_not_set_then(|_| {
            for source in ["&", "=", ":", ".", "?", "/"] {
                let err = error_of(source);
                assert_eq!(err.key(), "errmsg:unknown-token", "source: {source}");
            }
        });
    }

    #[test]
    fn eof_repeats_at_the_terminal_position() {
        create_session_if_not_set_then(|_| {
            let handler = Handler::new();
            let mut lexer = Lexer::new(&handler, MultifileReader::from_string("ab\n"));
            assert_eq!(lexer.next_token().unwrap().token.tag_name(), "T_LOWERID");
            let first_eof = lexer.next_token().unwrap();
            let second_eof = lexer.next_token().unwrap();
            assert_eq!(first_eof.token, Token::Eof);
            assert_eq!(second_eof, first_eof);
            assert_eq!((first_eof.span.start.line, first_eof.span.start.col), (2, 1));
        });
    }

    #[test]
    fn token_positions_track_lines_and_columns() {
        create_session_if_not_set_then(|_| {
            let tokens = tokens_of("ab cd\n  efg");
            let at = |i: usize| {
                let span = tokens[i].span;
                (span.start.line, span.start.col, span.end.line, span.end.col)
            };
            assert_eq!(at(0), (1, 1, 1, 3));
            assert_eq!(at(1), (1, 4, 1, 6));
            assert_eq!(at(2), (2, 3, 2, 6));
        });
    }

    #[test]
    fn pragmas_are_zero_width_and_scope_regions() {
        create_session_if_not_set_then(|_| {
            let raw = "/*@BEGIN_REGION@A@*/x/*@END_REGION@*/ y";
            let tokens = tokens_of(raw);
            // The pragma advances no columns.
            assert_eq!((tokens[0].span.start.line, tokens[0].span.start.col), (1, 1));
            assert_eq!(tokens[0].span.start.region, Symbol::intern("A"));
            // After END_REGION the label falls back to the file.
            assert_eq!(tokens[1].span.start.region, Symbol::intern("(program)"));
            assert_eq!((tokens[1].span.start.line, tokens[1].span.start.col), (1, 3));
        });
    }

    #[test]
    fn stray_pragmas_warn_and_are_skipped() {
        create_session_if_not_set_then(|_| {
            let handler = Handler::new();
            let tokens =
                tokenize(&handler, MultifileReader::from_string("/*@*/ 1 /*@FROB@x@y@*/")).unwrap();
            assert_eq!(tokens[0].token, Token::Num("1".to_string()));
            let warnings = handler.take_warnings();
            assert_eq!(warnings.len(), 2);
            assert_eq!(warnings[0].kind, WarningKind::EmptyPragma);
            assert_eq!(warnings[1].kind, WarningKind::UnknownPragma { name: "FROB".to_string() });
        });
    }

    #[test]
    fn obsolete_tuple_assignment_is_detected() {
        create_session_if_not_set_then(|_| {
            let err = error_of("program { (x, y) := f() }");
            assert_eq!(err.key(), "errmsg:obsolete-tuple-assignment");
            let GobstonesError::Syntax(err) = err;
            assert_eq!(err.kind, SyntaxErrorKind::ObsoleteTupleAssignment);
            // Anchored at the `:=`.
            assert_eq!((err.start.line, err.start.col), (1, 18));
        });
    }

    #[test]
    fn let_tuple_assignment_passes_the_automaton() {
        create_session_if_not_set_then(|_| {
            assert_eq!(tags_of("let (x, y) := f()").last(), Some(&"T_EOF"));
            // A call statement followed by an ordinary assignment stays legal.
            assert_eq!(tags_of("P(x, y) z := 1").last(), Some(&"T_EOF"));
        });
    }

    #[test]
    fn multiple_files_concatenate_and_keep_provenance() {
        create_session_if_not_set_then(|_| {
            let mut files = IndexMap::new();
            files.insert("one.gbs".to_string(), "aa /*@BEGIN_REGION@R@*/".to_string());
            files.insert("two.gbs".to_string(), "bb".to_string());
            let handler = Handler::new();
            let tokens = tokenize(&handler, MultifileReader::from_files(files)).unwrap();

            assert_eq!(tokens[0].span.start.file, Symbol::intern("one.gbs"));
            assert_eq!(tokens[1].span.start.file, Symbol::intern("two.gbs"));
            // The region opened in the first file is still open in the second.
            assert_eq!(tokens[1].span.start.region, Symbol::intern("R"));
            assert_eq!((tokens[1].span.start.line, tokens[1].span.start.col), (1, 1));
        });
    }
}
