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

use crate::tokenizer::{SpannedToken, Token};

use gobstones_errors::{Handler, Result, SyntaxError, Warning};
use gobstones_span::{MultifileReader, RegionStack, SourceReader, Span, Symbol};

use smallvec::SmallVec;

/// The symbol table, tried in order: maximal munch requires every symbol
/// to come before its proper prefixes.
const SYMBOLS: &[(&str, Token)] = &[
    ("(", Token::LeftParen),
    (")", Token::RightParen),
    ("{", Token::LeftCurly),
    ("}", Token::RightCurly),
    ("[", Token::LeftSquare),
    ("]", Token::RightSquare),
    (",", Token::Comma),
    (";", Token::Semicolon),
    ("..", Token::Range),
    (":=", Token::Assign),
    ("&&", Token::And),
    ("||", Token::Or),
    ("<-", Token::Gets),
    ("|", Token::Pipe),
    ("->", Token::Arrow),
    ("==", Token::Eq),
    ("/=", Token::Ne),
    ("<=", Token::Le),
    (">=", Token::Ge),
    ("<", Token::Lt),
    (">", Token::Gt),
    ("++", Token::Concat),
    ("+", Token::Plus),
    ("-", Token::Minus),
    ("*", Token::Times),
    ("^", Token::Pow),
];

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '\''
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '\''
}

fn unescape(c: char) -> char {
    match c {
        'a' => '\x07',
        'b' => '\x08',
        'f' => '\x0C',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\x0B',
        // Any other escaped character stands for itself.
        other => other,
    }
}

/// Produces the token stream of one or more sources.
///
/// The lexer owns its reader cursor; warnings go to the borrowed handler.
/// Once the last file is exhausted, [`Lexer::next_token`] keeps returning
/// an EOF token at the terminal position.
pub struct Lexer<'a> {
    handler: &'a Handler,
    files: MultifileReader,
    reader: SourceReader,
    /// State of the obsolete-tuple-assignment automaton; see
    /// [`Lexer::check_obsolete_tuple_assignment`].
    tuple_state: u8,
}

impl<'a> Lexer<'a> {
    pub fn new(handler: &'a Handler, mut files: MultifileReader) -> Self {
        let reader = files
            .next_file(RegionStack::new())
            .unwrap_or_else(|| SourceReader::new(gobstones_span::sym::program_file, "".into()));
        Lexer { handler, files, reader, tuple_state: 1 }
    }

    /// The next token of the stream. Whitespace, comments and pragmas are
    /// skipped first, crossing file boundaries as needed.
    pub fn next_token(&mut self) -> Result<SpannedToken> {
        self.skip_whitespace_and_comments()?;

        let start = self.reader.position();
        let spanned = if self.reader.is_eof() {
            SpannedToken { token: Token::Eof, span: Span::new(start, start) }
        } else {
            let c = self.reader.peek().unwrap_or_default();
            if c.is_ascii_digit() {
                self.read_number()?
            } else if is_identifier_start(c) {
                self.read_identifier()?
            } else if c == '"' {
                self.read_string()?
            } else {
                self.read_symbol()?
            }
        };

        self.check_obsolete_tuple_assignment(&spanned)?;
        Ok(spanned)
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<()> {
        loop {
            if self.reader.is_eof() {
                if !self.files.more_files() {
                    return Ok(());
                }
                let regions = self.reader.regions().clone();
                match self.files.next_file(regions) {
                    Some(reader) => self.reader = reader,
                    None => return Ok(()),
                }
            } else if self.reader.peek().is_some_and(char::is_whitespace) {
                self.reader = self.reader.consume_char();
            } else if self.reader.starts_with("/*@") {
                self.read_pragma()?;
            } else if self.reader.starts_with("/*") {
                self.skip_block_comment("/*", "*/")?;
            } else if self.reader.starts_with("{-") {
                self.skip_block_comment("{-", "-}")?;
            } else if self.reader.starts_with("--")
                || self.reader.starts_with("//")
                || self.reader.starts_with("#")
            {
                self.skip_line_comment();
            } else {
                return Ok(());
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while self.reader.peek().is_some_and(|c| c != '\n') {
            self.reader = self.reader.consume_char();
        }
    }

    /// Skips a block comment. Nesting is tracked per delimiter pair: the
    /// opener that got us here is the only one that nests.
    fn skip_block_comment(&mut self, open: &str, close: &str) -> Result<()> {
        let start = self.reader.position();
        self.reader = self.reader.consume_str(open);
        let mut depth = 1usize;
        while depth > 0 {
            if self.reader.is_eof() {
                return Err(SyntaxError::unclosed_multiline_comment(start).into());
            }
            if self.reader.starts_with(open) {
                depth += 1;
                self.reader = self.reader.consume_str(open);
            } else if self.reader.starts_with(close) {
                depth -= 1;
                self.reader = self.reader.consume_str(close);
            } else {
                self.reader = self.reader.consume_char();
            }
        }
        Ok(())
    }

    /// Evaluates a `/*@part1@...@partN@*/` pragma. The pragma text is
    /// consumed with the invisible reader operations, so positions outside
    /// it never see the pragma's characters.
    fn read_pragma(&mut self) -> Result<()> {
        let start = self.reader.position();
        self.reader = self.reader.consume_invisible_str("/*");

        let mut parts: SmallVec<[String; 2]> = SmallVec::new();
        loop {
            // The cursor sits on a '@'.
            self.reader = self.reader.consume_invisible_char();
            if self.reader.starts_with("*/") {
                self.reader = self.reader.consume_invisible_str("*/");
                break;
            }
            let mut part = String::new();
            loop {
                match self.reader.peek() {
                    None => return Err(SyntaxError::unclosed_multiline_comment(start).into()),
                    Some('@') => break,
                    Some(c) => {
                        part.push(c);
                        self.reader = self.reader.consume_invisible_char();
                    }
                }
            }
            parts.push(part);
        }

        match parts.as_slice() {
            [] => self.handler.emit_warning(Warning::empty_pragma(start)),
            [kind, name] if kind == "BEGIN_REGION" => {
                self.reader = self.reader.begin_region(Symbol::intern(name));
            }
            [kind] if kind == "END_REGION" => {
                self.reader = self.reader.end_region();
            }
            [name, ..] => self.handler.emit_warning(Warning::unknown_pragma(name.clone(), start)),
        }
        Ok(())
    }

    fn read_number(&mut self) -> Result<SpannedToken> {
        let start = self.reader.position();
        let mut digits = String::new();
        while let Some(c) = self.reader.peek().filter(char::is_ascii_digit) {
            digits.push(c);
            self.reader = self.reader.consume_char();
        }
        if digits.len() >= 2 && digits.starts_with('0') {
            return Err(SyntaxError::numeric_constant_leading_zeroes(start).into());
        }
        let span = Span::new(start, self.reader.position());
        Ok(SpannedToken { token: Token::Num(digits), span })
    }

    fn read_identifier(&mut self) -> Result<SpannedToken> {
        let start = self.reader.position();
        let mut lexeme = String::new();
        while let Some(c) = self.reader.peek().filter(|c| is_identifier_char(*c)) {
            lexeme.push(c);
            self.reader = self.reader.consume_char();
        }

        let token = match Token::keyword(&lexeme) {
            Some(keyword) => keyword,
            None if lexeme.starts_with(|c| c == '_' || c == '\'') => {
                return Err(SyntaxError::identifier_must_start_with_alphabetic_character(start).into());
            }
            None if lexeme.starts_with(char::is_uppercase) => Token::UpperId(Symbol::intern(&lexeme)),
            None => Token::LowerId(Symbol::intern(&lexeme)),
        };
        let span = Span::new(start, self.reader.position());
        Ok(SpannedToken { token, span })
    }

    fn read_string(&mut self) -> Result<SpannedToken> {
        let start = self.reader.position();
        self.reader = self.reader.consume_char();

        let mut value = String::new();
        loop {
            match self.reader.peek() {
                None => return Err(SyntaxError::unclosed_string_constant(start).into()),
                Some('"') => {
                    self.reader = self.reader.consume_char();
                    break;
                }
                Some('\\') => {
                    self.reader = self.reader.consume_char();
                    match self.reader.peek() {
                        None => return Err(SyntaxError::unclosed_string_constant(start).into()),
                        Some(c) => {
                            value.push(unescape(c));
                            self.reader = self.reader.consume_char();
                        }
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.reader = self.reader.consume_char();
                }
            }
        }
        let span = Span::new(start, self.reader.position());
        Ok(SpannedToken { token: Token::StringLit(value), span })
    }

    fn read_symbol(&mut self) -> Result<SpannedToken> {
        let start = self.reader.position();
        for (lexeme, token) in SYMBOLS {
            if self.reader.starts_with(lexeme) {
                self.reader = self.reader.consume_str(lexeme);
                let span = Span::new(start, self.reader.position());
                return Ok(SpannedToken { token: token.clone(), span });
            }
        }
        let offending: String = self.reader.peek().into_iter().collect();
        Err(SyntaxError::unknown_token(offending, start).into())
    }

    /// Observes the emitted tag stream with a five-state automaton that
    /// catches the obsolete `(x1, ..., xn) := e` form (a tuple assignment
    /// missing its `let`).
    ///
    /// States: 1 neutral; 2 after `(` or `,` in a parenthesized name list
    /// not preceded by `let`; 3 after a lowercase identifier there; 4 after
    /// the closing `)`; 5 after `let`. Tags without a transition reset to 1.
    fn check_obsolete_tuple_assignment(&mut self, spanned: &SpannedToken) -> Result<()> {
        use Token::*;
        self.tuple_state = match (self.tuple_state, &spanned.token) {
            (1, LeftParen) => 2,
            (1, Let) => 5,
            (2, LowerId(_)) => 3,
            (3, Comma) => 2,
            (3, RightParen) => 4,
            (4, Assign) => {
                return Err(SyntaxError::obsolete_tuple_assignment(spanned.span.start).into());
            }
            (5, LeftParen) => 1,
            _ => 1,
        };
        Ok(())
    }
}
