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

//! Position-tracking character readers.
//!
//! A [`SourceReader`] is a pure value: every advancement returns a new
//! reader and never mutates the old one, so any [`Position`] handed out
//! stays valid forever. The tokenizer threads readers through itself and
//! asks a [`MultifileReader`] for the next file when the current one runs
//! dry.

use crate::{sym, Position, Symbol};

use indexmap::IndexMap;
use smallvec::SmallVec;
use std::rc::Rc;

/// The stack of region labels opened by `BEGIN_REGION` pragmas.
/// Regions open and close on the reader, not on the file, so the stack is
/// handed across file boundaries as-is.
pub type RegionStack = SmallVec<[Symbol; 2]>;

/// An immutable cursor over a single file's text.
#[derive(Clone, Debug)]
pub struct SourceReader {
    file: Symbol,
    source: Rc<str>,
    offset: usize,
    line: u32,
    col: u32,
    regions: RegionStack,
}

impl SourceReader {
    /// A reader at the start of `source`, with an empty region stack.
    pub fn new(file: Symbol, source: Rc<str>) -> Self {
        SourceReader::with_regions(file, source, RegionStack::new())
    }

    /// A reader at the start of `source` that keeps the region labels
    /// opened by an earlier file.
    pub fn with_regions(file: Symbol, source: Rc<str>, regions: RegionStack) -> Self {
        SourceReader { file, source, offset: 0, line: 1, col: 1, regions }
    }

    /// The file this reader runs over.
    pub fn file(&self) -> Symbol {
        self.file
    }

    /// The character under the cursor, or [`None`] at end of input.
    pub fn peek(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Whether the remaining input starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.source[self.offset..].starts_with(prefix)
    }

    /// The position of the character under the cursor.
    pub fn position(&self) -> Position {
        Position::new(self.file, self.current_region(), self.line, self.col, self.offset as u32)
    }

    fn current_region(&self) -> Symbol {
        self.regions.last().copied().unwrap_or(self.file)
    }

    /// Advances past one character, updating line and column.
    /// Advancing past `\n` moves to column 1 of the next line; any other
    /// character, tabs included, moves one column to the right.
    pub fn consume_char(&self) -> Self {
        let mut next = self.clone();
        if let Some(c) = self.peek() {
            next.offset += c.len_utf8();
            if c == '\n' {
                next.line += 1;
                next.col = 1;
            } else {
                next.col += 1;
            }
        }
        next
    }

    /// Advances past `string`, which must be the next input.
    pub fn consume_str(&self, string: &str) -> Self {
        debug_assert!(self.starts_with(string));
        let mut next = self.clone();
        for _ in string.chars() {
            next = next.consume_char();
        }
        next
    }

    /// Advances the offset past one character without touching line or
    /// column. Pragma text is consumed this way so that positions outside
    /// the pragma are unaffected.
    pub fn consume_invisible_char(&self) -> Self {
        let mut next = self.clone();
        if let Some(c) = self.peek() {
            next.offset += c.len_utf8();
        }
        next
    }

    /// Invisibly advances past `string`, which must be the next input.
    pub fn consume_invisible_str(&self, string: &str) -> Self {
        debug_assert!(self.starts_with(string));
        let mut next = self.clone();
        next.offset += string.len();
        next
    }

    /// Pushes a region label; positions created from the returned reader
    /// carry it until the matching [`SourceReader::end_region`].
    pub fn begin_region(&self, region: Symbol) -> Self {
        let mut next = self.clone();
        next.regions.push(region);
        next
    }

    /// Pops the innermost region label. Popping an empty stack is a no-op.
    pub fn end_region(&self) -> Self {
        let mut next = self.clone();
        next.regions.pop();
        next
    }

    /// The open region labels, innermost last.
    pub fn regions(&self) -> &RegionStack {
        &self.regions
    }
}

/// An ordered sequence of named sources, served one reader at a time.
#[derive(Clone, Debug)]
pub struct MultifileReader {
    files: Vec<(Symbol, Rc<str>)>,
    index: usize,
}

impl MultifileReader {
    /// A single anonymous source, filed under `(program)`.
    pub fn from_string(source: &str) -> Self {
        MultifileReader { files: vec![(sym::program_file, Rc::from(source))], index: 0 }
    }

    /// Named sources; the map's iteration order is the concatenation order.
    /// An empty map behaves like a single empty anonymous source.
    pub fn from_files(files: IndexMap<String, String>) -> Self {
        if files.is_empty() {
            return MultifileReader::from_string("");
        }
        let files = files
            .into_iter()
            .map(|(name, source)| (Symbol::intern(&name), Rc::from(source.as_str())))
            .collect();
        MultifileReader { files, index: 0 }
    }

    /// Whether any file remains to be served.
    pub fn more_files(&self) -> bool {
        self.index < self.files.len()
    }

    /// Serves a reader over the next file, carrying over `regions`.
    pub fn next_file(&mut self, regions: RegionStack) -> Option<SourceReader> {
        let (file, source) = self.files.get(self.index)?.clone();
        self.index += 1;
        Some(SourceReader::with_regions(file, source, regions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_session_if_not_set_then;

    fn reader(source: &str) -> SourceReader {
        SourceReader::new(Symbol::intern("test.gbs"), Rc::from(source))
    }

    #[test]
    fn advancing_updates_lines_and_columns() {
        create_session_if_not_set_then(|_| {
            let r = reader("ab\nc");
            assert_eq!(r.peek(), Some('a'));
            let r = r.consume_char();
            assert_eq!((r.position().line, r.position().col), (1, 2));
            let r = r.consume_char().consume_char();
            assert_eq!((r.position().line, r.position().col), (2, 1));
            assert_eq!(r.peek(), Some('c'));
            let r = r.consume_char();
            assert!(r.is_eof());
        });
    }

    #[test]
    fn invisible_advancement_leaves_positions_alone() {
        create_session_if_not_set_then(|_| {
            let r = reader("xyz rest");
            let r = r.consume_invisible_str("xyz");
            let pos = r.position();
            assert_eq!((pos.line, pos.col), (1, 1));
            assert_eq!(pos.offset, 3);
            assert_eq!(r.peek(), Some(' '));
        });
    }

    #[test]
    fn consuming_is_persistent() {
        create_session_if_not_set_then(|_| {
            let r = reader("ab");
            let advanced = r.consume_char();
            // The original reader is untouched.
            assert_eq!(r.peek(), Some('a'));
            assert_eq!(advanced.peek(), Some('b'));
        });
    }

    #[test]
    fn regions_override_the_file_label() {
        create_session_if_not_set_then(|_| {
            let r = reader("abc");
            assert_eq!(r.position().region, Symbol::intern("test.gbs"));
            let r = r.begin_region(Symbol::intern("A")).begin_region(Symbol::intern("B"));
            assert_eq!(r.position().region, Symbol::intern("B"));
            let r = r.end_region();
            assert_eq!(r.position().region, Symbol::intern("A"));
            let r = r.end_region();
            assert_eq!(r.position().region, Symbol::intern("test.gbs"));
            // A stray pop stays harmless.
            assert_eq!(r.end_region().position().region, Symbol::intern("test.gbs"));
        });
    }

    #[test]
    fn multifile_serves_files_in_declaration_order() {
        create_session_if_not_set_then(|_| {
            let mut files = IndexMap::new();
            files.insert("a.gbs".to_string(), "aa".to_string());
            files.insert("b.gbs".to_string(), "bb".to_string());
            let mut multi = MultifileReader::from_files(files);

            let first = multi.next_file(RegionStack::new()).unwrap();
            assert_eq!(first.file(), Symbol::intern("a.gbs"));
            assert!(multi.more_files());

            let regions: RegionStack = [Symbol::intern("R")].into_iter().collect();
            let second = multi.next_file(regions).unwrap();
            assert_eq!(second.file(), Symbol::intern("b.gbs"));
            // The region stack survives the file boundary.
            assert_eq!(second.position().region, Symbol::intern("R"));
            assert!(!multi.more_files());
            assert!(multi.next_file(RegionStack::new()).is_none());
        });
    }
}
