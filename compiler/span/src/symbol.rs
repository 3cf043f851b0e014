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

//! Interned strings.
//!
//! Identifiers, file names and region labels all go through a session-global
//! interner, so a [`Symbol`] is a cheap `Copy` index and equality is an
//! integer comparison.

use fxhash::FxHashMap;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{cell::RefCell, fmt};

/// Pre-interns a fixed table of symbols and exposes each as a constant
/// under the `sym` module, e.g. `sym::unary_minus`.
macro_rules! symbols {
    ($($name:ident: $text:literal,)*) => {
        const PREDEFINED: &[&str] = &[$($text),*];

        #[allow(non_upper_case_globals)]
        pub mod sym {
            use super::Symbol;
            symbols!(@consts 0u32; $($name,)*);
        }
    };
    (@consts $index:expr; $name:ident, $($rest:ident,)*) => {
        pub const $name: Symbol = Symbol::new($index);
        symbols!(@consts $index + 1u32; $($rest,)*);
    };
    (@consts $index:expr;) => {};
}

symbols! {
    // Sentinels for synthesized positions and anonymous input.
    unknown: "(unknown)",
    program_file: "(program)",

    // Names the parser gives to desugared operator applications.
    not: "not",
    eq: "==",
    ne: "/=",
    le: "<=",
    ge: ">=",
    lt: "<",
    gt: ">",
    concat: "++",
    plus: "+",
    minus: "-",
    times: "*",
    pow: "^",
    div: "div",
    modulus: "mod",
    unary_minus: "-(unary)",

    // Pragma vocabulary.
    begin_region: "BEGIN_REGION",
    end_region: "END_REGION",
}

/// An interned string.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    /// Constructs a symbol from a raw interner index.
    /// Only meaningful for the `sym::*` constants above.
    pub const fn new(index: u32) -> Self {
        Symbol(index)
    }

    /// Interns `string`, returning its symbol.
    pub fn intern(string: &str) -> Self {
        with_session_globals(|session_globals| session_globals.symbol_interner.intern(string))
    }

    /// Returns the string this symbol stands for.
    pub fn as_str(self) -> &'static str {
        with_session_globals(|session_globals| session_globals.symbol_interner.get(self))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SymbolVisitor;

        impl de::Visitor<'_> for SymbolVisitor {
            type Value = Symbol;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an interned string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Symbol, E> {
                Ok(Symbol::intern(value))
            }
        }

        deserializer.deserialize_str(SymbolVisitor)
    }
}

/// The interner proper. Strings are leaked on first interning; a front end
/// session holds a bounded set of distinct names, so the arena lives as long
/// as the session globals anyway.
struct Interner {
    inner: RefCell<InternerInner>,
}

#[derive(Default)]
struct InternerInner {
    names: FxHashMap<&'static str, Symbol>,
    strings: Vec<&'static str>,
}

impl Interner {
    fn prefilled() -> Self {
        let mut inner = InternerInner::default();
        for &string in PREDEFINED {
            let symbol = Symbol(inner.strings.len() as u32);
            inner.names.insert(string, symbol);
            inner.strings.push(string);
        }
        Interner { inner: RefCell::new(inner) }
    }

    fn intern(&self, string: &str) -> Symbol {
        let mut inner = self.inner.borrow_mut();
        if let Some(&symbol) = inner.names.get(string) {
            return symbol;
        }

        let string: &'static str = Box::leak(string.to_owned().into_boxed_str());
        let symbol = Symbol(inner.strings.len() as u32);
        inner.names.insert(string, symbol);
        inner.strings.push(string);
        symbol
    }

    fn get(&self, symbol: Symbol) -> &'static str {
        self.inner.borrow().strings[symbol.0 as usize]
    }
}

/// Per-session global state: for now, just the symbol interner.
pub struct SessionGlobals {
    symbol_interner: Interner,
}

impl SessionGlobals {
    fn new() -> Self {
        SessionGlobals { symbol_interner: Interner::prefilled() }
    }
}

scoped_tls::scoped_thread_local!(static SESSION_GLOBALS: SessionGlobals);

/// Creates the session globals if they don't exist on this thread,
/// then runs `f`. Entry points and tests wrap themselves in this.
pub fn create_session_if_not_set_then<R>(f: impl FnOnce(&SessionGlobals) -> R) -> R {
    if SESSION_GLOBALS.is_set() {
        SESSION_GLOBALS.with(f)
    } else {
        let session_globals = SessionGlobals::new();
        SESSION_GLOBALS.set(&session_globals, || SESSION_GLOBALS.with(f))
    }
}

/// Runs `f` with the current session globals. Panics if none are set.
pub fn with_session_globals<R>(f: impl FnOnce(&SessionGlobals) -> R) -> R {
    SESSION_GLOBALS.with(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_idempotent() {
        create_session_if_not_set_then(|_| {
            let a = Symbol::intern("hola");
            let b = Symbol::intern("hola");
            let c = Symbol::intern("chau");
            assert_eq!(a, b);
            assert_ne!(a, c);
            assert_eq!(a.as_str(), "hola");
        });
    }

    #[test]
    fn predefined_symbols_resolve() {
        create_session_if_not_set_then(|_| {
            assert_eq!(sym::unary_minus.as_str(), "-(unary)");
            assert_eq!(sym::unknown.as_str(), "(unknown)");
            assert_eq!(Symbol::intern("mod"), sym::modulus);
        });
    }
}
