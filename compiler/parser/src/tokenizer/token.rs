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

use gobstones_span::{Span, Symbol};

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

/// Represents all valid Gobstones syntax tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    // Lexical grammar
    /// A numeric literal, kept as its digit string.
    Num(String),
    /// A string literal with escapes already resolved.
    StringLit(String),
    /// An identifier starting with a lowercase letter.
    LowerId(Symbol),
    /// An identifier starting with an uppercase letter.
    UpperId(Symbol),

    // Keywords
    Program,
    Interactive,
    Procedure,
    Function,
    Return,
    If,
    Then,
    Else,
    Repeat,
    Foreach,
    In,
    While,
    /// Both `switch` and `match` lex to this tag.
    Switch,
    To,
    Let,
    Not,
    Div,
    Mod,
    Type,
    Is,
    Record,
    Variant,
    Case,
    Field,
    /// The reserved single `_`.
    Underscore,

    // Symbols
    LeftParen,
    RightParen,
    LeftCurly,
    RightCurly,
    LeftSquare,
    RightSquare,
    Comma,
    Semicolon,
    /// `..`
    Range,
    /// `:=`
    Assign,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `<-`
    Gets,
    /// `|`
    Pipe,
    /// `->`
    Arrow,
    /// `==`
    Eq,
    /// `/=`
    Ne,
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `++`
    Concat,
    Plus,
    Minus,
    Times,
    /// `^`
    Pow,

    // Meta
    Eof,
}

lazy_static! {
    /// The reserved words of the language. `match` is a synonym of
    /// `switch`, and the lone `_` is reserved for the wildcard pattern.
    static ref KEYWORDS: HashMap<&'static str, Token> = {
        let mut table = HashMap::new();
        table.insert("program", Token::Program);
        table.insert("interactive", Token::Interactive);
        table.insert("procedure", Token::Procedure);
        table.insert("function", Token::Function);
        table.insert("return", Token::Return);
        table.insert("if", Token::If);
        table.insert("then", Token::Then);
        table.insert("else", Token::Else);
        table.insert("repeat", Token::Repeat);
        table.insert("foreach", Token::Foreach);
        table.insert("in", Token::In);
        table.insert("while", Token::While);
        table.insert("switch", Token::Switch);
        table.insert("match", Token::Switch);
        table.insert("to", Token::To);
        table.insert("let", Token::Let);
        table.insert("not", Token::Not);
        table.insert("div", Token::Div);
        table.insert("mod", Token::Mod);
        table.insert("type", Token::Type);
        table.insert("is", Token::Is);
        table.insert("record", Token::Record);
        table.insert("variant", Token::Variant);
        table.insert("case", Token::Case);
        table.insert("field", Token::Field);
        table.insert("_", Token::Underscore);
        table
    };
}

impl Token {
    /// Looks `lexeme` up in the reserved-word table.
    pub fn keyword(lexeme: &str) -> Option<Token> {
        KEYWORDS.get(lexeme).cloned()
    }

    /// The `T_*` vocabulary key of this token's class, as used in
    /// expected-but-found diagnostics and localized by message catalogs.
    pub fn tag_name(&self) -> &'static str {
        use Token::*;
        match self {
            Num(_) => "T_NUM",
            StringLit(_) => "T_STRING",
            LowerId(_) => "T_LOWERID",
            UpperId(_) => "T_UPPERID",

            Program => "T_PROGRAM",
            Interactive => "T_INTERACTIVE",
            Procedure => "T_PROCEDURE",
            Function => "T_FUNCTION",
            Return => "T_RETURN",
            If => "T_IF",
            Then => "T_THEN",
            Else => "T_ELSE",
            Repeat => "T_REPEAT",
            Foreach => "T_FOREACH",
            In => "T_IN",
            While => "T_WHILE",
            Switch => "T_SWITCH",
            To => "T_TO",
            Let => "T_LET",
            Not => "T_NOT",
            Div => "T_DIV",
            Mod => "T_MOD",
            Type => "T_TYPE",
            Is => "T_IS",
            Record => "T_RECORD",
            Variant => "T_VARIANT",
            Case => "T_CASE",
            Field => "T_FIELD",
            Underscore => "T_UNDERSCORE",

            LeftParen => "T_LPAREN",
            RightParen => "T_RPAREN",
            LeftCurly => "T_LBRACE",
            RightCurly => "T_RBRACE",
            LeftSquare => "T_LBRACK",
            RightSquare => "T_RBRACK",
            Comma => "T_COMMA",
            Semicolon => "T_SEMICOLON",
            Range => "T_RANGE",
            Assign => "T_ASSIGN",
            And => "T_AND",
            Or => "T_OR",
            Gets => "T_GETS",
            Pipe => "T_PIPE",
            Arrow => "T_ARROW",
            Eq => "T_EQ",
            Ne => "T_NE",
            Le => "T_LE",
            Ge => "T_GE",
            Lt => "T_LT",
            Gt => "T_GT",
            Concat => "T_CONCAT",
            Plus => "T_PLUS",
            Minus => "T_MINUS",
            Times => "T_TIMES",
            Pow => "T_POW",

            Eof => "T_EOF",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Token::*;
        match self {
            Num(s) => write!(f, "{s}"),
            StringLit(s) => write!(f, "\"{s}\""),
            LowerId(s) => write!(f, "{s}"),
            UpperId(s) => write!(f, "{s}"),

            Program => write!(f, "program"),
            Interactive => write!(f, "interactive"),
            Procedure => write!(f, "procedure"),
            Function => write!(f, "function"),
            Return => write!(f, "return"),
            If => write!(f, "if"),
            Then => write!(f, "then"),
            Else => write!(f, "else"),
            Repeat => write!(f, "repeat"),
            Foreach => write!(f, "foreach"),
            In => write!(f, "in"),
            While => write!(f, "while"),
            Switch => write!(f, "switch"),
            To => write!(f, "to"),
            Let => write!(f, "let"),
            Not => write!(f, "not"),
            Div => write!(f, "div"),
            Mod => write!(f, "mod"),
            Type => write!(f, "type"),
            Is => write!(f, "is"),
            Record => write!(f, "record"),
            Variant => write!(f, "variant"),
            Case => write!(f, "case"),
            Field => write!(f, "field"),
            Underscore => write!(f, "_"),

            LeftParen => write!(f, "("),
            RightParen => write!(f, ")"),
            LeftCurly => write!(f, "{{"),
            RightCurly => write!(f, "}}"),
            LeftSquare => write!(f, "["),
            RightSquare => write!(f, "]"),
            Comma => write!(f, ","),
            Semicolon => write!(f, ";"),
            Range => write!(f, ".."),
            Assign => write!(f, ":="),
            And => write!(f, "&&"),
            Or => write!(f, "||"),
            Gets => write!(f, "<-"),
            Pipe => write!(f, "|"),
            Arrow => write!(f, "->"),
            Eq => write!(f, "=="),
            Ne => write!(f, "/="),
            Le => write!(f, "<="),
            Ge => write!(f, ">="),
            Lt => write!(f, "<"),
            Gt => write!(f, ">"),
            Concat => write!(f, "++"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Times => write!(f, "*"),
            Pow => write!(f, "^"),

            Eof => write!(f, "<eof>"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

impl SpannedToken {
    /// Returns a dummy token at a dummy span. The parser seeds its cursor
    /// with it; the token itself is never inspected.
    pub const fn dummy() -> Self {
        SpannedToken { token: Token::Semicolon, span: Span::dummy() }
    }
}

impl fmt::Display for SpannedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' @ ", self.token)?;
        self.span.fmt(f)
    }
}
