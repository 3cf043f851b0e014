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

use crate::{simple_node_impl, Expression, Identifier, Node};
use gobstones_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

fn write_fields(f: &mut fmt::Formatter, fields: &[FieldValue]) -> fmt::Result {
    let fields: Vec<String> = fields.iter().map(|field| field.to_string()).collect();
    write!(f, "{}", fields.join(", "))
}

/// A constructor application: bare `Ctor`, empty `Ctor()`, or
/// `Ctor(f1 <- e1, ..., fn <- en)` with field initializers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorExpression {
    pub constructor: Identifier,
    pub fields: Vec<FieldValue>,
    pub span: Span,
}

simple_node_impl!(ConstructorExpression);

impl fmt::Display for ConstructorExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.constructor)?;
        if !self.fields.is_empty() {
            write!(f, "(")?;
            write_fields(f, &self.fields)?;
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// A record update `Ctor(original | f1 <- e1, ..., fn <- en)`:
/// fields not mentioned keep the value they have in `original`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorUpdateExpression {
    pub constructor: Identifier,
    pub original: Box<Expression>,
    pub fields: Vec<FieldValue>,
    pub span: Span,
}

simple_node_impl!(ConstructorUpdateExpression);

impl fmt::Display for ConstructorUpdateExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({} | ", self.constructor, self.original)?;
        write_fields(f, &self.fields)?;
        write!(f, ")")
    }
}

/// One `field <- value` binding. Appears only inside constructor and
/// constructor-update expressions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValue {
    pub name: Identifier,
    pub value: Expression,
    pub span: Span,
}

simple_node_impl!(FieldValue);

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} <- {}", self.name, self.value)
    }
}
