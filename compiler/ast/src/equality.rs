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

//! Structural equality over syntax trees.
//!
//! Two trees are syntactically equal when they have the same shape and the
//! same names and literals in the same places, no matter where each piece
//! was written. `PartialEq` on nodes compares spans too; this trait is the
//! one to use when comparing a parse against an expected tree.

use crate::{
    AndExpression, AssignTupleStatement, AssignVariableStatement, Block, CallExpression,
    ConstructorExpression, ConstructorPattern, ConstructorUpdateExpression, Definition, Expression,
    FieldValue, ForeachStatement, FunctionDefinition, Identifier, IfStatement, ListExpression,
    NumberLiteral, OrExpression, Pattern, ProcedureCallStatement, ProcedureDefinition,
    ProgramDefinition, RangeExpression, RepeatStatement, ReturnStatement, Statement,
    StringLiteral, SwitchBranch, SwitchStatement, TupleExpression, TuplePattern, WhileStatement,
    WildcardPattern,
};

/// Position-blind structural equality.
pub trait SyntacticallyEq {
    fn syntactically_eq(&self, other: &Self) -> bool;
}

impl<T: SyntacticallyEq> SyntacticallyEq for Vec<T> {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.syntactically_eq(b))
    }
}

impl<T: SyntacticallyEq> SyntacticallyEq for Option<T> {
    fn syntactically_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.syntactically_eq(b),
            _ => false,
        }
    }
}

impl<T: SyntacticallyEq> SyntacticallyEq for Box<T> {
    fn syntactically_eq(&self, other: &Self) -> bool {
        (**self).syntactically_eq(&**other)
    }
}

impl SyntacticallyEq for Identifier {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.matches(other)
    }
}

impl SyntacticallyEq for Definition {
    fn syntactically_eq(&self, other: &Self) -> bool {
        use Definition::*;
        match (self, other) {
            (Program(a), Program(b)) => a.syntactically_eq(b),
            (Procedure(a), Procedure(b)) => a.syntactically_eq(b),
            (Function(a), Function(b)) => a.syntactically_eq(b),
            _ => false,
        }
    }
}

impl SyntacticallyEq for ProgramDefinition {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.body.syntactically_eq(&other.body)
    }
}

impl SyntacticallyEq for ProcedureDefinition {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.name.syntactically_eq(&other.name)
            && self.params.syntactically_eq(&other.params)
            && self.body.syntactically_eq(&other.body)
    }
}

impl SyntacticallyEq for FunctionDefinition {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.name.syntactically_eq(&other.name)
            && self.params.syntactically_eq(&other.params)
            && self.body.syntactically_eq(&other.body)
    }
}

impl SyntacticallyEq for Statement {
    fn syntactically_eq(&self, other: &Self) -> bool {
        use Statement::*;
        match (self, other) {
            (Block(a), Block(b)) => a.syntactically_eq(b),
            (Return(a), Return(b)) => a.syntactically_eq(b),
            (If(a), If(b)) => a.syntactically_eq(b),
            (Repeat(a), Repeat(b)) => a.syntactically_eq(b),
            (Foreach(a), Foreach(b)) => a.syntactically_eq(b),
            (While(a), While(b)) => a.syntactically_eq(b),
            (Switch(a), Switch(b)) => a.syntactically_eq(b),
            (AssignVariable(a), AssignVariable(b)) => a.syntactically_eq(b),
            (AssignTuple(a), AssignTuple(b)) => a.syntactically_eq(b),
            (ProcedureCall(a), ProcedureCall(b)) => a.syntactically_eq(b),
            _ => false,
        }
    }
}

impl SyntacticallyEq for Block {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.statements.syntactically_eq(&other.statements)
    }
}

impl SyntacticallyEq for ReturnStatement {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.expression.syntactically_eq(&other.expression)
    }
}

impl SyntacticallyEq for IfStatement {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.condition.syntactically_eq(&other.condition)
            && self.then_block.syntactically_eq(&other.then_block)
            && self.else_block.syntactically_eq(&other.else_block)
    }
}

impl SyntacticallyEq for RepeatStatement {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.times.syntactically_eq(&other.times) && self.body.syntactically_eq(&other.body)
    }
}

impl SyntacticallyEq for ForeachStatement {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.index.syntactically_eq(&other.index)
            && self.iterable.syntactically_eq(&other.iterable)
            && self.body.syntactically_eq(&other.body)
    }
}

impl SyntacticallyEq for WhileStatement {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.condition.syntactically_eq(&other.condition) && self.body.syntactically_eq(&other.body)
    }
}

impl SyntacticallyEq for SwitchStatement {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.subject.syntactically_eq(&other.subject)
            && self.branches.syntactically_eq(&other.branches)
    }
}

impl SyntacticallyEq for SwitchBranch {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.pattern.syntactically_eq(&other.pattern) && self.body.syntactically_eq(&other.body)
    }
}

impl SyntacticallyEq for AssignVariableStatement {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.name.syntactically_eq(&other.name) && self.value.syntactically_eq(&other.value)
    }
}

impl SyntacticallyEq for AssignTupleStatement {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.names.syntactically_eq(&other.names) && self.value.syntactically_eq(&other.value)
    }
}

impl SyntacticallyEq for ProcedureCallStatement {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.name.syntactically_eq(&other.name)
            && self.arguments.syntactically_eq(&other.arguments)
    }
}

impl SyntacticallyEq for Pattern {
    fn syntactically_eq(&self, other: &Self) -> bool {
        use Pattern::*;
        match (self, other) {
            (Wildcard(a), Wildcard(b)) => a.syntactically_eq(b),
            (Constructor(a), Constructor(b)) => a.syntactically_eq(b),
            (Tuple(a), Tuple(b)) => a.syntactically_eq(b),
            _ => false,
        }
    }
}

impl SyntacticallyEq for WildcardPattern {
    fn syntactically_eq(&self, _other: &Self) -> bool {
        true
    }
}

impl SyntacticallyEq for ConstructorPattern {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.constructor.syntactically_eq(&other.constructor)
            && self.params.syntactically_eq(&other.params)
    }
}

impl SyntacticallyEq for TuplePattern {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.params.syntactically_eq(&other.params)
    }
}

impl SyntacticallyEq for Expression {
    fn syntactically_eq(&self, other: &Self) -> bool {
        use Expression::*;
        match (self, other) {
            (Variable(a), Variable(b)) => a.syntactically_eq(b),
            (ConstantNumber(a), ConstantNumber(b)) => a.syntactically_eq(b),
            (ConstantString(a), ConstantString(b)) => a.syntactically_eq(b),
            (List(a), List(b)) => a.syntactically_eq(b),
            (Range(a), Range(b)) => a.syntactically_eq(b),
            (Tuple(a), Tuple(b)) => a.syntactically_eq(b),
            (Constructor(a), Constructor(b)) => a.syntactically_eq(b),
            (ConstructorUpdate(a), ConstructorUpdate(b)) => a.syntactically_eq(b),
            (And(a), And(b)) => a.syntactically_eq(b),
            (Or(a), Or(b)) => a.syntactically_eq(b),
            (Call(a), Call(b)) => a.syntactically_eq(b),
            _ => false,
        }
    }
}

impl SyntacticallyEq for NumberLiteral {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl SyntacticallyEq for StringLiteral {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl SyntacticallyEq for ListExpression {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.elements.syntactically_eq(&other.elements)
    }
}

impl SyntacticallyEq for RangeExpression {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.first.syntactically_eq(&other.first)
            && self.second.syntactically_eq(&other.second)
            && self.last.syntactically_eq(&other.last)
    }
}

impl SyntacticallyEq for TupleExpression {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.elements.syntactically_eq(&other.elements)
    }
}

impl SyntacticallyEq for ConstructorExpression {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.constructor.syntactically_eq(&other.constructor)
            && self.fields.syntactically_eq(&other.fields)
    }
}

impl SyntacticallyEq for ConstructorUpdateExpression {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.constructor.syntactically_eq(&other.constructor)
            && self.original.syntactically_eq(&other.original)
            && self.fields.syntactically_eq(&other.fields)
    }
}

impl SyntacticallyEq for FieldValue {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.name.syntactically_eq(&other.name) && self.value.syntactically_eq(&other.value)
    }
}

impl SyntacticallyEq for AndExpression {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.left.syntactically_eq(&other.left) && self.right.syntactically_eq(&other.right)
    }
}

impl SyntacticallyEq for OrExpression {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.left.syntactically_eq(&other.left) && self.right.syntactically_eq(&other.right)
    }
}

impl SyntacticallyEq for CallExpression {
    fn syntactically_eq(&self, other: &Self) -> bool {
        self.function.syntactically_eq(&other.function)
            && self.arguments.syntactically_eq(&other.arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gobstones_span::{create_session_if_not_set_then, Position, Span, Symbol};

    fn ident(name: &str, line: u32) -> Identifier {
        let file = Symbol::intern("test.gbs");
        let pos = Position::new(file, file, line, 1, 0);
        Identifier::new(Symbol::intern(name), Span::new(pos, pos))
    }

    #[test]
    fn equality_ignores_spans() {
        create_session_if_not_set_then(|_| {
            let a = Expression::Variable(ident("x", 1));
            let b = Expression::Variable(ident("x", 7));
            let c = Expression::Variable(ident("y", 1));
            assert!(a.syntactically_eq(&b));
            assert!(!a.syntactically_eq(&c));
            // PartialEq still sees the differing spans.
            assert_ne!(a, b);
        });
    }

    #[test]
    fn equality_distinguishes_node_kinds() {
        create_session_if_not_set_then(|_| {
            let var = Expression::Variable(ident("x", 1));
            let call = Expression::Call(CallExpression {
                function: ident("x", 1),
                arguments: vec![],
                span: Span::dummy(),
            });
            assert!(!var.syntactically_eq(&call));
            assert!(call.syntactically_eq(&call.clone()));
        });
    }
}
