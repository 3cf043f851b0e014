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

use crate::{parse, parse_files};

use gobstones_ast::*;
use gobstones_errors::{GobstonesError, Handler, SyntaxError, SyntaxErrorKind, WarningKind};
use gobstones_span::{create_session_if_not_set_then, Position, Span, Symbol};

use indexmap::IndexMap;

fn parse_ok(source: &str) -> Vec<Definition> {
    let handler = Handler::new();
    parse(&handler, source).unwrap()
}

fn parse_err(source: &str) -> SyntaxError {
    let handler = Handler::new();
    let GobstonesError::Syntax(error) = parse(&handler, source).unwrap_err();
    error
}

/// The statements of the sole `program` definition of `source`.
fn program_statements(source: &str) -> Vec<Statement> {
    let definitions = parse_ok(source);
    assert_eq!(definitions.len(), 1);
    match definitions.into_iter().next().unwrap() {
        Definition::Program(program) => program.body.statements,
        other => panic!("expected a program definition, got {other}"),
    }
}

/// The value assigned by the single `x := ...` statement of `source`'s
/// program.
fn assigned_value(source: &str) -> Expression {
    match program_statements(source).into_iter().next().unwrap() {
        Statement::AssignVariable(assignment) => assignment.value,
        other => panic!("expected an assignment, got {other}"),
    }
}

fn expected_but_found(error: &SyntaxError, expected: &[&str], found: &str) {
    assert_eq!(error.kind, SyntaxErrorKind::ExpectedButFound {
        expected: expected.iter().map(|word| (*word).to_string()).collect(),
        found: found.to_string(),
    });
}

fn line_col(position: Position) -> (u32, u32) {
    (position.line, position.col)
}

// Expression builders for structural comparisons; spans are dummies since
// `SyntacticallyEq` ignores them.

fn ident(name: &str) -> Identifier {
    Identifier::new(Symbol::intern(name), Span::dummy())
}

fn var(name: &str) -> Expression {
    Expression::Variable(ident(name))
}

fn num(value: &str) -> Expression {
    Expression::ConstantNumber(NumberLiteral { value: value.to_string(), span: Span::dummy() })
}

fn call(function: &str, arguments: Vec<Expression>) -> Expression {
    Expression::Call(CallExpression { function: ident(function), arguments, span: Span::dummy() })
}

fn assert_value(source: &str, expected: &Expression) {
    let value = assigned_value(source);
    assert!(
        value.syntactically_eq(expected),
        "source {source:?} parsed to {value} instead of {expected}"
    );
}

#[test]
fn empty_program_definition() {
    create_session_if_not_set_then(|_| {
        let definitions = parse_ok("program {}");
        assert_eq!(definitions.len(), 1);
        let Definition::Program(program) = &definitions[0] else {
            panic!("expected a program definition");
        };
        assert!(program.body.statements.is_empty());
    });
}

#[test]
fn program_definition_spans_from_keyword_to_closing_brace() {
    create_session_if_not_set_then(|_| {
        let definitions = parse_ok("\n   program {\n\n\n}");
        let Definition::Program(program) = &definitions[0] else {
            panic!("expected a program definition");
        };
        assert_eq!(line_col(program.span.start), (2, 4));
        assert_eq!(line_col(program.span.end), (5, 1));
    });
}

#[test]
fn trailing_comma_in_parameter_list_is_rejected() {
    create_session_if_not_set_then(|_| {
        let error = parse_err("procedure P(x,y,) {}");
        expected_but_found(&error, &["T_LOWERID"], "T_RPAREN");
    });
}

#[test]
fn singleton_tuple_assignment_is_rejected() {
    create_session_if_not_set_then(|_| {
        let error = parse_err("program { let (foo) := bar }");
        assert_eq!(error.kind.key(), "errmsg:assignment-tuple-cannot-be-singleton");
        assert!(error.end.is_some());
    });
}

#[test]
fn procedure_call_in_expression_position_is_rejected() {
    create_session_if_not_set_then(|_| {
        let error = parse_err("program { x := P(1) }");
        expected_but_found(&error, &["expression"], "procedure call");
        // Anchored at the name `P`.
        assert_eq!(line_col(error.start), (1, 16));
    });
}

#[test]
fn pragma_regions_label_definition_extents() {
    create_session_if_not_set_then(|_| {
        let source = "/*@BEGIN_REGION@A@*//*ignore*/procedure P\n/*@BEGIN_REGION@B@*/(x,y){} procedure Q()\n{     /*@END_REGION@B@*/            }";
        let definitions = parse_ok(source);
        assert_eq!(definitions.len(), 2);

        let Definition::Procedure(p) = &definitions[0] else {
            panic!("expected a procedure");
        };
        assert_eq!(line_col(p.span.start), (1, 11));
        assert_eq!(p.span.start.region, Symbol::intern("A"));
        assert_eq!(line_col(p.span.end), (2, 7));
        assert_eq!(p.span.end.region, Symbol::intern("B"));

        let Definition::Procedure(q) = &definitions[1] else {
            panic!("expected a procedure");
        };
        assert_eq!(line_col(q.span.start), (2, 9));
        assert_eq!(q.span.start.region, Symbol::intern("B"));
        assert_eq!(line_col(q.span.end), (3, 19));
        assert_eq!(q.span.end.region, Symbol::intern("A"));
    });
}

#[test]
fn constructor_update_keeps_the_original_and_the_fields() {
    create_session_if_not_set_then(|_| {
        let expected = Expression::ConstructorUpdate(ConstructorUpdateExpression {
            constructor: ident("Coord"),
            original: Box::new(var("c0")),
            fields: vec![FieldValue { name: ident("x"), value: num("10"), span: Span::dummy() }],
            span: Span::dummy(),
        });
        let statements = program_statements("program { c := Coord(c0 | x <- 10) }");
        let Statement::AssignVariable(assignment) = &statements[0] else {
            panic!("expected an assignment");
        };
        assert!(assignment.name.matches(&ident("c")));
        assert!(assignment.value.syntactically_eq(&expected));
    });
}

#[test]
fn empty_source_is_rejected() {
    create_session_if_not_set_then(|_| {
        assert_eq!(parse_err("").kind, SyntaxErrorKind::EmptySource);
        // A source with only comments tokenizes to nothing as well.
        assert_eq!(parse_err("/* nothing here */").kind, SyntaxErrorKind::EmptySource);
    });
}

#[test]
fn a_definition_must_lead_the_source() {
    create_session_if_not_set_then(|_| {
        let error = parse_err("42");
        expected_but_found(&error, &["definition"], "T_NUM");
    });
}

#[test]
fn reserved_definition_forms_are_not_yet_supported() {
    create_session_if_not_set_then(|_| {
        for source in ["interactive program {}", "type Coord is record { field x }"] {
            let error = parse_err(source);
            assert_eq!(error.kind.key(), "errmsg:definition-not-yet-supported", "source: {source}");
        }
    });
}

#[test]
fn statement_forms_parse() {
    create_session_if_not_set_then(|_| {
        let statements = program_statements(
            "program {
               if (ready) then { P() } else { Q() }
               if (ready) { P() }
               repeat (10) { P() }
               foreach i in [1 .. 5] { P(i) }
               while (going) { P() }
               { x := 1 }
             }",
        );
        assert!(matches!(&statements[0], Statement::If(s) if s.else_block.is_some()));
        assert!(matches!(&statements[1], Statement::If(s) if s.else_block.is_none()));
        assert!(matches!(&statements[2], Statement::Repeat(_)));
        assert!(matches!(&statements[3], Statement::Foreach(s) if s.index.matches(&ident("i"))));
        assert!(matches!(&statements[4], Statement::While(_)));
        assert!(matches!(&statements[5], Statement::Block(b) if b.statements.len() == 1));
    });
}

#[test]
fn semicolons_are_optional_separators() {
    create_session_if_not_set_then(|_| {
        let statements = program_statements("program { P(); Q() ; R() }");
        assert_eq!(statements.len(), 3);
        let Statement::ProcedureCall(p) = &statements[0] else {
            panic!("expected a call");
        };
        assert!(p.name.matches(&ident("P")));
    });
}

#[test]
fn let_assigns_variables_and_tuples() {
    create_session_if_not_set_then(|_| {
        let statements = program_statements("program { let x := 1 let (a, b) := p }");
        assert!(matches!(&statements[0], Statement::AssignVariable(_)));
        let Statement::AssignTuple(t) = &statements[1] else {
            panic!("expected a tuple assignment");
        };
        assert_eq!(t.names.len(), 2);

        let error = parse_err("program { let 5 := 1 }");
        expected_but_found(&error, &["T_LOWERID", "T_LPAREN"], "T_NUM");
    });
}

#[test]
fn return_lists_follow_tuple_conventions() {
    create_session_if_not_set_then(|_| {
        let returned = |source: &str| {
            match program_statements(source).into_iter().next().unwrap() {
                Statement::Return(r) => r.expression,
                other => panic!("expected a return, got {other}"),
            }
        };
        assert!(matches!(
            returned("program { return () }"),
            Expression::Tuple(t) if t.elements.is_empty()
        ));
        assert!(matches!(returned("program { return (1) }"), Expression::ConstantNumber(_)));
        assert!(matches!(
            returned("program { return (1, 2) }"),
            Expression::Tuple(t) if t.elements.len() == 2
        ));
    });
}

#[test]
fn switch_accepts_every_pattern_form() {
    create_session_if_not_set_then(|_| {
        let statements = program_statements(
            "program {
               switch (dir) to {
                 _ -> {}
                 Norte -> {}
                 Coord(x, y) -> {}
                 () -> {}
                 (a, b) -> {}
               }
             }",
        );
        let Statement::Switch(switch) = &statements[0] else {
            panic!("expected a switch");
        };
        assert_eq!(switch.branches.len(), 5);
        assert!(matches!(&switch.branches[0].pattern, Pattern::Wildcard(_)));
        assert!(matches!(
            &switch.branches[1].pattern,
            Pattern::Constructor(p) if p.params.is_empty()
        ));
        assert!(matches!(
            &switch.branches[2].pattern,
            Pattern::Constructor(p) if p.params.len() == 2
        ));
        assert!(matches!(&switch.branches[3].pattern, Pattern::Tuple(p) if p.params.is_empty()));
        assert!(matches!(&switch.branches[4].pattern, Pattern::Tuple(p) if p.params.len() == 2));

        // `match` is a synonym and `to` is optional.
        let statements = program_statements("program { match (dir) { _ -> {} } }");
        assert!(matches!(&statements[0], Statement::Switch(s) if s.branches.len() == 1));
    });
}

#[test]
fn invalid_patterns_are_rejected() {
    create_session_if_not_set_then(|_| {
        let error = parse_err("program { switch (d) { z -> {} } }");
        expected_but_found(&error, &["pattern"], "T_LOWERID");

        let error = parse_err("program { switch (d) { (z) -> {} } }");
        assert_eq!(error.kind, SyntaxErrorKind::PatternTupleCannotBeSingleton);

        // Tuple patterns don't nest.
        let error = parse_err("program { switch (d) { ((a, b), c) -> {} } }");
        expected_but_found(&error, &["T_LOWERID"], "T_LPAREN");
    });
}

#[test]
fn operator_precedence_shapes_the_tree() {
    create_session_if_not_set_then(|_| {
        assert_value(
            "program { x := 1 + 2 * 3 }",
            &call("+", vec![num("1"), call("*", vec![num("2"), num("3")])]),
        );
        assert_value(
            "program { x := a div b mod c }",
            &call("mod", vec![call("div", vec![var("a"), var("b")]), var("c")]),
        );
        assert_value(
            "program { x := xs ++ ys ++ zs }",
            &call("++", vec![call("++", vec![var("xs"), var("ys")]), var("zs")]),
        );
        assert_value(
            "program { x := 2 ^ 3 ^ 4 }",
            &call("^", vec![num("2"), call("^", vec![num("3"), num("4")])]),
        );
        assert_value(
            "program { x := a ++ b == c }",
            &call("==", vec![call("++", vec![var("a"), var("b")]), var("c")]),
        );
    });
}

#[test]
fn logical_operators_build_dedicated_nodes() {
    create_session_if_not_set_then(|_| {
        let and = |left: Expression, right: Expression| {
            Expression::And(AndExpression {
                left: Box::new(left),
                right: Box::new(right),
                span: Span::dummy(),
            })
        };
        let or = |left: Expression, right: Expression| {
            Expression::Or(OrExpression {
                left: Box::new(left),
                right: Box::new(right),
                span: Span::dummy(),
            })
        };

        assert_value("program { x := a && b && c }", &and(var("a"), and(var("b"), var("c"))));
        assert_value("program { x := a || b && c }", &or(var("a"), and(var("b"), var("c"))));
        // `not` binds tighter than `&&`.
        assert_value(
            "program { x := not a && b }",
            &and(call("not", vec![var("a")]), var("b")),
        );
    });
}

#[test]
fn unary_minus_desugars_to_its_reserved_name() {
    create_session_if_not_set_then(|_| {
        assert_value("program { x := -y }", &call("-(unary)", vec![var("y")]));
        assert_value(
            "program { x := - -y }",
            &call("-(unary)", vec![call("-(unary)", vec![var("y")])]),
        );
        // Binary minus keeps its plain name.
        assert_value("program { x := a - b }", &call("-", vec![var("a"), var("b")]));
    });
}

#[test]
fn relational_operators_do_not_associate() {
    create_session_if_not_set_then(|_| {
        assert_value(
            "program { x := a < b }",
            &call("<", vec![var("a"), var("b")]),
        );
        // A second relation at the same level has nowhere to go.
        parse_err("program { x := 1 < 2 < 3 }");
    });
}

#[test]
fn parenthesized_expressions_and_tuples() {
    create_session_if_not_set_then(|_| {
        // A single parenthesized expression is returned unwrapped.
        assert_value("program { x := (y) }", &var("y"));
        assert_value(
            "program { x := () }",
            &Expression::Tuple(TupleExpression { elements: vec![], span: Span::dummy() }),
        );
        assert_value(
            "program { x := (1, y) }",
            &Expression::Tuple(TupleExpression {
                elements: vec![num("1"), var("y")],
                span: Span::dummy(),
            }),
        );
    });
}

#[test]
fn function_calls_and_variables() {
    create_session_if_not_set_then(|_| {
        assert_value("program { x := f(1, g(y)) }", &call("f", vec![num("1"), call("g", vec![var("y")])]));
        assert_value("program { x := y }", &var("y"));
    });
}

#[test]
fn list_and_range_forms() {
    create_session_if_not_set_then(|_| {
        let list = |elements: Vec<Expression>| {
            Expression::List(ListExpression { elements, span: Span::dummy() })
        };
        assert_value("program { x := [] }", &list(vec![]));
        assert_value("program { x := [1] }", &list(vec![num("1")]));
        assert_value("program { x := [1, 2, 3] }", &list(vec![num("1"), num("2"), num("3")]));

        let range = |first: Expression, second: Option<Expression>, last: Expression| {
            Expression::Range(RangeExpression {
                first: Box::new(first),
                second: second.map(Box::new),
                last: Box::new(last),
                span: Span::dummy(),
            })
        };
        assert_value("program { x := [1 .. 9] }", &range(num("1"), None, num("9")));
        assert_value("program { x := [1, 3 .. 9] }", &range(num("1"), Some(num("3")), num("9")));

        let error = parse_err("program { x := [1; 2] }");
        expected_but_found(&error, &["T_COMMA", "T_RANGE", "T_RBRACK"], "T_SEMICOLON");
    });
}

#[test]
fn constructor_forms_disambiguate() {
    create_session_if_not_set_then(|_| {
        let constructor = |name: &str, fields: Vec<(&str, Expression)>| {
            Expression::Constructor(ConstructorExpression {
                constructor: ident(name),
                fields: fields
                    .into_iter()
                    .map(|(field, value)| FieldValue { name: ident(field), value, span: Span::dummy() })
                    .collect(),
                span: Span::dummy(),
            })
        };

        assert_value("program { x := Norte }", &constructor("Norte", vec![]));
        assert_value("program { x := Norte() }", &constructor("Norte", vec![]));
        assert_value(
            "program { x := Coord(x <- 1, y <- 2) }",
            &constructor("Coord", vec![("x", num("1")), ("y", num("2"))]),
        );
        // An update with no fields is still an update.
        let value = assigned_value("program { x := Coord(c |) }");
        assert!(matches!(
            value,
            Expression::ConstructorUpdate(update) if update.fields.is_empty()
        ));
    });
}

#[test]
fn constructor_field_initializers_need_plain_names() {
    create_session_if_not_set_then(|_| {
        let error = parse_err("program { x := C(1 <- 2) }");
        expected_but_found(&error, &["T_PIPE"], "T_GETS");
    });
}

#[test]
fn constructor_continuations_list_their_alternatives() {
    create_session_if_not_set_then(|_| {
        // Variable subject: either `<-` or `|` could have followed.
        let error = parse_err("program { x := C(y z) }");
        expected_but_found(&error, &["T_GETS", "T_PIPE"], "T_LOWERID");
        assert_eq!(line_col(error.start), (1, 16));

        // Non-variable subject: only an update is possible.
        let error = parse_err("program { x := C(1 + 2 z) }");
        expected_but_found(&error, &["T_PIPE"], "T_LOWERID");
    });
}

#[test]
fn multiple_files_parse_as_one_program() {
    create_session_if_not_set_then(|_| {
        let mut files = IndexMap::new();
        files.insert("lib.gbs".to_string(), "procedure P() {}".to_string());
        files.insert("main.gbs".to_string(), "program { P() }".to_string());
        let handler = Handler::new();
        let definitions = parse_files(&handler, files).unwrap();
        assert_eq!(definitions.len(), 2);
        assert_eq!(definitions[0].span().start.file, Symbol::intern("lib.gbs"));
        assert_eq!(definitions[1].span().start.file, Symbol::intern("main.gbs"));
    });
}

#[test]
fn warnings_survive_a_successful_parse() {
    create_session_if_not_set_then(|_| {
        let handler = Handler::new();
        let definitions = parse(&handler, "/*@*/program {}").unwrap();
        assert_eq!(definitions.len(), 1);
        let warnings = handler.take_warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::EmptyPragma);
    });
}

#[test]
fn obsolete_tuple_assignment_surfaces_through_parse() {
    create_session_if_not_set_then(|_| {
        let error = parse_err("program { (x, y) := f() }");
        assert_eq!(error.kind, SyntaxErrorKind::ObsoleteTupleAssignment);
    });
}

#[test]
fn node_spans_are_ordered() {
    create_session_if_not_set_then(|_| {
        fn check(span: Span) {
            assert!(span.start.precedes(&span.end), "span out of order: {span}");
        }
        let statements = program_statements(
            "program { x := f(1 + 2) if (a && b) { P([1 .. 3], Coord(c | x <- 1)) } }",
        );
        for statement in &statements {
            check(statement.span());
        }
    });
}

#[test]
fn definitions_serialize_and_deserialize() {
    create_session_if_not_set_then(|_| {
        let definitions = parse_ok("program { x := Coord(c | y <- 2) switch (x) { _ -> {} } }");
        let json = serde_json::to_string(&definitions).unwrap();
        let back: Vec<Definition> = serde_json::from_str(&json).unwrap();
        // Symbols re-intern and positions carry over, so even spans match.
        assert_eq!(definitions, back);
    });
}

#[test]
fn reparsing_rendered_definitions_preserves_structure() {
    create_session_if_not_set_then(|_| {
        let source = "program { if (ready) { Avanzar(paso) } else { Detener() } let (a, b) := par() }";
        let first = parse_ok(source);
        let rendered: Vec<String> = first.iter().map(|def| def.to_string()).collect();
        let second = parse_ok(&rendered.join("\n"));
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert!(a.syntactically_eq(b), "{a} and {b} differ structurally");
        }
    });
}
