use std::{fs, rc::Rc};

use fog::{
    ast::{Expr, Stmt, TypeExpr},
    error::{ParseError, RuntimeError},
    fmt::dump_ast,
    interpreter::{
        evaluator::{core::Interpreter, statement::Signal},
        lexer::{Token, tokenize},
        scope::{OpKey, Scope},
        value::core::{Payload, TypeKind, Value},
    },
    parse_source, run_source,
};
use walkdir::WalkDir;

fn assert_success(src: &str) {
    if let Err(e) = run_source(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run_source(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn binding(src: &str, name: &str) -> Rc<Value> {
    let interpreter = run_source(src).unwrap_or_else(|e| panic!("Script failed: {e}"));
    interpreter.global_scope
               .lookup(name)
               .unwrap_or_else(|| panic!("No global binding '{name}'"))
}

fn token_kinds(src: &str) -> Vec<Token> {
    tokenize(src).unwrap_or_else(|e| panic!("Lexing failed: {e}"))
                 .into_iter()
                 .map(|(token, _)| token)
                 .collect()
}

#[test]
fn demo_scripts_run() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "fog"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run_source(&source) {
            panic!("Demo script {path:?} failed:\nError: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

#[test]
fn token_streams_end_in_a_terminator() {
    for src in ["", "let x : int := 1", "1 + 2\n", "// only a comment", "x := 1;"] {
        let tokens = tokenize(src).unwrap_or_else(|e| panic!("Lexing {src:?} failed: {e}"));
        assert!(matches!(tokens.last(), Some((Token::Terminator, _))),
                "stream for {src:?} does not end in a terminator");
    }
}

#[test]
fn empty_source_lexes_to_a_lone_terminator() {
    assert_eq!(token_kinds(""), vec![Token::Terminator]);
}

#[test]
fn tokens_carry_byte_offsets() {
    let tokens = tokenize("let x").unwrap();
    assert_eq!(tokens,
               vec![(Token::Let, 0),
                    (Token::Identifier("x".to_string()), 4),
                    (Token::Terminator, 5)]);
}

#[test]
fn newline_after_continuation_token_is_discarded() {
    assert_eq!(token_kinds("let x : int :=\n1"),
               vec![Token::Let,
                    Token::Identifier("x".to_string()),
                    Token::Colon,
                    Token::Identifier("int".to_string()),
                    Token::Assign,
                    Token::Int(1),
                    Token::Terminator]);
}

#[test]
fn newline_inside_parentheses_never_terminates() {
    assert_eq!(token_kinds("(1,\n2)"),
               vec![Token::LParen,
                    Token::Int(1),
                    Token::Comma,
                    Token::Int(2),
                    Token::RParen,
                    Token::Terminator]);
}

#[test]
fn newline_after_block_opener_is_discarded() {
    assert_eq!(token_kinds("do\nend"),
               vec![Token::LBrace, Token::RBrace, Token::Terminator]);
}

#[test]
fn plain_newlines_terminate_statements() {
    assert_eq!(token_kinds("x\ny"),
               vec![Token::Identifier("x".to_string()),
                    Token::Terminator,
                    Token::Identifier("y".to_string()),
                    Token::Terminator]);
}

#[test]
fn keyword_and_brace_spellings_coincide() {
    assert_eq!(token_kinds("do end"), token_kinds("{ }"));
}

#[test]
fn numbers_with_two_decimal_points_are_fatal() {
    assert!(matches!(tokenize("1..2"), Err(ParseError::MalformedNumber { .. })));
    assert!(matches!(tokenize("let x : float := 1.2.3"),
                     Err(ParseError::MalformedNumber { .. })));
}

#[test]
fn trailing_decimal_point_is_a_clean_float() {
    assert_eq!(token_kinds("1."), vec![Token::Float(1.0), Token::Terminator]);
    // A stray opener before the float does not disturb the literal.
    assert_eq!(token_kinds("(1."),
               vec![Token::LParen, Token::Float(1.0), Token::Terminator]);
}

#[test]
fn closers_without_openers_are_fatal() {
    assert!(matches!(tokenize(")"),
                     Err(ParseError::UnbalancedDelimiters { delimiter: ')', .. })));
    assert!(matches!(tokenize("end"),
                     Err(ParseError::UnbalancedDelimiters { delimiter: '}', .. })));
    assert!(matches!(tokenize("1 + 2)"),
                     Err(ParseError::UnbalancedDelimiters { delimiter: ')', .. })));
}

#[test]
fn unknown_characters_are_silently_skipped() {
    assert_eq!(token_kinds("let x@ : int := 1 #"), token_kinds("let x : int := 1"));
    assert_eq!(token_kinds("! ? $"), vec![Token::Terminator]);
}

#[test]
fn comments_run_to_end_of_line() {
    assert_eq!(token_kinds("let x : int := 1 // trailing note\nx := 2"),
               vec![Token::Let,
                    Token::Identifier("x".to_string()),
                    Token::Colon,
                    Token::Identifier("int".to_string()),
                    Token::Assign,
                    Token::Int(1),
                    Token::Terminator,
                    Token::Identifier("x".to_string()),
                    Token::Assign,
                    Token::Int(2),
                    Token::Terminator]);
}

fn first_statement(src: &str) -> Stmt {
    let program = parse_source(src).unwrap_or_else(|e| panic!("Parsing {src:?} failed: {e}"));
    let Stmt::Block(mut statements) = program else {
        panic!("program root is not a block");
    };
    assert!(!statements.is_empty(), "no statements parsed from {src:?}");
    statements.remove(0)
}

fn declared_init(src: &str) -> Expr {
    match first_statement(src) {
        Stmt::Declare { init: Some(init), .. } => init,
        other => panic!("expected an initialised declaration, got {other:?}"),
    }
}

fn declared_type(src: &str) -> TypeExpr {
    match first_statement(src) {
        Stmt::Declare { ty, .. } => ty,
        other => panic!("expected a declaration, got {other:?}"),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let Expr::Binary { op, lhs, rhs, .. } = declared_init("let x : int := 1 + 2 * 3") else {
        panic!("expected a binary initializer");
    };
    assert_eq!(op, "+");
    assert!(matches!(*lhs, Expr::Int { value: 1, .. }));
    let Expr::Binary { op: inner, .. } = *rhs else {
        panic!("expected the product on the right");
    };
    assert_eq!(inner, "*");
}

#[test]
fn equality_binds_tighter_than_comparison() {
    let Expr::Binary { op, lhs, .. } = declared_init("let x : bool := a = b < c") else {
        panic!("expected a binary initializer");
    };
    assert_eq!(op, "<");
    assert!(matches!(*lhs, Expr::Binary { .. }));
}

#[test]
fn additive_operators_are_left_associative() {
    let Expr::Binary { op, lhs, rhs, .. } = declared_init("let x : int := 1 - 2 - 3") else {
        panic!("expected a binary initializer");
    };
    assert_eq!(op, "-");
    assert!(matches!(*lhs, Expr::Binary { .. }));
    assert!(matches!(*rhs, Expr::Int { value: 3, .. }));
}

#[test]
fn grouping_overrides_precedence() {
    let Expr::Binary { op, lhs, .. } = declared_init("let x : int := (1 + 2) * 3") else {
        panic!("expected a binary initializer");
    };
    assert_eq!(op, "*");
    assert!(matches!(*lhs, Expr::Binary { .. }));
}

#[test]
fn prefix_minus_binds_tighter_than_infix() {
    let Expr::Binary { op, lhs, .. } = declared_init("let x : int := -2 * 3") else {
        panic!("expected a binary initializer");
    };
    assert_eq!(op, "*");
    assert!(matches!(*lhs, Expr::Unary { .. }));
}

#[test]
fn parenthesised_heads_speculate_into_lambdas() {
    let Expr::Lambda { def, .. } = declared_init("let f : int -> int := (x) => x * x") else {
        panic!("expected a lambda initializer");
    };
    assert_eq!(def.params, vec!["x".to_string()]);

    let Expr::Lambda { def, .. } =
        declared_init("let g : int * int -> int := (x, y) => x + y")
    else {
        panic!("expected a lambda initializer");
    };
    assert_eq!(def.params, vec!["x".to_string(), "y".to_string()]);
}

#[test]
fn failed_speculation_reparses_as_expression_list() {
    assert!(matches!(declared_init("let t : int * int := (1, 2)"),
                     Expr::Tuple { elements, .. } if elements.len() == 2));
    assert!(matches!(declared_init("let u : int * int := ()"),
                     Expr::Tuple { elements, .. } if elements.is_empty()));
    // A single parenthesised element is the expression itself.
    assert!(matches!(declared_init("let v : int := (5)"), Expr::Int { value: 5, .. }));
    // A head that is almost a parameter list is neither a lambda nor a tuple.
    assert!(parse_source("let b : int := (x, 1) => x").is_err());
}

#[test]
fn calls_require_direct_parentheses() {
    assert!(matches!(declared_init("let r : int := f(5)"),
                     Expr::Call { name, args, .. } if name == "f" && args.len() == 1));
    assert!(matches!(declared_init("let r : int := f"), Expr::Var { .. }));
}

#[test]
fn declarations_without_initializer_parse() {
    assert!(matches!(first_statement("let x : int"),
                     Stmt::Declare { init: None, is_const: false, .. }));
}

#[test]
fn const_flag_is_recorded() {
    assert!(matches!(first_statement("const c : int := 1"),
                     Stmt::Declare { is_const: true, .. }));
}

#[test]
fn malformed_declarations_are_fatal() {
    assert!(parse_source("let x := 1").is_err());
    assert!(parse_source("let x : int 5").is_err());
    assert!(parse_source("let : int := 1").is_err());
    assert!(parse_source("return").is_err());
    assert!(parse_source("5 := 1").is_err());
    assert!(parse_source("while true").is_err());
}

#[test]
fn arrow_types_are_right_associative() {
    let TypeExpr::Map { domain, codomain } =
        declared_type("let f : int -> int -> int := (x) => x")
    else {
        panic!("expected a function type");
    };
    assert!(matches!(*domain, TypeExpr::Atomic { .. }));
    assert!(matches!(*codomain, TypeExpr::Map { .. }));
}

#[test]
fn products_contain_sums() {
    let TypeExpr::Product(parts) = declared_type("let t : int * float + bool := (1, 2)") else {
        panic!("expected a product type");
    };
    assert_eq!(parts.len(), 2);
    assert!(matches!(&parts[0], TypeExpr::Atomic { name, .. } if name == "int"));
    assert!(matches!(&parts[1], TypeExpr::Sum(summands) if summands.len() == 2));
}

#[test]
fn parenthesised_types_group() {
    let TypeExpr::Map { domain, .. } =
        declared_type("let f : (int + float) -> int := (x) => x")
    else {
        panic!("expected a function type");
    };
    assert!(matches!(*domain, TypeExpr::Sum(_)));
}

#[test]
fn integer_addition_binds_the_sum() {
    let x = binding("let x : int := 1 + 2", "x");
    assert_eq!(x.payload, Payload::Int(3));
    assert_eq!(x.ty().unwrap().as_type(),
               Some(&TypeKind::Primitive("int".to_string())));
}

#[test]
fn mixed_addition_widens_to_float() {
    let y = binding("let y : float := 1 + 2.0", "y");
    assert_eq!(y.payload, Payload::Float(3.0));
    assert_eq!(y.ty().unwrap().as_type(),
               Some(&TypeKind::Primitive("float".to_string())));
}

#[test]
fn widening_applies_in_both_operand_orders() {
    assert_eq!(binding("let p : float := 2.0 + 1", "p").payload, Payload::Float(3.0));
    assert_eq!(binding("let q : float := 1 + 2.0", "q").payload, Payload::Float(3.0));
    assert_eq!(binding("let r : float := 7 / 2.0", "r").payload, Payload::Float(3.5));
}

#[test]
fn lambda_calls_produce_values() {
    let r = binding("let f : int -> int := (x) => x * x\nlet r : int := f(5)", "r");
    assert_eq!(r.payload, Payload::Int(25));
}

#[test]
fn tuples_carry_product_types_of_the_singletons() {
    let interpreter = run_source("let t : int * int := (1, 2)").unwrap();
    let t = interpreter.global_scope.lookup("t").unwrap();
    let int_type = interpreter.global_scope.lookup("int").unwrap();

    let Payload::Tuple(elements) = &t.payload else {
        panic!("expected a tuple value");
    };
    assert_eq!(elements.len(), 2);
    for element in elements {
        assert!(Rc::ptr_eq(element.ty().unwrap(), &int_type));
    }

    let Some(TypeKind::Product(parts)) = t.ty().unwrap().as_type() else {
        panic!("expected a product type");
    };
    assert_eq!(parts.len(), 2);
    for part in parts {
        assert!(Rc::ptr_eq(part, &int_type));
    }
}

#[test]
fn block_declarations_shadow_and_disappear() {
    let a = binding("let a : int := 7\ndo\n  let a : int := 100\nend", "a");
    assert_eq!(a.payload, Payload::Int(7));
}

#[test]
fn assignment_writes_the_nearest_binding() {
    assert_eq!(binding("let x : int := 1\nx := 5", "x").payload, Payload::Int(5));
    assert_eq!(binding("let a : int := 7\ndo\n  a := 100\nend", "a").payload,
               Payload::Int(100));
}

#[test]
fn const_is_recorded_but_not_enforced() {
    assert_eq!(binding("const c : int := 1\nc := 2", "c").payload, Payload::Int(2));
}

#[test]
fn integer_addition_commutes() {
    for (a, b) in [(1, 2), (0, 0), (-3, 7), (100, 250)] {
        let forward = binding(&format!("let l : int := {a} + {b}"), "l");
        let backward = binding(&format!("let l : int := {b} + {a}"), "l");
        assert_eq!(forward.payload, backward.payload);
    }
}

#[test]
fn identity_lambda_preserves_integers() {
    for v in [-5, 0, 42] {
        let r = binding(&format!("let id : int -> int := (x) => x\nlet r : int := id({v})"),
                        "r");
        assert_eq!(r.payload, Payload::Int(v));
    }
}

#[test]
fn free_names_in_bodies_resolve_at_call_time() {
    let r = binding("let f : int -> int := (x) => x + y\nlet y : int := 10\nlet r : int := f(1)",
                    "r");
    assert_eq!(r.payload, Payload::Int(11));

    // Without a binding at the call site the same body is an error.
    assert_failure("let f : int -> int := (x) => x + y\nlet r : int := f(1)");
}

#[test]
fn block_bodies_unwrap_their_return() {
    let r = binding("let f : int -> int := (x) => do\n  return x * 2\nend\nlet r : int := f(21)",
                    "r");
    assert_eq!(r.payload, Payload::Int(42));
}

#[test]
fn block_bodies_without_return_yield_the_sentinel() {
    let r = binding("let f : int -> int := (x) => do\n  let y : int := x\nend\nlet r : int := f(1)",
                    "r");
    assert!(r.is_uninit());
    assert!(r.ty().is_none());
}

#[test]
fn top_level_return_is_consumed_and_discarded() {
    let interpreter = run_source("let x : int := 1\nreturn x\nlet y : int := 2").unwrap();
    assert!(interpreter.global_scope.lookup("x").is_some());
    assert_eq!(interpreter.global_scope.lookup("y").unwrap().payload, Payload::Int(2));
}

#[test]
fn blocks_without_return_signal_no_result() {
    let Stmt::Block(statements) = parse_source("do\n  let q : int := 1\nend").unwrap() else {
        panic!("program root is not a block");
    };
    let interpreter = Interpreter::new();
    let signal = Interpreter::eval(&statements[0], &interpreter.global_scope).unwrap();
    assert_eq!(signal, Signal::Normal);
}

#[test]
fn blocks_with_return_propagate_the_value() {
    let Stmt::Block(statements) = parse_source("do\n  return 5\nend").unwrap() else {
        panic!("program root is not a block");
    };
    let interpreter = Interpreter::new();
    match Interpreter::eval(&statements[0], &interpreter.global_scope).unwrap() {
        Signal::Return(value) => assert_eq!(value.as_int().unwrap(), 5),
        Signal::Normal => panic!("return did not propagate"),
    }
}

#[test]
fn expression_statements_yield_no_result() {
    let statement = Stmt::Expression { expr:   Expr::Int { value:  1,
                                                           offset: 0, },
                                       offset: 0, };
    let interpreter = Interpreter::new();
    let signal = Interpreter::eval(&statement, &interpreter.global_scope).unwrap();
    assert_eq!(signal, Signal::Normal);
}

#[test]
fn integer_division_by_slash_is_not_registered() {
    assert_failure("let x : int := 10 / 2");
}

#[test]
fn operators_reject_unregistered_operand_types() {
    assert_failure("let x : int := true + false");
    assert_failure("let x : int := 1 + true");
    assert_failure("let x : bool := -true");
}

#[test]
fn div_and_mod_dispatch_through_the_table() {
    let interpreter = Interpreter::new();
    let int_type = interpreter.global_scope.lookup("int").unwrap();

    let seven = Value::new(Payload::Int(7), Rc::clone(&int_type));
    let two = Value::new(Payload::Int(2), Rc::clone(&int_type));
    let three = Value::new(Payload::Int(3), Rc::clone(&int_type));
    let zero = Value::new(Payload::Int(0), Rc::clone(&int_type));

    let div = interpreter.global_scope
                         .get_op(&OpKey::binary("div", Rc::clone(&int_type), Rc::clone(&int_type)))
                         .unwrap();
    assert_eq!((*div)(Some(&seven), &two).unwrap().as_int().unwrap(), 3);
    assert!(matches!((*div)(Some(&seven), &zero), Err(RuntimeError::DivisionByZero)));

    let modulo = interpreter.global_scope
                            .get_op(&OpKey::binary("mod",
                                                   Rc::clone(&int_type),
                                                   Rc::clone(&int_type)))
                            .unwrap();
    assert_eq!((*modulo)(Some(&seven), &three).unwrap().as_int().unwrap(), 1);
}

#[test]
fn operator_orderings_are_distinct_registrations() {
    let interpreter = Interpreter::new();
    let int_type = interpreter.global_scope.lookup("int").unwrap();
    let float_type = interpreter.global_scope.lookup("float").unwrap();

    // Mixed addition is registered for both operand orders.
    assert!(interpreter.global_scope
                       .get_op(&OpKey::binary("+", Rc::clone(&int_type), Rc::clone(&float_type)))
                       .is_ok());
    assert!(interpreter.global_scope
                       .get_op(&OpKey::binary("+", Rc::clone(&float_type), Rc::clone(&int_type)))
                       .is_ok());

    // The named integer operators exist only at integer keys.
    assert!(interpreter.global_scope
                       .get_op(&OpKey::binary("div",
                                              Rc::clone(&float_type),
                                              Rc::clone(&float_type)))
                       .is_err());
    assert!(interpreter.global_scope
                       .get_op(&OpKey::binary("mod", Rc::clone(&int_type), Rc::clone(&float_type)))
                       .is_err());

    // Unary keys use the empty left slot.
    assert!(interpreter.global_scope
                       .get_op(&OpKey::unary("-", Rc::clone(&int_type)))
                       .is_ok());
    assert!(interpreter.global_scope.get_op(&OpKey::unary("+", int_type)).is_err());
}

#[test]
fn the_type_primitive_is_a_stable_singleton() {
    let interpreter = Interpreter::new();
    let global_type = interpreter.global_scope.lookup("type").unwrap();

    let mut scope = Rc::clone(&interpreter.global_scope);
    for _ in 0..10 {
        scope = Scope::child(&scope);
    }
    let resolved = scope.atomic_type("type").unwrap();
    assert!(Rc::ptr_eq(&global_type, &resolved));

    // The primitive is its own type.
    assert!(Rc::ptr_eq(global_type.ty().unwrap(), &global_type));
}

#[test]
fn every_evaluated_value_carries_a_type_value() {
    for (src, name) in [("let a : int := 1 + 2", "a"),
                        ("let b : float := 1.5", "b"),
                        ("let c : bool := true", "c"),
                        ("let d : lambda := (x) => x", "d"),
                        ("let e : int * int := (1, 2)", "e")]
    {
        let value = binding(src, name);
        let ty = value.ty().unwrap_or_else(|| panic!("'{name}' has no type"));
        assert!(ty.is_type(), "the type of '{name}' is not a type value");
    }
}

#[test]
fn runtime_failures_name_their_cause() {
    let cases: [(&str, fn(&RuntimeError) -> bool); 6] =
        [("let y : int := x", |e| matches!(e, RuntimeError::UnknownVariable { name } if name == "x")),
         ("let x : unknown := 1", |e| matches!(e, RuntimeError::UnknownTypeName { name } if name == "unknown")),
         ("let x : int := 1\nlet y : x := 2", |e| matches!(e, RuntimeError::NotAType { name } if name == "x")),
         ("let f : int -> int := (x) => x\nlet r : int := f(1, 2)",
          |e| matches!(e, RuntimeError::ArityMismatch { expected: 1, found: 2, .. })),
         ("let x : int := 1\nlet y : int := x(1)", |e| matches!(e, RuntimeError::NotCallable { name } if name == "x")),
         ("let x : int\nlet y : int := x + 1", |e| matches!(e, RuntimeError::UninitialisedValue))];

    for (src, matches_expected) in cases {
        let err = run_source(src).expect_err("script was expected to fail");
        let err = err.downcast::<RuntimeError>()
                     .unwrap_or_else(|e| panic!("{src:?} failed with a non-runtime error: {e}"));
        assert!(matches_expected(&err), "{src:?} failed with the wrong error: {err}");
    }
}

#[test]
fn assignment_to_unbound_names_is_fatal() {
    let err = run_source("zz := 1").expect_err("script was expected to fail");
    let err = err.downcast::<RuntimeError>().unwrap();
    assert!(matches!(*err, RuntimeError::AssignmentToUnbound { .. }));
}

#[test]
fn wide_integer_literals_truncate_to_32_bits() {
    assert_eq!(binding("let x : int := 4294967296", "x").payload, Payload::Int(0));
    assert_eq!(binding("let y : int := 2147483648", "y").payload,
               Payload::Int(i32::MIN));
}

fn render_int_declare(statement: &Stmt) -> String {
    let Stmt::Declare { name, init: Some(init), .. } = statement else {
        panic!("expected an initialised declaration");
    };
    let rendered = match init {
        Expr::Int { value, .. } => value.to_string(),
        Expr::Unary { operand, .. } => match &**operand {
            Expr::Int { value, .. } if *value >= 0 => format!("-{value}"),
            // The narrowed literal is already negative, so its own rendering
            // reproduces the sign token.
            Expr::Int { value, .. } => value.to_string(),
            other => panic!("expected an integer operand, got {other:?}"),
        },
        other => panic!("expected an integer initializer, got {other:?}"),
    };
    format!("let {name} : int := {rendered}")
}

#[test]
fn integer_declarations_roundtrip_their_tokens() {
    for value in [0_i64, 1, -5, 2_147_483_647, -2_147_483_648] {
        let source = format!("let x : int := {value}");
        let Stmt::Block(statements) = parse_source(&source).unwrap() else {
            panic!("program root is not a block");
        };
        let rendered = render_int_declare(&statements[0]);
        assert_eq!(token_kinds(&source), token_kinds(&rendered), "roundtrip failed for {value}");
    }
}

#[test]
fn ast_dumps_label_one_node_per_line() {
    let program = parse_source("let x : int := 1 + 2").unwrap();
    let dump = dump_ast(&program);
    assert!(dump.contains("Block\n"));
    assert!(dump.contains("Declare (is_const: false, name: x)"));
    assert!(dump.contains("AtomicType (name: int)"));
    assert!(dump.contains("Binary (op: +)"));
    assert!(dump.contains("Int (value: 1)"));
}

#[test]
fn values_and_types_render_for_display() {
    let interpreter = run_source("let t : int * int := (1, 2)\nlet m : int -> int").unwrap();

    let t = interpreter.global_scope.lookup("t").unwrap();
    assert_eq!(t.to_string(), "(1, 2)");
    assert_eq!(t.ty().unwrap().to_string(), "int * int");

    // An uninitialised binding keeps its declared type and renders as the
    // sentinel.
    let m = interpreter.global_scope.lookup("m").unwrap();
    assert!(m.is_uninit());
    assert_eq!(m.to_string(), "<uninitialised>");
    assert_eq!(m.ty().unwrap().to_string(), "int -> int");

    let rendered = fog::fmt::render_bindings(&interpreter);
    assert!(rendered.contains("t = (1, 2)\n"));
    assert!(rendered.contains("int = int\n"));
}

#[test]
fn sequences_of_statements_accumulate_bindings() {
    assert_success("let a : int := 1; let b : int := a + 1; let c : int := b + 1");
    let c = binding("let a : int := 1; let b : int := a + 1; let c : int := b + 1", "c");
    assert_eq!(c.payload, Payload::Int(3));
}

#[test]
fn reserved_keywords_do_not_parse_as_statements() {
    assert!(parse_source("if true do end").is_err());
    assert!(parse_source("else").is_err());
}
