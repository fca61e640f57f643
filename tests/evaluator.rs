use brook::interpreter::{environment::Env, value::core::Value};

fn eval(source: &str) -> Value {
    let program = brook::parse_program(source).unwrap_or_else(|errors| {
                                                  panic!("parse failed for {source:?}: {errors:?}")
                                              });

    brook::eval_program(&program, &Env::new())
        .unwrap_or_else(|error| panic!("evaluation failed for {source:?}: {error}"))
        .unwrap_or(Value::Null)
}

fn eval_error(source: &str) -> String {
    let program = brook::parse_program(source).unwrap_or_else(|errors| {
                                                  panic!("parse failed for {source:?}: {errors:?}")
                                              });

    match brook::eval_program(&program, &Env::new()) {
        Err(error) => error.to_string(),
        Ok(value) => panic!("expected {source:?} to fail, got {value:?}"),
    }
}

fn int(value: i64) -> Value {
    Value::Integer(value)
}

fn boolean(value: bool) -> Value {
    Value::Boolean(value)
}

fn string(value: &str) -> Value {
    Value::String(value.to_string())
}

fn array(values: Vec<Value>) -> Value {
    Value::array(values)
}

#[test]
fn integer_expressions() {
    let tests = [("5", 5),
                 ("10", 10),
                 ("-5", -5),
                 ("-10", -10),
                 ("5 + 5 + 5 + 5 - 10", 10),
                 ("2 * 2 * 2 * 2 * 2", 32),
                 ("-50 + 100 + -50", 0),
                 ("5 * 2 + 10", 20),
                 ("5 + 2 * 10", 25),
                 ("20 + 2 * -10", 0),
                 ("50 / 2 * 2 + 10", 60),
                 ("2 * (5 + 10)", 30),
                 ("3 * 3 * 3 + 10", 37),
                 ("3 * (3 * 3) + 10", 37),
                 ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
                 ("7 % 3", 1),
                 ("-7 % 3", 2),
                 ("7 % -3", -2),
                 ("1 << 10", 1024),
                 ("1024 >> 3", 128),
                 ("-8 >> 1", -4),
                 ("1 << 100", 0),
                 ("-1 >> 100", -1),
                 ("12 & 10", 8),
                 ("12 | 10", 14),
                 ("12 ^ 10", 6),
                 ("~65535", -65536),
                 ("~0", -1),
                 ("true + true", 2),
                 ("true * 10", 10),
                 ("-true", -1),
                 ("~false", -1)];

    for (input, expected) in tests {
        assert_eq!(eval(input), int(expected), "input: {input}");
    }
}

#[test]
fn integer_overflow_wraps() {
    assert_eq!(eval("9223372036854775807 + 1"), int(i64::MIN));
    assert_eq!(eval("-9223372036854775807 - 2"), int(i64::MAX));
    assert_eq!(eval("-(-9223372036854775807 - 1)"), int(i64::MIN));
}

#[test]
fn boolean_expressions() {
    let tests = [("true", true),
                 ("false", false),
                 ("true < 2", true),
                 ("1 < 2", true),
                 ("1 > 2", false),
                 ("1 < 1", false),
                 ("1 > 1", false),
                 ("1 == 1", true),
                 ("1 != 1", false),
                 ("1 == 2", false),
                 ("1 != 2", true),
                 ("true == true", true),
                 ("false == false", true),
                 ("true == false", false),
                 ("true != false", true),
                 ("true == 1", true),
                 ("(1 < 2) == true", true),
                 ("(1 < 2) == false", false),
                 ("1 <= 1", true),
                 ("2 <= 1", false),
                 ("1 >= 1", true),
                 ("1 >= 2", false),
                 ("\"abc\" < \"abd\"", true),
                 ("\"abc\" == \"abc\"", true),
                 ("\"abc\" != \"abd\"", true),
                 ("\"b\" >= \"a\"", true)];

    for (input, expected) in tests {
        assert_eq!(eval(input), boolean(expected), "input: {input}");
    }
}

#[test]
fn bang_operator() {
    let tests = [("!true", false),
                 ("!false", true),
                 ("!5", false),
                 ("!!true", true),
                 ("!!5", true),
                 ("!0", true),
                 ("!\"\"", true),
                 ("!\"a\"", false),
                 ("![]", true),
                 ("![0]", false)];

    for (input, expected) in tests {
        assert_eq!(eval(input), boolean(expected), "input: {input}");
    }
}

#[test]
fn null_equality() {
    assert_eq!(eval("let a; let b; a == b"), boolean(true));
    assert_eq!(eval("let a; let b; a != b"), boolean(false));
}

#[test]
fn string_expressions() {
    let tests = [("\"Hello World!\"", "Hello World!"),
                 ("\"Hello\" + \" \" + \"World!\"", "Hello World!"),
                 ("\"12\" * 0", ""),
                 ("\"12\" * -3", ""),
                 ("\"12\" * 1", "12"),
                 ("\"12\" * 3", "121212"),
                 ("\"ab\" * true", "ab"),
                 ("sum([\"1\", \"23\", \"456\"])", "123456")];

    for (input, expected) in tests {
        assert_eq!(eval(input), string(expected), "input: {input}");
    }
}

#[test]
fn if_else_expressions() {
    let tests = [("if (true) { 10 }", int(10)),
                 ("if (false) { 10 }", Value::Null),
                 ("if (1) { 10 }", int(10)),
                 ("if (1 < 2) { 10 }", int(10)),
                 ("if (1 > 2) { 10 }", Value::Null),
                 ("if (1 > 2) { 10 } else { 20 }", int(20)),
                 ("if (1 < 2) { 10 } else { 20 }", int(10)),
                 ("if (\"\") { 10 } else { 20 }", int(20)),
                 ("if ([]) { 10 } else { 20 }", int(20))];

    for (input, expected) in tests {
        assert_eq!(eval(input), expected, "input: {input}");
    }
}

#[test]
fn return_statements() {
    let tests = [("return 10;", 10),
                 ("return 10; 9;", 10),
                 ("return 2 * 5; 9;", 10),
                 ("9; return 2 * 5; 9;", 10),
                 ("if (10 > 1) { return 10; }", 10),
                 ("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10),
                 ("let f = fn(x) { return x; x + 10; }; f(10);", 10),
                 ("let f = fn(x) { let res = x + 10; return res; return 10; }; f(10);", 20)];

    for (input, expected) in tests {
        assert_eq!(eval(input), int(expected), "input: {input}");
    }
}

#[test]
fn return_without_value_yields_null() {
    assert_eq!(eval("let f = fn() { return; }; f()"), Value::Null);
}

#[test]
fn let_statements() {
    let tests = [("let a = 5; a;", 5),
                 ("let a = 5 * 5; a;", 25),
                 ("let a = 5; let b = a; b;", 5),
                 ("let a = 5; let b = a; let c = a + b + 5; c;", 15)];

    for (input, expected) in tests {
        assert_eq!(eval(input), int(expected), "input: {input}");
    }
}

#[test]
fn let_without_initializer_binds_null() {
    assert_eq!(eval("let a; a"), Value::Null);
    assert_eq!(eval("let a, b; a == b"), boolean(true));
}

#[test]
fn multi_target_assignment() {
    assert_eq!(eval("let a, b = 1, 2; a + b"), int(3));
    assert_eq!(eval("let a, b = 1, 2; a, b = b, a; a"), int(2));
    assert_eq!(eval("let a, b = 1, 2; a, b = b, a; b"), int(1));
    assert_eq!(eval("let xs = [1, 2]; let a; a, xs[0] = 10, 20; xs[0] + a"), int(30));
}

#[test]
fn assignment_is_an_expression() {
    assert_eq!(eval("let a; let b; a = b = 7; a + b"), int(14));
    assert_eq!(eval("let a; (a = 3) + 1"), int(4));
}

#[test]
fn function_application() {
    let tests = [("let identity = fn(x) { x; }; identity(5);", 5),
                 ("let identity = fn(x) { return x; }; identity(5);", 5),
                 ("let double = fn(x) { x * 2; }; double(5);", 10),
                 ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
                 ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
                 ("let fib = fn(n) { if (n < 2) { return n } return fib(n - 1) + fib(n - 2)}; fib(10)",
                  55),
                 ("fn(x) { x; }(5)", 5)];

    for (input, expected) in tests {
        assert_eq!(eval(input), int(expected), "input: {input}");
    }
}

#[test]
fn builtin_len_and_sum() {
    let tests = [("len(\"\")", 0),
                 ("len(\"four\")", 4),
                 ("len(\"hello world\")", 11),
                 ("len([])", 0),
                 ("len([1, 2, 3, 4, 5, 6, 7])", 7),
                 ("sum([])", 0),
                 ("sum([], 2)", 2),
                 ("sum([1, 2, 3, 4, 5, 6, 7])", 28),
                 ("sum([1, 2, 3, 4, 5, 6, 7], 8)", 36)];

    for (input, expected) in tests {
        assert_eq!(eval(input), int(expected), "input: {input}");
    }
}

#[test]
fn builtins_are_first_class() {
    assert_eq!(eval("let measure = len; measure(\"abc\")"), int(3));
    assert_eq!(eval("len").to_string(), "builtin function");
    assert_eq!(eval("len").kind(), "BUILTIN");
}

#[test]
fn closures() {
    let input = "
let newAdder = fn(x) {
  return fn(y) { x + y };
};

let addTwo = newAdder(2);
addTwo(2);";

    assert_eq!(eval(input), int(4));
}

#[test]
fn closures_share_captured_scopes() {
    assert_eq!(eval("let a = 1; fn() { fn() { a = 2 }() }(); a"), int(2));

    let counter = "
let make = fn() {
  let count = 0;
  fn() { count = count + 1; count }
};
let tick = make();
tick(); tick(); tick()";

    assert_eq!(eval(counter), int(3));
}

#[test]
fn array_literals() {
    assert_eq!(eval("[1, 2 * 2, 3 + 3]"), array(vec![int(1), int(4), int(6)]));
    assert_eq!(eval("[1, false, \"hi\"]"),
               array(vec![int(1), boolean(false), string("hi")]));
    assert_eq!(eval("[1, [2, 3]]"),
               array(vec![int(1), array(vec![int(2), int(3)])]));
}

#[test]
fn array_operators_build_new_arrays() {
    let tests = [("[1, 2, 3] + [4, 5, 6]", vec![1, 2, 3, 4, 5, 6]),
                 ("[1, 2, 3] + 4", vec![1, 2, 3, 4]),
                 ("4 + [1, 2, 3]", vec![4, 1, 2, 3]),
                 ("[1, 2] * 0", vec![]),
                 ("[1, 2] * -2", vec![]),
                 ("[1, 2] * 4", vec![1, 2, 1, 2, 1, 2, 1, 2]),
                 ("[1, 2] * true", vec![1, 2])];

    for (input, expected) in tests {
        let expected = array(expected.into_iter().map(int).collect());
        assert_eq!(eval(input), expected, "input: {input}");
    }

    // The operands themselves stay untouched.
    assert_eq!(eval("let a = [1, 2]; a + [3]; a * 2; a"),
               array(vec![int(1), int(2)]));
}

#[test]
fn array_mutation_builtins() {
    let tests = [("let a = []; append(a, 1, 2, 3); a", vec![1, 2, 3]),
                 ("let a = []; let b = append(a, 1); b", vec![1]),
                 ("let a = [1, 2, 3, 4]; pop(a); a", vec![1, 2, 3]),
                 ("let a = [1, 2, 3, 4]; reverse(a); a", vec![4, 3, 2, 1]),
                 ("let a = [1, 3, 2, 4, 6, 5, 7]; sort(a); a", vec![1, 2, 3, 4, 5, 6, 7])];

    for (input, expected) in tests {
        let expected = array(expected.into_iter().map(int).collect());
        assert_eq!(eval(input), expected, "input: {input}");
    }

    assert_eq!(eval("pop([1, 2, 3])"), int(3));
    assert_eq!(eval("sort([\"b\", \"a\", \"c\"])"),
               array(vec![string("a"), string("b"), string("c")]));
}

#[test]
fn arrays_are_shared_by_reference() {
    assert_eq!(eval("let a = b = [1, 1, 1]; a[0] = 2; b"),
               array(vec![int(2), int(1), int(1)]));
    assert_eq!(eval("let a = [1]; let b = a; append(b, 2); a"),
               array(vec![int(1), int(2)]));
}

#[test]
fn array_index_expressions() {
    let tests = [("[1, 2, 3][0]", 1),
                 ("[1, 2, 3][1]", 2),
                 ("[1, 2, 3][2]", 3),
                 ("let i = 0; [1][i];", 1),
                 ("[1, 2, 3][1 + 1];", 3),
                 ("let myArray = [1, 2, 3]; myArray[2];", 3),
                 ("let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];", 6),
                 ("let myArray = [1, 2, 3]; let i = myArray[0]; myArray[i]", 2)];

    for (input, expected) in tests {
        assert_eq!(eval(input), int(expected), "input: {input}");
    }
}

#[test]
fn index_assignment() {
    assert_eq!(eval("let a = [1, 2, 3]; a[1] = 9; a"),
               array(vec![int(1), int(9), int(3)]));
    assert_eq!(eval("let a = [[1], [2]]; a[1][0] = 5; a"),
               array(vec![array(vec![int(1)]), array(vec![int(5)])]));
}

#[test]
fn short_circuit_operators() {
    let tests = [("0 && 2", int(0)),
                 ("1 && 2", int(2)),
                 ("0 || 2", int(2)),
                 ("1 || 2", int(1)),
                 ("\"\" || \"x\"", string("x")),
                 ("false && true", boolean(false)),
                 ("let n; n || 5", int(5))];

    for (input, expected) in tests {
        assert_eq!(eval(input), expected, "input: {input}");
    }
}

#[test]
fn short_circuit_skips_side_effects() {
    assert_eq!(eval("let a = 0; let bump = fn() { a = 1; true }; 0 && bump(); a"),
               int(0));
    assert_eq!(eval("let a = 0; let bump = fn() { a = 1; true }; 1 || bump(); a"),
               int(0));
    assert_eq!(eval("let a = 0; let bump = fn() { a = 1; true }; 1 && bump(); a"),
               int(1));
}

#[test]
fn compound_assignment() {
    let tests = [("let x = 2; x += 3; x", 5),
                 ("let x = 7; x -= 2; x", 5),
                 ("let x = 4; x *= 2; x", 8),
                 ("let x = 9; x /= 3; x", 3),
                 ("let x = 9; x %= 4; x", 1),
                 ("let x = 12; x &= 10; x", 8),
                 ("let x = 12; x |= 2; x", 14),
                 ("let x = 12; x ^= 10; x", 6),
                 ("let x = 1; x <<= 4; x", 16),
                 ("let x = 16; x >>= 2; x", 4),
                 ("let a = [1, 2]; a[0] += 10; a[0]", 11)];

    for (input, expected) in tests {
        assert_eq!(eval(input), int(expected), "input: {input}");
    }
}

#[test]
fn prefix_increment_and_decrement() {
    assert_eq!(eval("let i = 0; ++i; i"), int(1));
    assert_eq!(eval("let i = 0; --i; i"), int(-1));
    assert_eq!(eval("let i = 5; ++i"), int(6));
}

#[test]
fn for_loops() {
    let tests = [("let s = 0; for (let i = 0; i < 5; ++i) { s += i } s", 10),
                 ("let s = 1; for (let i = 0; i < 3; ++i) { s *= 2 } s", 8),
                 ("let n = 3; let s = 0; for (; n; --n) { s += n } s", 6),
                 ("let i = 0; for (; i < 4;) { ++i } i", 4)];

    for (input, expected) in tests {
        assert_eq!(eval(input), int(expected), "input: {input}");
    }
}

#[test]
fn for_loop_yields_null_and_scopes_its_header() {
    assert_eq!(eval("for (let i = 0; i < 1; ++i) {}"), Value::Null);
    assert_eq!(eval_error("for (let i = 0; i < 1; ++i) {} i"),
               "name 'i' is not defined");
}

#[test]
fn return_unwinds_out_of_for_loops() {
    let input = "
let first_multiple = fn(base, limit) {
  for (let i = 1; i < limit; ++i) {
    if (i % base == 0) {
      return i;
    }
  }
  return 0;
};
first_multiple(7, 100)";

    assert_eq!(eval(input), int(7));
}

#[test]
fn blocks_do_not_open_scopes() {
    assert_eq!(eval("if (true) { let b = 2; } b"), int(2));
    assert_eq!(eval_error("let a = 1; if (true) { let a = 2; }"),
               "identifier 'a' has already been declared");
}

#[test]
fn function_calls_do_open_scopes() {
    assert_eq!(eval("let x = 1; let f = fn() { let x = 2; x }; f() + x"), int(3));
}

#[test]
fn value_inspection() {
    let tests = [("5", "5"),
                 ("true", "true"),
                 ("\"hi\"", "\"hi\""),
                 ("let a; a", "null"),
                 ("[1, \"a\", true, [2]]", "[1, \"a\", true, [2]]"),
                 ("fn(x) { x + 2; }", "fn(x) {\n(x + 2);\n}")];

    for (input, expected) in tests {
        assert_eq!(eval(input).to_string(), expected, "input: {input}");
    }
}

#[test]
fn error_messages() {
    let tests = [
        ("5 + \"a\"", "'+' not supported between 'INTEGER' and 'STRING'"),
        ("\"a\" - \"b\"", "'-' not supported between 'STRING' and 'STRING'"),
        ("[1] - 1", "'-' not supported between 'ARRAY' and 'INTEGER'"),
        ("\"a\" < 1", "'<' not supported between 'STRING' and 'INTEGER'"),
        ("\"a\" == 1", "'==' not supported between 'STRING' and 'INTEGER'"),
        ("\"a\" != 1", "'!=' not supported between 'STRING' and 'INTEGER'"),
        ("-\"a\"", "bad operand type for unary -: 'STRING'"),
        ("~\"a\"", "bad operand type for unary ~: 'STRING'"),
        ("-[1]", "bad operand type for unary -: 'ARRAY'"),
        ("1 / 0", "division by zero"),
        ("1 % 0", "integer division or modulo by zero"),
        ("1 << -1", "negative shift amount"),
        ("1 >> -1", "negative shift amount"),
        ("foo", "name 'foo' is not defined"),
        ("x = 1", "name 'x' is not defined"),
        ("let a = 1; let a = 2;", "identifier 'a' has already been declared"),
        ("let a, a = 1, 2;", "identifier 'a' has already been declared"),
        ("[1, 2, 3][3]", "array index out of range"),
        ("[1, 2, 3][-1]", "array index out of range"),
        ("let a = [1]; a[1] = 2", "array index out of range"),
        ("[1, 2][true]", "array indices must be integers, not 'BOOLEAN'"),
        ("5[0]", "index operator not supported: 'INTEGER'"),
        ("5(1)", "not a function: 'INTEGER'"),
        ("\"f\"()", "not a function: 'STRING'"),
        ("len(5)", "argument to 'len' not supported, got 'INTEGER'"),
        ("len()", "wrong number of arguments: got=0, want=1"),
        ("len(\"a\", \"b\")", "wrong number of arguments: got=2, want=1"),
        ("append()", "wrong number of arguments: got=0, want>0"),
        ("sum([1], 2, 3)", "wrong number of arguments: got=3, want=1 or 2"),
        ("pop(5)", "argument to 'pop' must be 'ARRAY', got 'INTEGER'"),
        ("sort(\"abc\")", "argument to 'sort' must be 'ARRAY', got 'STRING'"),
        ("pop([])", "pop from empty array"),
        ("sort([1, \"a\"])", "'<' not supported between 'INTEGER' and 'STRING'"),
        ("let f = fn(x) { x }; f(1, 2)", "wrong number of arguments: got=2, want=1"),
        ("let f = fn(x) { x }; f()", "wrong number of arguments: got=0, want=1"),
        ("5 = 1", "cannot assign to literal"),
        ("let 5 = 1;", "cannot assign to literal"),
        ("let a, b = 1, 2, 3;", "wrong number of values to unpack: got=3, want=2"),
        ("let a, b, c = 1, 2;", "wrong number of values to unpack: got=2, want=3"),
    ];

    for (input, expected) in tests {
        assert_eq!(eval_error(input), expected, "input: {input}");
    }
}

#[test]
fn sort_rejects_unorderable_arrays() {
    assert_eq!(eval_error("sort([2, 1, \"x\"])"),
               "'<' not supported between 'INTEGER' and 'STRING'");
    assert_eq!(eval_error("sort([[1], [2]])"),
               "'<' not supported between 'ARRAY' and 'ARRAY'");
}
