use monkey_eval::{buffer_handler, Environment, Evaluator, Value};
use monkeyc::{evaluate, parse};
use pretty_assertions::assert_eq;

fn run(source: &str) -> Value {
    let output = parse(source);
    assert!(!output.has_errors(), "{:?}", output.error_messages());
    evaluate(&output.program, &Environment::new())
}

#[test]
fn arithmetic_and_conditionals() {
    assert_eq!(run("5 + 5 + 5 + 5 - 10"), Value::Integer(10));
    assert_eq!(run("2 * (5 + 10)"), Value::Integer(30));
    assert_eq!(run("if (1 > 2) { 10 }"), Value::Null);
    assert_eq!(run("if (1 < 2) { 10 } else { 20 }"), Value::Integer(10));
}

#[test]
fn early_return_escapes_nested_blocks() {
    assert_eq!(
        run("if (10 > 1) { if (10 > 1) { return 10; } return 1; }"),
        Value::Integer(10)
    );
}

#[test]
fn closures_outlive_their_defining_call() {
    let source = "let newAdder = fn(x) { fn(y) { x + y }; }; let addTwo = newAdder(2); addTwo(2);";
    assert_eq!(run(source), Value::Integer(4));
}

#[test]
fn errors_short_circuit() {
    assert_eq!(run("5 + true;").to_string(), "ERROR: type mismatch: INTEGER + BOOLEAN");
    assert_eq!(run("foobar").to_string(), "ERROR: identifier not found: foobar");
    assert_eq!(
        run("5; true + false; 5").to_string(),
        "ERROR: unknown operator: BOOLEAN + BOOLEAN"
    );
}

/// Run a demo program with captured output.
fn run_demo(source: &str) -> (Value, String) {
    let handler = buffer_handler();
    let evaluator = Evaluator::builder().print_handler(handler.clone()).build();
    let output = parse(source);
    assert!(!output.has_errors(), "{:?}", output.error_messages());
    let value = evaluator.evaluate_program(&output.program, &Environment::new());
    (value, handler.output())
}

#[test]
fn demo_fibonacci() {
    let (value, printed) = run_demo(include_str!("../../../../demos/fibonacci.mk"));
    assert_eq!(value, Value::Integer(6765));
    assert_eq!(printed, "fibonacci(20) =\n6765\n");
}

#[test]
fn demo_closures() {
    let (value, printed) = run_demo(include_str!("../../../../demos/closures.mk"));
    assert_eq!(value, Value::Integer(42));
    assert_eq!(printed, "");
}

#[test]
fn demo_strings() {
    let (value, printed) = run_demo(include_str!("../../../../demos/strings.mk"));
    assert_eq!(value, Value::Integer(14));
    assert_eq!(printed, "Hello, Monkey!\n");
}

#[test]
fn deeply_nested_input_survives_the_whole_pipeline() {
    let depth = 50_000;
    let source = format!("{}(1 + 2){}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(run(&source), Value::Integer(3));
    let source = format!("{}4", "-".repeat(depth + 1));
    assert_eq!(run(&source), Value::Integer(-4));
}
