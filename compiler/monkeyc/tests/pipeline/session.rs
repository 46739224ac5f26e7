use monkey_eval::{buffer_handler, silent_handler, Evaluator, Value};
use monkeyc::{LineOutcome, Session};
use pretty_assertions::assert_eq;

fn quiet_session() -> Session {
    Session::with_evaluator(Evaluator::builder().print_handler(silent_handler()).build())
}

fn value_of(outcome: LineOutcome) -> Option<Value> {
    match outcome {
        LineOutcome::Evaluated(value) => value,
        LineOutcome::SyntaxErrors(errors) => panic!("unexpected syntax errors: {errors:?}"),
    }
}

#[test]
fn bindings_persist_across_lines() {
    let mut session = quiet_session();
    assert_eq!(value_of(session.eval_line("let x = 5;")), None);
    assert_eq!(value_of(session.eval_line("let y = x * 2;")), None);
    assert_eq!(value_of(session.eval_line("x + y")), Some(Value::Integer(15)));
    assert_eq!(session.env().get("y"), Some(Value::Integer(10)));
}

#[test]
fn closures_defined_earlier_remain_callable() {
    let mut session = quiet_session();
    session.eval_line("let counter = fn(start) { fn(step) { start + step } };");
    session.eval_line("let from10 = counter(10);");
    assert_eq!(value_of(session.eval_line("from10(5)")), Some(Value::Integer(15)));
}

#[test]
fn syntax_errors_leave_state_untouched() {
    let mut session = quiet_session();
    session.eval_line("let a = 1;");
    let LineOutcome::SyntaxErrors(errors) = session.eval_line("let b 2; let a = 99;") else {
        panic!("expected syntax errors");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(session.env().get("a"), Some(Value::Integer(1)));
    assert_eq!(session.env().get("b"), None);
}

#[test]
fn runtime_errors_do_not_poison_the_session() {
    let mut session = quiet_session();
    let value = value_of(session.eval_line("let z = missing + 1;")).unwrap();
    assert_eq!(value.to_string(), "ERROR: identifier not found: missing");
    assert_eq!(
        value_of(session.eval_line("let missing = 1; missing + 1")),
        Some(Value::Integer(2))
    );
}

#[test]
fn puts_goes_through_session_evaluator() {
    let handler = buffer_handler();
    let mut session =
        Session::with_evaluator(Evaluator::builder().print_handler(handler.clone()).build());
    assert_eq!(value_of(session.eval_line("puts(\"hi\")")), Some(Value::Null));
    assert_eq!(handler.output(), "hi\n");
}
