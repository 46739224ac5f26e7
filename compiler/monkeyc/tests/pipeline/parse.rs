use monkeyc::{describe_parse_error, parse};
use pretty_assertions::assert_eq;

#[test]
fn precedence_is_visible_in_rendering() {
    let cases = [
        ("a + b * c", "(a + (b * c))"),
        ("-a * b", "((-a) * b)"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
    ];
    for (source, expected) in cases {
        assert_eq!(parse(source).program.to_string(), expected);
    }
}

#[test]
fn rendering_reparses_identically() {
    let source = "let max = fn(a, b) { if (a > b) { return a; } b }; max(1 + 2, -3) * 4";
    let first = parse(source).program.to_string();
    let second = parse(&first).program.to_string();
    assert_eq!(first, second);
}

#[test]
fn errors_are_located() {
    let source = "let a = 1;\nlet = 2;";
    let output = parse(source);
    let described: Vec<String> = output
        .errors
        .iter()
        .map(|e| describe_parse_error(source, e))
        .collect();
    assert_eq!(
        described,
        vec![
            "2:5: expected next token to be IDENT, got = instead",
            "2:5: no prefix parse function for = found",
        ]
    );
}
