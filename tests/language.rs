use std::fs;

use varcalc::{
    error::{Error, ParseError, RuntimeError},
    interpreter::statement::Calculator,
    run_batch, run_interactive,
};
use walkdir::WalkDir;

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let (script, expected) = split_expectations(&content);

        let mut output = Vec::new();
        run_batch(&script, &mut output).unwrap_or_else(|e| panic!("{path:?} failed: {e}"));
        let output = String::from_utf8(output).expect("output is UTF-8");

        assert_eq!(output, expected, "unexpected output for {path:?}");
        count += 1;
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

/// Separates the statements of a script from its `# expect:` lines.
fn split_expectations(content: &str) -> (String, String) {
    let mut script = String::new();
    let mut expected = String::new();

    for line in content.lines() {
        if let Some(output) = line.strip_prefix("# expect:") {
            expected.push_str(output.trim());
            expected.push('\n');
        } else if !line.trim_start().starts_with('#') {
            script.push_str(line);
            script.push('\n');
        }
    }

    (script, expected)
}

fn run(lines: &[&str]) -> Calculator {
    let mut calculator = Calculator::new();
    for line in lines {
        if let Err(e) = calculator.evaluate(line) {
            panic!("Statement {line:?} failed: {e}");
        }
    }
    calculator
}

fn failure(lines: &[&str], failing: &str) -> (Calculator, Error) {
    let mut calculator = run(lines);
    let Err(e) = calculator.evaluate(failing) else {
        panic!("Statement {failing:?} succeeded but was expected to fail");
    };
    (calculator, e)
}

fn pairs(calculator: &Calculator) -> Vec<(&str, i64)> {
    calculator.variables().iter().collect()
}

#[test]
fn simple_assignment() {
    let calculator = run(&["i = 5"]);
    assert_eq!(pairs(&calculator), vec![("i", 5)]);
}

#[test]
fn assignment_and_basic_arithmetic() {
    let calculator = run(&["a = 2 + 3 * 4",
                           "i = 1 + 2 * 5 + 3",
                           "x = 20 / 4",
                           "s = 10 - 3",
                           "j = 10 - 2 * 5 + 2"]);
    assert_eq!(pairs(&calculator),
               vec![("a", 14), ("i", 14), ("x", 5), ("s", 7), ("j", 2)]);
}

#[test]
fn unset_variables_read_as_zero() {
    let calculator = run(&["i = x + 2"]);
    assert_eq!(pairs(&calculator), vec![("i", 2)]);
}

#[test]
fn pre_and_post_increment() {
    let calculator = run(&["i = 0", "j = ++i"]);
    assert_eq!(pairs(&calculator), vec![("i", 1), ("j", 1)]);

    let calculator = run(&["i = 0", "x = i++ + 5"]);
    assert_eq!(pairs(&calculator), vec![("i", 1), ("x", 5)]);
}

#[test]
fn compound_assignments() {
    let calculator = run(&["i = 1", "i += 4"]);
    assert_eq!(calculator.variables().get("i"), 5);

    let calculator = run(&["b = 5", "b += 10 - 3"]);
    assert_eq!(calculator.variables().get("b"), 12);

    let calculator = run(&["a = 5", "a -= 20", "b = -20", "c = -a"]);
    assert_eq!(pairs(&calculator), vec![("a", -15), ("b", -20), ("c", 15)]);
}

#[test]
fn compound_assignment_with_negative_right_hand_side() {
    let calculator = run(&["a = 10", "a += -5"]);
    assert_eq!(calculator.variables().get("a"), 5);

    let calculator = run(&["a = 10", "a += -5", "a -= -3"]);
    assert_eq!(pairs(&calculator), vec![("a", 8)]);
}

#[test]
fn compound_assignment_on_unset_variable() {
    let calculator = run(&["n += 3", "m -= 2"]);
    assert_eq!(pairs(&calculator), vec![("n", 3), ("m", -2)]);
}

#[test]
fn compound_assignment_reads_after_side_effects() {
    let calculator = run(&["i = 1", "i += i++"]);
    assert_eq!(calculator.variables().get("i"), 3);
}

#[test]
fn unary_minus_and_decrement() {
    let calculator = run(&["i = 5", "j = -i", "k = 2 * -3 + j - 1", "n = --i"]);
    assert_eq!(pairs(&calculator), vec![("i", 4), ("j", -5), ("k", -12), ("n", 4)]);

    let calculator = run(&["x = 5", "y = x--"]);
    assert_eq!(pairs(&calculator), vec![("x", 4), ("y", 5)]);

    let calculator = run(&["a = 5", "b = --a", "c = a-- + 10", "d = b + c"]);
    assert_eq!(pairs(&calculator), vec![("a", 3), ("b", 4), ("c", 14), ("d", 18)]);
}

#[test]
fn full_session() {
    let calculator = run(&["i = 0", "j = ++i", "x = i++ + 5", "y = 5 + 3 * 10", "i += y"]);
    assert_eq!(pairs(&calculator), vec![("i", 37), ("j", 1), ("x", 6), ("y", 35)]);
    assert_eq!(calculator.variables().to_string(), "(i=37,j=1,x=6,y=35)");
}

#[test]
fn variables_keep_first_assignment_order() {
    let calculator = run(&["b = 1", "a = 2", "b = 3"]);
    assert_eq!(pairs(&calculator), vec![("b", 3), ("a", 2)]);

    let calculator = run(&["x = y++"]);
    assert_eq!(pairs(&calculator), vec![("y", 1), ("x", 0)]);
}

#[test]
fn reading_variables_is_idempotent() {
    let calculator = run(&["a = 1", "b = a++"]);
    let first = calculator.variables().clone();
    let second = calculator.variables().clone();
    assert_eq!(first, second);
    assert_eq!(first.as_map(), second.as_map());
}

#[test]
fn blank_lines_are_ignored() {
    let calculator = run(&["", "   ", "\t"]);
    assert!(calculator.variables().is_empty());
    assert_eq!(calculator.variables().to_string(), "()");
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let calculator = run(&["  total=7  ", "\ttotal+=1"]);
    assert_eq!(pairs(&calculator), vec![("total", 8)]);
}

#[test]
fn division_by_zero_is_error() {
    let (calculator, e) = failure(&[], "x = 5 / 0");
    assert_eq!(e, Error::Runtime(RuntimeError::DivisionByZero));
    assert_eq!(e.to_string(), "Division by zero");
    assert!(calculator.variables().is_empty());
}

#[test]
fn failed_statement_keeps_earlier_side_effects() {
    let (calculator, e) = failure(&["i = 0"], "x = i++ + 1 / 0");
    assert_eq!(e, Error::Runtime(RuntimeError::DivisionByZero));
    assert_eq!(pairs(&calculator), vec![("i", 1)]);
}

#[test]
fn invalid_variable_names() {
    let (_, e) = failure(&[], "123abc = 5");
    assert_eq!(e,
               Error::Parse(ParseError::InvalidVariableName { name: "123abc".to_string() }));
    assert!(e.to_string().contains("Invalid variable"));

    let (_, e) = failure(&[], "abc_ = 5");
    assert_eq!(e, Error::Parse(ParseError::InvalidVariableName { name: "abc_".to_string() }));

    let (_, e) = failure(&[], "x = abc_ + 1");
    assert_eq!(e, Error::Parse(ParseError::InvalidVariableName { name: "abc_".to_string() }));
    assert!(e.to_string().contains("cannot end with underscore"));

    let (_, e) = failure(&[], "= 5");
    assert_eq!(e, Error::Parse(ParseError::InvalidVariableName { name: String::new() }));
}

#[test]
fn unexpected_characters() {
    let (_, e) = failure(&[], "i = 5 @ 3");
    assert_eq!(e, Error::Parse(ParseError::UnexpectedCharacter { character: '@' }));
    assert!(e.to_string().contains("Unexpected character"));
}

#[test]
fn unexpected_tokens() {
    let (_, e) = failure(&[], "x = ++5");
    assert_eq!(e, Error::Parse(ParseError::UnexpectedToken { token: "5".to_string() }));

    let (_, e) = failure(&[], "x = 5 *");
    assert_eq!(e, Error::Parse(ParseError::UnexpectedToken { token: String::new() }));
}

#[test]
fn missing_assignment_operator_is_syntax_error() {
    let (_, e) = failure(&[], "x 5");
    assert!(matches!(e, Error::Parse(ParseError::Syntax { .. })));
    assert_eq!(e.to_string(), "Line must contain '=', '+=', or '-=' operator: x 5");
}

#[test]
fn malformed_assignment_is_syntax_error() {
    for line in ["a = b = c", "x =", "x == 1", "x += 1 += 2"] {
        let (_, e) = failure(&[], line);
        assert_eq!(e,
                   Error::Parse(ParseError::Syntax { details: format!("Invalid assignment expression: {}",
                                                                      line.trim()) }),
                   "{line:?}");
    }
}

#[test]
fn right_hand_side_is_split_textually() {
    // `+=` wins the detection, so the trailing `= 2` is left to the
    // expression, which stops before it.
    let calculator = run(&["x += 1 = 2"]);
    assert_eq!(pairs(&calculator), vec![("x", 1)]);
}

#[test]
fn batch_reports_errors_and_continues() {
    let source = "a = 5\n\nb = a / 0\nc = 5 @ 3\nd = a++\n";
    let mut output = Vec::new();
    let calculator = run_batch(source, &mut output).unwrap();

    assert_eq!(pairs(&calculator), vec![("a", 6), ("d", 5)]);
    assert_eq!(String::from_utf8(output).unwrap(),
               "Error in line 'b = a / 0': Division by zero\n\
                Error in line 'c = 5 @ 3': Unexpected character: @\n\
                (a=6,d=5)\n");
}

#[test]
fn batch_of_nothing_prints_empty_store() {
    let mut output = Vec::new();
    run_batch("\n  \n", &mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "()\n");
}

#[test]
fn interactive_session() {
    let input = "i = 1\n\nj = i / 0\nj = ++i\n  exit  \n".as_bytes();
    let mut output = Vec::new();
    let calculator = run_interactive(input, &mut output).unwrap();

    assert_eq!(pairs(&calculator), vec![("i", 2), ("j", 2)]);
    assert_eq!(String::from_utf8(output).unwrap(),
               "Calculator Interactive Mode\n\
                Type expressions or 'exit' to quit.\n\
                > (i=1)\n\
                > > Error: Division by zero\n\
                > (i=2,j=2)\n\
                > Exiting...\n");
}

#[test]
fn interactive_session_ends_at_end_of_input() {
    let mut output = Vec::new();
    let calculator = run_interactive("x = 3".as_bytes(), &mut output).unwrap();

    assert_eq!(pairs(&calculator), vec![("x", 3)]);
    assert!(String::from_utf8(output).unwrap().ends_with("> (x=3)\n> Exiting...\n"));
}
