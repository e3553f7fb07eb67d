// Integration tests for the BrainF++ interpreter

use brainfpp::interpreter::errors::RuntimeError;
use brainfpp::{execute, interpret, interpret_with, Config, Outcome};
use pretty_assertions::assert_eq;

fn repeat(c: char, n: usize) -> String {
    std::iter::repeat(c).take(n).collect()
}

#[test]
fn test_missing_main() {
    for source in ["", "{ab +.}", "no declarations here", "{MN +}"] {
        assert_eq!(
            interpret(source, ""),
            "ERROR: main function {mn} not found",
            "source: {:?}",
            source
        );
    }
}

#[test]
fn test_duplicate_function() {
    assert_eq!(
        interpret("{ab +}{mn .}{ab -}", ""),
        "ERROR: function ab defined twice"
    );
    assert_eq!(
        interpret("{mn +}{mn -}", ""),
        "ERROR: function mn defined twice"
    );
}

#[test]
fn test_other_parse_errors() {
    assert_eq!(
        interpret("{m2 +}", ""),
        "ERROR: function name must be two letters"
    );
    assert_eq!(
        interpret("{mn (a) }", ""),
        "ERROR: function name must be two letters"
    );
    assert_eq!(
        interpret("{mn {ab}}", ""),
        "ERROR: '{' found inside function declaration"
    );
    assert_eq!(interpret("{mn +++.", ""), "ERROR: unclosed function");
}

#[test]
fn test_parse_errors_produce_no_output() {
    // The body would print before the second declaration fails
    assert_eq!(
        interpret("{mn +++++.}{mn}", ""),
        "ERROR: function mn defined twice"
    );
}

#[test]
fn test_minimal_character() {
    let source = format!("{{mn{}.}}", repeat('+', 72));
    assert_eq!(interpret(&source, ""), "H");
}

#[test]
fn test_loop() {
    assert_eq!(interpret("{mn++++++++[>++++++++<-]>+.}", ""), "A");
    assert_eq!(
        interpret("{mn++++++++++[>+++++++>++++++++++>+++>+<<<<-]>++.}", ""),
        "H"
    );
}

#[test]
fn test_hello_world_cell_by_cell() {
    let codes = [72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100, 33];
    let body: Vec<String> = codes
        .iter()
        .map(|&n| format!("{}.", repeat('+', n)))
        .collect();
    let source = format!("{{mn{}}}", body.join(">"));
    assert_eq!(interpret(&source, ""), "Hello World!");
}

#[test]
fn test_simple_hi() {
    let source = format!("{{mn++++++++[>+++++++++<-]>.>{}.}}", repeat('+', 105));
    assert_eq!(interpret(&source, ""), "Hi");
}

#[test]
fn test_input_passthrough() {
    assert_eq!(interpret("{mn ,+++++.}", "A"), "F");
    assert_eq!(interpret("{mn ,+++++.}", ""), "\u{5}");
}

#[test]
fn test_input_is_read_in_order() {
    assert_eq!(interpret("{mn ,>,>,.<.<.}", "abc"), "cba");
    // Exhausted input reads as zero
    assert_eq!(interpret("{mn ,,\"}", "x"), "0 ");
}

#[test]
fn test_function_call_composition() {
    // fn starts on a copy of the caller's cell, moves right, adds two and
    // returns 2. Each call overwrites mn's cell, so the result is chr(2)
    // regardless of input or the + between calls.
    assert_eq!(interpret("{fn >++}{mn ,(fn)+(fn).}", "A"), "\u{2}");
    assert_eq!(interpret("{fn >++}{mn ,(fn)+(fn).}", ""), "\u{2}");
}

#[test]
fn test_function_arguments_and_returns() {
    let source = "{ad +++;}{mn ,(ad)(ad).}";
    assert_eq!(interpret(source, "a"), "g");
}

#[test]
fn test_recursion_with_debug_output() {
    assert_eq!(interpret("{cd \"[-(cd)];}{mn +++(cd)}", ""), "3 2 1 0 ");
}

#[test]
fn test_step_budget() {
    let result = interpret("{mn+[]}", "");
    assert_eq!(result, "\nERROR: Program exceeded maximum execution steps");

    let result = interpret("{mn++++++++[>++++++++<-]>+.[]}", "");
    assert_eq!(result, "A\nERROR: Program exceeded maximum execution steps");
}

#[test]
fn test_infinite_recursion_is_bounded() {
    // Self-recursion that never grows the window still hits the step budget
    let result = interpret("{lp (lp)}{mn (lp)}", "");
    assert!(
        result == "ERROR: execution failed"
            || result.ends_with("ERROR: Program exceeded maximum execution steps"),
        "unexpected result: {:?}",
        result
    );
}

#[test]
fn test_silent_truncation() {
    // Window exhaustion after output keeps the output without a diagnostic
    let source = "{rc +(rc)}{mn ++++++++[>++++++++<-]>+.(rc)}";
    assert_eq!(interpret(source, ""), "A");

    // Nothing printed yet
    assert_eq!(interpret("{rc +(rc)}{mn (rc)}", ""), "ERROR: execution failed");

    // Pointer falls off the left end
    assert_eq!(interpret("{mn +.<<}", ""), "\u{1}");
    assert_eq!(interpret("{mn <<}", ""), "ERROR: execution failed");

    // Undefined function
    assert_eq!(interpret("{mn +.(zz).}", ""), "\u{1}");

    // Skipped loop without a closing bracket
    assert_eq!(interpret("{mn [.}", ""), "ERROR: execution failed");
}

#[test]
fn test_execute_reports_state() {
    let snapshot = execute("{id ;}{mn ,(id)\"}", "A", &Config::default()).unwrap();
    assert_eq!(snapshot.output, "65 ");
    assert_eq!(snapshot.outcome, Outcome::Completed { value: 65 });
    assert_eq!(snapshot.pointer, Some(1));
    assert_eq!(snapshot.max_depth, 2);
    assert_eq!(snapshot.steps, 4);
    assert_eq!(snapshot.memory.len(), 27);
    assert_eq!(snapshot.memory[1], 65);
    assert!(snapshot.memory[2..].iter().all(|&c| c == 0));
}

#[test]
fn test_execute_reports_fault() {
    let snapshot = execute("{mn +.<<}", "", &Config::default()).unwrap();
    assert!(!snapshot.is_success());
    assert!(matches!(
        snapshot.outcome,
        Outcome::Faulted(RuntimeError::PointerOutOfBounds { .. })
    ));
    assert_eq!(snapshot.pointer, None);

    let err = execute("{mn", "", &Config::default()).unwrap_err();
    assert_eq!(err.to_string(), "unclosed function");
}

#[test]
fn test_configured_tape() {
    // Three cells, no global region: the fourth `>` leaves the tape
    let config = Config::new(3, 0).unwrap();
    assert_eq!(interpret_with("{mn +\">+\">+\"}", "", &config), "1 1 1 ");
    assert_eq!(
        interpret_with("{mn +.>>>.}", "", &config),
        "\u{1}"
    );

    // Wider global region reached by walking left from home
    let config = Config::new(10, 3).unwrap();
    assert_eq!(interpret_with("{mn <+<++<+++\">>>\"}", "", &config), "3 0 ");
}

#[test]
fn test_configured_step_budget() {
    let config = Config::default().with_max_steps(5).unwrap();
    assert_eq!(
        interpret_with("{mn +.+.+.}", "", &config),
        "\u{1}\u{2}\nERROR: Program exceeded maximum execution steps"
    );
}

#[test]
fn test_idempotence() {
    let source = "{cd \"[-(cd)];}{gt <;}{mn ,(cd)<+++>(gt).}";
    let first = interpret(source, "\u{3}");
    let second = interpret(source, "\u{3}");
    assert_eq!(first, second);
    assert_eq!(first, "3 2 1 0 \u{3}");
}

#[test]
fn test_empty_functions() {
    assert_eq!(interpret("{mn}", ""), "ERROR: execution failed");
    assert_eq!(interpret("{mn just a comment}", ""), "ERROR: execution failed");

    // The empty callee aborts the run; output printed before the call stays
    assert_eq!(interpret("{no}{mn +.(no).}", ""), "\u{1}");

    let snapshot = execute("{no}{mn +.(no).}", "", &Config::default()).unwrap();
    assert!(matches!(
        snapshot.outcome,
        Outcome::Faulted(RuntimeError::EmptyFunction { .. })
    ));
}

#[test]
fn test_recursion_from_global_cell() {
    // cd clears its home cell, then recurses from the global cell, which
    // counts the remaining depth. The window start never moves.
    let source = format!("{{cd [-]<[-(cd)]}}{{mn <{}>(cd)<\"}}", repeat('+', 300));
    assert_eq!(interpret(&source, ""), "0 ");

    let snapshot = execute(&source, "", &Config::default()).unwrap();
    assert!(snapshot.is_success());
    assert_eq!(snapshot.max_depth, 302);
}

#[test]
fn test_deep_recursion_from_global_cell() {
    // Exhausted input clears the home cell in one step, so depth is not
    // limited by the step budget
    let source = format!("{{cd ,<[-(cd)]}}{{mn <{}>(cd)<\"}}", repeat('+', 10000));
    let snapshot = execute(&source, "", &Config::default()).unwrap();
    assert_eq!(snapshot.render(), "0 ");
    assert_eq!(snapshot.max_depth, 10002);
}
