//! Whole programs run through the pipeline.

use lox_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

use super::common::{output_of, run};

#[test]
fn arithmetic() {
    assert_eq!(output_of("print 2 + 3 * 4;"), "14\n");
}

#[test]
fn variables_and_reassignment() {
    assert_eq!(output_of("var x 5; print x; x = x + 1; print x;"), "5\n6\n");
}

#[test]
fn string_operations() {
    assert_eq!(
        output_of(r#"print "a" + "b"; print "ab" * 3; print "hello" - 2;"#),
        "ab\nababab\nhel\n"
    );
}

#[test]
fn over_truncation_is_a_runtime_error() {
    let run = run("print \"hi\" - 5;");
    assert_eq!(run.runtime_error().code, ErrorCode::E6006);
    assert_eq!(run.outcome.exit_code(), 70);
}

#[test]
fn huge_repetition_is_a_runtime_error() {
    let run = run("print \"ab\" * 1000000000000000000;\nprint \"unreachable\";");
    assert_eq!(run.output, "");
    assert_eq!(run.runtime_error().code, ErrorCode::E6010);
    assert_eq!(run.runtime_error().line, Some(1));
}

#[test]
fn division_by_zero_halts() {
    let run = run("print 5 / 0;\nprint \"unreachable\";");
    assert_eq!(run.output, "");
    let diagnostic = run.runtime_error();
    assert_eq!(diagnostic.code, ErrorCode::E6003);
    assert_eq!(
        diagnostic.to_string(),
        "[line 1] error[E6003]: division by zero"
    );
}

#[test]
fn functions_do_not_leak_parameters() {
    let run = run("fun add(a,b) { return a + b; }\nprint add(2,3);\nprint a;");
    assert_eq!(run.output, "5\n");
    let diagnostic = run.runtime_error();
    assert_eq!(diagnostic.code, ErrorCode::E6002);
    assert_eq!(diagnostic.line, Some(3));
}

#[test]
fn closures_share_state_with_outer_scope() {
    let source = "
        var n = 0;
        fun inc() { n = n + 1; }
        fun get() { return n; }
        inc();
        inc();
        print get();
        n = 10;
        print get();
    ";
    assert_eq!(output_of(source), "2\n10\n");
}

#[test]
fn counter_closure() {
    let source = "
        fun counter() {
            var i = 0;
            fun next() { i = i + 1; return i; }
            return next;
        }
        var c = counter();
        c();
        print c();
    ";
    assert_eq!(output_of(source), "2\n");
}

#[test]
fn parse_error_skips_only_the_broken_declaration() {
    let run = run("var = 1;\nprint \"later\";");
    assert_eq!(run.outcome.static_errors.len(), 1);
    assert_eq!(run.outcome.runtime_error, None);
    assert_eq!(run.outcome.exit_code(), 65);
    assert_eq!(run.output, "later\n");
}

#[test]
fn broken_function_is_dropped_and_later_code_runs() {
    let source = "fun f() { var a = 1 +; print \"inner\"; }\nprint 2;\nf();";
    let run = run(source);
    assert_eq!(run.outcome.static_errors.len(), 1);
    assert_eq!(run.output, "2\n");
    // `f` was never defined
    assert_eq!(run.runtime_error().code, ErrorCode::E6002);
    assert_eq!(run.runtime_error().line, Some(3));
}

#[test]
fn fibonacci() {
    let source = "
        fun fib(n) {
            if (n < 2) return n;
            return fib(n - 1) + fib(n - 2);
        }
        for (var i = 0; i < 10; i = i + 1) print fib(i);
    ";
    assert_eq!(output_of(source), "0\n1\n1\n2\n3\n5\n8\n13\n21\n34\n");
}

#[test]
fn runaway_recursion_is_reported() {
    let run = run("fun f() { return f(); }\nf();");
    assert_eq!(run.runtime_error().code, ErrorCode::E6008);
}

#[test]
fn comments_are_ignored() {
    assert_eq!(output_of("// nothing here\nprint 1; // trailing\n"), "1\n");
}
