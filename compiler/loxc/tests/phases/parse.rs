//! Parser behaviour seen from the driver.

use lox_diagnostic::ErrorCode;
use loxc::commands::render_ast;
use loxc::front_end;
use pretty_assertions::assert_eq;

#[test]
fn precedence_and_grouping() {
    assert_eq!(render_ast("print 2 + 3 * 4;"), "(print (+ 2 (* 3 4)))\n");
    assert_eq!(render_ast("print (2 + 3) * 4;"), "(print (* (+ 2 3) 4))\n");
}

#[test]
fn for_desugars_to_while() {
    assert_eq!(
        render_ast("for (var i = 0; i < 2; i = i + 1) print i;"),
        "(block (var i 0) (while (< i 2) (block (print i) (; (= i (+ i 1))))))\n"
    );
}

#[test]
fn a_broken_declaration_does_not_hide_later_ones() {
    let front = front_end("var a = ;\nprint 1;\nfun f( { }\nprint 2;");
    let codes: Vec<_> = front.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, [ErrorCode::E1002, ErrorCode::E1004]);
    assert_eq!(front.diagnostics[0].line, Some(1));
    assert_eq!(front.diagnostics[1].line, Some(3));
    assert_eq!(
        lox_ir::AstPrinter::print_program(&front.statements),
        "(print 1)\n(print 2)\n"
    );
}

#[test]
fn invalid_assignment_target() {
    let front = front_end("1 + 2 = 3;");
    assert_eq!(front.diagnostics.len(), 1);
    assert_eq!(front.diagnostics[0].code, ErrorCode::E1005);
}

#[test]
fn reparsing_is_identical() {
    let source = "var x 5;\nif (x > 1) print x; else { print nil; }";
    assert_eq!(front_end(source).statements, front_end(source).statements);
}
