// SPDX-License-Identifier: LGPL-3.0-or-later

use lawtscript::prolog::*;
use lawtscript::{ErrorKind, ExecutionError, NumericError, RuntimeDiagnosticKind};

fn run(text: &str) -> (Interpreter<RecordingHost>, lawtscript::Result) {
    let mut interpreter = Interpreter::from_text(RecordingHost::capturing(), &ParseOptions::default(), text);
    let result = interpreter.execute();
    (interpreter, result)
}

fn calls(interpreter: &Interpreter<RecordingHost>) -> Vec<String> {
    interpreter.host().calls().iter().map(|c| c.to_string()).collect()
}

fn diagnostics(interpreter: &Interpreter<RecordingHost>) -> Vec<&RuntimeDiagnosticKind> {
    interpreter.context().diagnostics().iter().map(|d| d.kind()).collect()
}

#[test]
fn scene() {
    let (interpreter, result) = run("window(800,600,\"Demo\"); circle(10, 20, 5);");
    assert!(result.is_ok());
    assert_eq!(calls(&interpreter), vec!["createWindow(800, 600, \"Demo\")", "createCircle(10, 20, 5)"]);
}

#[test]
fn print_variable() {
    let (interpreter, result) = run("x=5; print(x);");
    assert!(result.is_ok());
    assert_eq!(interpreter.host().output(), vec!["5"]);
}

#[test]
fn variables_as_arguments() {
    let (interpreter, result) = run("w = 640; h = 480; title = \"Demo\"; window(w, h, title);");
    assert!(result.is_ok());
    assert_eq!(calls(&interpreter), vec!["createWindow(640, 480, \"Demo\")"]);
}

#[test]
fn assignment_strips_whitespace() {
    // Quoted text loses its spaces when assigned, but not when passed directly
    let (interpreter, result) = run("msg = \"a b\"; print(msg); print(\"a b\");");
    assert!(result.is_ok());
    assert_eq!(interpreter.host().output(), vec!["ab", "a b"]);
}

#[test]
fn empty_argument_list() {
    let (interpreter, result) = run("print(); print(\"after\");");
    assert!(result.is_ok());
    assert_eq!(interpreter.host().output(), vec!["nil", "after"]);
    assert_eq!(diagnostics(&interpreter), vec![&RuntimeDiagnosticKind::UnknownVariable(String::new())]);
}

#[test]
fn unknown_function() {
    let (interpreter, result) = run("foo(1); print(\"ok\");");
    assert!(result.is_ok());
    assert_eq!(interpreter.host().output(), vec!["ok"]);
    assert_eq!(diagnostics(&interpreter), vec![&RuntimeDiagnosticKind::UnknownFunction("foo".to_owned())]);
}

#[test]
fn unknown_variable() {
    let (interpreter, result) = run("print(missing); print(\"after\");");
    assert!(result.is_ok());
    assert_eq!(interpreter.host().output(), vec!["nil", "after"]);
    assert_eq!(diagnostics(&interpreter), vec![&RuntimeDiagnosticKind::UnknownVariable("missing".to_owned())]);
}

#[test]
fn malformed_numeral_aborts() {
    let (interpreter, result) = run("print(\"before\"); circle(1, 2, \"bad\"); print(\"after\");");
    let error = result.unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NumericError(NumericError::MalformedFloat { .. })));
    assert_eq!(interpreter.host().output(), vec!["before"]);
}

#[test]
fn missing_arguments_abort() {
    let (interpreter, result) = run("window(800, 600); print(\"after\");");
    let error = result.unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ArgumentError(_)));
    assert!(interpreter.host().calls().is_empty());
}

#[test]
fn eager_assignment() {
    let (interpreter, result) = run("a = \"first\"; b = a; a = \"second\"; print(b); print(a);");
    assert!(result.is_ok());
    assert_eq!(interpreter.host().output(), vec!["first", "second"]);
}

#[test]
fn comments() {
    let text = "// A small scene\nwindow(320, 240, \"Scene\"); // the window\n// circle(0, 0, 1);\ncircle(1.5, 2.5, 3);";
    let (interpreter, result) = run(text);
    assert!(result.is_ok());
    assert_eq!(calls(&interpreter), vec!["createWindow(320, 240, \"Scene\")", "createCircle(1.5, 2.5, 3)"]);
}

#[test]
fn print_err_continues() {
    let (interpreter, result) = run("printErr(\"warning\"); print(\"still running\");");
    assert!(result.is_ok());
    assert_eq!(interpreter.host().error_output(), vec!["warning"]);
    assert_eq!(interpreter.host().output(), vec!["still running"]);
}

#[test]
fn legacy_numerals() {
    let text = "x1 = 5; print(x1);";

    let mut strict = Interpreter::from_text(RecordingHost::capturing(), &ParseOptions::default(), text);
    assert!(strict.execute().is_ok());
    assert_eq!(strict.host().output(), vec!["5"]);

    // `x1` is taken as a numeral literal rather than a variable name
    let options = ParseOptions { numerals: NumeralRule::Legacy };
    let mut legacy = Interpreter::from_text(RecordingHost::capturing(), &options, text);
    assert!(legacy.execute().is_ok());
    assert_eq!(legacy.host().output(), vec!["x1"]);
}

#[test]
fn from_path() -> lawtscript::Result {
    let path = std::env::temp_dir().join(format!("lawtscript-{}.ls", std::process::id()));
    std::fs::write(&path, "r = 4; circle(0, 0, r);")?;

    let mut interpreter = Interpreter::from_path(RecordingHost::new(), &ParseOptions::default(), &path);
    let _ = std::fs::remove_file(&path);

    assert!(interpreter.is_runnable());
    interpreter.execute()?;
    assert_eq!(calls(&interpreter), vec!["createCircle(0, 0, 4)"]);

    Ok(())
}

#[test]
fn unreadable_path() {
    let mut interpreter = Interpreter::from_path(
        RecordingHost::new(),
        &ParseOptions::default(),
        "definitely/not/a/real/script.ls",
    );

    let error = interpreter.execute().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ExecutionError(ExecutionError::SourceUnavailable(_))));
    assert!(interpreter.host().calls().is_empty());
}
