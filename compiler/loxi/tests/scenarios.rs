// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests: whole programs through the driver, the REPL loop, the
//! inspection commands and the `lox` binary itself.

use std::io::{Cursor, Write};
use std::process::{Command, Output};

use lox_diagnostic::TerminalEmitter;
use lox_eval::{buffer_handler, SharedPrintHandler};
use loxi::commands::{explain, lex_source, parse_source, repl, run_file_with, PROMPT};
use loxi::{DriverError, RunOptions, Session};

fn session() -> (Session, SharedPrintHandler) {
    let print = buffer_handler();
    let session = Session::new(RunOptions::default()).with_print_handler(print.clone());
    (session, print)
}

fn source_file(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(text.as_bytes()).expect("write temp file");
    file
}

fn lox(args: &[&str], stdin: &str) -> Output {
    use std::process::Stdio;

    let mut child = Command::new(env!("CARGO_BIN_EXE_lox"))
        .args(args)
        .env_remove("LOX_LOG")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn lox");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().expect("wait for lox")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

mod file_runs {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn program_output() {
        let file = source_file(
            "// totals\n\
             var price = 4;\n\
             var count = 3;\n\
             print price * count;\n\
             print \"total: \" + \"twelve\";\n\
             print price > count == true;\n",
        );
        let (mut session, print) = session();
        let mut emitter = TerminalEmitter::new(Vec::new());
        let outcome =
            run_file_with(file.path().to_str().unwrap(), &mut session, &mut emitter).unwrap();

        assert!(outcome.is_success());
        assert_eq!(print.take_output(), "12.000000\ntotal: twelve\nTRUE\n");
        assert!(emitter.into_inner().is_empty());
    }

    #[test]
    fn runtime_errors_do_not_stop_the_file() {
        let file = source_file("print 1;\nprint undefined;\nprint \"x\" - 1;\nprint 3;\n");
        let (mut session, print) = session();
        let mut emitter = TerminalEmitter::new(Vec::new());
        let outcome =
            run_file_with(file.path().to_str().unwrap(), &mut session, &mut emitter).unwrap();

        assert_eq!(print.take_output(), "1.000000\n3.000000\n");
        assert_eq!(
            String::from_utf8(emitter.into_inner()).unwrap(),
            "Error: Undefined variable: undefined\n\
             Error: Unsupported operation - for STRING and non STRING type\n"
        );
        assert_eq!(outcome.runtime_errors, 2);
        assert_eq!(outcome.exit_code(), loxi::EXIT_RUNTIME_ERROR);
    }

    #[test]
    fn multi_line_string_keeps_later_lines_right() {
        let file = source_file("print \"one\ntwo\";\nprint 1 +;\n");
        let (mut session, _) = session();
        let mut emitter = TerminalEmitter::new(Vec::new());
        run_file_with(file.path().to_str().unwrap(), &mut session, &mut emitter).unwrap();
        assert_eq!(
            String::from_utf8(emitter.into_inner()).unwrap(),
            "[line 3] Error: Expected expression. Instead, got token of type: SEMICOLON\n"
        );
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.lox");
        let (mut session, _) = session();
        let mut emitter = TerminalEmitter::new(Vec::new());
        let err = run_file_with(path.to_str().unwrap(), &mut session, &mut emitter).unwrap_err();
        assert!(matches!(err, DriverError::NotFound { .. }));
        assert_eq!(err.exit_code(), loxi::EXIT_IO_ERROR);
    }
}

mod prompt {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_lines(input: &str) -> (String, String, String, usize) {
        let (mut session, print) = session();
        let mut prompts = Vec::new();
        let mut emitter = TerminalEmitter::new(Vec::new());
        let count = repl(Cursor::new(input), &mut prompts, &mut session, &mut emitter).unwrap();
        (
            String::from_utf8(prompts).unwrap(),
            print.take_output(),
            String::from_utf8(emitter.into_inner()).unwrap(),
            count,
        )
    }

    #[test]
    fn variables_survive_between_lines() {
        let (_, out, err, count) = run_lines("var x = 5;\nprint x + 1;\n");
        assert_eq!(out, "6.000000\n");
        assert_eq!(err, "");
        assert_eq!(count, 2);
    }

    #[test]
    fn end_stops_reading() {
        let (prompts, out, _, count) = run_lines("print 1;\nend\nprint 2;\n");
        assert_eq!(out, "1.000000\n");
        assert_eq!(count, 1);
        assert_eq!(prompts, PROMPT.repeat(2));
    }

    #[test]
    fn end_of_input_stops_reading() {
        let (prompts, out, _, count) = run_lines("print \"last\";");
        assert_eq!(out, "last\n");
        assert_eq!(count, 1);
        assert_eq!(prompts, PROMPT.repeat(2));
    }

    #[test]
    fn error_on_one_line_does_not_end_session() {
        let (_, out, err, _) = run_lines("print 1 +;\r\nvar a = \"ok\";\nprint a;\n");
        assert_eq!(out, "ok\n");
        assert_eq!(
            err,
            "[line 1] Error: Expected expression. Instead, got token of type: SEMICOLON\n"
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        let (prompts, _, _, count) = run_lines("\n   \nprint 1;\nend\n");
        assert_eq!(count, 1);
        assert_eq!(prompts, PROMPT.repeat(4));
    }
}

mod inspect {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lex_dump() {
        let (dump, diagnostics) = lex_source("print -1.5 >= x;");
        assert_eq!(
            dump,
            "PRINT print\nMINUS -\nNUMBER 1.5 1.500000\nGREATER_EQUAL >=\n\
             IDENTIFIER x\nSEMICOLON ;\nEOF \n"
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn lex_reports_errors() {
        let (_, diagnostics) = lex_source("var s = \"open");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].to_string(),
            "[line 1] Error: Unterminated string"
        );
    }

    #[test]
    fn parse_prints_statements() {
        let (out, diagnostics) = parse_source("var  a=1+2*3 ;print(a)==nil; !true;\nvar b;");
        assert_eq!(
            out,
            "var a = 1 + 2 * 3;\nprint (a) == nil;\n!true;\nvar b;\n"
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn parse_keeps_good_statements_after_errors() {
        let (out, diagnostics) = parse_source("print (1;\nprint 2;\n");
        assert_eq!(out, "print 2;\n");
        assert_eq!(
            diagnostics[0].to_string(),
            "[line 1] Error: Expected closing paren ')'. Instead, got token of type: SEMICOLON"
        );
    }

    #[test]
    fn explain_known_and_unknown_codes() {
        let text = explain("e6005").unwrap();
        assert!(text.starts_with("E6005\n\n"));
        assert!(text.contains("var"));
        assert!(matches!(
            explain("E4242"),
            Err(DriverError::UnknownErrorCode(_))
        ));
    }
}

mod binary {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clean_file_exits_zero() {
        let file = source_file("print 1 + 2 * 3;\n");
        let output = lox(&[file.path().to_str().unwrap()], "");
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), "7.000000\n");
    }

    #[test]
    fn run_subcommand_matches_bare_file() {
        let file = source_file("print \"a\" + \"b\";\n");
        let output = lox(&["run", file.path().to_str().unwrap()], "");
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), "ab\n");
    }

    #[test]
    fn syntax_error_exits_65() {
        let file = source_file("print 1;\nprint 1 +;\n");
        let output = lox(&[file.path().to_str().unwrap()], "");
        assert_eq!(output.status.code(), Some(65));
        assert_eq!(stdout(&output), "");
        assert!(stderr(&output).starts_with("[line 2] Error: Expected expression."));
    }

    #[test]
    fn keep_going_still_exits_65() {
        let file = source_file("print 1;\nprint 1 +;\n");
        let output = lox(&["--keep-going", file.path().to_str().unwrap()], "");
        assert_eq!(output.status.code(), Some(65));
        assert_eq!(stdout(&output), "1.000000\n");
    }

    #[test]
    fn runtime_error_exits_70() {
        let file = source_file("print nil + 1;\nprint nil == nil;\n");
        let output = lox(&[file.path().to_str().unwrap()], "");
        assert_eq!(output.status.code(), Some(70));
        assert_eq!(stdout(&output), "TRUE\n");
        assert_eq!(stderr(&output), "Error: Cannot cast NIL to a number\n");
    }

    #[test]
    fn usage_errors_exit_64() {
        assert_eq!(lox(&["a.lox", "b.lox"], "").status.code(), Some(64));
        assert_eq!(lox(&["--bogus"], "").status.code(), Some(64));
        assert_eq!(lox(&["lex"], "").status.code(), Some(64));
        assert_eq!(lox(&["explain", "nope"], "").status.code(), Some(64));
    }

    #[test]
    fn unreadable_file_exits_74() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.lox");
        let output = lox(&[path.to_str().unwrap()], "");
        assert_eq!(output.status.code(), Some(74));
        assert!(stderr(&output).contains("cannot find file"));
    }

    #[test]
    fn prompt_session() {
        let output = lox(&[], "var x = 5;\nprint x + 1;\nend\nprint 0;\n");
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), ">> >> 6.000000\n>> ");
    }
}
