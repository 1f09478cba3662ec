//! Inspection commands: `lex` and `parse`.

use lox_diagnostic::{Diagnostic, DiagnosticEmitter, TerminalEmitter};
use lox_ir::{ExprPrinter, StringInterner};

use super::report;
use crate::read_file;

/// Token dump of `source`, one token per line, plus any lexical errors.
pub fn lex_source(source: &str) -> (String, Vec<Diagnostic>) {
    let mut interner = StringInterner::new();
    let lexed = lox_lexer::lex(source, &mut interner);
    let dump = lox_lexer::dump_tokens(&lexed.tokens, source, &interner);
    (dump, lexed.diagnostics().collect())
}

/// Statements of `source` printed back as source text, one per line, plus
/// any lexical and syntax errors in line order.
pub fn parse_source(source: &str) -> (String, Vec<Diagnostic>) {
    let mut interner = StringInterner::new();
    let lexed = lox_lexer::lex(source, &mut interner);
    let parsed = lox_parse::parse(&lexed.tokens);

    let printer = ExprPrinter::new(&parsed.arena, &interner);
    let mut out = String::new();
    for &stmt in &parsed.program {
        out.push_str(&printer.print_stmt(stmt));
        out.push('\n');
    }

    let mut diagnostics: Vec<_> = lexed.diagnostics().chain(parsed.diagnostics()).collect();
    diagnostics.sort_by_key(|diag| diag.line);
    (out, diagnostics)
}

pub fn lex_file(path: &str) -> i32 {
    inspect(path, lex_source)
}

pub fn parse_file(path: &str) -> i32 {
    inspect(path, parse_source)
}

fn inspect(path: &str, f: fn(&str) -> (String, Vec<Diagnostic>)) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(error) => return report(&error),
    };
    let (out, diagnostics) = f(&source);
    print!("{out}");

    let mut emitter = TerminalEmitter::stderr();
    emitter.emit_all(&diagnostics);
    emitter.flush();
    if diagnostics.is_empty() {
        0
    } else {
        crate::EXIT_COMPILE_ERROR
    }
}
