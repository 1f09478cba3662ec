//! Parser tests.
//!
//! - `parser`: precedence, associativity, statements, and spans
//! - `recovery`: syntax errors and synchronization


use lox_ir::{ExprArena, ExprId, ExprKind, Literal, StringInterner};

use crate::{parse, ParseOutput};

pub(super) fn parse_source(source: &str) -> (ParseOutput, StringInterner) {
    let mut interner = StringInterner::new();
    let lexed = lox_lexer::lex(source, &mut interner);
    assert!(!lexed.has_errors(), "lex errors in test source: {source}");
    (parse(&lexed.tokens), interner)
}

/// S-expression rendering that makes tree shape explicit.
pub(super) fn sexpr(arena: &ExprArena, interner: &StringInterner, id: ExprId) -> String {
    match arena.kind(id) {
        ExprKind::Literal(Literal::Nil) => "nil".to_string(),
        ExprKind::Literal(Literal::Bool(b)) => b.to_string(),
        ExprKind::Literal(Literal::Number(bits)) => f64::from_bits(bits).to_string(),
        ExprKind::Literal(Literal::String(name)) => format!("{:?}", interner.lookup(name)),
        ExprKind::Variable(name) => interner.lookup(name).to_string(),
        ExprKind::Unary { op, operand } => format!("({op} {})", sexpr(arena, interner, operand)),
        ExprKind::Binary { op, left, right } => format!(
            "({op} {} {})",
            sexpr(arena, interner, left),
            sexpr(arena, interner, right)
        ),
        ExprKind::Grouping(inner) => format!("(group {})", sexpr(arena, interner, inner)),
    }
}
