use super::*;
use crate::ast::{BinaryOp, Expr, Stmt, UnaryOp};
use crate::Span;

fn lit(arena: &mut ExprArena, lit: Literal) -> ExprId {
    arena.alloc_expr(Expr::new(ExprKind::Literal(lit), Span::DUMMY))
}

#[test]
fn test_print_literals() {
    let mut interner = StringInterner::new();
    let hello = interner.intern("hello");
    let mut arena = ExprArena::new();
    let ids = [
        lit(&mut arena, Literal::Nil),
        lit(&mut arena, Literal::Bool(true)),
        lit(&mut arena, Literal::Bool(false)),
        lit(&mut arena, Literal::number(2.5)),
        lit(&mut arena, Literal::number(3.0)),
        lit(&mut arena, Literal::String(hello)),
    ];
    let printer = ExprPrinter::new(&arena, &interner);
    let printed: Vec<String> = ids.iter().map(|&id| printer.print_expr(id)).collect();
    assert_eq!(printed, ["nil", "true", "false", "2.5", "3", "\"hello\""]);
}

#[test]
fn test_print_nested_operators() {
    let mut interner = StringInterner::new();
    let x = interner.intern("x");
    let mut arena = ExprArena::new();
    let one = lit(&mut arena, Literal::number(1.0));
    let var = arena.alloc_expr(Expr::new(ExprKind::Variable(x), Span::DUMMY));
    let sum = arena.alloc_expr(Expr::new(
        ExprKind::Binary {
            op: BinaryOp::Add,
            left: one,
            right: var,
        },
        Span::DUMMY,
    ));
    let group = arena.alloc_expr(Expr::new(ExprKind::Grouping(sum), Span::DUMMY));
    let neg = arena.alloc_expr(Expr::new(
        ExprKind::Unary {
            op: UnaryOp::Neg,
            operand: group,
        },
        Span::DUMMY,
    ));
    let not = arena.alloc_expr(Expr::new(
        ExprKind::Unary {
            op: UnaryOp::Not,
            operand: neg,
        },
        Span::DUMMY,
    ));
    let printer = ExprPrinter::new(&arena, &interner);
    assert_eq!(printer.print_expr(not), "!-(1 + x)");
}

#[test]
fn test_print_statements() {
    let mut interner = StringInterner::new();
    let x = interner.intern("x");
    let mut arena = ExprArena::new();
    let five = lit(&mut arena, Literal::number(5.0));
    let decl = arena.alloc_stmt(Stmt {
        kind: StmtKind::Var {
            name: x,
            initializer: five,
        },
        span: Span::DUMMY,
        line: 1,
    });
    let bare = arena.alloc_stmt(Stmt {
        kind: StmtKind::Var {
            name: x,
            initializer: ExprId::INVALID,
        },
        span: Span::DUMMY,
        line: 1,
    });
    let print = arena.alloc_stmt(Stmt {
        kind: StmtKind::Print(five),
        span: Span::DUMMY,
        line: 2,
    });
    let expr = arena.alloc_stmt(Stmt {
        kind: StmtKind::Expression(five),
        span: Span::DUMMY,
        line: 3,
    });
    let printer = ExprPrinter::new(&arena, &interner);
    assert_eq!(printer.print_stmt(decl), "var x = 5;");
    assert_eq!(printer.print_stmt(bare), "var x;");
    assert_eq!(printer.print_stmt(print), "print 5;");
    assert_eq!(printer.print_stmt(expr), "5;");
}
