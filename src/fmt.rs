//! Presentation helpers for the interpreter's observable output.
//!
//! Both functions here are display collaborators of the core pipeline: the
//! AST dump renders the tree one labelled node per line, indented by depth,
//! and the binding renderer prints the global scope after a run. Neither is
//! consulted by the evaluator itself.

use crate::{
    ast::{Expr, LambdaBody, Stmt, TypeExpr},
    interpreter::evaluator::core::Interpreter,
};

/// Renders an AST as an indented tree, one node label per line.
#[must_use]
pub fn dump_ast(statement: &Stmt) -> String {
    let mut out = String::new();
    dump_stmt(statement, 0, &mut out);
    out
}

fn prefix(level: usize) -> String {
    if level == 0 {
        return String::new();
    }
    format!("{}- ", "  ".repeat(level - 1))
}

fn dump_stmt(statement: &Stmt, level: usize, out: &mut String) {
    match statement {
        Stmt::Block(statements) => {
            out.push_str(&format!("{}Block\n", prefix(level)));
            for statement in statements {
                dump_stmt(statement, level + 1, out);
            }
        },
        Stmt::Declare { is_const,
                        name,
                        ty,
                        init,
                        .. } => {
            out.push_str(&format!("{}Declare (is_const: {is_const}, name: {name})\n",
                                  prefix(level)));
            dump_type(ty, level + 1, out);
            if let Some(init) = init {
                dump_expr(init, level + 1, out);
            }
        },
        Stmt::Assign { name, value, .. } => {
            out.push_str(&format!("{}Assign (name: {name})\n", prefix(level)));
            dump_expr(value, level + 1, out);
        },
        Stmt::Return { value, .. } => {
            out.push_str(&format!("{}Return\n", prefix(level)));
            dump_expr(value, level + 1, out);
        },
        Stmt::Expression { expr, .. } => {
            out.push_str(&format!("{}Expression\n", prefix(level)));
            dump_expr(expr, level + 1, out);
        },
    }
}

fn dump_expr(expr: &Expr, level: usize, out: &mut String) {
    match expr {
        Expr::Var { name, .. } => {
            out.push_str(&format!("{}Var (name: {name})\n", prefix(level)));
        },
        Expr::Int { value, .. } => {
            out.push_str(&format!("{}Int (value: {value})\n", prefix(level)));
        },
        Expr::Float { value, .. } => {
            out.push_str(&format!("{}Float (value: {value})\n", prefix(level)));
        },
        Expr::Bool { value, .. } => {
            out.push_str(&format!("{}Bool (value: {value})\n", prefix(level)));
        },
        Expr::Unary { op, operand, .. } => {
            out.push_str(&format!("{}Unary (op: {op})\n", prefix(level)));
            dump_expr(operand, level + 1, out);
        },
        Expr::Binary { op, lhs, rhs, .. } => {
            out.push_str(&format!("{}Binary (op: {op})\n", prefix(level)));
            dump_expr(lhs, level + 1, out);
            dump_expr(rhs, level + 1, out);
        },
        Expr::Tuple { elements, .. } => {
            out.push_str(&format!("{}Tuple\n", prefix(level)));
            for element in elements {
                dump_expr(element, level + 1, out);
            }
        },
        Expr::Call { name, args, .. } => {
            out.push_str(&format!("{}Call (name: {name})\n", prefix(level)));
            for arg in args {
                dump_expr(arg, level + 1, out);
            }
        },
        Expr::Lambda { def, .. } => {
            out.push_str(&format!("{}Lambda (params: {})\n", prefix(level), def.params.join(", ")));
            match &def.body {
                LambdaBody::Block(block) => dump_stmt(block, level + 1, out),
                LambdaBody::Expr(expr) => dump_expr(expr, level + 1, out),
            }
        },
    }
}

fn dump_type(ty: &TypeExpr, level: usize, out: &mut String) {
    match ty {
        TypeExpr::Atomic { name, .. } => {
            out.push_str(&format!("{}AtomicType (name: {name})\n", prefix(level)));
        },
        TypeExpr::Product(parts) => {
            out.push_str(&format!("{}ProductType\n", prefix(level)));
            for part in parts {
                dump_type(part, level + 1, out);
            }
        },
        TypeExpr::Sum(parts) => {
            out.push_str(&format!("{}SumType\n", prefix(level)));
            for part in parts {
                dump_type(part, level + 1, out);
            }
        },
        TypeExpr::Map { domain, codomain } => {
            out.push_str(&format!("{}MapType\n", prefix(level)));
            dump_type(domain, level + 1, out);
            dump_type(codomain, level + 1, out);
        },
    }
}

/// Renders the global bindings after a run, one `name = value` line each,
/// sorted by name.
#[must_use]
pub fn render_bindings(interpreter: &Interpreter) -> String {
    let mut out = String::new();
    for (name, value) in interpreter.bindings() {
        out.push_str(&format!("{name} = {value}\n"));
    }
    out
}
