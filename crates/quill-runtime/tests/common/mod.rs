//! Shared test utilities
//!
//! The parser is an external collaborator, so tests construct ASTs directly.
//! These builders keep that construction close to source-level notation:
//! `infix("+", int(1), int(2))` reads as `1 + 2`.

#![allow(dead_code)]

use quill_runtime::ast::{BlockStatement, Expression, Identifier, Program, Statement};

pub fn program(statements: Vec<Statement>) -> Program {
    Program { statements }
}

pub fn block(statements: Vec<Statement>) -> BlockStatement {
    BlockStatement { statements }
}

pub fn let_stmt(name: &str, value: Expression) -> Statement {
    Statement::Let {
        name: Identifier {
            value: name.to_string(),
        },
        value,
    }
}

pub fn return_stmt(value: Expression) -> Statement {
    Statement::Return { value }
}

pub fn expr_stmt(expression: Expression) -> Statement {
    Statement::Expression { expression }
}

pub fn int(value: i64) -> Expression {
    Expression::Integer(value)
}

pub fn string(value: &str) -> Expression {
    Expression::String(value.to_string())
}

pub fn boolean(value: bool) -> Expression {
    Expression::Boolean(value)
}

pub fn ident(name: &str) -> Expression {
    Expression::Identifier(Identifier {
        value: name.to_string(),
    })
}

pub fn prefix(operator: &str, right: Expression) -> Expression {
    Expression::Prefix {
        operator: operator.to_string(),
        right: Box::new(right),
    }
}

pub fn infix(operator: &str, left: Expression, right: Expression) -> Expression {
    Expression::Infix {
        operator: operator.to_string(),
        left: Box::new(left),
        right: Box::new(right),
    }
}

pub fn if_expr(
    condition: Expression,
    consequence: BlockStatement,
    alternative: Option<BlockStatement>,
) -> Expression {
    Expression::If {
        condition: Box::new(condition),
        consequence,
        alternative,
    }
}

pub fn function(parameters: &[&str], body: BlockStatement) -> Expression {
    Expression::Function {
        parameters: parameters
            .iter()
            .map(|name| Identifier {
                value: name.to_string(),
            })
            .collect(),
        body,
    }
}

pub fn call(function: Expression, arguments: Vec<Expression>) -> Expression {
    Expression::Call {
        function: Box::new(function),
        arguments,
    }
}

pub fn array(elements: Vec<Expression>) -> Expression {
    Expression::Array(elements)
}

pub fn hash(pairs: Vec<(Expression, Expression)>) -> Expression {
    Expression::Hash(pairs)
}

pub fn index(left: Expression, idx: Expression) -> Expression {
    Expression::Index {
        left: Box::new(left),
        index: Box::new(idx),
    }
}
