//! Abstract Syntax Tree (AST) definitions
//!
//! The AST is a consumed contract: it is produced by an external parser and
//! lowered by the compiler without any further lexical or syntactic analysis.
//! Every node exposes `token_literal()` (the text of the token that introduced
//! it) and a `Display` rendering; the `Display` form is the stable string the
//! compiler uses to order hash-literal keys.

use std::fmt;

/// Top-level program containing all statements
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn token_literal(&self) -> String {
        match self.statements.first() {
            Some(stmt) => stmt.token_literal(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// Statement node
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Variable binding: `let name = value;`
    Let {
        name: Identifier,
        value: Expression,
    },
    /// Early return: `return value;`
    Return { value: Expression },
    /// Expression evaluated for its value: `expr;`
    Expression { expression: Expression },
}

impl Statement {
    pub fn token_literal(&self) -> String {
        match self {
            Statement::Let { .. } => "let".to_string(),
            Statement::Return { .. } => "return".to_string(),
            Statement::Expression { expression } => expression.token_literal(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value } => write!(f, "let {} = {};", name, value),
            Statement::Return { value } => write!(f, "return {};", value),
            Statement::Expression { expression } => write!(f, "{}", expression),
        }
    }
}

/// Braced statement sequence (function bodies, `if` branches)
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn token_literal(&self) -> String {
        match self.statements.first() {
            Some(stmt) => stmt.token_literal(),
            None => String::new(),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// Name reference
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub value: String,
}

impl Identifier {
    pub fn token_literal(&self) -> String {
        self.value.clone()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Expression node
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Integer(i64),
    String(String),
    Boolean(bool),
    Identifier(Identifier),
    /// Unary operator application: `!expr`, `-expr`
    Prefix {
        operator: String,
        right: Box<Expression>,
    },
    /// Binary operator application: `left op right`
    Infix {
        operator: String,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// Conditional expression; the alternative branch is optional
    If {
        condition: Box<Expression>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },
    /// Function literal: `fn(params) { body }`
    Function {
        parameters: Vec<Identifier>,
        body: BlockStatement,
    },
    /// Call: `callee(args)`
    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
    Array(Vec<Expression>),
    /// Hash literal; pairs appear in source order
    Hash(Vec<(Expression, Expression)>),
    /// Subscript: `left[index]`
    Index {
        left: Box<Expression>,
        index: Box<Expression>,
    },
}

impl Expression {
    pub fn token_literal(&self) -> String {
        match self {
            Expression::Integer(value) => value.to_string(),
            Expression::String(value) => value.clone(),
            Expression::Boolean(value) => value.to_string(),
            Expression::Identifier(ident) => ident.token_literal(),
            Expression::Prefix { operator, .. } => operator.clone(),
            Expression::Infix { operator, .. } => operator.clone(),
            Expression::If { .. } => "if".to_string(),
            Expression::Function { .. } => "fn".to_string(),
            Expression::Call { .. } => "(".to_string(),
            Expression::Array(_) => "[".to_string(),
            Expression::Hash(_) => "{".to_string(),
            Expression::Index { .. } => "[".to_string(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Integer(value) => write!(f, "{}", value),
            Expression::String(value) => f.write_str(value),
            Expression::Boolean(value) => write!(f, "{}", value),
            Expression::Identifier(ident) => write!(f, "{}", ident),
            Expression::Prefix { operator, right } => write!(f, "({}{})", operator, right),
            Expression::Infix {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if{} {}", condition, consequence)?;
                if let Some(alt) = alternative {
                    write!(f, "else {}", alt)?;
                }
                Ok(())
            }
            Expression::Function { parameters, body } => {
                let params: Vec<String> = parameters.iter().map(|p| p.to_string()).collect();
                write!(f, "fn({}) {}", params.join(", "), body)
            }
            Expression::Call {
                function,
                arguments,
            } => {
                let args: Vec<String> = arguments.iter().map(|a| a.to_string()).collect();
                write!(f, "{}({})", function, args.join(", "))
            }
            Expression::Array(elements) => {
                let elems: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", elems.join(", "))
            }
            Expression::Hash(pairs) => {
                let rendered: Vec<String> = pairs
                    .iter()
                    .map(|(key, value)| format!("{}:{}", key, value))
                    .collect();
                write!(f, "{{{}}}", rendered.join(", "))
            }
            Expression::Index { left, index } => write!(f, "({}[{}])", left, index),
        }
    }
}
