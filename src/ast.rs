use std::fmt;

use crate::token::TokenKind;

#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    Identifier(String),
    IntegerLiteral(i64),
    FloatLiteral(f64),
    Boolean(bool),
    Prefix(PrefixOperator, Box<Expression>),
    Infix(InfixOperator, Box<Expression>, Box<Expression>),
    If(Box<Expression>, BlockStatement, Option<BlockStatement>),
    FunctionLiteral(Vec<String>, BlockStatement),
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Identifier(name) => write!(f, "{}", name),
            Expression::IntegerLiteral(v) => write!(f, "{}", v),
            // Debug keeps the decimal point on whole numbers, so `2.0` stays a float.
            Expression::FloatLiteral(v) => write!(f, "{:?}", v),
            Expression::Boolean(b) => write!(f, "{}", b),
            Expression::Prefix(operator, operand) => write!(f, "({}{})", operator, operand),
            Expression::Infix(operator, left, right) => {
                write!(f, "({} {} {})", left, operator, right)
            }
            Expression::If(condition, consequence, alternative) => {
                write!(f, "if ({}) {{ {} }}", condition, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, " else {{ {} }}", alternative)?;
                }
                Ok(())
            }
            Expression::FunctionLiteral(parameters, body) => {
                write!(f, "fn({}) {{ {} }}", parameters.join(", "), body)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PrefixOperator {
    Bang,
    Minus,
}

impl PrefixOperator {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Bang => Some(PrefixOperator::Bang),
            TokenKind::Minus => Some(PrefixOperator::Minus),
            _ => None,
        }
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PrefixOperator::Bang => write!(f, "!"),
            PrefixOperator::Minus => write!(f, "-"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InfixOperator {
    Plus,
    Minus,
    Asterisk,
    Slash,
    Lt,
    Gt,
    Eq,
    NotEq,
}

impl InfixOperator {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(InfixOperator::Plus),
            TokenKind::Minus => Some(InfixOperator::Minus),
            TokenKind::Asterisk => Some(InfixOperator::Asterisk),
            TokenKind::Slash => Some(InfixOperator::Slash),
            TokenKind::Lt => Some(InfixOperator::Lt),
            TokenKind::Gt => Some(InfixOperator::Gt),
            TokenKind::Eq => Some(InfixOperator::Eq),
            TokenKind::NotEq => Some(InfixOperator::NotEq),
            _ => None,
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            InfixOperator::Plus => "+",
            InfixOperator::Minus => "-",
            InfixOperator::Asterisk => "*",
            InfixOperator::Slash => "/",
            InfixOperator::Lt => "<",
            InfixOperator::Gt => ">",
            InfixOperator::Eq => "==",
            InfixOperator::NotEq => "!=",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Let(String, Expression),
    Return(Expression),
    Expression(Expression),
    /// A scoped group of statements. The grammar has no standalone block, so
    /// the parser never produces one; only hand-built programs do. Its braced
    /// rendering is for display and does not parse back into a `Block`.
    Block(BlockStatement),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Statement::Let(name, value) => write!(f, "let {} = {};", name, value),
            Statement::Return(value) => write!(f, "return {};", value),
            Statement::Expression(expression) => write!(f, "{}", expression),
            Statement::Block(block) => write!(f, "{{ {} }}", block),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_lines(f, &self.statements)
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_lines(f, &self.statements)
    }
}

fn write_lines(f: &mut fmt::Formatter, statements: &[Statement]) -> fmt::Result {
    for (i, statement) in statements.iter().enumerate() {
        if i > 0 {
            writeln!(f)?;
        }
        write!(f, "{}", statement)?;
    }
    Ok(())
}
