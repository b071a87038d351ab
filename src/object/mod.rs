use crate::ast::{InfixOperator, PrefixOperator};
pub use crate::object::environment::Environment;
use std::fmt;

pub mod environment;

/// The canonical boolean and null values. Every `true`, `false` and `null`
/// produced by evaluation is one of these, so comparing them is identity.
pub const TRUE: Object = Object::Boolean(true);
pub const FALSE: Object = Object::Boolean(false);
pub const NULL: Object = Object::Null;

#[derive(Clone, Debug, PartialEq)]
pub enum Object {
    Null,
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Return(Box<Object>),
    Error(EvalError),
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Object::Null => write!(f, "null"),
            Object::Integer(v) => write!(f, "{}", v),
            Object::Float(v) => write!(f, "{:.6}", v),
            Object::Boolean(b) => write!(f, "{}", b),
            Object::Return(obj) => write!(f, "{}", obj),
            Object::Error(err) => write!(f, "ERROR: {}", err),
        }
    }
}

impl Object {
    pub fn from_native_bool(b: bool) -> Object {
        if b {
            TRUE
        } else {
            FALSE
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Object::Null => false,
            Object::Boolean(b) => *b,
            _ => true,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// Return and error values unwind evaluation instead of being used as operands.
    pub fn is_signal(&self) -> bool {
        matches!(self, Object::Return(_) | Object::Error(_))
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Object::Integer(v) => Some(Number::Integer(*v)),
            Object::Float(v) => Some(Number::Float(*v)),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Boolean(_) => "BOOLEAN",
            Object::Integer(_) => "INTEGER",
            Object::Float(_) => "FLOAT",
            Object::Null => "NULL",
            Object::Return(_) => "RETURN_VALUE",
            Object::Error(_) => "ERROR",
        }
    }
}

/// A numeric operand, unpacked so arithmetic can pick integer or float semantics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Integer(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    pub fn type_name(self) -> &'static str {
        match self {
            Number::Integer(_) => "INTEGER",
            Number::Float(_) => "FLOAT",
        }
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("unknown operator: {operator}{operand}")]
    UnknownPrefixOperator {
        operator: PrefixOperator,
        operand: &'static str,
    },
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        operator: InfixOperator,
        left: &'static str,
        right: &'static str,
    },
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        operator: InfixOperator,
        left: &'static str,
        right: &'static str,
    },
    #[error("division by zero")]
    DivisionByZero,
}
