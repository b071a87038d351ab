use crate::ast::{BlockStatement, Expression, InfixOperator, PrefixOperator, Program, Statement};
use crate::object::{Environment, EvalError, Number, Object, NULL};

/// Evaluates `program` against `env`, returning the value of the last
/// statement. A top-level `return` yields its payload; an error stops the
/// program and becomes the result. `None` means nothing produced a value,
/// e.g. an empty program or one made only of `let` statements.
pub fn eval(program: &Program, env: &mut Environment) -> Option<Object> {
    let mut res = None;

    for statement in &program.statements {
        res = eval_statement(statement, env);

        match res {
            Some(Object::Return(value)) => return Some(*value),
            Some(Object::Error(_)) => return res,
            _ => {}
        }
    }

    res
}

fn eval_block_statement(block: &BlockStatement, env: &Environment) -> Option<Object> {
    let mut scope = Environment::extend(env);
    let mut res = None;

    for statement in &block.statements {
        res = eval_statement(statement, &mut scope);

        if res.as_ref().map_or(false, Object::is_signal) {
            return res;
        }
    }

    res
}

fn eval_statement(statement: &Statement, env: &mut Environment) -> Option<Object> {
    match statement {
        Statement::Expression(exp) => Some(eval_expression(exp, env)),
        Statement::Let(name, exp) => {
            let value = eval_expression(exp, env);
            if value.is_signal() {
                return Some(value);
            }

            env.set(name, value);
            None
        }
        Statement::Return(exp) => {
            let value = eval_expression(exp, env);
            if value.is_signal() {
                return Some(value);
            }

            Some(Object::Return(Box::new(value)))
        }
        Statement::Block(block) => eval_block_statement(block, env),
    }
}

pub fn eval_expression(expression: &Expression, env: &Environment) -> Object {
    match expression {
        Expression::IntegerLiteral(v) => Object::Integer(*v),
        Expression::FloatLiteral(v) => Object::Float(*v),
        Expression::Boolean(b) => Object::from_native_bool(*b),
        Expression::Identifier(name) => env.get(name).unwrap_or_else(|| {
            tracing::trace!(identifier = %name, "unresolved identifier");
            NULL
        }),
        Expression::Prefix(operator, operand) => {
            let operand = eval_expression(operand, env);
            if operand.is_signal() {
                return operand;
            }

            eval_prefix_expression(*operator, operand)
        }
        Expression::Infix(operator, left, right) => {
            let left = eval_expression(left, env);
            if left.is_signal() {
                return left;
            }

            let right = eval_expression(right, env);
            if right.is_signal() {
                return right;
            }

            eval_infix_expression(*operator, left, right)
        }
        Expression::If(condition, consequence, alternative) => {
            eval_if_expression(condition, consequence, alternative.as_ref(), env)
        }
        Expression::FunctionLiteral(..) => {
            tracing::trace!("function literals evaluate to null");
            NULL
        }
    }
}

fn eval_if_expression(
    condition: &Expression,
    consequence: &BlockStatement,
    alternative: Option<&BlockStatement>,
    env: &Environment,
) -> Object {
    let condition = eval_expression(condition, env);
    if condition.is_signal() {
        return condition;
    }

    let branch = if condition.is_truthy() {
        Some(consequence)
    } else {
        alternative
    };

    branch
        .and_then(|block| eval_block_statement(block, env))
        .unwrap_or(NULL)
}

fn eval_prefix_expression(operator: PrefixOperator, operand: Object) -> Object {
    match operator {
        PrefixOperator::Bang => Object::from_native_bool(!operand.is_truthy()),
        PrefixOperator::Minus => match operand {
            Object::Integer(v) => Object::Integer(v.wrapping_neg()),
            Object::Float(v) => Object::Float(-v),
            obj => Object::Error(EvalError::UnknownPrefixOperator {
                operator,
                operand: obj.type_name(),
            }),
        },
    }
}

fn eval_infix_expression(operator: InfixOperator, left: Object, right: Object) -> Object {
    if let (Some(l), Some(r)) = (left.as_number(), right.as_number()) {
        return eval_number_infix_expression(operator, l, r);
    }

    match operator {
        InfixOperator::Eq => Object::from_native_bool(left == right),
        InfixOperator::NotEq => Object::from_native_bool(left != right),
        _ if left.type_name() != right.type_name() => Object::Error(EvalError::TypeMismatch {
            operator,
            left: left.type_name(),
            right: right.type_name(),
        }),
        _ => Object::Error(EvalError::UnknownInfixOperator {
            operator,
            left: left.type_name(),
            right: right.type_name(),
        }),
    }
}

/// Comparisons always happen in floating point; arithmetic stays integral
/// unless either side is a float.
fn eval_number_infix_expression(operator: InfixOperator, left: Number, right: Number) -> Object {
    match (operator, left, right) {
        (InfixOperator::Lt, l, r) => Object::from_native_bool(l.to_f64() < r.to_f64()),
        (InfixOperator::Gt, l, r) => Object::from_native_bool(l.to_f64() > r.to_f64()),
        (InfixOperator::Eq, l, r) => Object::from_native_bool(l.to_f64() == r.to_f64()),
        (InfixOperator::NotEq, l, r) => Object::from_native_bool(l.to_f64() != r.to_f64()),
        (operator, Number::Integer(l), Number::Integer(r)) => {
            eval_integer_infix_expression(operator, l, r)
        }
        (operator, l, r) => eval_float_infix_expression(operator, l, r),
    }
}

fn eval_integer_infix_expression(operator: InfixOperator, left: i64, right: i64) -> Object {
    match operator {
        InfixOperator::Plus => Object::Integer(left.wrapping_add(right)),
        InfixOperator::Minus => Object::Integer(left.wrapping_sub(right)),
        InfixOperator::Asterisk => Object::Integer(left.wrapping_mul(right)),
        InfixOperator::Slash if right == 0 => Object::Error(EvalError::DivisionByZero),
        InfixOperator::Slash => Object::Integer(left.wrapping_div(right)),
        _ => Object::Error(EvalError::UnknownInfixOperator {
            operator,
            left: "INTEGER",
            right: "INTEGER",
        }),
    }
}

fn eval_float_infix_expression(operator: InfixOperator, left: Number, right: Number) -> Object {
    let (l, r) = (left.to_f64(), right.to_f64());

    match operator {
        InfixOperator::Plus => Object::Float(l + r),
        InfixOperator::Minus => Object::Float(l - r),
        InfixOperator::Asterisk => Object::Float(l * r),
        InfixOperator::Slash => Object::Float(l / r),
        _ => Object::Error(EvalError::UnknownInfixOperator {
            operator,
            left: left.type_name(),
            right: right.type_name(),
        }),
    }
}
