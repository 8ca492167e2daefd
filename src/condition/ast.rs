//! Compiled condition tree and its evaluator.

use super::ConditionError;
use super::alias::{STAT_COUNT, Stat};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    /// True division.
    Div,
    /// Division rounded toward negative infinity.
    FloorDiv,
    /// Remainder with the sign of the divisor.
    Rem,
    Pow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CmpOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Not,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Logic {
    And,
    Or,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Lit(f64),
    Var(Stat),
    Unary(UnaryOp, Box<Expr>),
    Arith(ArithOp, Box<Expr>, Box<Expr>),
    /// `first op1 x1 op2 x2 ...`, true when every adjacent pair holds.
    Compare(Box<Expr>, Vec<(CmpOp, Expr)>),
    Logic(Logic, Box<Expr>, Box<Expr>),
}

/// Immutable stat values a condition is evaluated against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bindings(pub [i64; STAT_COUNT]);

impl Bindings {
    #[inline]
    pub fn get(&self, stat: Stat) -> i64 {
        self.0[stat.index()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Num(f64),
    Bool(bool),
}

impl Value {
    #[inline]
    pub fn num(self) -> f64 {
        match self {
            Value::Num(v) => v,
            Value::Bool(b) => f64::from(u8::from(b)),
        }
    }

    #[inline]
    pub fn truthy(self) -> bool {
        match self {
            Value::Num(v) => v != 0.0,
            Value::Bool(b) => b,
        }
    }
}

impl Expr {
    pub fn eval(&self, env: &Bindings) -> Result<Value, ConditionError> {
        Ok(match self {
            Expr::Lit(v) => Value::Num(*v),
            Expr::Var(s) => Value::Num(env.get(*s) as f64),
            Expr::Unary(UnaryOp::Neg, e) => Value::Num(-e.eval(env)?.num()),
            Expr::Unary(UnaryOp::Not, e) => Value::Bool(!e.eval(env)?.truthy()),
            Expr::Arith(op, l, r) => Value::Num(arith(*op, l.eval(env)?.num(), r.eval(env)?.num())?),
            Expr::Compare(first, rest) => {
                let mut lhs = first.eval(env)?.num();
                for (op, e) in rest {
                    let rhs = e.eval(env)?.num();
                    if !compare(*op, lhs, rhs) {
                        return Ok(Value::Bool(false));
                    }
                    lhs = rhs;
                }
                Value::Bool(true)
            }
            // Short-circuit and yield the deciding operand, not a coerced bool.
            Expr::Logic(Logic::And, l, r) => {
                let lhs = l.eval(env)?;
                if lhs.truthy() { r.eval(env)? } else { lhs }
            }
            Expr::Logic(Logic::Or, l, r) => {
                let lhs = l.eval(env)?;
                if lhs.truthy() { lhs } else { r.eval(env)? }
            }
        })
    }
}

fn arith(op: ArithOp, a: f64, b: f64) -> Result<f64, ConditionError> {
    let needs_divisor = matches!(op, ArithOp::Div | ArithOp::FloorDiv | ArithOp::Rem);
    if needs_divisor && b == 0.0 {
        return Err(ConditionError::DivisionByZero);
    }
    Ok(match op {
        ArithOp::Add => a + b,
        ArithOp::Sub => a - b,
        ArithOp::Mul => a * b,
        ArithOp::Div => a / b,
        ArithOp::FloorDiv => (a / b).floor(),
        ArithOp::Rem => a - b * (a / b).floor(),
        ArithOp::Pow => a.powf(b),
    })
}

#[inline]
fn compare(op: CmpOp, a: f64, b: f64) -> bool {
    match op {
        CmpOp::Lt => a < b,
        CmpOp::Le => a <= b,
        CmpOp::Gt => a > b,
        CmpOp::Ge => a >= b,
        CmpOp::Eq => a == b,
        CmpOp::Ne => a != b,
    }
}
