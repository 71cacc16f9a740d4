use std::fmt;

use phf::phf_map;

use crate::errors::{Error, EvalResult, ErrorInfo};
use crate::source_pos::Span;

/// Rank given to delimiters on the operator stack. It sits below every real
/// operator so a delimiter never gets popped by a precedence comparison.
pub const DELIMITER_PREC: u8 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn sym(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }

    pub fn operator(self) -> &'static Operator {
        // Every variant has an entry in the table.
        &BINARY_OPERATOR_TABLE[self.sym()]
    }

    /// Computes `lhs op rhs`. `span` locates the operator for error reporting.
    pub fn apply(self, lhs: f64, rhs: f64, span: &Span) -> EvalResult<f64> {
        Ok(match self {
            BinOp::Add => lhs + rhs,
            BinOp::Sub => lhs - rhs,
            BinOp::Mul => lhs * rhs,
            BinOp::Div => {
                if rhs == 0.0 {
                    return Err(ErrorInfo::new(Error::DivisionByZero, span.clone()));
                }
                lhs / rhs
            }
        })
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sym())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Assoc {
    // Right,
    Left,
}
impl Assoc {
    pub fn is_left(&self) -> bool {
        self == &Assoc::Left
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Operator {
    pub sym: &'static str,
    pub op: BinOp,
    pub assoc: Assoc,
    pub prec: u8,
}
impl Operator {
    /// Whether a stack entry of rank `top_prec` has to be output before `self`
    /// gets pushed.
    pub fn is_outranked_by(&self, top_prec: u8) -> bool {
        top_prec > self.prec || (top_prec == self.prec && self.is_left_assoc())
    }

    pub fn is_left_assoc(&self) -> bool {
        self.assoc.is_left()
    }
}

pub static BINARY_OPERATOR_TABLE: phf::Map<&'static str, Operator> = phf_map! {
    "+" => Operator {
        prec: 10,
        assoc: Assoc::Left,
        op: BinOp::Add,
        sym: "+",
    },
    "-" => Operator {
        prec: 10,
        assoc: Assoc::Left,
        op: BinOp::Sub,
        sym: "-",
    },
    "*" => Operator {
        prec: 20,
        assoc: Assoc::Left,
        op: BinOp::Mul,
        sym: "*",
    },
    "/" => Operator {
        prec: 20,
        assoc: Assoc::Left,
        op: BinOp::Div,
        sym: "/",
    },
};

/// Looks up the operator spelled by `sym`, if any.
pub fn binary_op(sym: &str) -> Option<BinOp> {
    BINARY_OPERATOR_TABLE.get(sym).map(|operator| operator.op)
}
