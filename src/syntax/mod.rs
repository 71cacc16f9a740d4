pub mod lexer;

pub mod operators;

pub mod shunting_yard;

pub mod tokens;

pub use lexer::*;
pub use operators::{BinOp, Operator, BINARY_OPERATOR_TABLE};
pub use shunting_yard::*;
pub use tokens::*;
