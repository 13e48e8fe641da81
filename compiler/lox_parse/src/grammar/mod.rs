//! Grammar productions, split by syntactic category.
//!
//! Precedence, lowest to highest:
//! assignment, `or`, `and`, equality, comparison, additive,
//! multiplicative, unary, call, primary.

mod expr;
mod operators;
mod stmt;
