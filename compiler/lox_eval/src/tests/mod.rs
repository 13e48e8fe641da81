//! Operator tests, kept apart from the operator implementations.

mod operators_tests;
