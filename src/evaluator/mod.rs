//! Tree-walking evaluation of the syntax tree.
//!
//! This module runs parsed statements directly against a global store of
//! variables and arrays. It handles:
//!
//! - The [`environment::Environment`] holding every scalar and array
//! - Expression evaluation (literals, names, arrays, binary operators)
//! - Statement evaluation (control flow, declarations, assignment, console I/O)
//!
//! Evaluation stops at the first error; nothing is rolled back.

pub mod environment;
pub mod evaluator;
pub mod expr;
pub mod stmt;
pub mod value;
