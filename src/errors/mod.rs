//! Error types and error handling for the interpreter.
//!
//! This module defines the error types shared by every phase of a run:
//!
//! - Error structures with source position information
//! - Specific error variants for scanning, parsing and evaluation
//! - Error names and tips used by the driver's error report

pub mod errors;
