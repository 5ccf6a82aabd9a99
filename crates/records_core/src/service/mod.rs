//! Use-case compositions over the repository layer.
//!
//! # Responsibility
//! - Wire repositories and observers into runnable sequences.
//! - Keep the binary entry point free of orchestration logic.

pub mod demo;
