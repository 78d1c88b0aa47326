//! Symbolic manipulation of polynomial expressions.
//!
//! This crate takes the abstract syntax trees produced by [`poly_parser`] and provides the
//! operations that make them useful: symbolic differentiation, partial evaluation with constant
//! folding, and canonical printing. See the [`symbolic`] module for the expression representation
//! and the algorithms, and the [`commands`] module for a string-in, string-out surface suitable
//! for driving from a REPL or similar front end.

pub mod commands;
pub mod symbolic;
