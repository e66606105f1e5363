//! Fieldsift - filter pipe-separated records from standard input.
//!
//! This crate provides the `fieldsift` binary plus a small library surface
//! for driving the same filter against arbitrary readers and writers.

#![forbid(unsafe_code)]

// Public CLI module (needed by binary)
pub mod cli;

// Output formatting
pub mod output;
