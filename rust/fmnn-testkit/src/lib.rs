//! Test utilities and helpers for the fmnn crates.
//!
//! This crate provides:
//! - Data generation for heterogeneous sequences (seeded, reproducible)
//! - A reference oracle computing the expected answer by definition
//! - The fixed scenario table shared by the test suites
//!
//! # Usage
//!
//! This crate is primarily intended for use within the workspace's test suites
//! and the `fmnn-cmd` tool.

pub mod data_gen;
pub mod oracle;
pub mod scenarios;
