//! Command implementations for fmnn-cmd

pub mod generate;
pub mod in_range;
pub mod solve;
