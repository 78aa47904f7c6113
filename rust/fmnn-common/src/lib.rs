//! Core definitions (error type and argument checks), relied upon by all fmnn-* crates.

pub mod error;
pub mod result;

pub use result::Result;
