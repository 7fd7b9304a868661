//! Shared program plumbing: error codes, account validation, instruction decoding

#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod reader;
pub mod validation;

pub use error::*;
pub use reader::*;
pub use validation::*;
