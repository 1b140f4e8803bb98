//! Dockerfile parser module.
//!
//! Provides:
//! - `instruction` - Instruction types and the keyword vocabulary
//! - `dockerfile` - nom-based line parser

pub mod dockerfile;
pub mod instruction;

pub use dockerfile::{extract_instructions, parse_dockerfile};
pub use instruction::*;
