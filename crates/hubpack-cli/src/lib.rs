//! hubpack library - expose command modules for testing
//!
//! The binary in `main.rs` is a thin clap layer over these modules.

pub mod commands;
pub mod common;
pub mod errors;

pub use common::GlobalOpts;
