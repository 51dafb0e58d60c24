//! mdreader Core
//!
//! This crate provides the core types and error definitions shared by the
//! mdreader crates.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`ParserState`] - The explicit state of the block classifier
//! - [`ListKind`] - Unordered vs. ordered lists
//! - [`ReaderError`] - Error types

pub mod enums;
pub mod error;
pub mod state;

pub use enums::ListKind;
pub use error::{ReaderError, Result};
pub use state::ParserState;
