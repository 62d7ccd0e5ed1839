//! Error handling for table and codec operations
//!
//! This module defines the error types used throughout the crate.
//! It uses thiserror for ergonomic error handling and provides context-specific
//! error variants.

pub use crate::common::LzwError;
pub use crate::common::Result;
