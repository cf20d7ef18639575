//! # Charity Testkit
//!
//! Test utilities for the charity console.
//!
//! This crate provides:
//! - Session fixtures pairing an in-memory store with a scripted console
//! - Scenario builders for common store states
//! - A fault-injecting store for error-path tests
//! - Property-based test generators using proptest
//!
//! ## Usage
//!
//! ```rust
//! use charity_testkit::prelude::*;
//!
//! let mut session = TestSession::seeded(["1", "2", "6"]);
//! session.run_menu();
//! assert!(session.console.saw("Olena Kovalenko"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod faults;
pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::faults::*;
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use faults::*;
pub use fixtures::*;
pub use generators::*;
