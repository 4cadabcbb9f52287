#![warn(missing_debug_implementations, missing_docs, unreachable_pub)]
#![deny(unused_must_use, rust_2018_idioms)]

//! Interfaces to the collaborators the trace shim composes: block storage, consensus reward
//! rules and the EVM execution tracer.
//!
//! The shim itself never executes transactions or reads the database; everything it needs is
//! reachable through the traits defined here.

pub mod consensus;
pub mod provider;
pub mod tracer;

/// Mock collaborators for tests.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
