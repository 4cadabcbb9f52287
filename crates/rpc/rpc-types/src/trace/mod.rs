//! Types for the `trace` namespace.

pub mod config;
pub mod filter;
pub mod parity;
