#![warn(missing_debug_implementations, missing_docs, unreachable_pub)]
#![deny(unused_must_use, rust_2018_idioms)]

//! Traceport RPC interface definitions
//!
//! Provides the Parity-compatible `trace` namespace trait, consumed by the server
//! implementation in `traceport-rpc`.

mod trace;

pub use trace::TraceApiServer;
