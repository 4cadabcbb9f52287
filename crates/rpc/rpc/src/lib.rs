#![warn(missing_debug_implementations, missing_docs, unreachable_pub)]
#![deny(unused_must_use, rust_2018_idioms)]

//! Traceport RPC implementation
//!
//! Parity-compatible `trace` namespace handlers layered over an external execution tracer:
//! request validation, reward-trace synthesis, block-level aggregation and response shaping.
//! Execution, storage and consensus stay behind the `traceport-interfaces` traits.

mod call_guard;
mod error;
mod trace;

pub use call_guard::TracingCallGuard;
pub use error::{TraceApiError, TraceApiResult};
pub use trace::TraceApi;

pub(crate) mod result;
