#![warn(missing_debug_implementations, missing_docs, unreachable_pub)]
#![deny(unused_must_use, rust_2018_idioms)]

//! Wire types for the Parity-compatible `trace` RPC surface.
//!
//! See <https://openethereum.github.io/JSONRPC-trace-module>

mod call;
pub mod trace;

pub use call::CallRequest;
pub use trace::{
    config::{TraceConfig, TxTraceResult},
    filter::TraceFilterArgs,
    parity::{
        ParityTrace, RewardAction, RewardTrace, RewardType, TraceOutput, CALL_TRACER_PARITY,
        STATE_DIFF_TRACER,
    },
};
