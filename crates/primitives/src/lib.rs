#![warn(missing_debug_implementations, missing_docs, unreachable_pub)]
#![deny(unused_must_use, rust_2018_idioms)]

//! Commonly used value types shared across the traceport workspace.

mod block;
mod block_id;
pub mod serde_helper;

pub use block::{Header, SealedBlock, SealedHeader};
pub use block_id::BlockNumberOrTag;

pub use alloy_primitives::{Address, BlockNumber, Bytes, B256, U256, U64};
