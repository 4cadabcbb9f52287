//! Parity/OpenEthereum style trace types.
//!
//! See <https://openethereum.github.io/JSONRPC-trace-module>

use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};
use traceport_primitives::{Address, B256, U256};

/// Identifier of the call tracer that emits Parity-shaped call frames. Used as the default
/// tracer for every `trace` namespace request that does not name one.
pub const CALL_TRACER_PARITY: &str = "callTracerParity";

/// Identifier of the tracer that emits Parity-shaped state diffs.
pub const STATE_DIFF_TRACER: &str = "stateDiffTracer";

/// Kind of consensus reward a [`RewardAction`] describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardType {
    /// Reward credited to the miner of the block.
    Block,
    /// Reduced reward credited to the miner of an uncle.
    Uncle,
}

/// Payload of a `"reward"`-typed trace record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardAction {
    /// Address credited with the reward.
    pub author: Address,
    /// Whether this is the block reward or an uncle reward.
    pub reward_type: RewardType,
    /// Reward amount in wei.
    pub value: U256,
}

/// A synthesized consensus-reward trace record.
///
/// Reward records never originate from a transaction, so the transaction-scoped fields of the
/// Parity schema are not representable here; serialization emits them with their fixed values:
///
/// ```json
/// {
///   "action": {"author": "0x...", "rewardType": "block", "value": "0x..."},
///   "blockHash": "0x...",
///   "blockNumber": 100,
///   "result": null,
///   "subtraces": 0,
///   "traceAddress": [],
///   "transactionHash": null,
///   "transactionPosition": null,
///   "type": "reward"
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardTrace {
    /// The reward payload.
    pub action: RewardAction,
    /// Hash of the rewarded block.
    pub block_hash: B256,
    /// Height of the rewarded block.
    pub block_number: u64,
}

impl Serialize for RewardTrace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RewardTrace", 9)?;
        state.serialize_field("action", &self.action)?;
        state.serialize_field("blockHash", &self.block_hash)?;
        state.serialize_field("blockNumber", &self.block_number)?;
        state.serialize_field("result", &Option::<()>::None)?;
        state.serialize_field("subtraces", &0u32)?;
        state.serialize_field("traceAddress", &[] as &[u32])?;
        state.serialize_field("transactionHash", &Option::<B256>::None)?;
        state.serialize_field("transactionPosition", &Option::<u64>::None)?;
        state.serialize_field("type", "reward")?;
        state.end()
    }
}

/// One entry of a block-level trace response.
///
/// Block responses are a flat array mixing call frames reported by the execution tracer with
/// reward records synthesized from consensus rules.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParityTrace {
    /// A call frame emitted by the execution tracer, forwarded as-is.
    Transaction(serde_json::Value),
    /// A synthesized reward record.
    Reward(RewardTrace),
}

/// Raw output of the execution tracer for a single transaction.
///
/// Tracers are schema-free, so the payload is resolved structurally: an array decodes as a
/// sequence of frames to be spliced into the block response, anything else stays opaque.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TraceOutput {
    /// An ordered sequence of frames.
    Sequence(Vec<serde_json::Value>),
    /// A single opaque payload.
    Single(serde_json::Value),
}
