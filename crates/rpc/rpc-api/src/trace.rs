use jsonrpsee::{core::RpcResult, proc_macros::rpc};
use traceport_primitives::{BlockNumberOrTag, B256};
use traceport_rpc_types::{CallRequest, ParityTrace, TraceConfig, TraceFilterArgs};

/// Parity-compatible trace rpc interface.
///
/// See <https://openethereum.github.io/JSONRPC-trace-module>
#[rpc(server, namespace = "trace")]
pub trait TraceApi {
    /// Returns the traces of every transaction in the given block, followed by the
    /// consensus-reward records for the block and its uncles.
    #[method(name = "block")]
    async fn trace_block(
        &self,
        number: BlockNumberOrTag,
        config: Option<TraceConfig>,
    ) -> RpcResult<Vec<ParityTrace>>;

    /// Returns the trace of the transaction with the given hash.
    #[method(name = "transaction")]
    async fn trace_transaction(
        &self,
        hash: B256,
        config: Option<TraceConfig>,
    ) -> RpcResult<serde_json::Value>;

    /// Streams traces for every block in the interval described by the filter.
    #[subscription(name = "filter", unsubscribe = "unsubscribeFilter", item = serde_json::Value)]
    async fn trace_filter(
        &self,
        args: TraceFilterArgs,
        config: Option<TraceConfig>,
    ) -> jsonrpsee::core::SubscriptionResult;

    /// Executes a hypothetical transaction on top of the referenced block's state and returns
    /// its trace.
    #[method(name = "call")]
    async fn trace_call(
        &self,
        request: CallRequest,
        number: Option<BlockNumberOrTag>,
        config: Option<TraceConfig>,
    ) -> RpcResult<serde_json::Value>;

    /// Executes an ordered batch of hypothetical transactions sharing one base state and
    /// returns their traces.
    #[method(name = "callMany")]
    async fn trace_call_many(
        &self,
        requests: Vec<CallRequest>,
        number: Option<BlockNumberOrTag>,
        config: Option<TraceConfig>,
    ) -> RpcResult<serde_json::Value>;
}
