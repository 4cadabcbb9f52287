//! Execution tracer interface.

use crate::provider::ProviderError;
use async_trait::async_trait;
use tokio::sync::mpsc;
use traceport_primitives::{BlockNumberOrTag, SealedBlock, B256};
use traceport_rpc_types::{CallRequest, TraceConfig, TxTraceResult};

/// Result alias for tracer calls.
pub type TracerResult<T> = Result<T, TracerError>;

/// Error returned by [`EthTracer`] implementations.
///
/// These are upstream failures and reach the RPC caller verbatim; the shim never retries or
/// masks them.
#[derive(Debug, thiserror::Error)]
pub enum TracerError {
    /// EVM execution failed while tracing.
    #[error("{0}")]
    Execution(String),
    /// The referenced transaction is unknown.
    #[error("transaction {0} not found")]
    TransactionNotFound(B256),
    /// The underlying block store failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// The execution engine's tracing entry points.
///
/// Results are tracer-defined: each tracer emits its own JSON shape, so everything comes back
/// as raw or dynamically typed JSON and the shim only reshapes it.
#[async_trait]
pub trait EthTracer: Send + Sync {
    /// Traces every transaction of the referenced block, returning one result per transaction
    /// in block order.
    async fn trace_block_by_number(
        &self,
        number: BlockNumberOrTag,
        config: TraceConfig,
    ) -> TracerResult<Vec<TxTraceResult>>;

    /// Traces the transaction with the given hash.
    async fn trace_transaction(
        &self,
        hash: B256,
        config: TraceConfig,
    ) -> TracerResult<serde_json::Value>;

    /// Executes and traces a hypothetical transaction on top of the referenced block's state.
    async fn trace_call(
        &self,
        request: CallRequest,
        at: BlockNumberOrTag,
        config: TraceConfig,
    ) -> TracerResult<serde_json::Value>;

    /// Executes and traces an ordered batch of hypothetical transactions sharing one base
    /// state.
    async fn trace_call_many(
        &self,
        requests: Vec<CallRequest>,
        at: BlockNumberOrTag,
        config: TraceConfig,
    ) -> TracerResult<serde_json::Value>;

    /// Starts tracing the chain interval bounded by the two resolved blocks, pushing
    /// tracer-defined notifications into the returned channel as blocks are processed.
    ///
    /// Whether `to` itself is traced is this tracer's contract; the caller only validated that
    /// `to` is above `from`. Dropping the receiver cancels the trace.
    async fn trace_chain(
        &self,
        from: SealedBlock,
        to: SealedBlock,
        config: TraceConfig,
    ) -> TracerResult<mpsc::Receiver<serde_json::Value>>;
}

#[async_trait]
impl<T: EthTracer + ?Sized> EthTracer for std::sync::Arc<T> {
    async fn trace_block_by_number(
        &self,
        number: BlockNumberOrTag,
        config: TraceConfig,
    ) -> TracerResult<Vec<TxTraceResult>> {
        (**self).trace_block_by_number(number, config).await
    }

    async fn trace_transaction(
        &self,
        hash: B256,
        config: TraceConfig,
    ) -> TracerResult<serde_json::Value> {
        (**self).trace_transaction(hash, config).await
    }

    async fn trace_call(
        &self,
        request: CallRequest,
        at: BlockNumberOrTag,
        config: TraceConfig,
    ) -> TracerResult<serde_json::Value> {
        (**self).trace_call(request, at, config).await
    }

    async fn trace_call_many(
        &self,
        requests: Vec<CallRequest>,
        at: BlockNumberOrTag,
        config: TraceConfig,
    ) -> TracerResult<serde_json::Value> {
        (**self).trace_call_many(requests, at, config).await
    }

    async fn trace_chain(
        &self,
        from: SealedBlock,
        to: SealedBlock,
        config: TraceConfig,
    ) -> TracerResult<mpsc::Receiver<serde_json::Value>> {
        (**self).trace_chain(from, to, config).await
    }
}
