use crate::{
    call_guard::TracingCallGuard,
    error::{TraceApiError, TraceApiResult},
};
use futures::{Stream, StreamExt};
use jsonrpsee::{
    core::{RpcResult, SubscriptionResult},
    PendingSubscriptionSink, SubscriptionMessage, SubscriptionSink,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::{mpsc, AcquireError, OwnedSemaphorePermit};
use tokio_stream::wrappers::ReceiverStream;
use tracing::trace;
use traceport_interfaces::{
    consensus::ConsensusRewards,
    provider::BlockProvider,
    tracer::{EthTracer, TracerError},
};
use traceport_primitives::{BlockNumberOrTag, SealedBlock, B256};
use traceport_rpc_api::TraceApiServer;
use traceport_rpc_types::{
    CallRequest, ParityTrace, RewardAction, RewardTrace, RewardType, TraceConfig,
    TraceFilterArgs, TraceOutput, CALL_TRACER_PARITY, STATE_DIFF_TRACER,
};

/// `trace` API implementation.
///
/// This type provides the Parity-compatible `trace` handlers: it resolves block references,
/// fills in tracer defaults, synthesizes consensus-reward records and reshapes tracer output.
/// Execution, storage and consensus stay behind the collaborator traits.
pub struct TraceApi<Provider, Tracer> {
    inner: Arc<TraceApiInner<Provider, Tracer>>,
}

// === impl TraceApi ===

impl<Provider, Tracer> TraceApi<Provider, Tracer> {
    /// Create a new instance of the [TraceApi] with the standard default tracer.
    pub fn new(provider: Provider, tracer: Tracer, tracing_call_guard: TracingCallGuard) -> Self {
        Self::with_default_tracer(provider, tracer, tracing_call_guard, CALL_TRACER_PARITY)
    }

    /// Create a new instance of the [TraceApi] with a deployment-specific default tracer
    /// identifier.
    pub fn with_default_tracer(
        provider: Provider,
        tracer: Tracer,
        tracing_call_guard: TracingCallGuard,
        default_tracer: impl Into<String>,
    ) -> Self {
        let inner = Arc::new(TraceApiInner {
            provider,
            tracer,
            tracing_call_guard,
            default_tracer: default_tracer.into(),
        });
        Self { inner }
    }

    /// The provider that can interact with the chain.
    pub fn provider(&self) -> &Provider {
        &self.inner.provider
    }

    /// Acquires a permit to execute a tracing call.
    async fn acquire_trace_permit(&self) -> Result<OwnedSemaphorePermit, AcquireError> {
        self.inner.tracing_call_guard.clone().acquire_owned().await
    }

    /// Fills in the default tracer identifier if the caller did not pick one.
    ///
    /// A caller-supplied identifier is never overwritten.
    fn resolve_trace_config(&self, config: Option<TraceConfig>) -> TraceConfig {
        let mut config = config.unwrap_or_default();
        if config.tracer.is_none() {
            config.tracer = Some(self.inner.default_tracer.clone());
        }
        config
    }
}

impl<Provider, Tracer> TraceApi<Provider, Tracer>
where
    Provider: BlockProvider + ConsensusRewards + 'static,
    Tracer: EthTracer + 'static,
{
    /// Returns the traces created at the given block: the flattened per-transaction traces in
    /// block order, then the block-reward record, then one record per rewarded uncle.
    ///
    /// Any sub-step failure aborts the whole call; partial arrays are never returned.
    pub async fn trace_block(
        &self,
        number: BlockNumberOrTag,
        config: Option<TraceConfig>,
    ) -> TraceApiResult<Vec<ParityTrace>> {
        let block = match number {
            BlockNumberOrTag::Pending => self.provider().pending_block()?,
            BlockNumberOrTag::Latest => self.provider().latest_block()?,
            BlockNumberOrTag::Number(num) => self.provider().block_by_number(num)?,
        };
        let Some(block) = block else { return Err(TraceApiError::BlockNotFound { number }) };

        let config = self.resolve_trace_config(config);
        let tx_traces = self.inner.tracer.trace_block_by_number(number, config).await?;

        let mut traces = Vec::with_capacity(tx_traces.len() + 1 + block.ommers.len());
        for tx_trace in tx_traces {
            let raw = match (tx_trace.result, tx_trace.error) {
                (Some(raw), _) => raw,
                (None, Some(error)) => return Err(TracerError::Execution(error).into()),
                (None, None) => return Err(TraceApiError::EmptyTraceOutput),
            };
            match serde_json::from_str(raw.get())? {
                TraceOutput::Sequence(frames) => {
                    traces.extend(frames.into_iter().map(ParityTrace::Transaction))
                }
                TraceOutput::Single(frame) => traces.push(ParityTrace::Transaction(frame)),
            }
        }

        traces.push(ParityTrace::Reward(self.block_reward_trace(&block)));
        traces.extend(self.uncle_reward_traces(&block).into_iter().map(ParityTrace::Reward));

        Ok(traces)
    }

    /// Returns the trace of the transaction with the given hash, as emitted by the configured
    /// tracer. No reward synthesis applies to single transactions.
    pub async fn trace_transaction(
        &self,
        hash: B256,
        config: Option<TraceConfig>,
    ) -> TraceApiResult<Value> {
        let config = self.resolve_trace_config(config);
        Ok(self.inner.tracer.trace_transaction(hash, config).await?)
    }

    /// Executes and traces a hypothetical transaction on top of the referenced block's state.
    pub async fn trace_call(
        &self,
        request: CallRequest,
        number: Option<BlockNumberOrTag>,
        config: Option<TraceConfig>,
    ) -> TraceApiResult<Value> {
        let at = number.unwrap_or_default();
        let config = self.resolve_trace_config(config);
        let res = self.inner.tracer.trace_call(request, at, config.clone()).await?;
        Ok(decorate_response(res, &config))
    }

    /// Executes and traces an ordered batch of hypothetical transactions sharing one base
    /// state.
    pub async fn trace_call_many(
        &self,
        requests: Vec<CallRequest>,
        number: Option<BlockNumberOrTag>,
        config: Option<TraceConfig>,
    ) -> TraceApiResult<Value> {
        let at = number.unwrap_or_default();
        let config = self.resolve_trace_config(config);
        // Unlike `trace_call`, the result is returned undecorated. That asymmetry ships in the
        // reference client; callers depend on the flat shape.
        Ok(self.inner.tracer.trace_call_many(requests, at, config).await?)
    }

    /// Validates the filter interval and starts the chain trace, returning the notification
    /// channel.
    ///
    /// The validated rule is `from < to` on the resolved block numbers; whether the upper
    /// bound itself is traced is the chain tracer's contract.
    async fn start_filter(
        &self,
        args: TraceFilterArgs,
        config: Option<TraceConfig>,
    ) -> TraceApiResult<mpsc::Receiver<Value>> {
        let config = self.resolve_trace_config(config);

        let start = args.from_block.unwrap_or_default();
        let end = args.to_block.unwrap_or_default();

        let from = self
            .provider()
            .block_by_number(start)?
            .ok_or(TraceApiError::StartBlockNotFound { number: start })?;
        let to = self
            .provider()
            .block_by_number(end)?
            .ok_or(TraceApiError::EndBlockNotFound { number: end })?;
        if from.number() >= to.number() {
            return Err(TraceApiError::InvalidRange { start: from.number(), end: to.number() })
        }

        Ok(self.inner.tracer.trace_chain(from, to, config).await?)
    }

    /// Builds the block-reward record.
    fn block_reward_trace(&self, block: &SealedBlock) -> RewardTrace {
        let (block_reward, _) = self.provider().block_rewards(&block.header.header, &block.ommers);
        reward_trace(
            block,
            RewardAction {
                author: block.beneficiary(),
                reward_type: RewardType::Block,
                value: block_reward,
            },
        )
    }

    /// Builds one uncle-reward record per uncle with a matching consensus reward, in block
    /// uncle order.
    ///
    /// Uncles the reward list does not cover are skipped.
    fn uncle_reward_traces(&self, block: &SealedBlock) -> Vec<RewardTrace> {
        let (_, uncle_rewards) =
            self.provider().block_rewards(&block.header.header, &block.ommers);
        block
            .ommers
            .iter()
            .zip(uncle_rewards)
            .map(|(uncle, value)| {
                reward_trace(
                    block,
                    RewardAction {
                        author: uncle.beneficiary,
                        reward_type: RewardType::Uncle,
                        value,
                    },
                )
            })
            .collect()
    }
}

#[jsonrpsee::core::async_trait]
impl<Provider, Tracer> TraceApiServer for TraceApi<Provider, Tracer>
where
    Provider: BlockProvider + ConsensusRewards + 'static,
    Tracer: EthTracer + 'static,
{
    /// Handler for `trace_block`
    async fn trace_block(
        &self,
        number: BlockNumberOrTag,
        config: Option<TraceConfig>,
    ) -> RpcResult<Vec<ParityTrace>> {
        trace!(target: "rpc::trace", ?number, "Serving trace_block");
        let _permit = self.acquire_trace_permit().await;
        Ok(Self::trace_block(self, number, config).await?)
    }

    /// Handler for `trace_transaction`
    async fn trace_transaction(
        &self,
        hash: B256,
        config: Option<TraceConfig>,
    ) -> RpcResult<Value> {
        trace!(target: "rpc::trace", ?hash, "Serving trace_transaction");
        let _permit = self.acquire_trace_permit().await;
        Ok(Self::trace_transaction(self, hash, config).await?)
    }

    /// Handler for the `trace_filter` subscription
    async fn trace_filter(
        &self,
        pending: PendingSubscriptionSink,
        args: TraceFilterArgs,
        config: Option<TraceConfig>,
    ) -> SubscriptionResult {
        trace!(target: "rpc::trace", ?args, "Serving trace_filter");
        match self.start_filter(args, config).await {
            Ok(notifications) => {
                let sink = pending.accept().await?;
                pipe_from_stream(sink, ReceiverStream::new(notifications)).await?;
            }
            Err(err) => pending.reject(err).await,
        }
        Ok(())
    }

    /// Handler for `trace_call`
    async fn trace_call(
        &self,
        request: CallRequest,
        number: Option<BlockNumberOrTag>,
        config: Option<TraceConfig>,
    ) -> RpcResult<Value> {
        let _permit = self.acquire_trace_permit().await;
        Ok(Self::trace_call(self, request, number, config).await?)
    }

    /// Handler for `trace_callMany`
    async fn trace_call_many(
        &self,
        requests: Vec<CallRequest>,
        number: Option<BlockNumberOrTag>,
        config: Option<TraceConfig>,
    ) -> RpcResult<Value> {
        let _permit = self.acquire_trace_permit().await;
        Ok(Self::trace_call_many(self, requests, number, config).await?)
    }
}

impl<Provider, Tracer> std::fmt::Debug for TraceApi<Provider, Tracer> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraceApi").finish_non_exhaustive()
    }
}

impl<Provider, Tracer> Clone for TraceApi<Provider, Tracer> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

struct TraceApiInner<Provider, Tracer> {
    /// The provider that can interact with the chain.
    provider: Provider,
    /// The execution engine's tracing entry points.
    tracer: Tracer,
    // restrict the number of concurrent calls to `trace_*`
    tracing_call_guard: TracingCallGuard,
    /// Tracer identifier used when a request does not name one.
    default_tracer: String,
}

/// Helper to construct a [`RewardTrace`] crediting a reward for the given block.
fn reward_trace(block: &SealedBlock, action: RewardAction) -> RewardTrace {
    RewardTrace { action, block_hash: block.hash(), block_number: block.number() }
}

/// Nests a tracer result under its Parity top-level key when the caller asked for nested
/// output.
///
/// Results of tracers without a defined top-level key are returned unwrapped.
fn decorate_response(res: Value, config: &TraceConfig) -> Value {
    if !config.nested_trace_output {
        return res
    }
    match config.tracer.as_deref() {
        Some(CALL_TRACER_PARITY) => json!({ "trace": res }),
        Some(STATE_DIFF_TRACER) => json!({ "stateDiff": res }),
        _ => res,
    }
}

/// Pipes all stream items into the subscription sink until either side goes away.
async fn pipe_from_stream<T, St>(
    sink: SubscriptionSink,
    mut stream: St,
) -> Result<(), serde_json::Error>
where
    St: Stream<Item = T> + Unpin,
    T: Serialize,
{
    loop {
        tokio::select! {
            _ = sink.closed() => {
                // connection dropped
                break Ok(())
            }
            maybe_item = stream.next() => {
                let Some(item) = maybe_item else {
                    // stream ended
                    break Ok(())
                };
                let msg = SubscriptionMessage::from_json(&item)?;
                if sink.send(msg).await.is_err() {
                    break Ok(())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::value::RawValue;
    use traceport_interfaces::test_utils::{mock_block, MockEthProvider, MockTracer};
    use traceport_primitives::{Address, U256};
    use traceport_rpc_types::TxTraceResult;

    const BLOCK_REWARD: u64 = 2_000_000_000_000_000_000;
    const UNCLE_REWARD: u64 = 1_750_000_000_000_000_000;

    fn raw(json: &str) -> Box<RawValue> {
        RawValue::from_string(json.to_string()).unwrap()
    }

    fn api(
        provider: MockEthProvider,
        tracer: MockTracer,
    ) -> TraceApi<Arc<MockEthProvider>, Arc<MockTracer>> {
        TraceApi::new(Arc::new(provider), Arc::new(tracer), TracingCallGuard::new(10))
    }

    fn provider_with_block_100(uncle_authors: Vec<Address>) -> MockEthProvider {
        let uncle_rewards = vec![U256::from(UNCLE_REWARD); uncle_authors.len()];
        let provider = MockEthProvider::with_rewards(U256::from(BLOCK_REWARD), uncle_rewards);
        provider.add_block(mock_block(
            100,
            B256::with_last_byte(0x64),
            Address::with_last_byte(0xaa),
            2,
            uncle_authors,
        ));
        provider
    }

    #[test]
    fn resolve_config_sets_default_tracer_once() {
        let api = api(MockEthProvider::default(), MockTracer::default());

        let resolved = api.resolve_trace_config(None);
        assert_eq!(resolved.tracer.as_deref(), Some(CALL_TRACER_PARITY));

        // idempotent
        let again = api.resolve_trace_config(Some(resolved.clone()));
        assert_eq!(again, resolved);

        // never overwrites a caller-supplied tracer
        let custom = api.resolve_trace_config(Some(TraceConfig::with_tracer("stateDiffTracer")));
        assert_eq!(custom.tracer.as_deref(), Some("stateDiffTracer"));
    }

    #[test]
    fn default_tracer_is_injectable() {
        let api = TraceApi::with_default_tracer(
            Arc::new(MockEthProvider::default()),
            Arc::new(MockTracer::default()),
            TracingCallGuard::new(1),
            "flatCallTracer",
        );
        assert_eq!(api.resolve_trace_config(None).tracer.as_deref(), Some("flatCallTracer"));
    }

    #[test]
    fn decorate_wraps_known_tracers_only() {
        let res = json!([{"type": "call"}]);

        let config = TraceConfig {
            tracer: Some(CALL_TRACER_PARITY.to_string()),
            nested_trace_output: true,
            ..Default::default()
        };
        assert_eq!(decorate_response(res.clone(), &config), json!({"trace": res}));

        let config = TraceConfig {
            tracer: Some(STATE_DIFF_TRACER.to_string()),
            nested_trace_output: true,
            ..Default::default()
        };
        assert_eq!(decorate_response(res.clone(), &config), json!({"stateDiff": res}));

        // unknown tracer stays unwrapped
        let config = TraceConfig {
            tracer: Some("prestateTracer".to_string()),
            nested_trace_output: true,
            ..Default::default()
        };
        assert_eq!(decorate_response(res.clone(), &config), res);

        // nesting not requested
        let config = TraceConfig::with_tracer(CALL_TRACER_PARITY);
        assert_eq!(decorate_response(res.clone(), &config), res);

        // no tracer set
        let config = TraceConfig { nested_trace_output: true, ..Default::default() };
        assert_eq!(decorate_response(res.clone(), &config), res);
    }

    #[tokio::test]
    async fn trace_block_merges_in_order() {
        let uncle = Address::with_last_byte(0xbb);
        let provider = provider_with_block_100(vec![uncle]);
        let tracer = MockTracer::default().with_block_traces(vec![
            TxTraceResult::success(raw(r#"[{"n": "a"}]"#)),
            TxTraceResult::success(raw(r#"[{"n": "b"}, {"n": "c"}]"#)),
        ]);
        let api = api(provider, tracer);

        let traces = api.trace_block(100u64.into(), None).await.unwrap();
        let arr = serde_json::to_value(traces).unwrap();
        let arr = arr.as_array().unwrap();

        assert_eq!(arr.len(), 5);
        assert_eq!(arr[0]["n"], "a");
        assert_eq!(arr[1]["n"], "b");
        assert_eq!(arr[2]["n"], "c");

        assert_eq!(arr[3]["type"], "reward");
        assert_eq!(arr[3]["action"]["rewardType"], "block");
        assert_eq!(arr[3]["action"]["author"], format!("{:?}", Address::with_last_byte(0xaa)));
        assert_eq!(arr[3]["blockNumber"], 100);
        assert_eq!(arr[3]["subtraces"], 0);
        assert_eq!(arr[3]["transactionHash"], Value::Null);

        assert_eq!(arr[4]["type"], "reward");
        assert_eq!(arr[4]["action"]["rewardType"], "uncle");
        assert_eq!(arr[4]["action"]["author"], format!("{uncle:?}"));
    }

    #[tokio::test]
    async fn trace_block_without_uncles_ends_with_block_reward() {
        let provider = provider_with_block_100(vec![]);
        let tracer = MockTracer::default().with_block_traces(vec![
            TxTraceResult::success(raw(r#"[{"n": "a"}]"#)),
            TxTraceResult::success(raw(r#"[{"n": "b"}]"#)),
        ]);
        let api = api(provider, tracer);

        let traces = api.trace_block(100u64.into(), None).await.unwrap();
        assert_eq!(traces.len(), 3);
        let last = serde_json::to_value(&traces[2]).unwrap();
        assert_eq!(last["action"]["rewardType"], "block");
    }

    #[tokio::test]
    async fn trace_block_splices_sequences_and_keeps_opaque_payloads() {
        let provider = provider_with_block_100(vec![]);
        let tracer = MockTracer::default().with_block_traces(vec![
            // opaque, non-sequence payload stays one entry
            TxTraceResult::success(raw(r#"{"gasUsed": "0x5208"}"#)),
        ]);
        let api = api(provider, tracer);

        let traces = api.trace_block(100u64.into(), None).await.unwrap();
        assert_eq!(traces.len(), 2);
        let first = serde_json::to_value(&traces[0]).unwrap();
        assert_eq!(first["gasUsed"], "0x5208");
    }

    #[tokio::test]
    async fn trace_block_skips_uncles_without_rewards() {
        let uncles = vec![Address::with_last_byte(0xbb), Address::with_last_byte(0xcc)];
        // reward list shorter than the uncle list
        let provider = MockEthProvider::with_rewards(
            U256::from(BLOCK_REWARD),
            vec![U256::from(UNCLE_REWARD)],
        );
        provider.add_block(mock_block(
            100,
            B256::with_last_byte(0x64),
            Address::with_last_byte(0xaa),
            0,
            uncles,
        ));
        let api = api(provider, MockTracer::default());

        let traces = api.trace_block(100u64.into(), None).await.unwrap();
        let arr = serde_json::to_value(traces).unwrap();
        let arr = arr.as_array().unwrap();

        // block reward plus exactly one uncle record
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[1]["action"]["rewardType"], "uncle");
        assert_eq!(arr[1]["action"]["author"], format!("{:?}", Address::with_last_byte(0xbb)));
    }

    #[tokio::test]
    async fn trace_block_resolves_pending_and_latest() {
        let provider = provider_with_block_100(vec![]);
        provider.set_pending_block(mock_block(
            101,
            B256::with_last_byte(0x65),
            Address::with_last_byte(0xaa),
            0,
            vec![],
        ));
        let api = api(provider, MockTracer::default());

        let traces = api.trace_block(BlockNumberOrTag::Pending, None).await.unwrap();
        let last = serde_json::to_value(traces.last().unwrap()).unwrap();
        assert_eq!(last["blockNumber"], 101);

        let traces = api.trace_block(BlockNumberOrTag::Latest, None).await.unwrap();
        let last = serde_json::to_value(traces.last().unwrap()).unwrap();
        assert_eq!(last["blockNumber"], 100);
    }

    #[tokio::test]
    async fn trace_block_unknown_number_is_not_found() {
        let api = api(provider_with_block_100(vec![]), MockTracer::default());
        let err = api.trace_block(999999u64.into(), None).await.unwrap_err();
        assert!(matches!(err, TraceApiError::BlockNotFound { .. }));
        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn trace_block_aborts_on_tracer_failure() {
        let provider = provider_with_block_100(vec![]);
        let tracer = MockTracer::default().failing("execution aborted");
        let api = api(provider, tracer);

        let err = api.trace_block(100u64.into(), None).await.unwrap_err();
        assert!(matches!(err, TraceApiError::Tracer(_)));
    }

    #[tokio::test]
    async fn trace_block_aborts_on_failed_transaction_entry() {
        let provider = provider_with_block_100(vec![]);
        let tracer = MockTracer::default().with_block_traces(vec![
            TxTraceResult::success(raw(r#"[{"n": "a"}]"#)),
            TxTraceResult::error("out of gas"),
        ]);
        let api = api(provider, tracer);

        let err = api.trace_block(100u64.into(), None).await.unwrap_err();
        assert_eq!(err.to_string(), "out of gas");
    }

    #[tokio::test]
    async fn trace_block_applies_default_tracer() {
        let provider = provider_with_block_100(vec![]);
        let tracer = Arc::new(MockTracer::default());
        let api = TraceApi::new(
            Arc::new(provider),
            Arc::clone(&tracer),
            TracingCallGuard::new(10),
        );

        api.trace_block(100u64.into(), None).await.unwrap();
        let seen = tracer.last_config().unwrap();
        assert_eq!(seen.tracer.as_deref(), Some(CALL_TRACER_PARITY));
    }

    #[tokio::test]
    async fn trace_transaction_delegates_without_rewards() {
        let tracer =
            MockTracer::default().with_trace(json!([{"type": "call", "subtraces": 0}]));
        let api = api(MockEthProvider::default(), tracer);

        let res = api.trace_transaction(B256::with_last_byte(1), None).await.unwrap();
        assert_eq!(res, json!([{"type": "call", "subtraces": 0}]));
    }

    #[tokio::test]
    async fn trace_call_is_decorated() {
        let tracer = MockTracer::default().with_trace(json!([{"type": "call"}]));
        let api = api(MockEthProvider::default(), tracer);

        let config = TraceConfig { nested_trace_output: true, ..Default::default() };
        let res = api.trace_call(CallRequest::default(), None, Some(config)).await.unwrap();
        assert_eq!(res, json!({"trace": [{"type": "call"}]}));
    }

    #[tokio::test]
    async fn trace_call_many_is_not_decorated() {
        let tracer = MockTracer::default().with_trace(json!([{"type": "call"}]));
        let api = api(MockEthProvider::default(), tracer);

        let config = TraceConfig { nested_trace_output: true, ..Default::default() };
        let res = api
            .trace_call_many(vec![CallRequest::default(); 2], None, Some(config))
            .await
            .unwrap();
        // flat batch result, no top-level key
        assert_eq!(res, json!([[{"type": "call"}], [{"type": "call"}]]));
    }

    #[tokio::test]
    async fn filter_requires_existing_bounds_and_forward_range() {
        let provider = MockEthProvider::default();
        for num in 9..=11 {
            provider.add_block(mock_block(
                num,
                B256::with_last_byte(num as u8),
                Address::with_last_byte(0xaa),
                0,
                vec![],
            ));
        }
        let api = api(provider, MockTracer::default());

        let args = |from, to| TraceFilterArgs {
            from_block: Some(from),
            to_block: Some(to),
            ..Default::default()
        };

        let err = api.start_filter(args(10, 10), None).await.unwrap_err();
        assert!(matches!(err, TraceApiError::InvalidRange { start: 10, end: 10 }));

        let err = api.start_filter(args(10, 9), None).await.unwrap_err();
        assert!(matches!(err, TraceApiError::InvalidRange { start: 10, end: 9 }));

        let err = api.start_filter(args(999999, 11), None).await.unwrap_err();
        assert!(matches!(err, TraceApiError::StartBlockNotFound { number: 999999 }));
        assert!(err.to_string().contains("999999"));

        let err = api.start_filter(args(10, 999999), None).await.unwrap_err();
        assert!(matches!(err, TraceApiError::EndBlockNotFound { number: 999999 }));

        assert!(api.start_filter(args(10, 11), None).await.is_ok());
    }

    #[tokio::test]
    async fn filter_streams_chain_notifications() {
        let provider = MockEthProvider::default();
        for num in [0u64, 1, 2] {
            provider.add_block(mock_block(
                num,
                B256::with_last_byte(num as u8 + 1),
                Address::with_last_byte(0xaa),
                0,
                vec![],
            ));
        }
        let tracer = MockTracer::default()
            .with_chain_items(vec![json!({"block": 0}), json!({"block": 1})]);
        let api = api(provider, tracer);

        let args = TraceFilterArgs {
            from_block: Some(0),
            to_block: Some(2),
            ..Default::default()
        };
        let mut notifications = api.start_filter(args, None).await.unwrap();

        assert_eq!(notifications.recv().await, Some(json!({"block": 0})));
        assert_eq!(notifications.recv().await, Some(json!({"block": 1})));
        assert_eq!(notifications.recv().await, None);
    }
}
