//! Mock implementations of the collaborator traits.

use crate::{
    consensus::ConsensusRewards,
    provider::{BlockProvider, ProviderResult},
    tracer::{EthTracer, TracerError, TracerResult},
};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use tokio::sync::mpsc;
use traceport_primitives::{BlockNumber, BlockNumberOrTag, Header, SealedBlock, B256, U256};
use traceport_rpc_types::{CallRequest, TraceConfig, TxTraceResult};

/// A [`BlockProvider`] and [`ConsensusRewards`] over in-memory blocks and fixed reward
/// amounts.
#[derive(Debug, Default)]
pub struct MockEthProvider {
    blocks: Mutex<HashMap<BlockNumber, SealedBlock>>,
    pending: Mutex<Option<SealedBlock>>,
    block_reward: U256,
    uncle_rewards: Vec<U256>,
}

impl MockEthProvider {
    /// Creates a provider that reports the given reward amounts for every block.
    pub fn with_rewards(block_reward: U256, uncle_rewards: Vec<U256>) -> Self {
        Self { block_reward, uncle_rewards, ..Default::default() }
    }

    /// Adds a canonical block.
    pub fn add_block(&self, block: SealedBlock) {
        self.blocks.lock().insert(block.number(), block);
    }

    /// Sets the in-progress candidate block.
    pub fn set_pending_block(&self, block: SealedBlock) {
        *self.pending.lock() = Some(block);
    }
}

impl BlockProvider for MockEthProvider {
    fn block_by_number(&self, number: BlockNumber) -> ProviderResult<Option<SealedBlock>> {
        Ok(self.blocks.lock().get(&number).cloned())
    }

    fn latest_block(&self) -> ProviderResult<Option<SealedBlock>> {
        let blocks = self.blocks.lock();
        Ok(blocks.keys().max().and_then(|num| blocks.get(num)).cloned())
    }

    fn pending_block(&self) -> ProviderResult<Option<SealedBlock>> {
        Ok(self.pending.lock().clone())
    }
}

impl ConsensusRewards for MockEthProvider {
    fn block_rewards(&self, _header: &Header, _ommers: &[Header]) -> (U256, Vec<U256>) {
        (self.block_reward, self.uncle_rewards.clone())
    }
}

/// An [`EthTracer`] that replays canned results and records the configuration it was invoked
/// with.
#[derive(Debug, Default)]
pub struct MockTracer {
    block_traces: Vec<TxTraceResult>,
    tx_trace: serde_json::Value,
    call_trace: serde_json::Value,
    chain_items: Vec<serde_json::Value>,
    fail_with: Option<String>,
    last_config: Mutex<Option<TraceConfig>>,
}

impl MockTracer {
    /// Sets the per-transaction results returned when tracing a block.
    pub fn with_block_traces(mut self, block_traces: Vec<TxTraceResult>) -> Self {
        self.block_traces = block_traces;
        self
    }

    /// Sets the result returned when tracing a transaction or a call.
    pub fn with_trace(mut self, trace: serde_json::Value) -> Self {
        self.tx_trace = trace.clone();
        self.call_trace = trace;
        self
    }

    /// Sets the notifications pushed when tracing a chain interval.
    pub fn with_chain_items(mut self, chain_items: Vec<serde_json::Value>) -> Self {
        self.chain_items = chain_items;
        self
    }

    /// Makes every entry point fail with the given execution error.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.fail_with = Some(message.into());
        self
    }

    /// Returns the configuration the tracer was last invoked with.
    pub fn last_config(&self) -> Option<TraceConfig> {
        self.last_config.lock().clone()
    }

    fn record(&self, config: TraceConfig) -> TracerResult<()> {
        *self.last_config.lock() = Some(config);
        match &self.fail_with {
            Some(message) => Err(TracerError::Execution(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EthTracer for MockTracer {
    async fn trace_block_by_number(
        &self,
        _number: BlockNumberOrTag,
        config: TraceConfig,
    ) -> TracerResult<Vec<TxTraceResult>> {
        self.record(config)?;
        Ok(self.block_traces.clone())
    }

    async fn trace_transaction(
        &self,
        _hash: B256,
        config: TraceConfig,
    ) -> TracerResult<serde_json::Value> {
        self.record(config)?;
        Ok(self.tx_trace.clone())
    }

    async fn trace_call(
        &self,
        _request: CallRequest,
        _at: BlockNumberOrTag,
        config: TraceConfig,
    ) -> TracerResult<serde_json::Value> {
        self.record(config)?;
        Ok(self.call_trace.clone())
    }

    async fn trace_call_many(
        &self,
        requests: Vec<CallRequest>,
        _at: BlockNumberOrTag,
        config: TraceConfig,
    ) -> TracerResult<serde_json::Value> {
        self.record(config)?;
        Ok(serde_json::Value::Array(vec![self.call_trace.clone(); requests.len()]))
    }

    async fn trace_chain(
        &self,
        _from: SealedBlock,
        _to: SealedBlock,
        config: TraceConfig,
    ) -> TracerResult<mpsc::Receiver<serde_json::Value>> {
        self.record(config)?;
        let (tx, rx) = mpsc::channel(self.chain_items.len().max(1));
        for item in &self.chain_items {
            tx.try_send(item.clone()).expect("channel sized to fit all items");
        }
        Ok(rx)
    }
}

/// Builds a sealed block with the given number, beneficiary, transaction count and uncle
/// beneficiaries.
pub fn mock_block(
    number: u64,
    hash: B256,
    beneficiary: traceport_primitives::Address,
    tx_count: usize,
    uncle_authors: Vec<traceport_primitives::Address>,
) -> SealedBlock {
    let header = Header { number, beneficiary, ..Default::default() };
    let body = (0..tx_count).map(|idx| B256::with_last_byte(idx as u8 + 1)).collect();
    let ommers = uncle_authors
        .into_iter()
        .map(|beneficiary| Header { number, beneficiary, ..Default::default() })
        .collect();
    SealedBlock::new(traceport_primitives::SealedHeader::new(header, hash), body, ommers)
}
