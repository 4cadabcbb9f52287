//! Block lookup interface.

use traceport_primitives::{BlockNumber, SealedBlock};

/// Result alias for provider calls.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Error returned by [`BlockProvider`] implementations.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Reading from the block store failed.
    #[error("database error: {0}")]
    Database(String),
}

/// Client trait for fetching the blocks the trace shim resolves requests against.
#[auto_impl::auto_impl(&, Arc)]
pub trait BlockProvider: Send + Sync {
    /// Returns the block at the given height, if it exists on the canonical chain.
    fn block_by_number(&self, number: BlockNumber) -> ProviderResult<Option<SealedBlock>>;

    /// Returns the current canonical head block.
    fn latest_block(&self) -> ProviderResult<Option<SealedBlock>>;

    /// Returns the node's in-progress candidate block, if one is being built.
    fn pending_block(&self) -> ProviderResult<Option<SealedBlock>>;
}
