//! Consensus reward interface.

use traceport_primitives::{Header, U256};

/// Access to the consensus-defined mining rewards for a block.
///
/// Reward amounts depend on the active protocol fork, the header and the uncle list; all of
/// that is the consensus layer's business. Implementations are infallible: a reward the rules
/// cannot determine is zero.
#[auto_impl::auto_impl(&, Arc)]
pub trait ConsensusRewards: Send + Sync {
    /// Returns the miner reward and the ordered per-uncle rewards for a block, in wei.
    ///
    /// The uncle rewards are ordered to match `ommers`; the list may be shorter when the rules
    /// assign no reward to a trailing uncle.
    fn block_rewards(&self, header: &Header, ommers: &[Header]) -> (U256, Vec<U256>);
}
