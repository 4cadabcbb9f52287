use alloy_primitives::{Address, B256, U256};
use std::ops::Deref;

/// Block header fields the trace layer operates on.
///
/// Execution and storage live behind collaborator interfaces, so this only carries what reward
/// synthesis and block resolution need.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Header {
    /// Hash of the parent block.
    pub parent_hash: B256,
    /// Block height.
    pub number: u64,
    /// Address credited with the block's mining reward.
    pub beneficiary: Address,
    /// Block difficulty.
    pub difficulty: U256,
    /// Block timestamp.
    pub timestamp: u64,
}

/// A [`Header`] sealed with its block hash.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SealedHeader {
    /// The sealed header.
    pub header: Header,
    hash: B256,
}

impl SealedHeader {
    /// Seals the header with the given hash.
    pub const fn new(header: Header, hash: B256) -> Self {
        Self { header, hash }
    }

    /// Returns the block hash.
    pub const fn hash(&self) -> B256 {
        self.hash
    }
}

impl Deref for SealedHeader {
    type Target = Header;

    fn deref(&self) -> &Self::Target {
        &self.header
    }
}

/// A sealed block: header, the hashes of its transactions and its uncle headers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SealedBlock {
    /// The sealed block header.
    pub header: SealedHeader,
    /// Hashes of the transactions included in the block, in block order.
    pub body: Vec<B256>,
    /// Uncle headers referenced by the block, in block order.
    pub ommers: Vec<Header>,
}

impl SealedBlock {
    /// Creates a sealed block.
    pub const fn new(header: SealedHeader, body: Vec<B256>, ommers: Vec<Header>) -> Self {
        Self { header, body, ommers }
    }

    /// Returns the block hash.
    pub const fn hash(&self) -> B256 {
        self.header.hash()
    }

    /// Returns the block height.
    pub const fn number(&self) -> u64 {
        self.header.header.number
    }

    /// Returns the address credited with the block's mining reward.
    pub const fn beneficiary(&self) -> Address {
        self.header.header.beneficiary
    }
}
