//! Error taxonomy of the `trace` namespace handlers.

use crate::result::{internal_rpc_err, invalid_params_rpc_err, rpc_err, RESOURCE_NOT_FOUND_CODE};
use jsonrpsee::types::ErrorObject;
use traceport_interfaces::{provider::ProviderError, tracer::TracerError};
use traceport_primitives::BlockNumberOrTag;

/// Result alias for `trace` namespace handlers.
pub type TraceApiResult<T> = Result<T, TraceApiError>;

/// Errors that can occur while handling `trace` namespace requests.
///
/// Every error surfaces to the caller of the failing operation; nothing is retried and block
/// aggregation never returns partial results.
#[derive(Debug, thiserror::Error)]
pub enum TraceApiError {
    /// The referenced block does not exist.
    #[error("block #{number} not found")]
    BlockNotFound {
        /// The requested block reference.
        number: BlockNumberOrTag,
    },
    /// The start of a range trace does not exist.
    #[error("starting block #{number} not found")]
    StartBlockNotFound {
        /// The requested start height.
        number: u64,
    },
    /// The end of a range trace does not exist.
    #[error("end block #{number} not found")]
    EndBlockNotFound {
        /// The requested end height.
        number: u64,
    },
    /// A range trace's bounds are equal or reversed.
    #[error("end block (#{end}) needs to come after start block (#{start})")]
    InvalidRange {
        /// Height of the resolved start block.
        start: u64,
        /// Height of the resolved end block.
        end: u64,
    },
    /// The execution tracer or a consensus collaborator failed; forwarded verbatim.
    #[error(transparent)]
    Tracer(#[from] TracerError),
    /// A per-transaction trace payload could not be interpreted.
    #[error("invalid trace output: {0}")]
    Decode(#[from] serde_json::Error),
    /// A per-transaction trace carried neither a payload nor an error.
    #[error("transaction trace produced no output")]
    EmptyTraceOutput,
    /// The block store failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl From<TraceApiError> for ErrorObject<'static> {
    fn from(error: TraceApiError) -> Self {
        match error {
            TraceApiError::BlockNotFound { .. } |
            TraceApiError::StartBlockNotFound { .. } |
            TraceApiError::EndBlockNotFound { .. } => {
                rpc_err(RESOURCE_NOT_FOUND_CODE, error.to_string())
            }
            TraceApiError::InvalidRange { .. } => invalid_params_rpc_err(error.to_string()),
            TraceApiError::Tracer(_) |
            TraceApiError::Decode(_) |
            TraceApiError::EmptyTraceOutput |
            TraceApiError::Provider(_) => internal_rpc_err(error.to_string()),
        }
    }
}
