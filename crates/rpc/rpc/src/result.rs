//! Additional helpers for converting errors.

use jsonrpsee::types::error::{ErrorObject, INTERNAL_ERROR_CODE, INVALID_PARAMS_CODE};

/// Error code used when a referenced block does not exist.
pub(crate) const RESOURCE_NOT_FOUND_CODE: i32 = -32001;

/// Constructs an invalid params JSON-RPC error.
pub(crate) fn invalid_params_rpc_err(msg: impl Into<String>) -> ErrorObject<'static> {
    rpc_err(INVALID_PARAMS_CODE, msg)
}

/// Constructs an internal JSON-RPC error.
pub(crate) fn internal_rpc_err(msg: impl Into<String>) -> ErrorObject<'static> {
    rpc_err(INTERNAL_ERROR_CODE, msg)
}

/// Constructs a JSON-RPC error with the given code and message.
pub(crate) fn rpc_err(code: i32, msg: impl Into<String>) -> ErrorObject<'static> {
    ErrorObject::owned(code, msg.into(), None::<()>)
}
