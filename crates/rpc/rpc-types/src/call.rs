use serde::{Deserialize, Serialize};
use traceport_primitives::{Address, Bytes, U256, U64};

/// Call request for `trace_call` and `trace_callMany`.
///
/// Describes a hypothetical transaction; the execution tracer runs it on top of the referenced
/// block's state without including it in a block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    /// Sender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    /// Recipient; `None` deploys a contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    /// Gas limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<U256>,
    /// Legacy gas price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
    /// Transferred value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
    /// Call input data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Bytes>,
    /// Sender nonce.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<U64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_call_request() {
        let s = r#"{"from":"0x0000000000000000000000000000000000000001","to":"0x0000000000000000000000000000000000000002","value":"0xde0b6b3a7640000"}"#;
        let call: CallRequest = serde_json::from_str(s).unwrap();
        assert_eq!(call.from, Some(Address::with_last_byte(1)));
        assert_eq!(call.to, Some(Address::with_last_byte(2)));
        assert_eq!(call.value, Some(U256::from(10u64.pow(18))));
        assert_eq!(call.gas, None);
    }
}
