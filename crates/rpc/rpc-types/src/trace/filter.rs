//! `trace_filter` types and support

use serde::{Deserialize, Serialize};
use traceport_primitives::{serde_helper::num::u64_hex_or_decimal_opt, Address};

/// Arguments for `trace_filter`: a contiguous block interval plus optional address filters and
/// pagination hints.
///
/// Only the block interval is validated here; the address filters and pagination hints are part
/// of the schema and travel to the chain tracer untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "camelCase")]
pub struct TraceFilterArgs {
    /// Trace starting from this block; defaults to block 0.
    #[serde(default, with = "u64_hex_or_decimal_opt")]
    pub from_block: Option<u64>,
    /// Trace up to this block; defaults to block 0.
    #[serde(default, with = "u64_hex_or_decimal_opt")]
    pub to_block: Option<u64>,
    /// Only include traces sent from this address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_address: Option<Address>,
    /// Only include traces sent to this address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_address: Option<Address>,
    /// Offset into the result stream.
    #[serde(default)]
    pub after: Option<u64>,
    /// Maximum number of results.
    #[serde(default)]
    pub count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        let s = r#"{"fromBlock":  "0x3","toBlock":  "0x5"}"#;
        let filter: TraceFilterArgs = serde_json::from_str(s).unwrap();
        assert_eq!(filter.from_block, Some(3));
        assert_eq!(filter.to_block, Some(5));
        assert_eq!(filter.after, None);
        assert_eq!(filter.count, None);
    }

    #[test]
    fn test_parse_filter_decimal_and_addresses() {
        let s = r#"{
            "fromBlock": 3,
            "toBlock": 5,
            "fromAddress": "0x0000000000000000000000000000000000000011",
            "toAddress": "0x0000000000000000000000000000000000000022",
            "after": 10,
            "count": 50
        }"#;
        let filter: TraceFilterArgs = serde_json::from_str(s).unwrap();
        assert_eq!(filter.from_block, Some(3));
        assert_eq!(filter.to_block, Some(5));
        assert_eq!(filter.from_address, Some(Address::with_last_byte(0x11)));
        assert_eq!(filter.to_address, Some(Address::with_last_byte(0x22)));
        assert_eq!(filter.after, Some(10));
        assert_eq!(filter.count, Some(50));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let s = r#"{"fromBlock": "0x3", "untilBlock": "0x5"}"#;
        assert!(serde_json::from_str::<TraceFilterArgs>(s).is_err());
    }
}
