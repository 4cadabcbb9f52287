//! [serde] helpers for the quirkier encodings accepted on the RPC surface.

/// Numeric helpers for quantities that clients send either hex-encoded or as plain numbers.
pub mod num {
    use alloy_primitives::U64;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// A `u64` accepted as a hex quantity string or a plain decimal number.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(untagged)]
    pub enum U64HexOrNumber {
        /// Hex quantity, e.g. `"0x10"`.
        Hex(U64),
        /// Plain number, e.g. `16`.
        Number(u64),
    }

    impl From<u64> for U64HexOrNumber {
        fn from(value: u64) -> Self {
            Self::Number(value)
        }
    }

    impl From<U64HexOrNumber> for u64 {
        fn from(value: U64HexOrNumber) -> Self {
            match value {
                U64HexOrNumber::Hex(val) => val.to(),
                U64HexOrNumber::Number(val) => val,
            }
        }
    }

    /// serde functions for an optional `u64` that accepts both hex and decimal input and always
    /// serializes as a hex quantity.
    pub mod u64_hex_or_decimal_opt {
        use super::*;

        /// Serializes the value as a hex quantity.
        pub fn serialize<S: Serializer>(
            value: &Option<u64>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(val) => U64HexOrNumber::Hex(U64::from(*val)).serialize(serializer),
                None => serializer.serialize_none(),
            }
        }

        /// Deserializes a hex quantity or decimal number.
        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<u64>, D::Error> {
            Ok(Option::<U64HexOrNumber>::deserialize(deserializer)?.map(Into::into))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Value {
            #[serde(default, with = "u64_hex_or_decimal_opt")]
            num: Option<u64>,
        }

        #[test]
        fn hex_or_decimal() {
            let val: Value = serde_json::from_str(r#"{"num": "0x10"}"#).unwrap();
            assert_eq!(val.num, Some(16));

            let val: Value = serde_json::from_str(r#"{"num": 16}"#).unwrap();
            assert_eq!(val.num, Some(16));

            let val: Value = serde_json::from_str("{}").unwrap();
            assert_eq!(val.num, None);

            assert_eq!(serde_json::to_string(&val).unwrap(), r#"{"num":null}"#);
        }
    }
}
