use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A block reference: a concrete height or one of the `latest`/`pending` tags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlockNumberOrTag {
    /// The current canonical chain head.
    #[default]
    Latest,
    /// The node's in-progress candidate block.
    Pending,
    /// Block at the given height.
    Number(u64),
}

impl BlockNumberOrTag {
    /// Returns the block number if this is a [`BlockNumberOrTag::Number`].
    pub const fn as_number(&self) -> Option<u64> {
        match self {
            Self::Number(num) => Some(*num),
            _ => None,
        }
    }

    /// Returns `true` if this is the `pending` tag.
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl From<u64> for BlockNumberOrTag {
    fn from(num: u64) -> Self {
        Self::Number(num)
    }
}

impl fmt::Display for BlockNumberOrTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str("latest"),
            Self::Pending => f.write_str("pending"),
            Self::Number(num) => write!(f, "0x{num:x}"),
        }
    }
}

impl Serialize for BlockNumberOrTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Latest => serializer.serialize_str("latest"),
            Self::Pending => serializer.serialize_str("pending"),
            Self::Number(num) => serializer.serialize_str(&format!("0x{num:x}")),
        }
    }
}

impl<'de> Deserialize<'de> for BlockNumberOrTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(u64),
            Tag(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(num) => Ok(Self::Number(num)),
            Repr::Tag(tag) => match tag.as_str() {
                "latest" => Ok(Self::Latest),
                "pending" => Ok(Self::Pending),
                s => {
                    let num = if let Some(hex) = s.strip_prefix("0x") {
                        u64::from_str_radix(hex, 16)
                    } else {
                        s.parse()
                    };
                    num.map(Self::Number).map_err(|_| {
                        de::Error::custom(format!("invalid block number or tag: {s}"))
                    })
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_block_number_or_tag() {
        let tag: BlockNumberOrTag = serde_json::from_str(r#""latest""#).unwrap();
        assert_eq!(tag, BlockNumberOrTag::Latest);

        let tag: BlockNumberOrTag = serde_json::from_str(r#""pending""#).unwrap();
        assert_eq!(tag, BlockNumberOrTag::Pending);

        let num: BlockNumberOrTag = serde_json::from_str(r#""0x64""#).unwrap();
        assert_eq!(num, BlockNumberOrTag::Number(100));

        let num: BlockNumberOrTag = serde_json::from_str("100").unwrap();
        assert_eq!(num, BlockNumberOrTag::Number(100));

        assert_eq!(serde_json::to_string(&num).unwrap(), r#""0x64""#);
    }

    #[test]
    fn invalid_tag_is_rejected() {
        assert!(serde_json::from_str::<BlockNumberOrTag>(r#""finalized-ish""#).is_err());
    }
}
