use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Serialize};

use crate::Hrp;

impl Serialize for Hrp {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            s.serialize_str(self.as_str())
        } else {
            s.serialize_bytes(self.as_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for Hrp {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        if d.is_human_readable() {
            struct StrVisitor;

            impl de::Visitor<'_> for StrVisitor {
                type Value = Hrp;

                fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "a lowercase bech32 hrp")
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<Hrp, E> {
                    Hrp::from_str(v).map_err(E::custom)
                }
            }

            d.deserialize_str(StrVisitor)
        } else {
            struct BytesVisitor;

            impl de::Visitor<'_> for BytesVisitor {
                type Value = Hrp;

                fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "lowercase bech32 hrp bytes")
                }

                fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Hrp, E> {
                    let s = std::str::from_utf8(v)
                        .map_err(|_| E::invalid_value(de::Unexpected::Bytes(v), &self))?;
                    Hrp::from_str(s).map_err(E::custom)
                }
            }

            d.deserialize_bytes(BytesVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_readable_roundtrip() {
        let hrp = Hrp::new("iota").unwrap();
        let json = serde_json::to_string(&hrp).unwrap();
        assert_eq!(json, "\"iota\"");
        let back: Hrp = serde_json::from_str(&json).unwrap();
        assert_eq!(hrp, back);
    }

    #[test]
    fn test_binary_roundtrip() {
        let hrp = Hrp::new("atoi").unwrap();
        let encoded = bincode::serialize(&hrp).unwrap();
        let back: Hrp = bincode::deserialize(&encoded).unwrap();
        assert_eq!(hrp, back);
    }

    #[test]
    fn test_human_readable_rejects_uppercase() {
        let result: Result<Hrp, _> = serde_json::from_str("\"IOTA\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_binary_rejects_non_utf8() {
        let encoded = bincode::serialize(&serde_bytes_shim(&[0xff, 0xfe])).unwrap();
        let result: Result<Hrp, _> = bincode::deserialize(&encoded);
        assert!(result.is_err());
    }

    /// Serializes a raw slice the same way `Hrp` does in binary formats.
    fn serde_bytes_shim(b: &[u8]) -> impl Serialize + '_ {
        struct Raw<'a>(&'a [u8]);

        impl Serialize for Raw<'_> {
            fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                s.serialize_bytes(self.0)
            }
        }

        Raw(b)
    }
}
