use crate::error::AddrFmtError;

/// Address scheme named by the first byte of an address payload.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum AddrType {
    /// Ed25519 public key hash.
    Ed25519 = 0,
}

impl AddrType {
    /// Returns the discriminant byte.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for AddrType {
    type Error = AddrFmtError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Ed25519),
            v => Err(AddrFmtError::UnsupportedAddrType(v)),
        }
    }
}

impl From<AddrType> for u8 {
    fn from(ty: AddrType) -> Self {
        ty.as_u8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ed25519_roundtrip() {
        let ty = AddrType::try_from(0).unwrap();
        assert_eq!(ty, AddrType::Ed25519);
        assert_eq!(u8::from(ty), 0);
    }

    #[test]
    fn test_unknown_types_rejected() {
        for b in 1..=u8::MAX {
            assert_eq!(
                AddrType::try_from(b),
                Err(AddrFmtError::UnsupportedAddrType(b))
            );
        }
    }
}
