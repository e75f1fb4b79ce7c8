//! Address string encoding on top of the generic codec.
//!
//! An address is a raw byte buffer whose first byte names the address type
//! (see [`AddrType`]). It is regrouped into 5-bit symbols and formatted under
//! the network's human-readable prefix.

use iota_bech32::{Bech32String, FixedBuf, Hrp, decode, encode, encode_hrp, from_base32, to_base32};
use tracing::debug;

use crate::error::{AddrFmtError, AddrFmtResult};
use crate::types::AddrType;

/// Maximum number of 5-bit symbols in an address payload.
pub const MAX_ADDR_DATA_LEN: usize = 64;

/// Maximum number of raw address bytes that fit in [`MAX_ADDR_DATA_LEN`]
/// symbols.
pub const MAX_ADDR_LEN: usize = MAX_ADDR_DATA_LEN * 5 / 8;

/// Staging buffer for an address's 5-bit symbols.
type AddrData = FixedBuf<MAX_ADDR_DATA_LEN>;

/// Raw address bytes recovered from a string.
pub type AddrBuf = FixedBuf<MAX_ADDR_LEN>;

/// Encodes raw address bytes under `hrp`.
///
/// The address type byte is not checked here, only on decode.
pub fn encode_addr(hrp: &str, addr: &[u8]) -> AddrFmtResult<Bech32String> {
    let data = addr_to_data(addr)?;
    Ok(encode(hrp, &data)?)
}

/// Decodes an address string, checking it was formatted under `hrp` and
/// carries a supported address type.
pub fn decode_addr(hrp: &str, s: &str) -> AddrFmtResult<AddrBuf> {
    let (found, data) = decode(s)?;

    if data.is_empty() || data.len() > MAX_ADDR_DATA_LEN {
        debug!(len = data.len(), "address payload length out of bounds");
        return Err(AddrFmtError::InvalidPayloadLen(data.len()));
    }

    if found.as_bytes() != hrp.as_bytes() {
        debug!(expected = %hrp, %found, "address hrp mismatch");
        return Err(AddrFmtError::MismatchHrp(found));
    }

    let mut addr = AddrBuf::new();
    from_base32(&data, &mut addr)?;

    let ty = *addr.first().ok_or(AddrFmtError::InvalidPayloadLen(0))?;
    if let Err(e) = AddrType::try_from(ty) {
        debug!(%ty, "unsupported address type");
        return Err(e);
    }

    Ok(addr)
}

fn addr_to_data(addr: &[u8]) -> AddrFmtResult<AddrData> {
    let mut data = AddrData::new();
    to_base32(addr, &mut data)?;
    Ok(data)
}

/// Config for encoding and parsing addresses on one network.
#[derive(Clone, Debug)]
pub struct AddrConfig {
    hrp: Hrp,
}

impl AddrConfig {
    /// Constructs a new instance.
    pub fn new(hrp: Hrp) -> Self {
        Self { hrp }
    }

    /// Gets the expected prefix.
    pub fn hrp(&self) -> &Hrp {
        &self.hrp
    }

    /// Encodes raw address bytes under the configured prefix.
    pub fn encode_addr(&self, addr: &[u8]) -> AddrFmtResult<Bech32String> {
        let data = addr_to_data(addr)?;
        Ok(encode_hrp(&self.hrp, &data)?)
    }

    /// Attempts to parse an address string formatted under the configured
    /// prefix.
    pub fn try_decode_addr(&self, s: &str) -> AddrFmtResult<AddrBuf> {
        decode_addr(self.hrp.as_str(), s)
    }
}
