use std::fmt;

use bech32::{Bech32, Hrp};
use txmeta::errors::DecodeError;

pub const ADDRESS_LEN: usize = 32;

// Contract addresses start with eight zero bytes
const SMART_CONTRACT_PREFIX_LEN: usize = 8;

/// A 32 byte account public key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let key: [u8; ADDRESS_LEN] = bytes.try_into().map_err(|_| {
            DecodeError::InvalidAddress(format!(
                "expected {ADDRESS_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(key))
    }

    pub fn from_hex(value: &str) -> Result<Self, DecodeError> {
        let bytes = hex::decode(value)
            .map_err(|e| DecodeError::InvalidAddress(format!("'{value}': {e}")))?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bech32(value: &str) -> Result<Self, DecodeError> {
        let (_, bytes) = bech32::decode(value)
            .map_err(|e| DecodeError::InvalidAddress(format!("'{value}': {e}")))?;
        Self::from_bytes(&bytes)
    }

    pub fn to_bech32(&self, hrp: &str) -> Result<String, DecodeError> {
        let hrp = Hrp::parse(hrp)
            .map_err(|e| DecodeError::InvalidAddress(format!("bad prefix '{hrp}': {e}")))?;
        bech32::encode::<Bech32>(hrp, &self.0)
            .map_err(|e| DecodeError::InvalidAddress(e.to_string()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_smart_contract(&self) -> bool {
        self.0[..SMART_CONTRACT_PREFIX_LEN].iter().all(|b| *b == 0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}
