//! Decoders for the token transfer builtin functions

use std::fmt;
use std::str::FromStr;

use txmeta::TransactionMetadata;
use txmeta::errors::DecodeError;

use crate::args::hex_to_string;

mod esdt;
mod multi;
mod nft;

/// Builtin functions that move tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinFunction {
    EsdtTransfer,
    EsdtNftTransfer,
    MultiEsdtNftTransfer,
}

impl BuiltinFunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinFunction::EsdtTransfer => "ESDTTransfer",
            BuiltinFunction::EsdtNftTransfer => "ESDTNFTTransfer",
            BuiltinFunction::MultiEsdtNftTransfer => "MultiESDTNFTTransfer",
        }
    }

    /// Match a function name given either as plain text or hex-encoded
    pub fn parse(name: &str) -> Option<BuiltinFunction> {
        if let Ok(function) = name.parse() {
            return Some(function);
        }
        hex_to_string(0, name).ok()?.parse().ok()
    }

    /// Decode the arguments of this builtin on top of the plain call metadata.
    ///
    /// `Ok(None)` means the call does not qualify as a transfer (the NFT
    /// builtins are only transfers when sent to oneself) and should be kept
    /// as a regular smart contract call.
    pub fn decode(
        &self,
        base: &TransactionMetadata,
        args: &[String],
        hrp: &str,
    ) -> Result<Option<TransactionMetadata>, DecodeError> {
        match self {
            BuiltinFunction::EsdtTransfer => esdt::decode(base, args).map(Some),
            BuiltinFunction::EsdtNftTransfer => nft::decode(base, args, hrp),
            BuiltinFunction::MultiEsdtNftTransfer => multi::decode(base, args, hrp),
        }
    }
}

impl fmt::Display for BuiltinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuiltinFunction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ESDTTransfer" => Ok(BuiltinFunction::EsdtTransfer),
            "ESDTNFTTransfer" => Ok(BuiltinFunction::EsdtNftTransfer),
            "MultiESDTNFTTransfer" => Ok(BuiltinFunction::MultiEsdtNftTransfer),
            _ => Err(()),
        }
    }
}
