use std::collections::HashMap;
use std::str::FromStr;

use crate::errors::RegistryError;
use crate::traits::MetadataDecoder;
use crate::{TransactionMetadata, TransactionToDecode};

/// Supported blockchain types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Chain {
    Unspecified,
    MultiversX,
    Custom(String), // For extensibility without modifying the enum
}

impl Chain {
    pub fn as_str(&self) -> &str {
        match self {
            Chain::Unspecified => "Unspecified",
            Chain::MultiversX => "MultiversX",
            Chain::Custom(name) => name.as_str(),
        }
    }

    /// Chains with a built-in name
    pub fn known() -> [Chain; 2] {
        [Chain::MultiversX, Chain::Unspecified]
    }

    /// Lowercase names a chain is parsed from; the first one is canonical
    pub fn names(&self) -> &'static [&'static str] {
        match self {
            Chain::Unspecified => &["unspecified"],
            Chain::MultiversX => &["multiversx", "elrond", "mvx"],
            Chain::Custom(_) => &[],
        }
    }
}

impl FromStr for Chain {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_lowercase();
        Ok(Chain::known()
            .into_iter()
            .find(|chain| chain.names().contains(&name.as_str()))
            .unwrap_or_else(|| Chain::Custom(s.to_string())))
    }
}

/// Registry of metadata decoders, keyed by chain
#[derive(Debug, Default)]
pub struct DecoderRegistry {
    decoders: HashMap<Chain, Box<dyn MetadataDecoder>>,
}

impl DecoderRegistry {
    pub fn new() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    pub fn register<D>(&mut self, chain: Chain, decoder: D)
    where
        D: MetadataDecoder + 'static,
    {
        self.decoders.insert(chain, Box::new(decoder));
    }

    pub fn get(&self, chain: &Chain) -> Result<&dyn MetadataDecoder, RegistryError> {
        self.decoders
            .get(chain)
            .map(|decoder| decoder.as_ref())
            .ok_or_else(|| RegistryError::UnsupportedChain(chain.as_str().to_string()))
    }

    /// Decode with the chain's decoder, degrading malformed payloads to `Unknown`
    pub fn decode(
        &self,
        chain: &Chain,
        tx: &TransactionToDecode,
    ) -> Result<TransactionMetadata, RegistryError> {
        Ok(self.get(chain)?.decode(tx))
    }

    /// Decode strictly, surfacing the decoder's error
    pub fn try_decode(
        &self,
        chain: &Chain,
        tx: &TransactionToDecode,
    ) -> Result<TransactionMetadata, RegistryError> {
        Ok(self.get(chain)?.try_decode(tx)?)
    }

    pub fn decode_json(
        &self,
        chain: &Chain,
        json: &str,
    ) -> Result<TransactionMetadata, RegistryError> {
        let tx = TransactionToDecode::from_json(json)?;
        self.decode(chain, &tx)
    }

    pub fn supports(&self, chain: &Chain) -> bool {
        self.decoders.contains_key(chain)
    }

    /// Registered chains, sorted by name
    pub fn supported_chains(&self) -> Vec<Chain> {
        let mut chains: Vec<Chain> = self.decoders.keys().cloned().collect();
        chains.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        chains
    }
}
