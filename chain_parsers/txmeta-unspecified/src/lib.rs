use tracing::debug;
use txmeta::{
    TransactionKind, TransactionMetadata, TransactionToDecode,
    errors::DecodeError,
    traits::MetadataDecoder,
};

// This is a standalone crate for chains without a dedicated decoder, mostly provided for testing and as a sample implementation template to start from
/// Decoder that keeps the data field as a single opaque argument
#[derive(Debug, Clone, Default)]
pub struct UnspecifiedDecoder;

impl MetadataDecoder for UnspecifiedDecoder {
    fn try_decode(&self, tx: &TransactionToDecode) -> Result<TransactionMetadata, DecodeError> {
        let mut metadata =
            TransactionMetadata::move_balance(tx.sender(), tx.receiver(), tx.parsed_value()?);
        if let Some(data) = tx.data() {
            debug!(len = data.len(), "keeping data field undecoded");
            metadata.kind = TransactionKind::SmartContractCall;
            metadata.function_args = Some(vec![data.to_string()]);
        }
        Ok(metadata)
    }

    fn decode(&self, tx: &TransactionToDecode) -> TransactionMetadata {
        self.try_decode(tx).unwrap_or_else(|_| {
            let mut metadata =
                TransactionMetadata::move_balance(tx.sender(), tx.receiver(), Default::default());
            metadata.function_args = tx.data().map(|data| vec![data.to_string()]);
            metadata.into_unknown()
        })
    }

    fn chain_name(&self) -> &str {
        "Unspecified Chain"
    }
}

// Public API functions
pub fn transaction_to_metadata(tx: &TransactionToDecode) -> TransactionMetadata {
    UnspecifiedDecoder.decode(tx)
}
