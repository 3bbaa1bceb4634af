use std::fmt::Debug;

use crate::encodings::DataEncoding;
use crate::{TransactionMetadata, TransactionToDecode};

pub use crate::errors::{DecodeError, TransactionParseError};

/// Human readable prefix of MultiversX addresses
pub const DEFAULT_HRP: &str = "erd";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderOptions {
    pub data_encoding: DataEncoding,
    /// Prefix used when rendering decoded addresses as bech32
    pub hrp: String,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            data_encoding: DataEncoding::Auto,
            hrp: DEFAULT_HRP.to_string(),
        }
    }
}

/// Decodes transactions of one chain into [`TransactionMetadata`].
///
/// # Examples
///
/// ```
/// use txmeta::num_bigint::BigUint;
/// use txmeta::traits::{DecodeError, MetadataDecoder};
/// use txmeta::{TransactionMetadata, TransactionToDecode};
///
/// #[derive(Debug)]
/// struct EchoDecoder;
///
/// impl MetadataDecoder for EchoDecoder {
///     fn try_decode(&self, tx: &TransactionToDecode) -> Result<TransactionMetadata, DecodeError> {
///         Ok(TransactionMetadata::move_balance(tx.sender(), tx.receiver(), tx.parsed_value()?))
///     }
///
///     fn decode(&self, tx: &TransactionToDecode) -> TransactionMetadata {
///         self.try_decode(tx).unwrap_or_else(|_| {
///             TransactionMetadata::move_balance(tx.sender(), tx.receiver(), Default::default())
///                 .into_unknown()
///         })
///     }
///
///     fn chain_name(&self) -> &str {
///         "Echo"
///     }
/// }
///
/// let tx = TransactionToDecode::new("erd1a", "erd1b", "5");
/// assert_eq!(EchoDecoder.decode(&tx).value, BigUint::from(5u32));
/// ```
pub trait MetadataDecoder: Debug + Send + Sync {
    /// Decode strictly, reporting the first field that failed
    fn try_decode(&self, tx: &TransactionToDecode) -> Result<TransactionMetadata, DecodeError>;

    /// Decode without failing: payloads that cannot be decoded come back as
    /// [`crate::TransactionKind::Unknown`] with their raw arguments
    fn decode(&self, tx: &TransactionToDecode) -> TransactionMetadata;

    /// Chain name for display (e.g. "MultiversX")
    fn chain_name(&self) -> &str;
}

/// Convenience trait for decoding straight from the JSON form of a transaction
pub trait MetadataDecoderFromJson: MetadataDecoder {
    fn decode_json(&self, json: &str) -> Result<TransactionMetadata, TransactionParseError> {
        let tx = TransactionToDecode::from_json(json)?;
        Ok(self.decode(&tx))
    }
}

impl<T: MetadataDecoder + ?Sized> MetadataDecoderFromJson for T {}
