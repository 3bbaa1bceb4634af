use tracing::{debug, warn};
use txmeta::{
    TransactionKind, TransactionMetadata, TransactionToDecode,
    encodings::decode_data_field,
    errors::DecodeError,
    traits::{DecoderOptions, MetadataDecoder},
};

pub mod address;
pub mod args;
pub mod builtins;

use args::is_smart_contract_call_argument;
use builtins::BuiltinFunction;

/// `data` split into its function name and raw arguments
#[derive(Debug, Clone, PartialEq, Eq)]
struct CallData {
    function_name: String,
    args: Vec<String>,
}

impl CallData {
    fn parse(data: &str) -> Self {
        let mut segments = data.split('@');
        let function_name = segments.next().unwrap_or_default().to_string();
        Self {
            function_name,
            args: segments.map(str::to_string).collect(),
        }
    }

    fn validate(&self) -> Result<(), DecodeError> {
        let name = &self.function_name;
        if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
            return Err(DecodeError::MalformedFunctionName(name.clone()));
        }
        match self
            .args
            .iter()
            .position(|arg| !is_smart_contract_call_argument(arg))
        {
            Some(index) => Err(DecodeError::InvalidHex {
                index,
                value: self.args[index].clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Decoder for MultiversX transactions and their ESDT transfer payloads
#[derive(Debug, Clone, Default)]
pub struct MultiversXDecoder {
    options: DecoderOptions,
}

impl MultiversXDecoder {
    pub fn new(options: DecoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Same as [`MetadataDecoder::decode`]
    pub fn get_transaction_metadata(&self, tx: &TransactionToDecode) -> TransactionMetadata {
        self.decode(tx)
    }

    fn decode_call(
        &self,
        base: &TransactionMetadata,
        call: &CallData,
    ) -> Result<TransactionMetadata, DecodeError> {
        call.validate()?;

        let mut metadata = base.clone();
        metadata.kind = TransactionKind::SmartContractCall;
        metadata.function_name = Some(call.function_name.clone());
        metadata.function_args = Some(call.args.clone());

        let Some(builtin) = BuiltinFunction::parse(&call.function_name) else {
            return Ok(metadata);
        };
        // Hex-encoded builtin names are reported in their readable form
        metadata.function_name = Some(builtin.as_str().to_string());

        match builtin.decode(&metadata, &call.args, &self.options.hrp)? {
            Some(transfer) => {
                debug!(
                    function = builtin.as_str(),
                    transfers = transfer.transfers.len(),
                    "decoded token transfer"
                );
                Ok(transfer)
            }
            None => Ok(metadata),
        }
    }
}

impl MetadataDecoder for MultiversXDecoder {
    fn try_decode(&self, tx: &TransactionToDecode) -> Result<TransactionMetadata, DecodeError> {
        let base =
            TransactionMetadata::move_balance(tx.sender(), tx.receiver(), tx.parsed_value()?);

        let Some(data) = tx.data() else {
            return Ok(base);
        };
        let decoded = decode_data_field(data, self.options.data_encoding)?;
        self.decode_call(&base, &CallData::parse(&decoded))
    }

    fn decode(&self, tx: &TransactionToDecode) -> TransactionMetadata {
        match self.try_decode(tx) {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!(error = %err, "could not decode transaction data, keeping raw arguments");
                degraded_metadata(tx, &self.options)
            }
        }
    }

    fn chain_name(&self) -> &str {
        "MultiversX"
    }
}

// Best-effort record for payloads that failed to decode: everything that can
// be read is kept, transfers are dropped.
fn degraded_metadata(tx: &TransactionToDecode, options: &DecoderOptions) -> TransactionMetadata {
    let value = tx.parsed_value().unwrap_or_default();
    let mut metadata = TransactionMetadata::move_balance(tx.sender(), tx.receiver(), value);

    if let Some(data) = tx.data() {
        let decoded = decode_data_field(data, options.data_encoding)
            .unwrap_or_else(|_| data.to_string());
        let call = CallData::parse(&decoded);
        metadata.function_name = (!call.function_name.is_empty()).then_some(call.function_name);
        metadata.function_args = Some(call.args);
    }
    metadata.into_unknown()
}

// Public API functions
pub fn transaction_to_metadata(
    tx: &TransactionToDecode,
    options: DecoderOptions,
) -> TransactionMetadata {
    MultiversXDecoder::new(options).decode(tx)
}

pub fn try_transaction_to_metadata(
    tx: &TransactionToDecode,
    options: DecoderOptions,
) -> Result<TransactionMetadata, DecodeError> {
    MultiversXDecoder::new(options).try_decode(tx)
}
