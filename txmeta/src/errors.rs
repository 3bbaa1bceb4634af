use thiserror::Error;

/// Errors that can occur while reading a transaction record
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum TransactionParseError {
    #[error("Invalid transaction format: {0}")]
    InvalidFormat(String),
    #[error("Missing required field '{0}'")]
    MissingField(String),
}

/// Errors raised while decoding the data field of a transaction.
///
/// Decoders surface these from `try_decode`; `decode` turns them into an
/// `Unknown` metadata record instead.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum DecodeError {
    #[error("Invalid hex in argument {index}: '{value}'")]
    InvalidHex { index: usize, value: String },
    #[error("Failed to decode base64 data: {0}")]
    InvalidBase64(String),
    #[error("Decoded data is not valid UTF-8: {0}")]
    InvalidUtf8(String),
    #[error("Expected ASCII text, got bytes {0}")]
    NonAsciiText(String),
    #[error("{function} is missing argument {index}")]
    MissingArgument { function: String, index: usize },
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Malformed function name: '{0}'")]
    MalformedFunctionName(String),
}

/// Errors raised when looking up a decoder
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum RegistryError {
    #[error("No decoder registered for chain '{0}'")]
    UnsupportedChain(String),
    #[error("Failed to parse transaction")]
    ParseError(#[from] TransactionParseError),
    #[error("Failed to decode transaction: {0}")]
    DecodeError(#[from] DecodeError),
}

/// Errors raised when rendering metadata for display
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum OutputError {
    #[error("Serialization failed: {0}")]
    SerializationError(String),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
