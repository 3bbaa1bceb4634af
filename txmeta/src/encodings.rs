use std::fmt;
use std::str::FromStr;

use base64::{Engine as _, engine::general_purpose::STANDARD as b64};
use tracing::trace;

use crate::errors::DecodeError;

/// How the `data` field of a transaction is encoded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DataEncoding {
    /// Pick between base64 and raw text by looking at the payload
    #[default]
    Auto,
    Base64,
    Raw,
}

impl DataEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataEncoding::Auto => "auto",
            DataEncoding::Base64 => "base64",
            DataEncoding::Raw => "raw",
        }
    }

    /// Guess the concrete encoding of a data field.
    ///
    /// Raw payloads already carry `@` separators. Anything else is treated as
    /// base64 only when it decodes to printable ASCII, so short plain-text
    /// calls like `claim` stay raw.
    pub fn detect(data: &str) -> DataEncoding {
        if data.contains('@') {
            return DataEncoding::Raw;
        }

        match b64.decode(data) {
            Ok(bytes) if !bytes.is_empty() && bytes.iter().all(u8::is_ascii_graphic) => {
                DataEncoding::Base64
            }
            _ => DataEncoding::Raw,
        }
    }

    /// Resolve `Auto` against a concrete payload
    pub fn resolve(self, data: &str) -> DataEncoding {
        match self {
            DataEncoding::Auto => DataEncoding::detect(data),
            other => other,
        }
    }
}

impl fmt::Display for DataEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(DataEncoding::Auto),
            "base64" => Ok(DataEncoding::Base64),
            "raw" => Ok(DataEncoding::Raw),
            other => Err(format!("unsupported data encoding '{other}'")),
        }
    }
}

/// Decode a transaction data field into its `@`-separated text form
pub fn decode_data_field(data: &str, encoding: DataEncoding) -> Result<String, DecodeError> {
    let resolved = encoding.resolve(data);
    trace!(requested = %encoding, resolved = %resolved, "decoding data field");
    match resolved {
        DataEncoding::Base64 => {
            let bytes = b64
                .decode(data.trim())
                .map_err(|e| DecodeError::InvalidBase64(e.to_string()))?;
            String::from_utf8(bytes).map_err(|e| DecodeError::InvalidUtf8(e.to_string()))
        }
        DataEncoding::Raw | DataEncoding::Auto => Ok(data.to_string()),
    }
}
