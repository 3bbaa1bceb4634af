use crate::errors::{DecodeError, OutputError, TransactionParseError};
use num_bigint::BigUint;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
pub mod encodings;
pub mod errors;
pub mod registry;
pub mod test_utils;
pub mod traits;

pub use num_bigint;

fn default_value() -> String {
    "0".to_string()
}

// Amounts routinely exceed u64 and even u128 for 18-decimal tokens, so they
// are rendered as decimal strings.
fn serialize_biguint<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_str_radix(10))
}

/// A transaction as submitted for decoding.
///
/// The record is read-only once built; decoders only ever borrow it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransactionToDecode {
    sender: String,
    receiver: String,
    #[serde(default = "default_value")]
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<String>,
}

impl TransactionToDecode {
    pub fn new(
        sender: impl Into<String>,
        receiver: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            receiver: receiver.into(),
            value: value.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Read a transaction from its JSON form (`sender`, `receiver`, `value`, `data`)
    pub fn from_json(json: &str) -> Result<Self, TransactionParseError> {
        let tx: Self = serde_json::from_str(json)
            .map_err(|e| TransactionParseError::InvalidFormat(e.to_string()))?;
        if tx.sender.is_empty() {
            return Err(TransactionParseError::MissingField("sender".to_string()));
        }
        if tx.receiver.is_empty() {
            return Err(TransactionParseError::MissingField("receiver".to_string()));
        }
        Ok(tx)
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The data field, with an empty string treated as absent
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref().filter(|data| !data.is_empty())
    }

    /// Parse the decimal `value` field. An empty value counts as zero.
    pub fn parsed_value(&self) -> Result<BigUint, DecodeError> {
        let value = self.value.trim();
        if value.is_empty() {
            return Ok(BigUint::default());
        }
        value
            .parse::<BigUint>()
            .map_err(|e| DecodeError::InvalidNumber(format!("value '{value}': {e}")))
    }
}

/// What a decoded transaction does on chain
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    MoveBalance,
    SmartContractCall,
    EsdtTransfer,
    NftTransfer,
    MultiEsdtNftTransfer,
    /// The data field could not be decoded; raw arguments are kept as-is
    Unknown,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::MoveBalance => "Move Balance",
            TransactionKind::SmartContractCall => "Smart Contract Call",
            TransactionKind::EsdtTransfer => "ESDT Transfer",
            TransactionKind::NftTransfer => "NFT Transfer",
            TransactionKind::MultiEsdtNftTransfer => "Multi ESDT/NFT Transfer",
            TransactionKind::Unknown => "Unknown",
        }
    }
}

/// Display properties of a token transfer
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTransferProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// A single token movement carried by a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTransfer {
    pub token_identifier: String,
    pub nonce: u64,
    pub amount: BigUint,
}

impl TokenTransfer {
    pub fn new(token_identifier: impl Into<String>, nonce: u64, amount: BigUint) -> Self {
        Self {
            token_identifier: token_identifier.into(),
            nonce,
            amount,
        }
    }

    /// Fungible tokens carry no nonce
    pub fn is_fungible(&self) -> bool {
        self.nonce == 0
    }

    pub fn collection(&self) -> &str {
        &self.token_identifier
    }

    /// Full identifier, `TICKER-abcdef-0a1b` for NFT/SFT/meta-ESDT instances
    pub fn identifier(&self) -> String {
        if self.is_fungible() {
            self.token_identifier.clone()
        } else {
            format!("{}-{}", self.token_identifier, nonce_to_hex(self.nonce))
        }
    }

    pub fn properties(&self) -> TokenTransferProperties {
        TokenTransferProperties {
            collection: Some(self.collection().to_string()),
            identifier: Some(self.identifier()),
            token: self
                .is_fungible()
                .then(|| self.token_identifier.clone()),
        }
    }
}

impl Serialize for TokenTransfer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let properties = self.properties();
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("amount", &self.amount.to_str_radix(10))?;
        map.serialize_entry("nonce", &self.nonce)?;
        map.serialize_entry("properties", &properties)?;
        map.serialize_entry("token_identifier", &self.token_identifier)?;
        map.end()
    }
}

/// Render a nonce the way token identifiers carry it: lowercase hex, even length
pub fn nonce_to_hex(nonce: u64) -> String {
    let hex = format!("{nonce:x}");
    if hex.len() % 2 == 1 {
        format!("0{hex}")
    } else {
        hex
    }
}

/// Decoded view of a transaction
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TransactionMetadata {
    pub sender: String,
    /// Effective receiver; for NFT and multi transfers this is the
    /// destination encoded in the arguments, not the transaction receiver
    pub receiver: String,
    #[serde(serialize_with = "serialize_biguint")]
    pub value: BigUint,
    pub kind: TransactionKind,
    pub function_name: Option<String>,
    /// Arguments exactly as they appeared between `@` separators
    pub function_args: Option<Vec<String>>,
    pub transfers: Vec<TokenTransfer>,
}

impl TransactionMetadata {
    /// Plain value transfer between sender and receiver
    pub fn move_balance(
        sender: impl Into<String>,
        receiver: impl Into<String>,
        value: BigUint,
    ) -> Self {
        Self {
            sender: sender.into(),
            receiver: receiver.into(),
            value,
            kind: TransactionKind::MoveBalance,
            function_name: None,
            function_args: None,
            transfers: Vec::new(),
        }
    }

    /// Turn this record into the degraded form used when decoding fails
    pub fn into_unknown(mut self) -> Self {
        self.kind = TransactionKind::Unknown;
        self.transfers.clear();
        self
    }

    /// Arguments as byte sequences
    pub fn raw_arguments(&self) -> Result<Vec<Vec<u8>>, DecodeError> {
        self.function_args
            .iter()
            .flatten()
            .enumerate()
            .map(|(index, arg)| {
                hex::decode(arg).map_err(|_| DecodeError::InvalidHex {
                    index,
                    value: arg.clone(),
                })
            })
            .collect()
    }

    pub fn has_transfers(&self) -> bool {
        !self.transfers.is_empty()
    }

    pub fn to_json(&self) -> Result<String, OutputError> {
        let value = serde_json::to_value(self)
            .map_err(|e| OutputError::SerializationError(e.to_string()))?;
        let sorted_value = sort_json_alphabetically(value);
        serde_json::to_string(&sorted_value)
            .map_err(|e| OutputError::SerializationError(e.to_string()))
    }

    pub fn to_pretty_json(&self) -> Result<String, OutputError> {
        let value = serde_json::to_value(self)
            .map_err(|e| OutputError::SerializationError(e.to_string()))?;
        let sorted_value = sort_json_alphabetically(value);
        serde_json::to_string_pretty(&sorted_value)
            .map_err(|e| OutputError::SerializationError(e.to_string()))
    }

    /// Validates that the rendered metadata only contains printable ASCII.
    ///
    /// Token identifiers and function names come from hex on chain, so they
    /// can carry anything; callers that display them should check first.
    pub fn validate_charset(&self) -> Result<(), OutputError> {
        let json_str = self.to_json()?;

        if json_str.contains("\\u") {
            return Err(OutputError::ValidationError(
                "Restricted Characters Detected".to_string(),
            ));
        }

        for (i, ch) in json_str.char_indices() {
            if !ch.is_ascii_graphic() && ch != ' ' {
                return Err(OutputError::ValidationError(format!(
                    "JSON output contains non-printable character '{}' (U+{:02X}) at position {}",
                    ch.escape_default(),
                    ch as u32,
                    i
                )));
            }
        }

        Ok(())
    }

    pub fn to_validated_json(&self) -> Result<String, OutputError> {
        self.validate_charset()?;
        self.to_json()
    }
}

// Helper function to recursively sort JSON by keys alphabetically
fn sort_json_alphabetically(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(map) => {
            let mut sorted_map = std::collections::BTreeMap::new();
            for (key, val) in map {
                sorted_map.insert(key, sort_json_alphabetically(val));
            }
            serde_json::Value::Object(serde_json::Map::from_iter(sorted_map))
        }
        serde_json::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(sort_json_alphabetically).collect())
        }
        other => other,
    }
}
