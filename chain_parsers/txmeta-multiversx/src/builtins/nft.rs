use tracing::debug;
use txmeta::errors::DecodeError;
use txmeta::{TokenTransfer, TransactionKind, TransactionMetadata};

use crate::args::ArgumentReader;

use super::BuiltinFunction;

/// `ESDTNFTTransfer@token@nonce@amount@destination[@function@args...]`
///
/// The transaction is sent to oneself; the real receiver is `destination`.
pub(super) fn decode(
    base: &TransactionMetadata,
    args: &[String],
    hrp: &str,
) -> Result<Option<TransactionMetadata>, DecodeError> {
    if base.sender != base.receiver {
        debug!("ESDTNFTTransfer not sent to self, keeping it as a contract call");
        return Ok(None);
    }

    let mut reader = ArgumentReader::new(BuiltinFunction::EsdtNftTransfer.as_str(), args);
    let token_identifier = reader.next_string()?;
    let nonce = reader.next_u64()?;
    let amount = reader.next_biguint()?;
    let destination = reader.next_address()?;
    let (function_name, function_args) = reader.nested_call()?;

    Ok(Some(TransactionMetadata {
        sender: base.sender.clone(),
        receiver: destination.to_bech32(hrp)?,
        value: amount.clone(),
        kind: TransactionKind::NftTransfer,
        function_name,
        function_args,
        transfers: vec![TokenTransfer::new(token_identifier, nonce, amount)],
    }))
}
