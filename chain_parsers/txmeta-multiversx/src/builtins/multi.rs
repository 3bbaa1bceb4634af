use tracing::debug;
use txmeta::errors::DecodeError;
use txmeta::{TokenTransfer, TransactionKind, TransactionMetadata};

use crate::args::ArgumentReader;

use super::BuiltinFunction;

// token, nonce and amount
const ARGS_PER_TRANSFER: usize = 3;

/// `MultiESDTNFTTransfer@destination@count@(token@nonce@amount)*count[@function@args...]`
///
/// An empty or zero nonce marks a fungible token.
pub(super) fn decode(
    base: &TransactionMetadata,
    args: &[String],
    hrp: &str,
) -> Result<Option<TransactionMetadata>, DecodeError> {
    if base.sender != base.receiver {
        debug!("MultiESDTNFTTransfer not sent to self, keeping it as a contract call");
        return Ok(None);
    }

    let function = BuiltinFunction::MultiEsdtNftTransfer.as_str();
    let mut reader = ArgumentReader::new(function, args);
    let destination = reader.next_address()?;
    let count = reader.next_u64()?;

    let needed = usize::try_from(count)
        .ok()
        .and_then(|count| count.checked_mul(ARGS_PER_TRANSFER))
        .unwrap_or(usize::MAX);
    if needed > reader.remaining() {
        return Err(DecodeError::MissingArgument {
            function: function.to_string(),
            index: reader.position() + reader.remaining(),
        });
    }

    let mut transfers = Vec::new();
    for _ in 0..count {
        let token_identifier = reader.next_string()?;
        let nonce = reader.next_u64()?;
        let amount = reader.next_biguint()?;
        transfers.push(TokenTransfer::new(token_identifier, nonce, amount));
    }
    let (function_name, function_args) = reader.nested_call()?;

    Ok(Some(TransactionMetadata {
        sender: base.sender.clone(),
        receiver: destination.to_bech32(hrp)?,
        value: base.value.clone(),
        kind: TransactionKind::MultiEsdtNftTransfer,
        function_name,
        function_args,
        transfers,
    }))
}
