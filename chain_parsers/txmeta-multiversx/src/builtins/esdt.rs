use txmeta::errors::DecodeError;
use txmeta::{TokenTransfer, TransactionKind, TransactionMetadata};

use crate::args::ArgumentReader;

use super::BuiltinFunction;

/// `ESDTTransfer@token@amount[@function@args...]`
pub(super) fn decode(
    base: &TransactionMetadata,
    args: &[String],
) -> Result<TransactionMetadata, DecodeError> {
    let mut reader = ArgumentReader::new(BuiltinFunction::EsdtTransfer.as_str(), args);
    let token_identifier = reader.next_string()?;
    let amount = reader.next_biguint()?;
    let (function_name, function_args) = reader.nested_call()?;

    Ok(TransactionMetadata {
        sender: base.sender.clone(),
        receiver: base.receiver.clone(),
        value: amount.clone(),
        kind: TransactionKind::EsdtTransfer,
        function_name,
        function_args,
        transfers: vec![TokenTransfer::new(token_identifier, 0, amount)],
    })
}
