use num_bigint::BigUint;

use crate::{TransactionKind, TransactionMetadata};

pub fn assert_kind(metadata: &TransactionMetadata, expected: TransactionKind) {
    assert_eq!(
        metadata.kind, expected,
        "Expected a {} transaction, got {}",
        expected.as_str(),
        metadata.kind.as_str()
    );
}

pub fn assert_function_call(metadata: &TransactionMetadata, name: &str, args: &[&str]) {
    assert_eq!(
        metadata.function_name.as_deref(),
        Some(name),
        "Should call function {name}"
    );
    let actual: Vec<&str> = metadata
        .function_args
        .iter()
        .flatten()
        .map(String::as_str)
        .collect();
    assert_eq!(actual, args, "Arguments of {name} do not match");
}

/// Assert the transfer at `index` has the given identifier and decimal amount
pub fn assert_has_transfer(
    metadata: &TransactionMetadata,
    index: usize,
    identifier: &str,
    amount: &str,
) {
    let transfer = metadata.transfers.get(index).unwrap_or_else(|| {
        panic!(
            "Should have a transfer at index {index}, found {} transfers",
            metadata.transfers.len()
        )
    });
    assert_eq!(
        transfer.identifier(),
        identifier,
        "Transfer {index} should be {identifier}. Actual identifier: {}",
        transfer.identifier()
    );
    assert_eq!(
        transfer.amount,
        parse_amount(amount),
        "Transfer {index} should move {amount}. Actual amount: {}",
        transfer.amount
    );
}

/// Parse a decimal amount literal for assertions
pub fn parse_amount(amount: &str) -> BigUint {
    BigUint::parse_bytes(amount.as_bytes(), 10)
        .unwrap_or_else(|| panic!("'{amount}' is not a decimal amount"))
}
