use base64::{Engine as _, engine::general_purpose::STANDARD as b64};
use pretty_assertions::assert_eq;
use txmeta::TransactionKind;
use txmeta::TransactionToDecode;
use txmeta::errors::DecodeError;
use txmeta::test_utils::{assert_function_call, assert_has_transfer, assert_kind, parse_amount};
use txmeta::traits::{DecoderOptions, MetadataDecoder};
use txmeta_multiversx::{MultiversXDecoder, transaction_to_metadata};

const CONTRACT: &str = "erd1qqqqqqqqqqqqqpgqmua7hcd05yxypyj7sv7pffrquy9gf86s535qxct34s";
const NFT_OWNER: &str = "erd18w6yj09l9jwlpj5cjqq9eccfgulkympv7d4rj6vq4u49j8fpwzwsvx7e85";
const MULTI_OWNER: &str = "erd1lkrrrn3ws9sp854kdpzer9f77eglqpeet3e3k3uxvqxw9p3eq6xqxj43r9";
const ALICE: &str = "erd1wcn58spj6rnsexugjq3p2fxxq4t3l3kt7np078zwkrxu70ul69fqvyjnq2";
const BOB: &str = "erd1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssycr6th";

const NFT_SWAP_DATA: &str = "RVNEVE5GVFRyYW5zZmVyQDRjNGI0ZDQ1NTgyZDYxNjE2MjM5MzEzMEAyZmI0ZTlAZTQwZjE2OTk3MTY1NWU2YmIwNGNAMDAwMDAwMDAwMDAwMDAwMDA1MDBkZjNiZWJlMWFmYTEwYzQwOTI1ZTgzM2MxNGE0NjBlMTBhODQ5ZjUwYTQ2OEA3Mzc3NjE3MDVmNmM2YjZkNjU3ODVmNzQ2ZjVmNjU2NzZjNjRAMGIzNzdmMjYxYzNjNzE5MUA=";
const MULTI_NFT_DATA: &str = "TXVsdGlFU0RUTkZUVHJhbnNmZXJAMDAwMDAwMDAwMDAwMDAwMDA1MDBkZjNiZWJlMWFmYTEwYzQwOTI1ZTgzM2MxNGE0NjBlMTBhODQ5ZjUwYTQ2OEAwMkA0YzRiNGQ0NTU4MmQ2MTYxNjIzOTMxMzBAMmZlM2IwQDA5Yjk5YTZkYjMwMDI3ZTRmM2VjQDRjNGI0ZDQ1NTgyZDYxNjE2MjM5MzEzMEAzMTAyY2FAMDEyNjMwZTlhMjlmMmY5MzgxNDQ5MUA3Mzc3NjE3MDVmNmM2YjZkNjU3ODVmNzQ2ZjVmNjU2NzZjNjRAMGVkZTY0MzExYjhkMDFiNUA=";
const MULTI_META_AND_FUNGIBLE_DATA: &str = "TXVsdGlFU0RUTkZUVHJhbnNmZXJAMDAwMDAwMDAwMDAwMDAwMDA1MDBkZjNiZWJlMWFmYTEwYzQwOTI1ZTgzM2MxNGE0NjBlMTBhODQ5ZjUwYTQ2OEAwMkA0YzRiNGQ0NTU4MmQ2MTYxNjIzOTMxMzBAMmZlM2IwQDA5Yjk5YTZkYjMwMDI3ZTRmM2VjQDU1NTM0NDQzMmQzMzM1MzA2MzM0NjVAMDBAMDEyNjMwZTlhMjlmMmY5MzgxNDQ5MUA3MDYxNzk1ZjZkNjU3NDYxNWY2MTZlNjQ1ZjY2NzU2ZTY3Njk2MjZjNjVAMGVkZTY0MzExYjhkMDFiNUA=";
const MULTI_FUNGIBLE_DATA: &str = "TXVsdGlFU0RUTkZUVHJhbnNmZXJAMDAwMDAwMDAwMDAwMDAwMDA1MDBkZjNiZWJlMWFmYTEwYzQwOTI1ZTgzM2MxNGE0NjBlMTBhODQ5ZjUwYTQ2OEAwMkA1MjQ5NDQ0NTJkMzAzNTYyMzE2MjYyQDAwQDA5Yjk5YTZkYjMwMDI3ZTRmM2VjQDU1NTM0NDQzMmQzMzM1MzA2MzM0NjVAQDAxMjYzMGU5YTI5ZjJmOTM4MTQ0OTE=";

fn decode(tx: &TransactionToDecode) -> txmeta::TransactionMetadata {
    transaction_to_metadata(tx, DecoderOptions::default())
}

#[test]
fn test_nft_smart_contract_call() {
    let tx = TransactionToDecode::new(NFT_OWNER, NFT_OWNER, "0").with_data(NFT_SWAP_DATA);
    let metadata = decode(&tx);

    assert_kind(&metadata, TransactionKind::NftTransfer);
    assert_eq!(metadata.sender, NFT_OWNER);
    assert_eq!(metadata.receiver, CONTRACT);
    assert_eq!(metadata.value, parse_amount("1076977887712805212893260"));
    assert_function_call(&metadata, "swap_lkmex_to_egld", &["0b377f261c3c7191", ""]);

    assert_eq!(metadata.transfers.len(), 1);
    assert_has_transfer(&metadata, 0, "LKMEX-aab910-2fb4e9", "1076977887712805212893260");
    let properties = metadata.transfers[0].properties();
    assert_eq!(properties.collection.as_deref(), Some("LKMEX-aab910"));
    assert_eq!(properties.token, None);
}

#[test]
fn test_readme_example_fields() {
    let tx = TransactionToDecode::new(NFT_OWNER, NFT_OWNER, "0").with_data(NFT_SWAP_DATA);
    let transfer = &decode(&tx).transfers[0];

    let token = hex::decode("4c4b4d45582d616162393130").unwrap();
    assert_eq!(transfer.token_identifier.as_bytes(), token.as_slice());
    assert_eq!(transfer.nonce, 0x2fb4e9);
    assert_eq!(
        transfer.amount.to_bytes_be(),
        hex::decode("e40f169971655e6bb04c").unwrap()
    );
}

#[test]
fn test_sc_call() {
    let tx = TransactionToDecode::new(ALICE, BOB, "0")
        .with_data("d2l0aGRyYXdHbG9iYWxPZmZlckAwMTczZDA=");
    let metadata = decode(&tx);

    assert_kind(&metadata, TransactionKind::SmartContractCall);
    assert_eq!(metadata.sender, ALICE);
    assert_eq!(metadata.receiver, BOB);
    assert_function_call(&metadata, "withdrawGlobalOffer", &["0173d0"]);
    assert!(metadata.transfers.is_empty());
    assert_eq!(metadata.raw_arguments().unwrap(), vec![vec![0x01, 0x73, 0xd0]]);
}

#[test]
fn test_multi_esdt_nft_transfer() {
    let tx = TransactionToDecode::new(MULTI_OWNER, MULTI_OWNER, "0").with_data(MULTI_NFT_DATA);
    let metadata = decode(&tx);

    assert_kind(&metadata, TransactionKind::MultiEsdtNftTransfer);
    assert_eq!(metadata.sender, MULTI_OWNER);
    assert_eq!(metadata.receiver, CONTRACT);
    assert_eq!(metadata.value, parse_amount("0"));
    assert_function_call(&metadata, "swap_lkmex_to_egld", &["0ede64311b8d01b5", ""]);

    assert_eq!(metadata.transfers.len(), 2);
    assert_has_transfer(&metadata, 0, "LKMEX-aab910-2fe3b0", "45925073746530627023852");
    assert_has_transfer(&metadata, 1, "LKMEX-aab910-3102ca", "1389278024872597502641297");
    assert_eq!(metadata.transfers[1].collection(), "LKMEX-aab910");
}

#[test]
fn test_esdt_transfer() {
    let tx = TransactionToDecode::new(ALICE, BOB, "0")
        .with_data("RVNEVFRyYW5zZmVyQDU0NDU1MzU0MmQzMjY1MzQzMDY0MzdAMDI1NDBiZTQwMA==");
    let metadata = decode(&tx);

    assert_kind(&metadata, TransactionKind::EsdtTransfer);
    assert_eq!(metadata.receiver, BOB);
    assert_eq!(metadata.value, parse_amount("10000000000"));
    assert_eq!(metadata.function_name, None);
    assert_eq!(metadata.function_args, None);

    assert_has_transfer(&metadata, 0, "TEST-2e40d7", "10000000000");
    let properties = metadata.transfers[0].properties();
    assert_eq!(properties.collection.as_deref(), Some("TEST-2e40d7"));
    assert_eq!(properties.identifier.as_deref(), Some("TEST-2e40d7"));
}

#[test]
fn test_multi_transfer_fungible_and_meta_esdt() {
    let tx = TransactionToDecode::new(MULTI_OWNER, MULTI_OWNER, "0")
        .with_data(MULTI_META_AND_FUNGIBLE_DATA);
    let metadata = decode(&tx);

    assert_eq!(metadata.receiver, CONTRACT);
    assert_eq!(metadata.value, parse_amount("0"));
    assert_function_call(&metadata, "pay_meta_and_fungible", &["0ede64311b8d01b5", ""]);

    assert_has_transfer(&metadata, 0, "LKMEX-aab910-2fe3b0", "45925073746530627023852");
    // a "00" nonce is a fungible token
    assert_has_transfer(&metadata, 1, "USDC-350c4e", "1389278024872597502641297");
    assert_eq!(
        metadata.transfers[1].properties().token.as_deref(),
        Some("USDC-350c4e")
    );
}

#[test]
fn test_multi_transfer_fungible_esdt() {
    let tx = TransactionToDecode::new(MULTI_OWNER, MULTI_OWNER, "0")
        .with_data(MULTI_FUNGIBLE_DATA);
    let metadata = decode(&tx);

    assert_eq!(metadata.receiver, CONTRACT);
    assert_eq!(metadata.function_name, None);
    assert_eq!(metadata.transfers.len(), 2);
    assert_eq!(
        metadata.transfers[0].properties().token.as_deref(),
        Some("RIDE-05b1bb")
    );
    assert_eq!(
        metadata.transfers[1].properties().token.as_deref(),
        Some("USDC-350c4e")
    );
    assert_has_transfer(&metadata, 0, "RIDE-05b1bb", "45925073746530627023852");
    assert_has_transfer(&metadata, 1, "USDC-350c4e", "1389278024872597502641297");
}

#[test]
fn test_nft_transfer_to_someone_else_is_a_plain_call() {
    let tx = TransactionToDecode::new(NFT_OWNER, CONTRACT, "0").with_data(NFT_SWAP_DATA);
    let metadata = decode(&tx);

    assert_kind(&metadata, TransactionKind::SmartContractCall);
    assert_eq!(metadata.receiver, CONTRACT);
    assert_eq!(metadata.function_name.as_deref(), Some("ESDTNFTTransfer"));
    assert_eq!(metadata.function_args.as_ref().map(Vec::len), Some(7));
    assert!(metadata.transfers.is_empty());
}

#[test]
fn test_multi_transfer_to_someone_else_is_a_plain_call() {
    let tx = TransactionToDecode::new(MULTI_OWNER, CONTRACT, "0").with_data(MULTI_NFT_DATA);
    let metadata = decode(&tx);

    assert_kind(&metadata, TransactionKind::SmartContractCall);
    assert_eq!(metadata.receiver, CONTRACT);
    assert_eq!(
        metadata.function_name.as_deref(),
        Some("MultiESDTNFTTransfer")
    );
    assert!(metadata.function_args.is_some());
    assert!(metadata.transfers.is_empty());
}

#[test]
fn test_non_ascii_token_degrades_to_unknown() {
    let tx = TransactionToDecode::new(ALICE, BOB, "0").with_data("ESDTTransfer@ff@01");
    let decoder = MultiversXDecoder::default();

    assert!(matches!(
        decoder.try_decode(&tx),
        Err(DecodeError::NonAsciiText(_))
    ));
    let metadata = decoder.decode(&tx);
    assert_kind(&metadata, TransactionKind::Unknown);
    assert_eq!(metadata.receiver, BOB);
    assert_function_call(&metadata, "ESDTTransfer", &["ff", "01"]);
    assert!(metadata.transfers.is_empty());
}

#[test]
fn test_oversized_nonce_degrades_to_unknown() {
    let data = "ESDTNFTTransfer@4c4b4d45582d616162393130@ffffffffffffffffff@01\
                @00000000000000000500df3bebe1afa10c40925e833c14a460e10a849f50a468";
    let tx = TransactionToDecode::new(NFT_OWNER, NFT_OWNER, "0").with_data(data);
    let decoder = MultiversXDecoder::default();

    assert!(matches!(
        decoder.try_decode(&tx),
        Err(DecodeError::InvalidNumber(_))
    ));
    let metadata = decoder.decode(&tx);
    assert_kind(&metadata, TransactionKind::Unknown);
    assert_eq!(metadata.receiver, NFT_OWNER);
    assert!(metadata.transfers.is_empty());
}

#[test]
fn test_decoding_is_idempotent() {
    let decoder = MultiversXDecoder::default();
    let tx = TransactionToDecode::new(MULTI_OWNER, MULTI_OWNER, "0").with_data(MULTI_NFT_DATA);
    let before = tx.clone();

    let first = decoder.decode(&tx);
    let second = decoder.get_transaction_metadata(&tx);
    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    assert_eq!(tx, before);
}

#[test]
fn test_empty_and_missing_data_are_move_balance() {
    for tx in [
        TransactionToDecode::new(ALICE, BOB, "42"),
        TransactionToDecode::new(ALICE, BOB, "42").with_data(""),
    ] {
        let metadata = decode(&tx);
        assert_kind(&metadata, TransactionKind::MoveBalance);
        assert_eq!(metadata.value, parse_amount("42"));
        assert_eq!(metadata.receiver, BOB);
        assert!(metadata.transfers.is_empty());
        assert_eq!(metadata.function_name, None);
    }
}

#[test]
fn test_malformed_hex_degrades_to_unknown() {
    let data = b64.encode("ESDTNFTTransfer@4c4b4d45582d616162393130@2fb4e9@xyz@00");
    let tx = TransactionToDecode::new(NFT_OWNER, NFT_OWNER, "0").with_data(data);
    let metadata = decode(&tx);

    assert_kind(&metadata, TransactionKind::Unknown);
    assert_eq!(metadata.receiver, NFT_OWNER);
    assert_function_call(
        &metadata,
        "ESDTNFTTransfer",
        &["4c4b4d45582d616162393130", "2fb4e9", "xyz", "00"],
    );
    assert!(metadata.transfers.is_empty());
}

#[test]
fn test_truncated_transfer_degrades_to_unknown() {
    let tx = TransactionToDecode::new(NFT_OWNER, NFT_OWNER, "0")
        .with_data("ESDTNFTTransfer@4c4b4d45582d616162393130@2fb4e9");
    let decoder = MultiversXDecoder::default();

    assert!(decoder.try_decode(&tx).is_err());
    let metadata = decoder.decode(&tx);
    assert_kind(&metadata, TransactionKind::Unknown);
    assert_function_call(
        &metadata,
        "ESDTNFTTransfer",
        &["4c4b4d45582d616162393130", "2fb4e9"],
    );
}

#[test]
fn test_custom_hrp() {
    let options = DecoderOptions {
        hrp: "test".to_string(),
        ..DecoderOptions::default()
    };
    let tx = TransactionToDecode::new(NFT_OWNER, NFT_OWNER, "0").with_data(NFT_SWAP_DATA);
    let metadata = MultiversXDecoder::new(options).decode(&tx);
    assert!(metadata.receiver.starts_with("test1"));
}

#[test]
fn test_metadata_json_is_printable() {
    let tx = TransactionToDecode::new(MULTI_OWNER, MULTI_OWNER, "0")
        .with_data(MULTI_META_AND_FUNGIBLE_DATA);
    let json = decode(&tx).to_validated_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["kind"], "multi_esdt_nft_transfer");
    assert_eq!(value["transfers"][1]["amount"], "1389278024872597502641297");
    assert_eq!(value["transfers"][1]["properties"]["token"], "USDC-350c4e");
}
