use std::fmt::Write as _;
use std::process::ExitCode;

use crate::chains;
use crate::registry::create_registry;
use chains::{available_chains, chain_values, parse_chain};
use clap::{Arg, ArgAction, ArgMatches, Command};
use txmeta::encodings::DataEncoding;
use txmeta::errors::RegistryError;
use txmeta::registry::Chain;
use txmeta::traits::{DEFAULT_HRP, DecoderOptions};
use txmeta::{TransactionMetadata, TransactionToDecode};

/// Render metadata as `Label: value` lines.
#[must_use]
pub fn render_text(chain_name: &str, metadata: &TransactionMetadata) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Network: {chain_name}");
    let _ = writeln!(out, "Kind: {}", metadata.kind.as_str());
    let _ = writeln!(out, "Sender: {}", metadata.sender);
    let _ = writeln!(out, "Receiver: {}", metadata.receiver);
    let _ = writeln!(out, "Value: {}", metadata.value);
    if let Some(name) = &metadata.function_name {
        let _ = writeln!(out, "Function: {name}");
    }
    if let Some(args) = &metadata.function_args {
        let _ = writeln!(out, "Arguments: [{}]", args.join(", "));
    }
    for (i, transfer) in metadata.transfers.iter().enumerate() {
        let _ = writeln!(
            out,
            "Transfer {}: {} {}",
            i + 1,
            transfer.amount,
            transfer.identifier()
        );
    }
    out
}

fn read_transaction(matches: &ArgMatches) -> Result<TransactionToDecode, RegistryError> {
    if let Some(json) = matches.get_one::<String>("transaction") {
        return Ok(TransactionToDecode::from_json(json)?);
    }

    // clap enforces sender and receiver when no json transaction is given
    let sender = matches.get_one::<String>("sender").cloned().unwrap_or_default();
    let receiver = matches
        .get_one::<String>("receiver")
        .cloned()
        .unwrap_or_default();
    let value = matches
        .get_one::<String>("value")
        .cloned()
        .unwrap_or_else(|| "0".to_string());

    let tx = TransactionToDecode::new(sender, receiver, value);
    Ok(match matches.get_one::<String>("data") {
        Some(data) => tx.with_data(data.as_str()),
        None => tx,
    })
}

fn decode_and_display(
    chain: &Chain,
    tx: &TransactionToDecode,
    options: &DecoderOptions,
    strict: bool,
    output_format: &str,
) -> Result<String, String> {
    let registry = create_registry(options);
    let chain_name = registry
        .get(chain)
        .map_err(|e| e.to_string())?
        .chain_name()
        .to_string();

    let metadata = if strict {
        registry.try_decode(chain, tx)
    } else {
        registry.decode(chain, tx)
    }
    .map_err(|e| e.to_string())?;

    // token names and function names are arbitrary bytes on chain
    metadata.validate_charset().map_err(|e| e.to_string())?;

    match output_format {
        "json" => metadata.to_pretty_json().map_err(|e| e.to_string()),
        "text" => Ok(render_text(&chain_name, &metadata)),
        other => Err(format!("Unsupported output format '{other}'")),
    }
}

fn command() -> Command {
    let chains = available_chains();
    let chain_help = format!("Chain type ({})", chains.join(", "));

    Command::new("txmeta")
        .version("1.0")
        .about("Decodes transaction data fields into transaction metadata")
        .arg(
            Arg::new("chain")
                .short('c')
                .long("chain")
                .value_name("CHAIN")
                .help(chain_help)
                .value_parser(chain_values())
                .default_value("multiversx"),
        )
        .arg(
            Arg::new("transaction")
                .short('t')
                .long("transaction")
                .value_name("JSON")
                .help("Transaction as JSON with sender, receiver, value and data")
                .conflicts_with_all(["sender", "receiver", "value", "data"])
                .required_unless_present_all(["sender", "receiver"]),
        )
        .arg(
            Arg::new("sender")
                .short('s')
                .long("sender")
                .value_name("ADDRESS")
                .help("Sender address")
                .requires("receiver"),
        )
        .arg(
            Arg::new("receiver")
                .short('r')
                .long("receiver")
                .value_name("ADDRESS")
                .help("Receiver address")
                .requires("sender"),
        )
        .arg(
            Arg::new("value")
                .short('v')
                .long("value")
                .value_name("AMOUNT")
                .help("Transferred value in the smallest denomination"),
        )
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .value_name("DATA")
                .help("Data field, base64 or raw"),
        )
        .arg(
            Arg::new("encoding")
                .short('e')
                .long("encoding")
                .value_name("ENCODING")
                .help("Encoding of the data field")
                .value_parser(["auto", "base64", "raw"])
                .default_value("auto"),
        )
        .arg(
            Arg::new("hrp")
                .long("hrp")
                .value_name("PREFIX")
                .help("Human readable prefix for decoded addresses")
                .default_value(DEFAULT_HRP),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail instead of reporting undecodable data as unknown")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FORMAT")
                .help("Output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
}

/// app cli
pub struct Cli;
impl Cli {
    /// start the decoder cli
    ///
    /// Parses command line arguments, decodes the transaction and prints the
    /// metadata to stdout. Errors go to stderr with a failing exit code.
    #[must_use]
    pub fn execute() -> ExitCode {
        Self::run(&command().get_matches())
    }

    fn run(matches: &ArgMatches) -> ExitCode {
        let chain = parse_chain(
            matches
                .get_one::<String>("chain")
                .map_or("multiversx", String::as_str),
        );
        let data_encoding = matches
            .get_one::<String>("encoding")
            .and_then(|encoding| encoding.parse::<DataEncoding>().ok())
            .unwrap_or_default();
        let hrp = matches
            .get_one::<String>("hrp")
            .cloned()
            .unwrap_or_else(|| DEFAULT_HRP.to_string());
        let output_format = matches
            .get_one::<String>("output")
            .map_or("text", String::as_str);
        let strict = matches.get_flag("strict");

        let options = DecoderOptions { data_encoding, hrp };

        let result = read_transaction(matches)
            .map_err(|e| e.to_string())
            .and_then(|tx| decode_and_display(&chain, &tx, &options, strict, output_format));

        match result {
            Ok(output) => {
                println!("{}", output.trim_end());
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("Error: {err}");
                ExitCode::FAILURE
            }
        }
    }
}
