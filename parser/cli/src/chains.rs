use clap::builder::PossibleValue;
use txmeta::registry::Chain;

/// Parses a chain string into a Chain enum value.
/// Returns `Chain::Unspecified` if the chain string is not recognized.
#[must_use]
pub fn parse_chain(chain_str: &str) -> Chain {
    match chain_str.parse::<Chain>() {
        Ok(Chain::Custom(_)) | Err(()) => Chain::Unspecified,
        Ok(chain) => chain,
    }
}

/// Returns all available chain names, sorted.
#[must_use]
pub fn available_chains() -> Vec<&'static str> {
    let mut chains: Vec<&'static str> = Chain::known()
        .iter()
        .filter_map(|chain| chain.names().first().copied())
        .collect();
    chains.sort_unstable();
    chains
}

/// Possible values for the `--chain` flag, with their aliases.
#[must_use]
pub fn chain_values() -> Vec<PossibleValue> {
    let mut values: Vec<PossibleValue> = Chain::known()
        .iter()
        .filter_map(|chain| {
            let (name, aliases) = chain.names().split_first()?;
            Some(PossibleValue::new(*name).aliases(aliases.iter().copied()))
        })
        .collect();
    values.sort_by(|a, b| a.get_name().cmp(b.get_name()));
    values
}
