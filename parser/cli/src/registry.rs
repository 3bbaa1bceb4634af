//! Registry of the decoders shipped with the cli

use txmeta::registry::{Chain, DecoderRegistry};
use txmeta::traits::DecoderOptions;

/// Creates a registry with a decoder for every supported chain.
#[must_use]
pub fn create_registry(options: &DecoderOptions) -> DecoderRegistry {
    let mut registry = DecoderRegistry::new();
    registry.register(
        Chain::MultiversX,
        txmeta_multiversx::MultiversXDecoder::new(options.clone()),
    );
    registry.register(Chain::Unspecified, txmeta_unspecified::UnspecifiedDecoder);
    registry
}
