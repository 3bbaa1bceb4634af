//! Transaction metadata decoder cli
#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::unwrap_used)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

/// Chain-related functionality and types.
pub mod chains;
/// Command-line interface functionality and types.
pub mod cli;
/// Decoders available to the cli.
pub mod registry;
