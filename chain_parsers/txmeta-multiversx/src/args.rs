//! Helpers for the `@`-separated hex arguments of a data field

use num_bigint::BigUint;
use txmeta::errors::DecodeError;

use crate::address::Address;

/// Smart contract arguments are even-length hex; the empty string encodes an empty value
pub fn is_smart_contract_call_argument(arg: &str) -> bool {
    arg.len() % 2 == 0 && arg.bytes().all(|b| b.is_ascii_hexdigit())
}

pub fn hex_to_bytes(index: usize, arg: &str) -> Result<Vec<u8>, DecodeError> {
    hex::decode(arg).map_err(|_| DecodeError::InvalidHex {
        index,
        value: arg.to_string(),
    })
}

/// Hex-encoded ASCII text such as a token identifier or function name
pub fn hex_to_string(index: usize, arg: &str) -> Result<String, DecodeError> {
    let bytes = hex_to_bytes(index, arg)?;
    if !bytes.is_ascii() {
        return Err(DecodeError::NonAsciiText(arg.to_string()));
    }
    String::from_utf8(bytes).map_err(|e| DecodeError::InvalidUtf8(e.to_string()))
}

/// Big-endian unsigned integer; the empty argument is zero
pub fn hex_to_biguint(index: usize, arg: &str) -> Result<BigUint, DecodeError> {
    Ok(BigUint::from_bytes_be(&hex_to_bytes(index, arg)?))
}

pub fn hex_to_u64(index: usize, arg: &str) -> Result<u64, DecodeError> {
    let bytes = hex_to_bytes(index, arg)?;
    let significant = bytes
        .iter()
        .position(|b| *b != 0)
        .map_or(&[][..], |start| &bytes[start..]);
    if significant.len() > 8 {
        return Err(DecodeError::InvalidNumber(format!(
            "argument {index} '{arg}' does not fit in 64 bits"
        )));
    }
    Ok(significant
        .iter()
        .fold(0u64, |acc, b| (acc << 8) | u64::from(*b)))
}

/// Positional reader over the arguments of one builtin function call
#[derive(Debug)]
pub struct ArgumentReader<'a> {
    function: &'a str,
    args: &'a [String],
    position: usize,
}

impl<'a> ArgumentReader<'a> {
    pub fn new(function: &'a str, args: &'a [String]) -> Self {
        Self {
            function,
            args,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.args.len().saturating_sub(self.position)
    }

    pub fn next_raw(&mut self) -> Result<&'a str, DecodeError> {
        let arg = self
            .args
            .get(self.position)
            .ok_or_else(|| DecodeError::MissingArgument {
                function: self.function.to_string(),
                index: self.position,
            })?;
        self.position += 1;
        Ok(arg.as_str())
    }

    pub fn next_string(&mut self) -> Result<String, DecodeError> {
        let index = self.position;
        hex_to_string(index, self.next_raw()?)
    }

    pub fn next_biguint(&mut self) -> Result<BigUint, DecodeError> {
        let index = self.position;
        hex_to_biguint(index, self.next_raw()?)
    }

    pub fn next_u64(&mut self) -> Result<u64, DecodeError> {
        let index = self.position;
        hex_to_u64(index, self.next_raw()?)
    }

    pub fn next_address(&mut self) -> Result<Address, DecodeError> {
        Address::from_hex(self.next_raw()?)
    }

    /// Optional nested call after the transfer arguments: `@function@args...`
    pub fn nested_call(mut self) -> Result<(Option<String>, Option<Vec<String>>), DecodeError> {
        if self.remaining() == 0 {
            return Ok((None, None));
        }

        let name = self.next_string()?;
        let rest = self.args[self.position..].to_vec();
        if name.is_empty() {
            let args = (!rest.is_empty()).then_some(rest);
            return Ok((None, args));
        }
        Ok((Some(name), Some(rest)))
    }
}
