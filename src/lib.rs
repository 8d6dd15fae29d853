#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

pub mod codec;
pub mod errors;

pub use codec::*;

use serde::{Deserialize, Serialize};

/// Environment variable holding the env_logger filter for the binaries.
pub const LOG_LEVEL_ENV: &str = "IPV4_CODEC_LOG_LEVEL";

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub enum ConversionResult {
    Error(String),
    Address { text: String, binary: u32 },
}

impl ConversionResult {
    pub fn from_result(result: &errors::Result<Ipv4Address>) -> Self {
        match result {
            Ok(a) => ConversionResult::Address {
                text: format_binary_to_text(*a),
                binary: a.to_bits(),
            },
            Err(e) => ConversionResult::Error(e.to_string()),
        }
    }
}

pub fn report_line(text: &str) -> String {
    format!("The IPv4 address is: {}", text)
}
