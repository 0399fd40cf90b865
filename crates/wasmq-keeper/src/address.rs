//! Bech32 address encoding.

use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32, Hrp};
use thiserror::Error;
use wasmq_core::{Address, ChainConfig};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid bech32 string: {0}")]
    Bech32(String),

    #[error("Expected prefix {expected:?}, got {actual:?}")]
    WrongPrefix { expected: String, actual: String },

    #[error("Invalid address payload: {0}")]
    Payload(String),

    #[error("Invalid prefix {0:?}")]
    InvalidPrefix(String),
}

/// Translates between raw addresses and their text form.
pub trait AddressCodec: Send + Sync {
    fn decode_account(&self, text: &str) -> Result<Address, AddressError>;
    fn decode_validator(&self, text: &str) -> Result<Address, AddressError>;
    fn encode_account(&self, address: &Address) -> Result<String, AddressError>;
    fn encode_validator(&self, address: &Address) -> Result<String, AddressError>;
}

/// Bech32 codec with separate account and validator prefixes.
#[derive(Debug, Clone)]
pub struct Bech32Codec {
    account_hrp: Hrp,
    validator_hrp: Hrp,
}

impl Bech32Codec {
    pub fn new(account_prefix: &str, validator_prefix: &str) -> Result<Self, AddressError> {
        Ok(Self {
            account_hrp: parse_hrp(account_prefix)?,
            validator_hrp: parse_hrp(validator_prefix)?,
        })
    }

    pub fn from_config(config: &ChainConfig) -> Result<Self, AddressError> {
        Self::new(&config.account_prefix, &config.validator_prefix)
    }

    /// Accepts only the original bech32 checksum; bech32m strings are rejected.
    fn decode_with(&self, hrp: &Hrp, text: &str) -> Result<Address, AddressError> {
        let checked = CheckedHrpstring::new::<Bech32>(text)
            .map_err(|e| AddressError::Bech32(e.to_string()))?;

        let expected = hrp.to_string();
        let actual = checked.hrp().to_string();
        if !actual.eq_ignore_ascii_case(&expected) {
            return Err(AddressError::WrongPrefix { expected, actual });
        }

        let data: Vec<u8> = checked.byte_iter().collect();
        Address::try_from(data.as_slice()).map_err(|e| AddressError::Payload(e.to_string()))
    }

    fn encode_with(hrp: Hrp, address: &Address) -> Result<String, AddressError> {
        bech32::encode::<Bech32>(hrp, address.as_ref())
            .map_err(|e| AddressError::Bech32(e.to_string()))
    }
}

fn parse_hrp(prefix: &str) -> Result<Hrp, AddressError> {
    Hrp::parse(prefix).map_err(|_| AddressError::InvalidPrefix(prefix.to_string()))
}

impl AddressCodec for Bech32Codec {
    fn decode_account(&self, text: &str) -> Result<Address, AddressError> {
        self.decode_with(&self.account_hrp, text)
    }

    fn decode_validator(&self, text: &str) -> Result<Address, AddressError> {
        self.decode_with(&self.validator_hrp, text)
    }

    fn encode_account(&self, address: &Address) -> Result<String, AddressError> {
        Self::encode_with(self.account_hrp, address)
    }

    fn encode_validator(&self, address: &Address) -> Result<String, AddressError> {
        Self::encode_with(self.validator_hrp, address)
    }
}
