//! Core ledger types: arbitrary-precision amounts, fixed-point decimals,
//! coins, raw addresses and opaque binary payloads.

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Number of fractional digits carried by [`Dec`].
pub const DEC_PRECISION: u32 = 18;

/// Length in bytes of a raw account or validator address.
pub const ADDRESS_LEN: usize = 20;

/// Errors raised while parsing or building core types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("Invalid integer: {0:?}")]
    InvalidInteger(String),

    #[error("Invalid decimal: {0:?}")]
    InvalidDecimal(String),

    #[error("Decimal {0:?} has more than 18 fractional digits")]
    DecimalPrecision(String),

    #[error("Address must be 20 bytes, got {0}")]
    AddressLength(usize),

    #[error("Invalid base64: {0}")]
    Base64(String),
}

/// Arbitrary-precision non-negative integer.
///
/// Always rendered as a plain decimal digit string, both through `Display`
/// and serde.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uint(BigUint);

impl Uint {
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<u64> for Uint {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u128> for Uint {
    fn from(value: u128) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<BigUint> for Uint {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl FromStr for Uint {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // BigUint's parser tolerates '+' and '_', amounts on the wire must not.
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TypeError::InvalidInteger(s.to_string()));
        }
        BigUint::from_str(s)
            .map(Self)
            .map_err(|_| TypeError::InvalidInteger(s.to_string()))
    }
}

impl fmt::Display for Uint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Uint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Uint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

fn dec_unit() -> BigUint {
    BigUint::from(10u32).pow(DEC_PRECISION)
}

/// Non-negative fixed-point decimal with [`DEC_PRECISION`] fractional digits.
///
/// Stored as the integer `value * 10^18`. Renders with all eighteen
/// fractional digits, e.g. `0.050000000000000000`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dec(BigUint);

impl Dec {
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `self * numerator / denominator`, truncated at 18 decimals.
    ///
    /// Returns zero when `denominator` is zero.
    pub fn mul_ratio(&self, numerator: &Uint, denominator: &Dec) -> Dec {
        if denominator.is_zero() {
            return Dec::zero();
        }
        // (a / u) * n / (d / u) = a * n / d, kept at scale u.
        Dec(&self.0 * &numerator.0 * dec_unit() / &denominator.0)
    }

    /// Integer part, rounding toward zero.
    pub fn truncate(&self) -> Uint {
        Uint(&self.0 / dec_unit())
    }
}

impl FromStr for Dec {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TypeError::InvalidDecimal(s.to_string());

        let (int_part, frac_part) = match s.split_once('.') {
            Some((int_part, frac_part)) => {
                if frac_part.is_empty() {
                    return Err(invalid());
                }
                (int_part, frac_part)
            }
            None => (s, ""),
        };

        let int: Uint = int_part.parse().map_err(|_| invalid())?;
        if !frac_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if frac_part.len() > DEC_PRECISION as usize {
            return Err(TypeError::DecimalPrecision(s.to_string()));
        }

        let padded = format!("{:0<width$}", frac_part, width = DEC_PRECISION as usize);
        let frac = BigUint::from_str(&padded).map_err(|_| invalid())?;

        Ok(Dec(int.0 * dec_unit() + frac))
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = dec_unit();
        let int = &self.0 / &unit;
        let frac = &self.0 % &unit;
        write!(
            f,
            "{}.{:0>width$}",
            int,
            frac.to_string(),
            width = DEC_PRECISION as usize
        )
    }
}

impl Serialize for Dec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Ledger coin with a native integer amount.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: Uint,
}

impl Coin {
    pub fn new(amount: impl Into<Uint>, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }

    pub fn zero(denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: Uint::zero(),
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Raw account, validator or contract address.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = TypeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; ADDRESS_LEN] = bytes
            .try_into()
            .map_err(|_| TypeError::AddressLength(bytes.len()))?;
        Ok(Self(arr))
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", hex::encode(self.0))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Opaque bytes, base64 encoded in JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Binary(Vec<u8>);

impl Binary {
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    pub fn from_base64(encoded: &str) -> Result<Self, TypeError> {
        STANDARD
            .decode(encoded)
            .map(Self)
            .map_err(|e| TypeError::Base64(e.to_string()))
    }
}

impl From<Vec<u8>> for Binary {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Binary {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl std::ops::Deref for Binary {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Binary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for Binary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Binary::from_base64(&s).map_err(serde::de::Error::custom)
    }
}
