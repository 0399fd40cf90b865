//! Domain queriers.
//!
//! Each querier holds a read-only view of one backing store and answers
//! the sub-queries of its domain with serialized response bytes.

pub mod contract;
pub mod ledger;
pub mod staking;

use serde::Serialize;
use wasmq_core::Address;

use crate::address::AddressCodec;
use crate::error::QueryError;

/// Decodes a caller-supplied account address.
pub(crate) fn decode_account(codec: &dyn AddressCodec, raw: &str) -> Result<Address, QueryError> {
    codec.decode_account(raw).map_err(|e| {
        tracing::debug!("Rejecting account address {:?}: {}", raw, e);
        QueryError::InvalidAddress(raw.to_string())
    })
}

/// Decodes a caller-supplied validator operator address.
pub(crate) fn decode_validator(
    codec: &dyn AddressCodec,
    raw: &str,
) -> Result<Address, QueryError> {
    codec.decode_validator(raw).map_err(|e| {
        tracing::debug!("Rejecting validator address {:?}: {}", raw, e);
        QueryError::InvalidAddress(raw.to_string())
    })
}

pub(crate) fn to_bytes<T: Serialize>(response: &T) -> Result<Vec<u8>, QueryError> {
    Ok(serde_json::to_vec(response)?)
}
