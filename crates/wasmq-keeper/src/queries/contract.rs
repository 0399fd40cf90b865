//! Contract state queries.

use std::sync::Arc;

use super::{decode_account, to_bytes};
use crate::address::AddressCodec;
use crate::error::QueryError;
use crate::request::ContractQuery;
use crate::store::ContractView;

/// Answers contract queries from a [`ContractView`].
#[derive(Clone)]
pub struct ContractQuerier {
    contracts: Arc<dyn ContractView>,
    codec: Arc<dyn AddressCodec>,
}

impl ContractQuerier {
    pub fn new(contracts: Arc<dyn ContractView>, codec: Arc<dyn AddressCodec>) -> Self {
        Self { contracts, codec }
    }

    pub fn query(&self, request: &ContractQuery) -> Result<Vec<u8>, QueryError> {
        match request {
            ContractQuery::Smart(q) => self.smart(&q.contract_addr, q.msg.as_slice()),
            ContractQuery::Raw(q) => self.raw(&q.contract_addr, q.key.as_slice()),
        }
    }

    /// Runs a smart query. The contract owns the response schema, so its
    /// bytes are returned untouched.
    pub fn smart(&self, contract_addr: &str, msg: &[u8]) -> Result<Vec<u8>, QueryError> {
        let addr = decode_account(self.codec.as_ref(), contract_addr)?;
        Ok(self.contracts.query_smart(&addr, msg)?)
    }

    /// Reads raw storage entries and returns them as a JSON model list.
    pub fn raw(&self, contract_addr: &str, key: &[u8]) -> Result<Vec<u8>, QueryError> {
        let addr = decode_account(self.codec.as_ref(), contract_addr)?;
        let models = self.contracts.query_raw(&addr, key)?;
        to_bytes(&models)
    }
}
